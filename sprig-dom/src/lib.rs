//! Virtual node trees built with hyperscript-style calls.
//!
//! ```
//! use sprig_dom::{h, VNode};
//!
//! let node = h!("div", [("id", "my-div")], "hello", h!("p", [("class", "note")], "world"));
//! assert_eq!(node.children().len(), 2);
//! assert!(matches!(&node.children()[0], VNode::Text(t) if t == "hello"));
//! ```

mod props;

pub use props::Props;

/// An immutable description of a UI tree.
///
/// Variants are declared text first so that the untagged serde form tries a
/// string, then an array, then an object.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum VNode {
    Text(String),
    /// A child sequence nested too deep to be flattened by [`h`]. It has no
    /// host representation and is rejected by renderers.
    List(Vec<VNode>),
    Element {
        #[cfg_attr(feature = "serde", serde(rename = "nodeName"))]
        tag: String,
        #[cfg_attr(feature = "serde", serde(rename = "attributes", default))]
        props: Props,
        /// `None` when no children were passed to [`h`].
        #[cfg_attr(feature = "serde", serde(default))]
        children: Option<Vec<VNode>>,
    },
}

impl VNode {
    pub fn tag(&self) -> Option<&str> {
        match self {
            VNode::Element { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn props(&self) -> Option<&Props> {
        match self {
            VNode::Element { props, .. } => Some(props),
            _ => None,
        }
    }

    /// Children of an element (empty when absent), or the items of a list.
    pub fn children(&self) -> &[VNode] {
        match self {
            VNode::Element { children, .. } => children.as_deref().unwrap_or(&[]),
            VNode::List(items) => items,
            VNode::Text(_) => &[],
        }
    }

    /// Number of elements and text nodes in the tree. Lists are transparent.
    pub fn node_count(&self) -> usize {
        let own = usize::from(!matches!(self, VNode::List(_)));
        own + self.children().iter().map(VNode::node_count).sum::<usize>()
    }

    pub fn text_count(&self) -> usize {
        match self {
            VNode::Text(_) => 1,
            _ => self.children().iter().map(VNode::text_count).sum(),
        }
    }
}

impl From<&str> for VNode {
    fn from(t: &str) -> Self {
        VNode::Text(t.to_string())
    }
}
impl From<String> for VNode {
    fn from(t: String) -> Self {
        VNode::Text(t)
    }
}
impl From<&String> for VNode {
    fn from(t: &String) -> Self {
        VNode::Text(t.clone())
    }
}
impl<T: Into<VNode>> From<Vec<T>> for VNode {
    fn from(items: Vec<T>) -> Self {
        VNode::List(items.into_iter().map(Into::into).collect())
    }
}
impl<T: Into<VNode>, const N: usize> From<[T; N]> for VNode {
    fn from(items: [T; N]) -> Self {
        VNode::List(items.into_iter().map(Into::into).collect())
    }
}

/// Builds an element. List arguments are spliced into the child sequence one
/// level deep; lists inside them are kept as [`VNode::List`] children.
/// With no arguments the element has no children at all (`None`).
pub fn h(tag: impl Into<String>, props: impl Into<Props>, args: Vec<VNode>) -> VNode {
    let children = if args.is_empty() {
        None
    } else {
        let mut flat = Vec::with_capacity(args.len());
        for arg in args {
            match arg {
                VNode::List(items) => flat.extend(items),
                other => flat.push(other),
            }
        }
        Some(flat)
    };
    VNode::Element {
        tag: tag.into(),
        props: props.into(),
        children,
    }
}

pub fn text(t: impl Into<String>) -> VNode {
    VNode::Text(t.into())
}

/// Variadic form of [`h`]: `h!(tag, props, child...)` where each child is
/// anything convertible into a [`VNode`].
#[macro_export]
macro_rules! h {
    ($tag:expr, $props:expr $(, $child:expr)* $(,)?) => {
        $crate::h($tag, $props, ::std::vec![$($crate::VNode::from($child)),*])
    };
}
