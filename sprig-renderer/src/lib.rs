//! Materializes [`VNode`] trees into a host document.
//!
//! The renderer always builds the full tree: there is no diffing and no
//! reuse of previously created host nodes. The host is passed in explicitly;
//! [`memory::Document`] is an in-memory one and the `web` feature adds an
//! implementation for the browser's `web_sys::Document`.

use sprig_dom::VNode;

mod error;
mod host;
pub mod memory;
#[cfg(feature = "web")]
pub mod web;

pub use error::RenderError;
pub use host::HostDocument;

/// Builds host nodes for `vnode` and everything below it, depth-first in
/// pre-order, and returns the root. Attributes are applied in insertion
/// order before any child is appended; children are appended in sequence
/// order.
///
/// The first error aborts the whole render; host nodes created up to that
/// point are left to the host.
pub fn render<D: HostDocument>(vnode: &VNode, host: &mut D) -> Result<D::Node, RenderError> {
    let node = render_node(vnode, host)?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!(
            "rendered {} nodes ({} text)",
            vnode.node_count(),
            vnode.text_count()
        );
    }
    Ok(node)
}

fn render_node<D: HostDocument>(vnode: &VNode, host: &mut D) -> Result<D::Node, RenderError> {
    match vnode {
        VNode::Text(value) => {
            log::trace!("text {value:?}");
            host.create_text_node(value)
        }
        VNode::List(items) => {
            log::debug!("child list of {} items was not flattened", items.len());
            Err(RenderError::invalid_node(format!(
                "[nested list of {} item(s)]",
                items.len()
            )))
        }
        VNode::Element {
            tag,
            props,
            children,
        } => {
            log::trace!("element <{tag}>");
            let n = host.create_element(tag)?;
            for (k, v) in props.iter() {
                host.set_attribute(&n, k, v)?;
            }
            for child in children.iter().flatten() {
                let c = render_node(child, host)?;
                host.append_child(&n, c)?;
            }
            Ok(n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_dom::{h, text};

    #[test]
    fn text_renders_to_text_node() {
        let mut doc = memory::Document::new();
        let n = render(&text("hi"), &mut doc).unwrap();
        assert_eq!(doc.text(n), Some("hi"));
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn list_is_rejected_without_host_calls() {
        let mut doc = memory::Document::new();
        let err = render(&VNode::List(vec![text("a")]), &mut doc).unwrap_err();
        assert_eq!(err, RenderError::invalid_node("[nested list of 1 item(s)]"));
        assert_ne!(err, RenderError::invalid_node(""));
        assert!(doc.is_empty());
    }

    #[test]
    fn absent_children_append_nothing() {
        let mut doc = memory::Document::new();
        let n = render(&h("div", (), vec![]), &mut doc).unwrap();
        assert!(doc.children(n).is_empty());
    }
}
