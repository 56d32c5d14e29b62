//! An in-memory host document, for tests, tooling and server-side output.

use std::fmt::Write as _;

use indextree::{Arena, NodeId};

use crate::{HostDocument, RenderError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String },
    Text { text: String },
}

#[derive(Debug, Clone)]
pub struct MemNode {
    pub kind: NodeKind,
    pub attrs: Vec<(String, String)>,
}

// Serialized without a closing tag when they have no children.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Arena-backed document. Node handles are [`NodeId`]s and stay valid for the
/// lifetime of the document; nodes are never removed.
#[derive(Debug, Default)]
pub struct Document {
    arena: Arena<MemNode>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes ever created in this document.
    pub fn len(&self) -> usize {
        self.arena.count()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn node(&self, id: NodeId) -> Option<&MemNode> {
        self.arena.get(id).map(|n| n.get())
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|n| &n.kind)
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { tag } => Some(tag),
            NodeKind::Text { .. } => None,
        }
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Text { text } => Some(text),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.node(id)?
            .attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in the order they were first set.
    pub fn attributes(&self, id: NodeId) -> Vec<(&str, &str)> {
        self.node(id)
            .map(|n| {
                n.attrs
                    .iter()
                    .map(|(k, v)| (k.as_str(), v.as_str()))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        if self.arena.get(id).is_none() {
            return Vec::new();
        }
        id.children(&self.arena).collect()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.arena.get(id)?.parent()
    }

    /// Serializes the subtree rooted at `id` as HTML.
    pub fn to_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.write_html(id, &mut out);
        out
    }

    fn write_html(&self, id: NodeId, out: &mut String) {
        let Some(node) = self.node(id) else { return };
        match &node.kind {
            NodeKind::Text { text } => escape_text(text, out),
            NodeKind::Element { tag } => {
                out.push('<');
                out.push_str(tag);
                for (k, v) in &node.attrs {
                    let _ = write!(out, " {k}=\"");
                    escape_attr(v, out);
                    out.push('"');
                }
                out.push('>');
                let children = self.children(id);
                if children.is_empty()
                    && VOID_ELEMENTS.contains(&tag.to_ascii_lowercase().as_str())
                {
                    return;
                }
                for c in children {
                    self.write_html(c, out);
                }
                let _ = write!(out, "</{tag}>");
            }
        }
    }

    fn element_mut(
        &mut self,
        id: NodeId,
        op: &'static str,
    ) -> Result<&mut MemNode, RenderError> {
        let node = self
            .arena
            .get_mut(id)
            .ok_or_else(|| RenderError::host(op, format!("unknown node {id:?}")))?
            .get_mut();
        match node.kind {
            NodeKind::Element { .. } => Ok(node),
            NodeKind::Text { .. } => Err(RenderError::host(
                op,
                format!("node {id:?} is a text node"),
            )),
        }
    }
}

impl HostDocument for Document {
    type Node = NodeId;

    fn create_text_node(&mut self, value: &str) -> Result<NodeId, RenderError> {
        Ok(self.arena.new_node(MemNode {
            kind: NodeKind::Text {
                text: value.to_string(),
            },
            attrs: Vec::new(),
        }))
    }

    fn create_element(&mut self, tag: &str) -> Result<NodeId, RenderError> {
        if !is_valid_tag(tag) {
            log::debug!("rejecting element name {tag:?}");
            return Err(RenderError::invalid_node(tag));
        }
        Ok(self.arena.new_node(MemNode {
            kind: NodeKind::Element {
                tag: tag.to_string(),
            },
            attrs: Vec::new(),
        }))
    }

    fn set_attribute(&mut self, node: &NodeId, key: &str, value: &str) -> Result<(), RenderError> {
        if !is_valid_attr_key(key) {
            log::debug!("rejecting attribute name {key:?}");
            return Err(RenderError::host(
                "set_attribute",
                format!("invalid attribute name {key:?}"),
            ));
        }
        let el = self.element_mut(*node, "set_attribute")?;
        match el.attrs.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => el.attrs.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn append_child(&mut self, parent: &NodeId, child: NodeId) -> Result<(), RenderError> {
        self.element_mut(*parent, "append_child")?;
        let attached = self
            .arena
            .get(child)
            .ok_or_else(|| {
                RenderError::host("append_child", format!("unknown node {child:?}"))
            })?
            .parent();
        if let Some(p) = attached {
            return Err(RenderError::host(
                "append_child",
                format!("node {child:?} is already a child of {p:?}"),
            ));
        }
        parent
            .checked_append(child, &mut self.arena)
            .map_err(|e| RenderError::host("append_child", e.to_string()))
    }
}

fn is_valid_tag(tag: &str) -> bool {
    let mut chars = tag.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

fn is_valid_attr_key(key: &str) -> bool {
    !key.is_empty()
        && !key.chars().any(|c| {
            c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '=')
        })
}

fn escape_text(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_names() {
        assert!(is_valid_tag("div"));
        assert!(is_valid_tag("my-widget"));
        assert!(is_valid_tag("svg:rect"));
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("1div"));
        assert!(!is_valid_tag("di v"));
        assert!(!is_valid_tag("<p>"));
    }

    #[test]
    fn attribute_names() {
        assert!(is_valid_attr_key("data-id"));
        assert!(is_valid_attr_key("aria-label"));
        assert!(!is_valid_attr_key(""));
        assert!(!is_valid_attr_key("a b"));
        assert!(!is_valid_attr_key("x=y"));
    }

    #[test]
    fn set_attribute_overwrites() {
        let mut doc = Document::new();
        let el = doc.create_element("a").unwrap();
        doc.set_attribute(&el, "href", "/one").unwrap();
        doc.set_attribute(&el, "title", "t").unwrap();
        doc.set_attribute(&el, "href", "/two").unwrap();
        assert_eq!(doc.attributes(el), vec![("href", "/two"), ("title", "t")]);
    }

    #[test]
    fn text_nodes_reject_attributes_and_children() {
        let mut doc = Document::new();
        let t = doc.create_text_node("x").unwrap();
        let u = doc.create_text_node("y").unwrap();
        assert!(matches!(
            doc.set_attribute(&t, "id", "a"),
            Err(RenderError::HostOperation { op: "set_attribute", .. })
        ));
        assert!(matches!(
            doc.append_child(&t, u),
            Err(RenderError::HostOperation { op: "append_child", .. })
        ));
    }

    #[test]
    fn append_requires_detached_child() {
        let mut doc = Document::new();
        let a = doc.create_element("div").unwrap();
        let b = doc.create_element("div").unwrap();
        let c = doc.create_element("span").unwrap();
        doc.append_child(&a, c).unwrap();
        assert!(doc.append_child(&b, c).is_err());
        assert!(doc.append_child(&a, a).is_err());
        assert_eq!(doc.parent(c), Some(a));
    }

    #[test]
    fn html_escaping_and_void_elements() {
        let mut doc = Document::new();
        let p = doc.create_element("p").unwrap();
        doc.set_attribute(&p, "title", "say \"hi\" & go").unwrap();
        let t = doc.create_text_node("1 < 2 & 3 > 2").unwrap();
        let br = doc.create_element("br").unwrap();
        doc.append_child(&p, t).unwrap();
        doc.append_child(&p, br).unwrap();
        assert_eq!(
            doc.to_html(p),
            "<p title=\"say &quot;hi&quot; &amp; go\">1 &lt; 2 &amp; 3 &gt; 2<br></p>"
        );
    }
}
