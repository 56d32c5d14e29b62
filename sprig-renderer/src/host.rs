use crate::RenderError;

/// The capabilities a renderer needs from the document it builds into.
///
/// Implementations decide what a node is and which names they accept.
/// `create_element` reports rejected tag names as
/// [`RenderError::InvalidNode`]; every other failure should be a
/// [`RenderError::HostOperation`].
pub trait HostDocument {
    type Node;

    fn create_text_node(&mut self, value: &str) -> Result<Self::Node, RenderError>;
    fn create_element(&mut self, tag: &str) -> Result<Self::Node, RenderError>;
    fn set_attribute(&mut self, node: &Self::Node, key: &str, value: &str)
    -> Result<(), RenderError>;
    fn append_child(&mut self, parent: &Self::Node, child: Self::Node) -> Result<(), RenderError>;
}
