//! Browser host: renders into a live `web_sys::Document`.
//!
//! ```ignore
//! let document = web_sys::window().and_then(|w| w.document()).unwrap();
//! let mut host = document.clone();
//! let node = sprig_renderer::render(&view(), &mut host)?;
//! document.body().unwrap().append_child(&node)?;
//! ```

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Node};

use crate::{HostDocument, RenderError};

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

impl HostDocument for Document {
    type Node = Node;

    fn create_text_node(&mut self, value: &str) -> Result<Node, RenderError> {
        Ok(Document::create_text_node(self, value).into())
    }

    fn create_element(&mut self, tag: &str) -> Result<Node, RenderError> {
        Document::create_element(self, tag)
            .map(Node::from)
            .map_err(|e| {
                log::debug!("createElement({tag:?}) threw {}", describe(&e));
                RenderError::invalid_node(tag)
            })
    }

    fn set_attribute(&mut self, node: &Node, key: &str, value: &str) -> Result<(), RenderError> {
        node.dyn_ref::<Element>()
            .ok_or_else(|| RenderError::host("set_attribute", "node is not an element"))?
            .set_attribute(key, value)
            .map_err(|e| RenderError::host("set_attribute", describe(&e)))
    }

    fn append_child(&mut self, parent: &Node, child: Node) -> Result<(), RenderError> {
        parent
            .append_child(&child)
            .map(drop)
            .map_err(|e| RenderError::host("append_child", describe(&e)))
    }
}
