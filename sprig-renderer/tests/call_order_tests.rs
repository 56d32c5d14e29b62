//! Checks the exact sequence of host calls with a recording host.

use sprig_dom::{h, text};
use sprig_renderer::{render, HostDocument, RenderError};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Text(usize, String),
    Element(usize, String),
    Attr(usize, String, String),
    Append(usize, usize),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
    next: usize,
    fail_on_tag: Option<&'static str>,
}

impl Recorder {
    fn id(&mut self) -> usize {
        self.next += 1;
        self.next
    }
}

impl HostDocument for Recorder {
    type Node = usize;

    fn create_text_node(&mut self, value: &str) -> Result<usize, RenderError> {
        let id = self.id();
        self.calls.push(Call::Text(id, value.into()));
        Ok(id)
    }

    fn create_element(&mut self, tag: &str) -> Result<usize, RenderError> {
        if tag.is_empty() || self.fail_on_tag == Some(tag) {
            return Err(RenderError::invalid_node(tag));
        }
        let id = self.id();
        self.calls.push(Call::Element(id, tag.into()));
        Ok(id)
    }

    fn set_attribute(&mut self, node: &usize, key: &str, value: &str) -> Result<(), RenderError> {
        self.calls.push(Call::Attr(*node, key.into(), value.into()));
        Ok(())
    }

    fn append_child(&mut self, parent: &usize, child: usize) -> Result<(), RenderError> {
        self.calls.push(Call::Append(*parent, child));
        Ok(())
    }
}

#[test]
fn text_makes_a_single_call() {
    let mut host = Recorder::default();
    let n = render(&text("only"), &mut host).unwrap();
    assert_eq!(n, 1);
    assert_eq!(host.calls, vec![Call::Text(1, "only".into())]);
}

#[test]
fn pre_order_with_attributes_before_children() {
    let vnode = h!(
        "div",
        [("id", "my-div"), ("class", "box")],
        "hello",
        h!("p", [("class", "note")], "world")
    );
    let mut host = Recorder::default();
    let root = render(&vnode, &mut host).unwrap();
    assert_eq!(root, 1);
    assert_eq!(
        host.calls,
        vec![
            Call::Element(1, "div".into()),
            Call::Attr(1, "id".into(), "my-div".into()),
            Call::Attr(1, "class".into(), "box".into()),
            Call::Text(2, "hello".into()),
            Call::Append(1, 2),
            Call::Element(3, "p".into()),
            Call::Attr(3, "class".into(), "note".into()),
            Call::Text(4, "world".into()),
            Call::Append(3, 4),
            Call::Append(1, 3),
        ]
    );
}

#[test]
fn failure_stops_further_host_calls() {
    let vnode = h!("div", (), h!("span", (), "a"), h!("aside", ()), "never");
    let mut host = Recorder {
        fail_on_tag: Some("aside"),
        ..Default::default()
    };
    let err = render(&vnode, &mut host).unwrap_err();
    assert_eq!(err, RenderError::invalid_node("aside"));
    assert_eq!(
        host.calls.last(),
        Some(&Call::Append(1, 2)),
        "nothing after the span is appended"
    );
    assert!(!host.calls.contains(&Call::Text(4, "never".into())));
}
