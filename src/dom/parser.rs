use crate::dom::node::{DomNode, ElementNode, TextNode};
use crate::dom::selector_map::SelectorMap;
use crate::dom::state::DomState;
use crate::error::{BrowserError, Result};
use serde_json::Value;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Parse the raw JSON tree emitted by the in-page extraction script into a
/// typed, parent-linked [`DomState`].
///
/// A null/absent root or a root that is not an element is unrecoverable for
/// this snapshot and fails with [`BrowserError::DomParseFailed`]. Individual
/// malformed child nodes are dropped silently, matching the extraction
/// script's own omission policy.
pub fn parse_dom_state(raw: &Value) -> Result<DomState> {
    if raw.is_null() {
        return Err(BrowserError::DomParseFailed(
            "no DOM returned from page".to_string(),
        ));
    }

    let root = parse_node(raw, Weak::new()).ok_or_else(|| {
        BrowserError::DomParseFailed("failed to parse root element".to_string())
    })?;

    let element_tree = match root {
        DomNode::Element(el) => el,
        DomNode::Text(_) => {
            return Err(BrowserError::DomParseFailed(
                "root node is not an element".to_string(),
            ));
        }
    };

    let selector_map = SelectorMap::from_tree(&element_tree);

    Ok(DomState {
        element_tree,
        selector_map,
    })
}

/// Parse one raw node. Returns None for unknown node types and for nodes
/// missing required fields; the caller drops those from the children list.
fn parse_node(raw: &Value, parent: Weak<ElementNode>) -> Option<DomNode> {
    match raw.get("type").and_then(Value::as_str) {
        Some("TEXT_NODE") => {
            let text = raw.get("text")?.as_str()?.to_string();
            Some(DomNode::Text(Rc::new(TextNode {
                text,
                is_visible: bool_field(raw, "isVisible"),
                parent,
            })))
        }
        Some("ELEMENT_NODE") => {
            let tag_name = raw.get("tagName")?.as_str()?.to_string();

            let xpath = raw
                .get("xpath")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();

            let attributes = raw
                .get("attributes")
                .and_then(Value::as_object)
                .map(|map| {
                    map.iter()
                        .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                        .collect()
                })
                .unwrap_or_default();

            let highlight_index = raw
                .get("highlightIndex")
                .and_then(Value::as_u64)
                .map(|i| i as u32);

            let element = Rc::new(ElementNode {
                tag_name,
                xpath,
                attributes,
                children: RefCell::new(Vec::new()),
                is_visible: bool_field(raw, "isVisible"),
                is_interactive: bool_field(raw, "isInteractive"),
                is_top_element: bool_field(raw, "isTopElement"),
                shadow_root: bool_field(raw, "shadowRoot"),
                highlight_index,
                parent,
            });

            if let Some(children) = raw.get("children").and_then(Value::as_array) {
                let mut parsed = Vec::with_capacity(children.len());
                for child in children {
                    if let Some(node) = parse_node(child, Rc::downgrade(&element)) {
                        parsed.push(node);
                    }
                }
                *element.children.borrow_mut() = parsed;
            }

            Some(DomNode::Element(element))
        }
        _ => None,
    }
}

/// Missing or non-boolean fields never silently become true
fn bool_field(raw: &Value, name: &str) -> bool {
    raw.get(name).and_then(Value::as_bool).unwrap_or(false)
}
