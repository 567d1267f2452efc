use crate::dom::node::{DomNode, ElementNode};
use crate::dom::parser::parse_dom_state;
use crate::dom::selector_map::SelectorMap;
use crate::error::{BrowserError, Result};
use headless_chrome::Tab;
use serde_json::Value;
use std::rc::Rc;
use std::sync::Arc;

/// In-page extraction script; a function expression applied to an options
/// object, returning the raw tree as a JSON string
const BUILD_DOM_TREE_JS: &str = include_str!("js/build_dom_tree.js");

/// One snapshot's typed tree plus its index lookup table.
///
/// A snapshot is a value: it is never updated when the page changes, and
/// the engine does not track staleness. Re-snapshot when in doubt.
#[derive(Debug, Clone)]
pub struct DomState {
    /// Root of the parsed tree (the document element)
    pub element_tree: Rc<ElementNode>,

    /// Highlight index -> element node, for later re-targeting
    pub selector_map: SelectorMap,
}

/// A [`DomState`] paired with the raw JSON payload it was parsed from.
///
/// The raw payload is kept because highlighting re-sends it to the page
/// as-is; re-deriving it from the typed tree would be wasted work for a
/// purely visual operation.
#[derive(Debug, Clone)]
pub struct DomResult {
    pub state: DomState,
    pub raw: Value,
}

impl DomResult {
    /// Take a fresh snapshot of the tab's current render tree.
    ///
    /// `highlight_elements` controls whether interactive, visible elements
    /// receive highlight indices; with it off the tree is extracted for
    /// reading only and the selector map comes back empty.
    pub fn from_tab(tab: &Arc<Tab>, highlight_elements: bool) -> Result<Self> {
        let expression = format!(
            "({})({{\"highlightElements\":{}}})",
            BUILD_DOM_TREE_JS, highlight_elements
        );

        let result = tab.evaluate(&expression, false).map_err(|e| {
            BrowserError::EvaluationFailed(format!("DOM extraction script failed: {}", e))
        })?;

        let json_value = result.value.ok_or_else(|| {
            BrowserError::DomParseFailed("no DOM returned from page".to_string())
        })?;

        // The script returns a JSON string, parsed in two steps
        let json_str: String = serde_json::from_value(json_value).map_err(|e| {
            BrowserError::DomParseFailed(format!("extraction result is not a string: {}", e))
        })?;

        let raw: Value = serde_json::from_str(&json_str).map_err(|e| {
            BrowserError::DomParseFailed(format!("failed to parse DOM JSON: {}", e))
        })?;

        let state = parse_dom_state(&raw)?;

        log::debug!(
            "DOM snapshot: {} elements, {} interactive",
            state.count_elements(),
            state.selector_map.len()
        );

        Ok(Self { state, raw })
    }

    /// Pretty-printed raw payload, for debugging and agent context
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.raw).map_err(|e| {
            BrowserError::DomParseFailed(format!("failed to serialize DOM to JSON: {}", e))
        })
    }
}

impl DomState {
    /// Number of interactive elements that received a highlight index
    pub fn count_interactive(&self) -> usize {
        self.selector_map.len()
    }

    /// Total element count in the tree (text nodes excluded)
    pub fn count_elements(&self) -> usize {
        count_elements_recursive(&self.element_tree)
    }

    /// Look up an element by its highlight index
    pub fn find_node_by_index(&self, index: u32) -> Option<&Rc<ElementNode>> {
        self.selector_map.get(index)
    }

    /// All assigned highlight indices in document order
    pub fn interactive_indices(&self) -> Vec<u32> {
        self.selector_map.indices().collect()
    }

    /// One line per indexed element, the digest an operator agent reads
    /// before choosing an index to act on
    pub fn describe_interactive(&self) -> Vec<String> {
        self.selector_map
            .iter()
            .map(|(index, el)| format!("[{}] {}", index, el.to_simple_string()))
            .collect()
    }
}

fn count_elements_recursive(element: &Rc<ElementNode>) -> usize {
    1 + element
        .children()
        .iter()
        .map(|child| match child {
            DomNode::Element(el) => count_elements_recursive(el),
            DomNode::Text(_) => 0,
        })
        .sum::<usize>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> Value {
        json!({
            "type": "ELEMENT_NODE",
            "tagName": "body",
            "xpath": "/html/body",
            "isVisible": true,
            "children": [
                {
                    "type": "ELEMENT_NODE",
                    "tagName": "nav",
                    "xpath": "/html/body/nav",
                    "isVisible": true,
                    "children": [
                        {
                            "type": "ELEMENT_NODE",
                            "tagName": "a",
                            "xpath": "/html/body/nav/a",
                            "attributes": {"href": "/home"},
                            "isVisible": true,
                            "isInteractive": true,
                            "highlightIndex": 1,
                            "children": [
                                {"type": "TEXT_NODE", "text": "Home", "isVisible": true}
                            ]
                        }
                    ]
                },
                {
                    "type": "ELEMENT_NODE",
                    "tagName": "button",
                    "xpath": "/html/body/button",
                    "isVisible": true,
                    "isInteractive": true,
                    "highlightIndex": 2,
                    "children": [
                        {"type": "TEXT_NODE", "text": "Save", "isVisible": true}
                    ]
                }
            ]
        })
    }

    fn state() -> DomState {
        parse_dom_state(&fixture()).unwrap()
    }

    #[test]
    fn test_counts() {
        let state = state();
        assert_eq!(state.count_elements(), 4);
        assert_eq!(state.count_interactive(), 2);
    }

    #[test]
    fn test_find_node_by_index() {
        let state = state();
        for index in state.interactive_indices() {
            let node = state.find_node_by_index(index).unwrap();
            assert_eq!(node.highlight_index, Some(index));
        }
        assert!(state.find_node_by_index(99).is_none());
    }

    #[test]
    fn test_describe_interactive() {
        let state = state();
        let lines = state.describe_interactive();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[1]"));
        assert!(lines[0].contains("<a"));
        assert!(lines[0].contains("Home"));
        assert!(lines[1].starts_with("[2]"));
        assert!(lines[1].contains("Save"));
    }

    #[test]
    fn test_result_to_json_round_trips_raw() {
        let raw = fixture();
        let result = DomResult {
            state: parse_dom_state(&raw).unwrap(),
            raw: raw.clone(),
        };

        let json = result.to_json().unwrap();
        let reparsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(reparsed, raw);
    }
}
