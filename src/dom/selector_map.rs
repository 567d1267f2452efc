use crate::dom::node::{DomNode, ElementNode};
use indexmap::IndexMap;
use std::rc::Rc;

/// Map from highlight index to the element node holding that index.
///
/// Built by depth-first traversal of a parsed tree, so iteration order
/// (IndexMap preserves insertion order) matches document order. Values are
/// shared references into the tree, never copies.
#[derive(Debug, Clone, Default)]
pub struct SelectorMap {
    map: IndexMap<u32, Rc<ElementNode>>,
}

impl SelectorMap {
    /// Create an empty map
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the map from a parsed tree by collecting every element with an
    /// assigned highlight index
    pub fn from_tree(root: &Rc<ElementNode>) -> Self {
        let mut map = Self::new();
        map.collect(root);
        map
    }

    fn collect(&mut self, element: &Rc<ElementNode>) {
        if let Some(index) = element.highlight_index {
            // Indices are unique by construction (one counter per snapshot);
            // a duplicate would silently keep the later node.
            debug_assert!(
                !self.map.contains_key(&index),
                "duplicate highlight index {index}"
            );
            self.map.insert(index, element.clone());
        }

        for child in element.children().iter() {
            if let DomNode::Element(el) = child {
                self.collect(el);
            }
        }
    }

    /// Get the element for a highlight index
    pub fn get(&self, index: u32) -> Option<&Rc<ElementNode>> {
        self.map.get(&index)
    }

    /// Check if an index is present
    pub fn contains(&self, index: u32) -> bool {
        self.map.contains_key(&index)
    }

    /// Number of indexed elements
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (index, element) pairs in document order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &Rc<ElementNode>)> {
        self.map.iter().map(|(index, el)| (*index, el))
    }

    /// All assigned indices in document order
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.map.keys().copied()
    }
}
