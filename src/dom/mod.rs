//! DOM extraction and interaction engine
//!
//! This module turns a live page into a typed, serializable tree with
//! numeric handles on interactive elements, and supports re-targeting those
//! handles later for clicking. It includes:
//! - node: typed DomNode tree (TextNode / ElementNode with parent links)
//! - parser: raw in-page JSON -> typed DomState
//! - selector_map: highlight index -> element node lookup table
//! - state: DomState / DomResult snapshots
//! - highlight: on-page overlay rendering for indexed elements
//! - actions: index-based click dispatch
//!
//! Every public operation issues exactly one in-page evaluation and returns
//! a value snapshot; nothing is cached between calls, and a snapshot is
//! stale the moment the page navigates or mutates.

pub mod actions;
pub mod highlight;
pub mod node;
pub mod parser;
pub mod selector_map;
pub mod state;

pub use actions::{click_element_by_highlight_index, ClickOutcome};
pub use highlight::{clear_dom_highlights, highlight_dom_elements};
pub use node::{DomNode, ElementNode, TextNode};
pub use selector_map::SelectorMap;
pub use state::{DomResult, DomState};

use crate::error::Result;
use headless_chrome::Tab;
use std::sync::Arc;

/// Take a snapshot with highlight indices assigned (the default mode an
/// operator agent works in)
pub fn get_dom_state(tab: &Arc<Tab>) -> Result<DomResult> {
    DomResult::from_tab(tab, true)
}

/// Take a snapshot with explicit control over index assignment
pub fn snapshot(tab: &Arc<Tab>, highlight_elements: bool) -> Result<DomResult> {
    DomResult::from_tab(tab, highlight_elements)
}
