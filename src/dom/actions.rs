use crate::dom::state::DomState;
use crate::error::Result;
use headless_chrome::Tab;
use std::sync::Arc;

/// Outcome of dispatching a click through a highlight index.
///
/// Lookup and resolution failures are values, not errors: "the target
/// disappeared since the snapshot" is a normal condition in interactive
/// automation, and callers are expected to branch on it (typically by
/// re-snapshotting) rather than catch anything.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ClickOutcome {
    /// The click was performed on the first live match
    Clicked,

    /// The click could not be performed; the string says why
    Failed(String),
}

impl ClickOutcome {
    pub fn is_clicked(&self) -> bool {
        matches!(self, ClickOutcome::Clicked)
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            ClickOutcome::Clicked => None,
            ClickOutcome::Failed(reason) => Some(reason),
        }
    }
}

/// Resolve a highlight index from a snapshot back to a live element and
/// click it.
///
/// The stored positional xpath is re-evaluated against the current page and
/// the first match is clicked. No retry and no wait-for-visibility here;
/// that policy belongs to the calling agent.
pub fn click_element_by_highlight_index(
    tab: &Arc<Tab>,
    state: &DomState,
    index: u32,
) -> Result<ClickOutcome> {
    let node = match state.selector_map.get(index) {
        Some(node) => node,
        None => {
            return Ok(ClickOutcome::Failed(format!(
                "no element found for highlight index {}",
                index
            )));
        }
    };

    if node.xpath.is_empty() {
        return Ok(ClickOutcome::Failed(format!(
            "element at highlight index {} has no xpath",
            index
        )));
    }

    let elements = match tab.find_elements_by_xpath(&node.xpath) {
        Ok(elements) => elements,
        // Resolution failure means the page changed since the snapshot
        Err(e) => {
            log::debug!("xpath {} no longer resolves: {}", node.xpath, e);
            return Ok(ClickOutcome::Failed(format!(
                "element with highlight index {} not found in DOM (xpath {})",
                index, node.xpath
            )));
        }
    };

    let Some(element) = elements.first() else {
        return Ok(ClickOutcome::Failed(format!(
            "element with highlight index {} not found in DOM (xpath {})",
            index, node.xpath
        )));
    };

    match element.click() {
        Ok(_) => {
            log::debug!("clicked highlight index {} via {}", index, node.xpath);
            Ok(ClickOutcome::Clicked)
        }
        // An element detaching between resolution and dispatch is the same
        // staleness as zero matches
        Err(e) => Ok(ClickOutcome::Failed(format!(
            "click on highlight index {} failed: {}",
            index, e
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_outcome_accessors() {
        let clicked = ClickOutcome::Clicked;
        assert!(clicked.is_clicked());
        assert!(clicked.failure_reason().is_none());

        let failed = ClickOutcome::Failed("no element found for highlight index 7".to_string());
        assert!(!failed.is_clicked());
        assert_eq!(
            failed.failure_reason(),
            Some("no element found for highlight index 7")
        );
    }
}
