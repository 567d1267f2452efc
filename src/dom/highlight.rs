use crate::error::{BrowserError, Result};
use headless_chrome::Tab;
use serde_json::Value;
use std::sync::Arc;

const HIGHLIGHT_ELEMENTS_JS: &str = include_str!("js/highlight_elements.js");
const CLEAR_HIGHLIGHTS_JS: &str = include_str!("js/clear_highlights.js");

/// Paint fixed-position overlays with numeric badges over every indexed
/// element in `raw` (the raw payload of a snapshot of the current page).
///
/// Idempotent: previously drawn overlays are cleared in-page before drawing.
/// Elements whose xpath no longer resolves, or that have collapsed to zero
/// area, are skipped silently; partial staleness is expected between a
/// snapshot and a highlight call.
pub fn highlight_dom_elements(tab: &Arc<Tab>, raw: &Value) -> Result<()> {
    let tree_json = serde_json::to_string(raw).map_err(|e| {
        BrowserError::EvaluationFailed(format!("failed to serialize DOM payload: {}", e))
    })?;

    let expression = format!("({})({})", HIGHLIGHT_ELEMENTS_JS, tree_json);

    tab.evaluate(&expression, false).map_err(|e| {
        BrowserError::EvaluationFailed(format!("highlight script failed: {}", e))
    })?;

    Ok(())
}

/// Remove every overlay and the injected style block
pub fn clear_dom_highlights(tab: &Arc<Tab>) -> Result<()> {
    let expression = format!("({})()", CLEAR_HIGHLIGHTS_JS);

    tab.evaluate(&expression, false).map_err(|e| {
        BrowserError::EvaluationFailed(format!("clear-highlights script failed: {}", e))
    })?;

    Ok(())
}
