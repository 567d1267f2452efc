use crate::dom::ClickOutcome;
use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the click tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClickParams {
    /// Highlight index from the current DOM snapshot
    pub index: u32,
}

/// Tool for clicking an element by its highlight index
#[derive(Default)]
pub struct ClickTool;

impl Tool for ClickTool {
    type Params = ClickParams;

    fn name(&self) -> &str {
        "click"
    }

    fn description(&self) -> &str {
        "Click an interactive element by the highlight index assigned in the last DOM snapshot"
    }

    fn execute_typed(&self, params: ClickParams, context: &mut ToolContext) -> Result<ToolResult> {
        // DomState clones share the underlying tree, so this costs two
        // reference bumps, not a copy
        let state = context.get_dom()?.state.clone();

        let outcome = context
            .session
            .click_element_by_highlight_index(&state, params.index)?;

        match outcome {
            ClickOutcome::Clicked => {
                // The click may have mutated or navigated the page
                context.invalidate_dom();
                Ok(ToolResult::success_with(serde_json::json!({
                    "index": params.index
                })))
            }
            // Stale index is an expected steady-state condition; the agent
            // should re-snapshot and retry
            ClickOutcome::Failed(reason) => Ok(ToolResult::failure(reason)),
        }
    }
}
