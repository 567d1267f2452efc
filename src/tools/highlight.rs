use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the highlight tool (none)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct HighlightParams {}

/// Tool that paints numbered overlays over the indexed elements of the
/// current snapshot, for human verification of what the agent can target
#[derive(Default)]
pub struct HighlightTool;

impl Tool for HighlightTool {
    type Params = HighlightParams;

    fn name(&self) -> &str {
        "highlight"
    }

    fn description(&self) -> &str {
        "Draw numbered overlays over every indexed interactive element on the page"
    }

    fn execute_typed(&self, _params: HighlightParams, context: &mut ToolContext) -> Result<ToolResult> {
        let dom = context.get_dom()?.clone();

        context.session.highlight_dom_elements(&dom)?;

        Ok(ToolResult::success_with(serde_json::json!({
            "highlighted": dom.state.count_interactive()
        })))
    }
}

/// Parameters for the clear-highlights tool (none)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ClearHighlightsParams {}

/// Tool that removes all highlight overlays from the page
#[derive(Default)]
pub struct ClearHighlightsTool;

impl Tool for ClearHighlightsTool {
    type Params = ClearHighlightsParams;

    fn name(&self) -> &str {
        "clear_highlights"
    }

    fn description(&self) -> &str {
        "Remove all highlight overlays and the injected overlay styling"
    }

    fn execute_typed(&self, _params: ClearHighlightsParams, context: &mut ToolContext) -> Result<ToolResult> {
        context.session.clear_dom_highlights()?;
        Ok(ToolResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_deserialize() {
        let params: HighlightParams = serde_json::from_value(serde_json::json!({})).unwrap();
        let _ = params;

        let params: ClearHighlightsParams = serde_json::from_value(serde_json::json!({})).unwrap();
        let _ = params;
    }
}
