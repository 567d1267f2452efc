use crate::error::Result;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Parameters for the list-interactive tool (none)
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ListInteractiveParams {}

/// Tool producing the agent-facing digest of the current snapshot: every
/// indexed element with its tag, visible text, and xpath
#[derive(Default)]
pub struct ListInteractiveTool;

impl Tool for ListInteractiveTool {
    type Params = ListInteractiveParams;

    fn name(&self) -> &str {
        "list_interactive"
    }

    fn description(&self) -> &str {
        "List the interactive elements of the current page with their highlight indices"
    }

    fn execute_typed(&self, _params: ListInteractiveParams, context: &mut ToolContext) -> Result<ToolResult> {
        let dom = context.get_dom()?;

        let elements: Vec<_> = dom
            .state
            .selector_map
            .iter()
            .map(|(index, el)| {
                json!({
                    "index": index,
                    "tag": el.tag_name,
                    "text": el.text_content(),
                    "xpath": el.xpath,
                })
            })
            .collect();

        Ok(ToolResult::success_with(json!({
            "count": elements.len(),
            "elements": elements,
        })))
    }
}
