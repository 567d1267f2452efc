use crate::error::Result;
use crate::tools::utils::normalize_url;
use crate::tools::{Tool, ToolContext, ToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for the navigate tool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NavigateParams {
    /// Target URL; bare domains are completed to https
    pub url: String,
}

/// Tool for navigating the active tab
#[derive(Default)]
pub struct NavigateTool;

impl Tool for NavigateTool {
    type Params = NavigateParams;

    fn name(&self) -> &str {
        "navigate"
    }

    fn description(&self) -> &str {
        "Navigate the active tab to a URL and wait for the page to load"
    }

    fn execute_typed(&self, params: NavigateParams, context: &mut ToolContext) -> Result<ToolResult> {
        let url = normalize_url(&params.url);

        context.session.navigate(&url)?;
        context.session.wait_for_navigation()?;

        // Any prior snapshot refers to the old page
        context.invalidate_dom();

        Ok(ToolResult::success_with(serde_json::json!({
            "url": url
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_params() {
        let json = serde_json::json!({"url": "example.com"});
        let params: NavigateParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.url, "example.com");
    }

    #[test]
    fn test_navigate_params_require_url() {
        let json = serde_json::json!({});
        assert!(serde_json::from_value::<NavigateParams>(json).is_err());
    }
}
