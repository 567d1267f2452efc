//! Browser automation tools
//!
//! A small typed tool system wrapping the DOM engine for agent callers:
//! each tool takes JSON parameters (validated against a schema-carrying
//! params struct), runs against a [`ToolContext`], and reports a
//! [`ToolResult`]. Recoverable automation failures (a stale highlight
//! index, an element that vanished) come back as unsuccessful results, not
//! errors.

pub mod click;
pub mod extract;
pub mod highlight;
pub mod navigate;
pub mod utils;

pub use click::{ClickParams, ClickTool};
pub use extract::{ListInteractiveParams, ListInteractiveTool};
pub use highlight::{ClearHighlightsParams, ClearHighlightsTool, HighlightParams, HighlightTool};
pub use navigate::{NavigateParams, NavigateTool};

use crate::browser::BrowserSession;
use crate::dom::DomResult;
use crate::error::{BrowserError, Result};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// A browser automation tool with typed parameters
pub trait Tool {
    /// Parameter type, deserialized from the caller's JSON
    type Params: DeserializeOwned + JsonSchema;

    /// Unique tool name used for registry dispatch
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does
    fn description(&self) -> &str;

    /// Execute with already-validated parameters
    fn execute_typed(&self, params: Self::Params, context: &mut ToolContext) -> Result<ToolResult>;
}

/// Result of a tool execution
#[derive(Debug, Clone, Serialize)]
pub struct ToolResult {
    /// Whether the tool accomplished its task
    pub success: bool,

    /// Tool-specific payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Reason the tool did not succeed (recoverable failures only; hard
    /// failures surface as errors)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ToolResult {
    /// Successful result without payload
    pub fn success() -> Self {
        Self { success: true, data: None, error: None }
    }

    /// Successful result with payload
    pub fn success_with(data: Value) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    /// Unsuccessful-but-recoverable result
    pub fn failure(reason: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(reason.into()) }
    }
}

/// Execution context shared by tools: the session plus a lazily populated
/// DOM snapshot cache.
///
/// The cache exists so one agent step (list elements, then click one) pays
/// for a single extraction. Tools that change the page invalidate it.
pub struct ToolContext<'a> {
    pub session: &'a BrowserSession,
    dom: Option<DomResult>,
}

impl<'a> ToolContext<'a> {
    pub fn new(session: &'a BrowserSession) -> Self {
        Self { session, dom: None }
    }

    /// Get the cached DOM snapshot, extracting one if none is cached
    pub fn get_dom(&mut self) -> Result<&DomResult> {
        match self.dom {
            Some(ref dom) => Ok(dom),
            None => {
                let fresh = self.session.get_dom_state()?;
                Ok(self.dom.insert(fresh))
            }
        }
    }

    /// Drop the cached snapshot; the next [`Self::get_dom`] re-extracts
    pub fn invalidate_dom(&mut self) {
        self.dom = None;
    }
}

/// Object-safe adapter over [`Tool`] so the registry can hold tools with
/// differing parameter types
trait ErasedTool {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult>;
}

impl<T: Tool> ErasedTool for T {
    fn name(&self) -> &str {
        Tool::name(self)
    }

    fn description(&self) -> &str {
        Tool::description(self)
    }

    fn execute(&self, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let typed = serde_json::from_value(params).map_err(|e| BrowserError::InvalidParams {
            tool: Tool::name(self).to_string(),
            reason: e.to_string(),
        })?;
        self.execute_typed(typed, context)
    }
}

/// Registry dispatching tool invocations by name
#[derive(Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, Box<dyn ErasedTool>>,
}

impl ToolRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with the standard tool set
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NavigateTool);
        registry.register(ClickTool);
        registry.register(HighlightTool);
        registry.register(ClearHighlightsTool);
        registry.register(ListInteractiveTool);
        registry
    }

    /// Register a tool under its own name
    pub fn register<T: Tool + 'static>(&mut self, tool: T) {
        self.tools.insert(Tool::name(&tool).to_string(), Box::new(tool));
    }

    /// Execute a registered tool by name
    pub fn execute(&self, name: &str, params: Value, context: &mut ToolContext) -> Result<ToolResult> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| BrowserError::UnknownTool(name.to_string()))?;

        log::debug!("executing tool '{}'", name);
        tool.execute(params, context)
    }

    /// Check whether a tool is registered
    pub fn contains(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    /// Registered tool names in registration order
    pub fn names(&self) -> Vec<&str> {
        self.tools.keys().map(|name| name.as_str()).collect()
    }

    /// (name, description) pairs for presenting the tool set to an agent
    pub fn descriptions(&self) -> Vec<(&str, &str)> {
        self.tools
            .values()
            .map(|tool| (tool.name(), tool.description()))
            .collect()
    }
}
