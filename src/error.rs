use thiserror::Error;

/// Errors produced by browser sessions, DOM extraction, and tools
#[derive(Debug, Error)]
pub enum BrowserError {
    /// Failed to launch a Chrome/Chromium instance
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    /// Failed to connect to an existing browser over WebSocket
    #[error("Failed to connect to browser: {0}")]
    ConnectionFailed(String),

    /// Tab creation, lookup, or close failed
    #[error("Tab operation failed: {0}")]
    TabOperationFailed(String),

    /// Navigation request failed or timed out
    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    /// An in-page script evaluation failed at the CDP transport level
    #[error("Script evaluation failed: {0}")]
    EvaluationFailed(String),

    /// The page returned no DOM, or the root payload could not be
    /// interpreted as an element. Unrecoverable for this snapshot; the
    /// caller's remedy is a fresh snapshot.
    #[error("Failed to parse DOM: {0}")]
    DomParseFailed(String),

    /// An element lookup yielded nothing
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    /// No tool registered under the requested name
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Tool parameters failed to deserialize
    #[error("Invalid parameters for tool '{tool}': {reason}")]
    InvalidParams { tool: String, reason: String },

    /// A tool failed during execution
    #[error("Tool '{tool}' failed: {reason}")]
    ToolExecutionFailed { tool: String, reason: String },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, BrowserError>;
