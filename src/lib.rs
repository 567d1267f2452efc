//! # browser-operator
//!
//! A Rust library implementing the core primitive behind an "operator"
//! style browser-automation agent: it serializes a live page's DOM into a
//! typed tree annotated with visibility and interactivity metadata, assigns
//! stable numeric handles to interactive elements, and re-targets those
//! handles later for coordinate-free clicking — all over the Chrome
//! DevTools Protocol (CDP).
//!
//! ## Features
//!
//! - **Browser Session Management**: Launch or connect to Chrome/Chromium instances
//! - **DOM Extraction**: One-shot snapshots of the page with indexed interactive elements
//! - **Highlighting**: Numbered on-page overlays for visual verification of targets
//! - **Index-based Clicking**: Act on elements by handle, no CSS selectors needed
//! - **Tool System**: High-level operations (navigate, click, highlight, list) for agent callers
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use browser_operator::{BrowserSession, LaunchOptions};
//!
//! # fn main() -> browser_operator::Result<()> {
//! // Launch a browser
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//!
//! // Navigate to a page
//! session.navigate("https://example.com")?;
//! session.wait_for_navigation()?;
//!
//! // Snapshot the DOM with indexed interactive elements
//! let dom = session.get_dom_state()?;
//! for line in dom.state.describe_interactive() {
//!     println!("{}", line);
//! }
//!
//! // Click element 1 by its handle
//! let outcome = session.click_element_by_highlight_index(&dom.state, 1)?;
//! if !outcome.is_clicked() {
//!     // Recoverable: the page changed since the snapshot; take a fresh one
//!     let _dom = session.get_dom_state()?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Using the Tool System
//!
//! ```rust,no_run
//! use browser_operator::{BrowserSession, LaunchOptions};
//! use serde_json::json;
//!
//! # fn main() -> browser_operator::Result<()> {
//! let session = BrowserSession::launch(LaunchOptions::default())?;
//!
//! session.execute_tool("navigate", json!({"url": "example.com"}))?;
//! let listing = session.execute_tool("list_interactive", json!({}))?;
//! println!("{:?}", listing.data);
//! session.execute_tool("click", json!({"index": 2}))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Staleness Contract
//!
//! A snapshot ([`DomResult`]) is a disposable value: it is never updated,
//! diffed, or invalidated by the engine. The moment the page navigates or
//! mutates, indices may point at nothing; clicking such an index reports a
//! descriptive [`ClickOutcome::Failed`] rather than an error, and the
//! caller re-snapshots.
//!
//! ## Module Overview
//!
//! - [`browser`]: Browser session management and configuration
//! - [`dom`]: DOM extraction, element indexing, highlighting, and click dispatch
//! - [`tools`]: Agent-facing tools (navigate, click, highlight, list_interactive)
//! - [`error`]: Error types and result alias

pub mod browser;
pub mod dom;
pub mod error;
pub mod tools;

pub use browser::{BrowserSession, ConnectionOptions, LaunchOptions};
pub use dom::{ClickOutcome, DomNode, DomResult, DomState, ElementNode, SelectorMap, TextNode};
pub use error::{BrowserError, Result};
pub use tools::{Tool, ToolContext, ToolRegistry, ToolResult};
