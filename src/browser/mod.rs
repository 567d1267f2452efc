//! Browser session management
//!
//! Launching or connecting to Chrome/Chromium instances and working with
//! their tabs. The [`BrowserSession`] is the host surface for the DOM
//! engine: it owns the browser handle and exposes snapshot, highlight, and
//! click entry points against the active tab.

pub mod config;
pub mod session;

pub use config::{ConnectionOptions, LaunchOptions};
pub use session::BrowserSession;
