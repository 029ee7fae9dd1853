//! Browser automation for modem status pages.
//!
//! Each fetch launches its own headless Chromium session, renders one
//! page and closes the session again, whatever the outcome.

pub mod engine;
pub mod error;
pub mod fetcher;

pub use engine::BrowserEngine;
pub use error::{BrowserError, Result};
pub use fetcher::PageFetcher;
