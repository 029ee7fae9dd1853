use crate::error::Result;

/// Capability to turn a URL into rendered page markup.
///
/// The production implementation is [`crate::BrowserEngine`]; tests swap in
/// stubs that return canned markup.
#[async_trait::async_trait]
pub trait PageFetcher: Send + Sync {
    /// Load `url` and return the rendered HTML.
    async fn fetch(&self, url: &str) -> Result<String>;
}
