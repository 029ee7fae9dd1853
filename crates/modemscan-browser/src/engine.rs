use crate::error::{BrowserError, Result};
use crate::fetcher::PageFetcher;
use chromiumoxide::browser::{Browser, BrowserConfig as ChromeConfig};
use futures::StreamExt;
use modemscan_core::BrowserConfig;
use std::time::Duration;
use tokio::task::JoinHandle;

/// One running Chromium process plus its CDP event pump.
struct BrowserSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl BrowserSession {
    async fn launch(config: ChromeConfig) -> Result<Self> {
        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| BrowserError::DriverUnavailable(e.to_string()))?;

        // Spawn browser handler
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::trace!("CDP handler event error: {}", e);
                }
            }
        });

        Ok(Self { browser, handler })
    }

    async fn render(&self, url: &str) -> Result<String> {
        let fetch_failed = |e: chromiumoxide::error::CdpError| BrowserError::FetchFailed {
            url: url.to_string(),
            reason: e.to_string(),
        };

        let page = self
            .browser
            .new_page("about:blank")
            .await
            .map_err(fetch_failed)?;
        page.goto(url).await.map_err(fetch_failed)?;
        page.wait_for_navigation().await.map_err(fetch_failed)?;
        page.content().await.map_err(fetch_failed)
    }

    /// Shut the browser down. Failures are logged; the process is gone either way.
    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::warn!("Failed to close browser: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("Failed to reap browser process: {}", e);
        }
        self.handler.abort();
    }
}

/// Chromium-backed [`PageFetcher`].
///
/// Every fetch runs in a fresh browser session that is closed before the
/// fetch returns, on success, navigation failure and timeout alike.
#[derive(Debug, Clone)]
pub struct BrowserEngine {
    config: BrowserConfig,
}

impl BrowserEngine {
    /// Create an engine; no browser is started until the first fetch.
    #[must_use]
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }

    fn navigation_timeout(&self) -> Duration {
        Duration::from_secs(self.config.navigation_timeout_secs)
    }

    fn chrome_config(&self) -> Result<ChromeConfig> {
        let mut builder = ChromeConfig::builder()
            .no_sandbox()
            .window_size(self.config.window_width, self.config.window_height)
            .request_timeout(self.navigation_timeout());

        if !self.config.headless {
            builder = builder.with_head();
        }
        if let Some(path) = &self.config.chrome_executable {
            builder = builder.chrome_executable(path);
        }

        builder.build().map_err(BrowserError::DriverUnavailable)
    }
}

#[async_trait::async_trait]
impl PageFetcher for BrowserEngine {
    async fn fetch(&self, url: &str) -> Result<String> {
        let session = BrowserSession::launch(self.chrome_config()?).await?;
        tracing::debug!("Browser session started for {}", url);

        let timeout = self.navigation_timeout();
        let result = match tokio::time::timeout(timeout, session.render(url)).await {
            Ok(result) => result,
            Err(_) => Err(BrowserError::Timeout {
                url: url.to_string(),
                secs: self.config.navigation_timeout_secs,
            }),
        };

        session.close().await;
        tracing::debug!("Browser session closed for {}", url);

        result
    }
}
