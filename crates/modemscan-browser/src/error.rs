use thiserror::Error;

pub type Result<T> = std::result::Result<T, BrowserError>;

#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("browser unavailable: {0}")]
    DriverUnavailable(String),

    #[error("failed to fetch {url}: {reason}")]
    FetchFailed { url: String, reason: String },

    #[error("timeout after {secs}s fetching {url}")]
    Timeout { url: String, secs: u64 },
}

impl BrowserError {
    /// True when no browser session could be started at all.
    pub fn is_driver_unavailable(&self) -> bool {
        matches!(self, Self::DriverUnavailable(_))
    }
}
