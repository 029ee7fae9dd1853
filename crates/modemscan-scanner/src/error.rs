use modemscan_browser::BrowserError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("No local address contains \"{filter}\"")]
    NoCandidateAddresses { filter: String },

    #[error("Status page has {found} value cells, at least {expected} required")]
    MissingFields { expected: usize, found: usize },

    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] rust_xlsxwriter::XlsxError),
}

pub type Result<T> = std::result::Result<T, ScanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display() {
        let err = ScanError::MissingFields {
            expected: 6,
            found: 4,
        };
        assert_eq!(
            err.to_string(),
            "Status page has 4 value cells, at least 6 required"
        );
    }

    #[test]
    fn test_from_browser_error() {
        let err: ScanError = BrowserError::DriverUnavailable("no chrome".to_string()).into();
        assert!(matches!(err, ScanError::Browser(_)));
    }
}
