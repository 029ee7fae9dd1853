//! Runtime configuration for the scanner.
//!
//! The scanner takes no arguments and reads no configuration file. Every
//! setting has a compiled default; a few can be overridden from the
//! environment for field use.

use std::path::PathBuf;

/// Top-level scanner configuration.
#[derive(Debug, Clone, Default)]
pub struct ScannerConfig {
    /// Address discovery and URL building
    pub discovery: DiscoveryConfig,
    /// Browser automation settings
    pub browser: BrowserConfig,
    /// Log and spreadsheet locations
    pub output: OutputConfig,
}

impl ScannerConfig {
    /// Compiled defaults with environment variable overrides.
    ///
    /// Supports the following environment variables:
    /// - `MODEM_OUTPUT_DIR`: Directory for the log file and spreadsheet
    /// - `MODEM_HEADLESS`: Override browser headless mode (true/false)
    /// - `MODEM_NAV_TIMEOUT_SECS`: Override the navigation timeout
    /// - `MODEM_CHROME_PATH`: Explicit Chrome/Chromium executable
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = lookup("MODEM_OUTPUT_DIR") {
            if !val.is_empty() {
                tracing::debug!("Override output.dir from env: {}", val);
                config.output.dir = PathBuf::from(val);
            }
        }

        if let Some(val) = lookup("MODEM_HEADLESS") {
            match val.parse() {
                Ok(headless) => {
                    config.browser.headless = headless;
                    tracing::debug!("Override browser.headless from env: {}", headless);
                }
                Err(_) => tracing::debug!("Ignoring MODEM_HEADLESS={}", val),
            }
        }

        if let Some(val) = lookup("MODEM_NAV_TIMEOUT_SECS") {
            match val.parse() {
                Ok(secs) => {
                    config.browser.navigation_timeout_secs = secs;
                    tracing::debug!("Override browser.navigation_timeout_secs from env: {}", secs);
                }
                Err(_) => tracing::debug!("Ignoring MODEM_NAV_TIMEOUT_SECS={}", val),
            }
        }

        if let Some(val) = lookup("MODEM_CHROME_PATH") {
            if !val.is_empty() {
                tracing::debug!("Override browser.chrome_executable from env: {}", val);
                config.browser.chrome_executable = Some(PathBuf::from(val));
            }
        }

        config
    }
}

/// Address discovery settings.
#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Substring a local address must contain to be considered
    pub address_filter: String,
    /// URL scheme prefix
    pub scheme: String,
    /// Path of the device information page
    pub status_path: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            address_filter: "192.168".to_string(),
            scheme: "http://".to_string(),
            status_path: "/html/deviceinformation.html".to_string(),
        }
    }
}

/// Browser automation settings.
#[derive(Debug, Clone)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    pub headless: bool,
    /// Browser window width
    pub window_width: u32,
    /// Browser window height
    pub window_height: u32,
    /// Navigation timeout in seconds
    pub navigation_timeout_secs: u64,
    /// Chrome/Chromium binary; auto-detected when unset
    pub chrome_executable: Option<PathBuf>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            window_width: 1280,
            window_height: 800,
            navigation_timeout_secs: 30,
            chrome_executable: None,
        }
    }
}

/// Output file settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Directory receiving the log file and the spreadsheet
    pub dir: PathBuf,
    /// Log file name prefix; the run date and `.log` are appended
    pub log_prefix: String,
    /// Spreadsheet file name
    pub workbook_name: String,
    /// Title of the single worksheet
    pub sheet_name: String,
}

impl OutputConfig {
    /// Path of the log file for `date` (formatted `YYYY-MM-DD`).
    #[must_use]
    pub fn log_path(&self, date: &str) -> PathBuf {
        self.dir.join(format!("{}{}.log", self.log_prefix, date))
    }

    /// Path of the spreadsheet.
    #[must_use]
    pub fn workbook_path(&self) -> PathBuf {
        self.dir.join(&self.workbook_name)
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            log_prefix: "output-".to_string(),
            workbook_name: "modem_sheet.xlsx".to_string(),
            sheet_name: "Данные модемов".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ScannerConfig::default();
        assert_eq!(config.discovery.address_filter, "192.168");
        assert!(config.browser.headless);
        assert_eq!(config.browser.navigation_timeout_secs, 30);
        assert_eq!(config.output.workbook_name, "modem_sheet.xlsx");
        assert_eq!(config.output.sheet_name, "Данные модемов");
    }

    #[test]
    fn test_output_paths() {
        let output = OutputConfig {
            dir: PathBuf::from("/tmp/scan"),
            ..OutputConfig::default()
        };
        assert_eq!(
            output.log_path("2024-12-05"),
            PathBuf::from("/tmp/scan/output-2024-12-05.log")
        );
        assert_eq!(
            output.workbook_path(),
            PathBuf::from("/tmp/scan/modem_sheet.xlsx")
        );
    }

    #[test]
    fn test_env_overrides() {
        let config = ScannerConfig::from_lookup(lookup_from(&[
            ("MODEM_OUTPUT_DIR", "/var/lib/modems"),
            ("MODEM_HEADLESS", "false"),
            ("MODEM_NAV_TIMEOUT_SECS", "5"),
            ("MODEM_CHROME_PATH", "/usr/bin/chromium"),
        ]));

        assert_eq!(config.output.dir, PathBuf::from("/var/lib/modems"));
        assert!(!config.browser.headless);
        assert_eq!(config.browser.navigation_timeout_secs, 5);
        assert_eq!(
            config.browser.chrome_executable,
            Some(PathBuf::from("/usr/bin/chromium"))
        );
    }

    #[test]
    fn test_invalid_overrides_keep_defaults() {
        let config = ScannerConfig::from_lookup(lookup_from(&[
            ("MODEM_HEADLESS", "maybe"),
            ("MODEM_NAV_TIMEOUT_SECS", "soon"),
            ("MODEM_OUTPUT_DIR", ""),
        ]));

        assert!(config.browser.headless);
        assert_eq!(config.browser.navigation_timeout_secs, 30);
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert!(config.browser.chrome_executable.is_none());
    }
}
