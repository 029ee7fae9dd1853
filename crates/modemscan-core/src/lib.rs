//! modemscan Core - Foundation crate for the modem inventory scanner.
//!
//! This crate provides the shared record types and the runtime configuration
//! that the browser and scanner crates depend on.
//!
//! # Modules
//!
//! - [`config`] - Compiled defaults with environment variable overrides
//! - [`types`] - Device URLs, extracted device fields and spreadsheet rows
//!
//! # Example
//!
//! ```rust
//! use modemscan_core::{DeviceUrl, ScannerConfig};
//!
//! let config = ScannerConfig::default();
//! let device = DeviceUrl::from_candidate("192.168.8.100", &config.discovery);
//! assert_eq!(device.label(), "192.168.8.1");
//! assert_eq!(device.url(), "http://192.168.8.1/html/deviceinformation.html");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod types;

// Re-export commonly used types
pub use config::{BrowserConfig, DiscoveryConfig, OutputConfig, ScannerConfig};
pub use types::{DeviceInfo, DeviceRecord, DeviceUrl, RECORD_HEADERS};
