//! modemscan Scanner - Modem inventory pipeline.
//!
//! Finds the modems attached to this host through its `192.168.*` addresses,
//! renders each modem's device information page, reads model, serial, IMEI,
//! ICCID and phone number from it, and records the results in a dated log
//! file and an `.xlsx` table.
//!
//! # Example
//!
//! ```rust,ignore
//! use modemscan_scanner::{
//!     ConsoleReporter, DailyLogFile, LocalInterfaces, ScanOrchestrator, XlsxExporter,
//! };
//! use std::sync::Arc;
//!
//! let summary = ScanOrchestrator::new(
//!     config.discovery.clone(),
//!     Box::new(LocalInterfaces),
//!     Arc::new(BrowserEngine::new(config.browser.clone())),
//!     Box::new(DailyLogFile::new(config.output.clone())),
//!     Box::new(XlsxExporter::new(config.output.clone())),
//!     Box::new(ConsoleReporter),
//! )
//! .run()
//! .await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

#[allow(missing_docs)]
pub mod discovery;
#[allow(missing_docs)]
pub mod error;
#[allow(missing_docs)]
pub mod export;
pub mod orchestrator;
#[allow(missing_docs)]
pub mod parser;
#[allow(missing_docs)]
pub mod report;
#[allow(missing_docs)]
pub mod sink;

// Re-export commonly used types
pub use discovery::{discover, AddressSource, LocalInterfaces, StaticAddresses};
pub use error::{Result, ScanError};
pub use export::{TableSink, XlsxExporter};
pub use orchestrator::{AddressOutcome, DeviceOutcome, RunSummary, ScanOrchestrator};
pub use parser::{extract, FieldLayout};
pub use report::{ConsoleReporter, Progress, ProgressReporter};
pub use sink::{DailyLogFile, LogSink, ResultSink};
