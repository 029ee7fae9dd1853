//! Scan orchestrator for one inventory run.
//!
//! Devices are processed strictly one after another: discover, then for each
//! address fetch, extract and record, then export the table once. A failing
//! device is reported and skipped; only discovery and export can end the run
//! with an error.

use crate::discovery::{self, AddressSource};
use crate::error::{Result, ScanError};
use crate::export::TableSink;
use crate::parser;
use crate::report::{Progress, ProgressReporter};
use crate::sink::{LogSink, ResultSink};
use modemscan_browser::PageFetcher;
use modemscan_core::{DeviceRecord, DeviceUrl, DiscoveryConfig};
use std::sync::Arc;

/// Position of the router in the discovered address list.
pub const ROUTER_INDEX: usize = 0;

/// What happened to one discovered address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceOutcome {
    /// Router slot, never fetched
    Skipped,
    /// Fields logged and kept for export
    Recorded,
    /// Browser could not start or the page did not load
    FetchFailed(String),
    /// Page loaded but fields could not be extracted or logged
    ExtractFailed(String),
}

/// Outcome for one address, with its list position and label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressOutcome {
    /// Position in the discovered list; also the index shown on the console
    pub index: usize,
    /// Address label of the device
    pub label: String,
    /// What happened
    pub outcome: DeviceOutcome,
}

/// Result of a completed run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// One entry per discovered address, in discovery order
    pub outcomes: Vec<AddressOutcome>,
    /// Exported rows, in processing order
    pub records: Vec<DeviceRecord>,
}

impl RunSummary {
    /// Devices handed to the fetcher.
    #[must_use]
    pub fn attempted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.outcome != DeviceOutcome::Skipped)
            .count()
    }

    /// Devices whose fetch, extraction or logging failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.attempted() - self.records.len()
    }
}

/// Sequences discovery, per-device processing and export.
pub struct ScanOrchestrator {
    discovery: DiscoveryConfig,
    addresses: Box<dyn AddressSource>,
    fetcher: Arc<dyn PageFetcher>,
    sink: ResultSink,
    table: Box<dyn TableSink>,
    reporter: Box<dyn ProgressReporter>,
}

impl ScanOrchestrator {
    /// Create an orchestrator from its collaborators.
    #[must_use]
    pub fn new(
        discovery: DiscoveryConfig,
        addresses: Box<dyn AddressSource>,
        fetcher: Arc<dyn PageFetcher>,
        log: Box<dyn LogSink>,
        table: Box<dyn TableSink>,
        reporter: Box<dyn ProgressReporter>,
    ) -> Self {
        Self {
            discovery,
            addresses,
            fetcher,
            sink: ResultSink::new(log),
            table,
            reporter,
        }
    }

    /// Run the whole pipeline once.
    ///
    /// Fails with `NoCandidateAddresses` before any fetch when no local
    /// address matches, or with the export error if the table cannot be
    /// written. Per-device failures never fail the run.
    pub async fn run(mut self) -> Result<RunSummary> {
        let devices = match discovery::discover(self.addresses.as_ref(), &self.discovery) {
            Ok(devices) => devices,
            Err(e) => {
                self.reporter.report(&Progress::NoAddresses);
                return Err(e);
            }
        };

        // The router still counts as discovered; the message excludes it.
        self.reporter
            .report(&Progress::AddressesFound(devices.len() - 1));

        let mut outcomes = Vec::with_capacity(devices.len());
        for (index, device) in devices.iter().enumerate() {
            let outcome = if index == ROUTER_INDEX {
                tracing::debug!("Skipping router at {}", device.label());
                DeviceOutcome::Skipped
            } else {
                self.process_device(index, device).await
            };

            outcomes.push(AddressOutcome {
                index,
                label: device.label().to_string(),
                outcome,
            });
        }

        let records = self.sink.into_records();
        self.table.export(&records)?;

        let summary = RunSummary { outcomes, records };
        tracing::info!(
            "Run complete: {} attempted, {} recorded, {} failed",
            summary.attempted(),
            summary.records.len(),
            summary.failed()
        );
        Ok(summary)
    }

    async fn process_device(&mut self, index: usize, device: &DeviceUrl) -> DeviceOutcome {
        let label = device.label().to_string();

        let outcome = match self.fetch_and_record(device).await {
            Ok(()) => {
                self.reporter.report(&Progress::DeviceSucceeded {
                    index,
                    label: label.clone(),
                });
                return DeviceOutcome::Recorded;
            }
            Err(ScanError::Browser(e)) => {
                if e.is_driver_unavailable() {
                    self.reporter.report(&Progress::DriverUnavailable);
                }
                DeviceOutcome::FetchFailed(e.to_string())
            }
            Err(e) => DeviceOutcome::ExtractFailed(e.to_string()),
        };

        tracing::warn!("Device {} at {} failed: {:?}", index, label, outcome);
        self.reporter
            .report(&Progress::DeviceFailed { index, label });
        outcome
    }

    async fn fetch_and_record(&mut self, device: &DeviceUrl) -> Result<()> {
        let markup = self.fetcher.fetch(device.url()).await?;
        let info = parser::extract(&markup)?;
        self.sink.record(device.label(), info)
    }
}
