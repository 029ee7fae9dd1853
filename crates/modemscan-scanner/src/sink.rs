//! Per-device result recording.
//!
//! Each processed device is written to the day's log file as soon as it is
//! read, and kept in memory for the spreadsheet written at the end of the run.

use crate::error::Result;
use modemscan_core::{DeviceInfo, DeviceRecord, OutputConfig};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;

/// Destination for human-readable device blocks.
pub trait LogSink: Send {
    /// Append one device block.
    fn append(&mut self, record: &DeviceRecord) -> io::Result<()>;
}

/// Render the log block for one device, trailing blank line included.
pub fn format_block(record: &DeviceRecord) -> String {
    let info = &record.info;
    format!(
        "{}:\nМодель: {}\nСерийный номер: {}\nIMEI: {}\nICCID/SIM: {}\nМоб. номер: {}\n\n",
        record.address, info.model, info.serial, info.imei, info.iccid, info.phone
    )
}

/// Append-only log file named after the current local date.
#[derive(Debug, Clone)]
pub struct DailyLogFile {
    output: OutputConfig,
}

impl DailyLogFile {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Log file receiving blocks written now.
    pub fn current_path(&self) -> PathBuf {
        let date = chrono::Local::now().format("%Y-%m-%d").to_string();
        self.output.log_path(&date)
    }
}

impl LogSink for DailyLogFile {
    fn append(&mut self, record: &DeviceRecord) -> io::Result<()> {
        let path = self.current_path();
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        file.write_all(format_block(record).as_bytes())?;
        tracing::debug!("Appended {} to {}", record.address, path.display());
        Ok(())
    }
}

/// Log writer plus the in-memory result collection of one run.
pub struct ResultSink {
    log: Box<dyn LogSink>,
    records: Vec<DeviceRecord>,
}

impl ResultSink {
    pub fn new(log: Box<dyn LogSink>) -> Self {
        Self {
            log,
            records: Vec::new(),
        }
    }

    /// Log the device and keep its row. Nothing is kept if the log write fails.
    pub fn record(&mut self, address: &str, info: DeviceInfo) -> Result<()> {
        let record = DeviceRecord::new(address, info);
        self.log.append(&record)?;
        self.records.push(record);
        Ok(())
    }

    pub fn records(&self) -> &[DeviceRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DeviceRecord> {
        self.records
    }
}
