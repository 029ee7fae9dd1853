use crate::error::Result;
use modemscan_core::{DeviceRecord, OutputConfig, RECORD_HEADERS};
use rust_xlsxwriter::{DocProperties, ExcelDateTime, Workbook};
use std::fs;

/// Creation date stamped into every workbook (year, month, day).
const WORKBOOK_CREATED: (u16, u8, u8) = (2000, 1, 1);

/// Destination for the end-of-run table.
pub trait TableSink: Send {
    /// Write all records at once, replacing any previous export.
    fn export(&mut self, records: &[DeviceRecord]) -> Result<()>;
}

/// Single-sheet `.xlsx` workbook.
///
/// The document creation date is a fixed constant rather than the current
/// time, so identical records always give identical bytes, whichever day the
/// run happens on.
#[derive(Debug, Clone)]
pub struct XlsxExporter {
    output: OutputConfig,
}

impl XlsxExporter {
    pub fn new(output: OutputConfig) -> Self {
        Self { output }
    }

    /// Build the workbook in memory.
    pub fn render(&self, records: &[DeviceRecord]) -> Result<Vec<u8>> {
        let (year, month, day) = WORKBOOK_CREATED;
        let created = ExcelDateTime::from_ymd(year, month, day)?;
        let properties = DocProperties::new().set_creation_datetime(&created);

        let mut workbook = Workbook::new();
        workbook.set_properties(&properties);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&self.output.sheet_name)?;
        worksheet.write_row(0, 0, RECORD_HEADERS)?;
        for (row, record) in (1u32..).zip(records) {
            worksheet.write_row(row, 0, record.columns())?;
        }

        Ok(workbook.save_to_buffer()?)
    }
}

impl TableSink for XlsxExporter {
    fn export(&mut self, records: &[DeviceRecord]) -> Result<()> {
        let path = self.output.workbook_path();
        let bytes = self.render(records)?;
        fs::write(&path, bytes)?;
        tracing::info!("Exported {} records to {}", records.len(), path.display());
        Ok(())
    }
}
