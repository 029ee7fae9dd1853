use crate::error::{Result, ScanError};
use modemscan_core::DeviceInfo;
use scraper::{Html, Selector};
use std::sync::OnceLock;

/// Value cells of the device information table.
const VALUE_CELL_SELECTOR: &str = "td.info_value";

/// Position of each extracted field among the page's value cells.
///
/// Fields are matched by position only. A firmware that reorders the table
/// yields wrong values rather than an error, so this table is the single
/// place to update when a page layout changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLayout {
    pub model: usize,
    pub serial: usize,
    pub imei: usize,
    pub iccid: usize,
    pub phone: usize,
}

impl FieldLayout {
    /// `deviceinformation.html` layout. Cell 3 (IMSI) is not extracted.
    pub const STATUS_PAGE: Self = Self {
        model: 0,
        serial: 1,
        imei: 2,
        iccid: 4,
        phone: 5,
    };

    /// Minimum number of value cells the layout reads from.
    pub fn required_cells(&self) -> usize {
        [self.model, self.serial, self.imei, self.iccid, self.phone]
            .into_iter()
            .max()
            .map_or(0, |last| last + 1)
    }
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self::STATUS_PAGE
    }
}

fn value_cell_selector() -> &'static Selector {
    static SELECTOR: OnceLock<Selector> = OnceLock::new();
    SELECTOR.get_or_init(|| Selector::parse(VALUE_CELL_SELECTOR).expect("valid selector"))
}

/// Text of every value cell, in document order.
pub fn value_cells(markup: &str) -> Vec<String> {
    let document = Html::parse_document(markup);
    document
        .select(value_cell_selector())
        .map(|cell| cell.text().collect::<String>().trim().to_string())
        .collect()
}

/// Extract device fields using the status page layout.
pub fn extract(markup: &str) -> Result<DeviceInfo> {
    extract_with(markup, FieldLayout::STATUS_PAGE)
}

/// Extract device fields using an explicit layout.
pub fn extract_with(markup: &str, layout: FieldLayout) -> Result<DeviceInfo> {
    let mut cells = value_cells(markup);
    let expected = layout.required_cells();

    if cells.len() < expected {
        return Err(ScanError::MissingFields {
            expected,
            found: cells.len(),
        });
    }

    let mut take = |idx: usize| std::mem::take(&mut cells[idx]);
    Ok(DeviceInfo {
        model: take(layout.model),
        serial: take(layout.serial),
        imei: take(layout.imei),
        iccid: take(layout.iccid),
        phone: take(layout.phone),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_page(values: &[&str]) -> String {
        let rows: String = values
            .iter()
            .map(|v| {
                format!(
                    "<tr><td class=\"info_title\">label</td><td class=\"info_value\">{v}</td></tr>"
                )
            })
            .collect();
        format!("<html><body><table>{rows}</table></body></html>")
    }

    #[test]
    fn test_extract_skips_fourth_cell() {
        let html = status_page(&["E3372h", "G4P7S1", "861234", "IMSI", "8970199", "+79001234567"]);

        let info = extract(&html).expect("extract");
        assert_eq!(info.model, "E3372h");
        assert_eq!(info.serial, "G4P7S1");
        assert_eq!(info.imei, "861234");
        assert_eq!(info.iccid, "8970199");
        assert_eq!(info.phone, "+79001234567");
    }

    #[test]
    fn test_extract_trims_cell_text() {
        let html = status_page(&["  E3372h\n", "S", "I", "X", "C", " P "]);
        let info = extract(&html).expect("extract");
        assert_eq!(info.model, "E3372h");
        assert_eq!(info.phone, "P");
    }

    #[test]
    fn test_extract_ignores_extra_cells() {
        let html = status_page(&["M", "S", "I", "X", "C", "P", "firmware", "uptime"]);
        let info = extract(&html).expect("extract");
        assert_eq!(info.phone, "P");
    }

    #[test]
    fn test_extract_missing_fields() {
        let html = status_page(&["M", "S", "I", "X", "C"]);
        let err = extract(&html).expect_err("five cells are not enough");
        assert!(matches!(
            err,
            ScanError::MissingFields {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn test_extract_login_page() {
        let html = "<html><body><form id=\"login\"></form></body></html>";
        assert!(matches!(
            extract(html),
            Err(ScanError::MissingFields { found: 0, .. })
        ));
    }

    #[test]
    fn test_only_td_cells_count() {
        let html = r#"
            <div class="info_value">not a cell</div>
            <table>
                <tr><td class="info_value">M</td><td class="info_value">S</td></tr>
                <tr><td class="info_value">I</td><td class="info_value">X</td></tr>
                <tr><td class="info_value other">C</td><td class="info_value">P</td></tr>
            </table>
        "#;
        assert_eq!(value_cells(html), ["M", "S", "I", "X", "C", "P"]);
    }

    #[test]
    fn test_status_page_layout() {
        assert_eq!(FieldLayout::default().required_cells(), 6);
    }
}
