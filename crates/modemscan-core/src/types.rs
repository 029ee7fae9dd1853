//! Shared types used across the scanner.
//!
//! A run moves through three shapes of data: the [`DeviceUrl`] built from a
//! local address, the [`DeviceInfo`] read from the device's status page, and the
//! [`DeviceRecord`] row that ends up in the log and the spreadsheet.

use crate::config::DiscoveryConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spreadsheet header, one entry per [`DeviceRecord`] column.
pub const RECORD_HEADERS: [&str; 6] = [
    "IP-адрес",
    "Модель",
    "Серийный номер",
    "IMEI",
    "ICCID/SIM",
    "Моб. номер",
];

/// Status-page location derived from one local candidate address.
///
/// The label is the candidate address with its last two characters removed.
/// On the networks this tool targets the host holds `x.x.x.100` and the modem
/// answers on `x.x.x.1`, so the truncation yields the modem's address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeviceUrl {
    label: String,
    url: String,
}

impl DeviceUrl {
    /// Build the device URL for a local candidate address.
    #[must_use]
    pub fn from_candidate(address: &str, config: &DiscoveryConfig) -> Self {
        let label = truncate_final_octet(address).to_string();
        let url = format!("{}{}{}", config.scheme, label, config.status_path);
        Self { label, url }
    }

    /// Address label shown in logs, console lines and the first spreadsheet column.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Full URL of the device status page.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for DeviceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url)
    }
}

/// Drop the last two characters; shorter input collapses to the empty string.
fn truncate_final_octet(address: &str) -> &str {
    match address.char_indices().rev().nth(1) {
        Some((idx, _)) => &address[..idx],
        None => "",
    }
}

/// Fields read from a device status page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    /// Device model
    pub model: String,
    /// Serial number
    pub serial: String,
    /// IMEI of the radio module
    pub imei: String,
    /// ICCID of the inserted SIM
    pub iccid: String,
    /// Subscriber phone number
    pub phone: String,
}

/// One successfully processed device: address label plus its five fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Address label of the device
    pub address: String,
    /// Fields read from the status page
    #[serde(flatten)]
    pub info: DeviceInfo,
}

impl DeviceRecord {
    /// Create a record for the device behind `address`.
    #[must_use]
    pub fn new(address: impl Into<String>, info: DeviceInfo) -> Self {
        Self {
            address: address.into(),
            info,
        }
    }

    /// Columns in [`RECORD_HEADERS`] order.
    #[must_use]
    pub fn columns(&self) -> [&str; 6] {
        [
            &self.address,
            &self.info.model,
            &self.info.serial,
            &self.info.imei,
            &self.info.iccid,
            &self.info.phone,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(tag: &str) -> DeviceInfo {
        DeviceInfo {
            model: format!("M{tag}"),
            serial: format!("S{tag}"),
            imei: format!("I{tag}"),
            iccid: format!("C{tag}"),
            phone: format!("P{tag}"),
        }
    }

    #[test]
    fn test_device_url_truncates_final_octet() {
        let config = DiscoveryConfig::default();
        let device = DeviceUrl::from_candidate("192.168.8.100", &config);
        assert_eq!(device.label(), "192.168.8.1");
        assert_eq!(
            device.url(),
            "http://192.168.8.1/html/deviceinformation.html"
        );
    }

    #[test]
    fn test_device_url_keeps_quirk_for_short_octets() {
        let config = DiscoveryConfig::default();
        assert_eq!(
            DeviceUrl::from_candidate("192.168.1.1", &config).label(),
            "192.168.1"
        );
        assert_eq!(
            DeviceUrl::from_candidate("192.168.1.50", &config).label(),
            "192.168.1."
        );
    }

    #[test]
    fn test_truncate_short_input() {
        assert_eq!(truncate_final_octet("ab"), "");
        assert_eq!(truncate_final_octet("a"), "");
        assert_eq!(truncate_final_octet(""), "");
        assert_eq!(truncate_final_octet("abc"), "a");
    }

    #[test]
    fn test_record_columns_order() {
        let record = DeviceRecord::new("192.168.8.1", info("1"));
        assert_eq!(
            record.columns(),
            ["192.168.8.1", "M1", "S1", "I1", "C1", "P1"]
        );
        assert_eq!(record.columns().len(), RECORD_HEADERS.len());
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = DeviceRecord::new("192.168.8.1", info("1"));
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["address"], "192.168.8.1");
        assert_eq!(json["imei"], "I1");
    }
}
