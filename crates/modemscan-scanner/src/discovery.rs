//! Local address discovery.
//!
//! Modems attached to the host each bring up their own `192.168.x.0/24`
//! network, so every matching local address points at one modem. Matching is
//! a plain substring test on the textual address.

use crate::error::{Result, ScanError};
use modemscan_core::{DeviceUrl, DiscoveryConfig};
use network_interface::{Addr, NetworkInterface, NetworkInterfaceConfig};

/// Source of the addresses bound to this host.
pub trait AddressSource: Send + Sync {
    /// Addresses in the order the system reports them.
    fn local_addresses(&self) -> Vec<String>;
}

/// Addresses of the host's network interfaces.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalInterfaces;

impl AddressSource for LocalInterfaces {
    fn local_addresses(&self) -> Vec<String> {
        let interfaces = match NetworkInterface::show() {
            Ok(interfaces) => interfaces,
            Err(e) => {
                tracing::error!("Failed to enumerate network interfaces: {}", e);
                return Vec::new();
            }
        };

        interfaces
            .into_iter()
            .flat_map(|iface| {
                tracing::trace!("Interface {} has {} addresses", iface.name, iface.addr.len());
                iface.addr.into_iter()
            })
            .map(|addr| match addr {
                Addr::V4(v4) => v4.ip.to_string(),
                Addr::V6(v6) => v6.ip.to_string(),
            })
            .collect()
    }
}

/// Fixed address list, for tests and for callers embedding the scanner.
#[derive(Debug, Default, Clone)]
pub struct StaticAddresses(pub Vec<String>);

impl AddressSource for StaticAddresses {
    fn local_addresses(&self) -> Vec<String> {
        self.0.clone()
    }
}

/// Build the device URLs for every local address matching the filter.
///
/// The first URL belongs to the router and is kept in the list; callers skip
/// it by position.
pub fn discover(source: &dyn AddressSource, config: &DiscoveryConfig) -> Result<Vec<DeviceUrl>> {
    let devices: Vec<DeviceUrl> = source
        .local_addresses()
        .iter()
        .filter(|address| address.contains(config.address_filter.as_str()))
        .map(|address| DeviceUrl::from_candidate(address, config))
        .collect();

    if devices.is_empty() {
        return Err(ScanError::NoCandidateAddresses {
            filter: config.address_filter.clone(),
        });
    }

    tracing::info!("Discovered {} candidate addresses", devices.len());
    Ok(devices)
}
