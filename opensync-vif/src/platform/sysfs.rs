use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;
use uci_core::Package;

use crate::traits::InterfaceQuery;
use crate::translator::KIND_WIFI_DEVICE;

const ZERO_MAC: &str = "00:00:00:00:00:00";

/// Interface queries answered from `/sys/class/net`, radio bands from the
/// `wifi-device` sections of the wireless package.
#[derive(Debug, Clone)]
pub struct SysfsInterfaces {
    root: PathBuf,
    bands: BTreeMap<String, String>,
}

impl SysfsInterfaces {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            bands: BTreeMap::new(),
        }
    }

    /// Record the band of every `wifi-device` in `wireless`.
    pub fn with_radios(mut self, wireless: &Package) -> Self {
        for radio in wireless.sections_of_kind(KIND_WIFI_DEVICE) {
            let band = radio
                .get_str("band")
                .and_then(band_label)
                .or_else(|| radio.get_str("hwmode").and_then(hwmode_band));
            match band {
                Some(band) => {
                    debug!("{}: band {band}", radio.name);
                    self.bands.insert(radio.name.clone(), band.to_string());
                }
                None => debug!("{}: no band configured", radio.name),
            }
        }
        self
    }

    fn read_attr(&self, ifname: &str, attr: &str) -> Option<String> {
        let raw = fs::read_to_string(self.root.join(ifname).join(attr)).ok()?;
        Some(raw.trim().to_string())
    }
}

fn band_label(band: &str) -> Option<&'static str> {
    match band.to_ascii_lowercase().as_str() {
        "2g" => Some("2.4G"),
        "5g" => Some("5G"),
        "6g" => Some("6G"),
        "60g" => Some("60G"),
        _ => None,
    }
}

fn hwmode_band(hwmode: &str) -> Option<&'static str> {
    match hwmode.to_ascii_lowercase().as_str() {
        "11a" | "11ac" | "11ax" => Some("5G"),
        "11b" | "11g" | "11n" => Some("2.4G"),
        "11ad" => Some("60G"),
        _ => None,
    }
}

impl InterfaceQuery for SysfsInterfaces {
    /// An interface is active when it exists and its operstate is not `down`.
    fn is_active(&self, ifname: &str) -> bool {
        self.read_attr(ifname, "operstate")
            .is_some_and(|state| state != "down")
    }

    fn hardware_address(&self, ifname: &str) -> Option<String> {
        self.read_attr(ifname, "address")
            .filter(|mac| !mac.is_empty() && mac != ZERO_MAC)
    }

    fn radio_band(&self, radio: &str) -> Option<String> {
        self.bands.get(radio).cloned()
    }
}
