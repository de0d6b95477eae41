use std::path::PathBuf;

use crate::traits::{
    CaptivePortal, ConfigStore, DhcpAllowlist, FileTransport, InterfaceQuery, Publisher,
    RecordLookup, VlanControl,
};

/// Package holding every section this crate writes.
pub const WIRELESS: &str = "wireless";
pub const KIND_WIFI_IFACE: &str = "wifi-iface";
pub const KIND_WIFI_DEVICE: &str = "wifi-device";
pub const KIND_OSU_PROVIDER: &str = "osu-provider";
pub const KIND_HS20_ICON: &str = "hs20-icon";

/// Behaviour switches that are not part of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Append the open security options after a matched suite.
    pub legacy_open_fallthrough: bool,
    /// Directory downloaded icons are stored in.
    pub icon_dir: PathBuf,
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self {
            legacy_open_fallthrough: false,
            icon_dir: PathBuf::from("/tmp"),
        }
    }
}

/// Entry points of the translation layer, bound to one set of collaborators.
///
/// Methods live next to the code they drive: [`crate::vif_state`],
/// [`crate::vif_config`], [`crate::hotspot20`] and [`crate::icon`].
pub struct Translator<'a> {
    pub store: &'a mut dyn ConfigStore,
    pub interfaces: &'a dyn InterfaceQuery,
    pub vlan: &'a mut dyn VlanControl,
    pub records: &'a dyn RecordLookup,
    pub captive: &'a mut dyn CaptivePortal,
    pub allowlist: &'a mut dyn DhcpAllowlist,
    pub publisher: &'a mut dyn Publisher,
    pub transport: &'a dyn FileTransport,
    pub options: TranslateOptions,
}
