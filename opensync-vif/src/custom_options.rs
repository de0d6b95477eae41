//! Vendor extras carried in the schema `custom_options` map.

use crate::attrs::{AttrValue, Attributes};
use crate::builder::SectionBuilder;
use crate::schema::KvList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomOption {
    RateLimitEnable,
    SsidDownlinkLimit,
    SsidUplinkLimit,
    ClientDownlinkLimit,
    ClientUplinkLimit,
    Ieee80211k,
    RtsThreshold,
    DtimPeriod,
}

impl CustomOption {
    /// Table order. Decoding appends in this order.
    pub const ALL: [CustomOption; 8] = [
        CustomOption::RateLimitEnable,
        CustomOption::SsidDownlinkLimit,
        CustomOption::SsidUplinkLimit,
        CustomOption::ClientDownlinkLimit,
        CustomOption::ClientUplinkLimit,
        CustomOption::Ieee80211k,
        CustomOption::RtsThreshold,
        CustomOption::DtimPeriod,
    ];

    /// Key in the schema map.
    pub fn schema_name(self) -> &'static str {
        match self {
            CustomOption::RateLimitEnable => "rate_limit_en",
            CustomOption::SsidDownlinkLimit => "ssid_dl_limit",
            CustomOption::SsidUplinkLimit => "ssid_ul_limit",
            CustomOption::ClientDownlinkLimit => "client_dl_limit",
            CustomOption::ClientUplinkLimit => "client_ul_limit",
            CustomOption::Ieee80211k => "ieee80211k",
            CustomOption::RtsThreshold => "rts_threshold",
            CustomOption::DtimPeriod => "dtim_period",
        }
    }

    /// `wifi-iface` option name.
    pub fn uci_name(self) -> &'static str {
        match self {
            CustomOption::RateLimitEnable => "rlimit",
            CustomOption::SsidDownlinkLimit => "drate",
            CustomOption::SsidUplinkLimit => "urate",
            CustomOption::ClientDownlinkLimit => "cdrate",
            CustomOption::ClientUplinkLimit => "curate",
            CustomOption::Ieee80211k => "ieee80211k",
            CustomOption::RtsThreshold => "rts_threshold",
            CustomOption::DtimPeriod => "dtim_period",
        }
    }

    pub fn is_bool(self) -> bool {
        matches!(self, CustomOption::RateLimitEnable | CustomOption::Ieee80211k)
    }
}

/// Collect the custom options present on a `wifi-iface`.
pub fn decode(attrs: &Attributes) -> KvList {
    let mut list = KvList::new();
    for option in CustomOption::ALL {
        match attrs.get(option.uci_name()) {
            Some(AttrValue::Bool(v)) => list.push(option.schema_name(), if *v { "1" } else { "0" }),
            Some(AttrValue::String(v)) => list.push(option.schema_name(), v.as_str()),
            _ => {}
        }
    }
    list
}

/// Write every custom option. Missing values are written as `"0"`; boolean
/// options that are not `"1"` or `"0"` are skipped.
pub fn encode(options: &KvList, builder: &mut SectionBuilder) {
    for option in CustomOption::ALL {
        let value = options.get(option.schema_name()).unwrap_or("0");
        if option.is_bool() {
            match value {
                "1" => builder.add_bool(option.uci_name(), true),
                "0" => builder.add_bool(option.uci_name(), false),
                _ => {}
            }
        } else {
            builder.add_string(option.uci_name(), value);
        }
    }
}
