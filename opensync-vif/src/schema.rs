//! Database-side records: desired VIF config, observed VIF state, radio,
//! credential, Hotspot 2.0 profile, OSU provider and icon rows.
//!
//! Field names follow the OpenSync OVSDB schema so JSON rows can be fed in as-is.

use std::fmt;

use bitflags::bitflags;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An ordered string map (`["map", [[k, v], ...]]` in OVSDB terms).
///
/// Order is insertion order. Lookups return the first matching key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KvList(Vec<(String, String)>);

impl KvList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KvList {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl Serialize for KvList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for KvList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KvVisitor;

        impl<'de> Visitor<'de> for KvVisitor {
            type Value = KvList;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of strings")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<KvList, A::Error> {
                let mut out = Vec::new();
                while let Some((k, v)) = access.next_entry::<String, String>()? {
                    out.push((k, v));
                }
                Ok(KvList(out))
            }
        }

        deserializer.deserialize_map(KvVisitor)
    }
}

bitflags! {
    /// Which `VifConfig` fields are authoritative for one write.
    ///
    /// Security has no flag: it is encoded on every write.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct VifConfigFlags: u32 {
        const ENABLED = 1 << 0;
        const SSID = 1 << 1;
        const SSID_BROADCAST = 1 << 2;
        const AP_BRIDGE = 1 << 3;
        const UAPSD_ENABLE = 1 << 4;
        const FT_PSK = 1 << 5;
        const FT_MOBILITY_DOMAIN = 1 << 6;
        const BTM = 1 << 7;
        const BRIDGE = 1 << 8;
        const VLAN_ID = 1 << 9;
        const MAC_LIST_TYPE = 1 << 10;
        const CUSTOM_OPTIONS = 1 << 11;
        const CAPTIVE_PORTAL = 1 << 12;
        const CAPTIVE_ALLOWLIST = 1 << 13;
    }
}

impl VifConfigFlags {
    /// Parse a comma separated list of schema column names (`ssid,enabled`) or `all`.
    pub fn parse_list(list: &str) -> Result<Self, String> {
        let mut flags = Self::empty();
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            if name.eq_ignore_ascii_case("all") {
                flags |= Self::all();
                continue;
            }
            let flag = Self::from_name(&name.to_ascii_uppercase())
                .ok_or_else(|| format!("unknown VIF config field {name:?}"))?;
            flags |= flag;
        }
        Ok(flags)
    }
}

/// MAC filter policy. Schema spelling on one side, UCI `macfilter` on the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacFilter {
    None,
    Whitelist,
    Blacklist,
}

impl MacFilter {
    pub fn from_uci(value: &str) -> Option<Self> {
        match value {
            "disable" => Some(Self::None),
            "allow" => Some(Self::Whitelist),
            "deny" => Some(Self::Blacklist),
            _ => None,
        }
    }

    /// Unknown schema values mean no filtering.
    pub fn from_schema(value: &str) -> Self {
        match value {
            "whitelist" => Self::Whitelist,
            "blacklist" => Self::Blacklist,
            _ => Self::None,
        }
    }

    pub fn uci_name(self) -> &'static str {
        match self {
            Self::None => "disable",
            Self::Whitelist => "allow",
            Self::Blacklist => "deny",
        }
    }

    pub fn schema_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Whitelist => "whitelist",
            Self::Blacklist => "blacklist",
        }
    }
}

/// Desired configuration of one virtual interface (`Wifi_VIF_Config`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VifConfig {
    #[serde(rename = "_uuid", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub if_name: String,
    pub mode: String,
    pub enabled: bool,
    pub ssid: String,
    pub ssid_broadcast: String,
    pub ap_bridge: bool,
    pub uapsd_enable: bool,
    pub btm: i32,
    pub rrm: i32,
    pub ft_psk: i32,
    pub ft_mobility_domain: i32,
    pub group_rekey: i32,
    pub bridge: String,
    pub vlan_id: i32,
    pub min_hw_mode: String,
    pub mac_list_type: String,
    pub mac_list: Vec<String>,
    pub security: KvList,
    pub custom_options: KvList,
    pub captive_portal: KvList,
    pub captive_allowlist: Vec<String>,
}

/// Observed state of one virtual interface (`Wifi_VIF_State`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VifState {
    pub if_name: String,
    pub mode: String,
    pub state: String,
    pub enabled: bool,
    pub ssid: String,
    pub ssid_broadcast: String,
    pub ap_bridge: bool,
    pub uapsd_enable: bool,
    pub btm: i32,
    pub rrm: i32,
    pub ft_psk: i32,
    pub group_rekey: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bridge: Option<String>,
    pub vlan_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<i32>,
    pub min_hw_mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<String>,
    /// `None` when the store held a filter policy we do not recognise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_list_type: Option<String>,
    pub mac_list: Vec<String>,
    pub security: KvList,
    pub custom_options: KvList,
    pub captive_portal: KvList,
    pub captive_allowlist: Vec<String>,
}

impl Default for VifState {
    fn default() -> Self {
        Self {
            if_name: String::new(),
            mode: String::new(),
            state: String::new(),
            enabled: false,
            ssid: String::new(),
            ssid_broadcast: String::new(),
            ap_bridge: false,
            uapsd_enable: true,
            btm: 0,
            rrm: 1,
            ft_psk: 0,
            group_rekey: 0,
            bridge: None,
            vlan_id: 0,
            channel: None,
            min_hw_mode: String::new(),
            mac: None,
            mac_list_type: Some(MacFilter::None.schema_name().to_string()),
            mac_list: Vec::new(),
            security: KvList::new(),
            custom_options: KvList::new(),
            captive_portal: KvList::new(),
            captive_allowlist: Vec::new(),
        }
    }
}

/// The parent radio of a VIF (`Wifi_Radio_Config`), as far as the writer needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioConfig {
    pub if_name: String,
    pub channel: i32,
    pub freq_band: String,
}

/// Onboarding credential row (`Wifi_Credential_Config`). Accepted by the
/// writer for interface parity; not translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CredentialConfig {
    pub ssid: String,
    pub onboard_type: String,
    pub security: KvList,
}

/// Hotspot 2.0 network profile (`Hotspot20_Config`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotspot20Config {
    #[serde(rename = "_uuid", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub enable: bool,
    pub hessid: String,
    pub roaming_oi: Vec<String>,
    pub venue_name: Vec<String>,
    pub venue_url: Vec<String>,
    pub domain_name: Vec<String>,
    pub nai_realm: Vec<String>,
    pub network_auth_type: String,
    pub mcc_mnc: String,
    pub gas_addr3_behavior: i32,
    pub qos_map_set: String,
    pub osen: bool,
    pub internet: bool,
    pub esr: bool,
    pub asra: bool,
    pub uesa: bool,
    pub disable_dgaf: bool,
    pub anqp_domain_id: i32,
    pub deauth_request_timeout: i32,
    pub operating_class: i32,
    pub wan_metrics: String,
    pub operator_friendly_name: Vec<String>,
    /// `"<group>:<type>"`.
    pub venue_group_type: String,
    /// Icon row identifiers.
    pub operator_icons: Vec<String>,
    /// VIF row identifiers this profile applies to.
    pub vif_config: Vec<String>,
}

/// Online sign-up provider (`Hotspot20_OSU_Providers`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotspot20OsuProvider {
    #[serde(rename = "_uuid", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub osu_provider_name: String,
    pub osu_friendly_name: Vec<String>,
    pub service_description: Vec<String>,
    pub osu_nai: String,
    pub osu_nai2: String,
    pub server_uri: String,
    pub method_list: Vec<i32>,
    pub osu_icons: Vec<String>,
}

/// Operator / OSU icon (`Hotspot20_Icon_Config`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Hotspot20IconConfig {
    #[serde(rename = "_uuid", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub name: String,
    pub url: String,
    pub lang_code: String,
    pub height: i32,
    pub width: i32,
    pub img_type: String,
}
