//! Typed attribute tables for the UCI sections this crate reads and writes.
//!
//! UCI stores every option as text. Each translatable section kind has a fixed
//! table naming the options we care about and the type each one is read as, so
//! `"1"` can be a boolean in one place and a channel number in another. The
//! tables are also used on the write path to drop anything we do not own.

use std::collections::BTreeMap;

use tracing::debug;
use uci_core::{OptionValue, Section};

/// Declared type of a UCI option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrKind {
    String,
    Int32,
    Bool,
    Array,
}

/// One entry in an attribute table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: AttrKind,
}

const fn field(name: &'static str, kind: AttrKind) -> FieldSpec {
    FieldSpec { name, kind }
}

use AttrKind::{Array, Bool, Int32, String as Str};

/// Options of a `wifi-iface` section.
pub const WIFI_IFACE: &[FieldSpec] = &[
    field("device", Str),
    field("mode", Str),
    field("ifname", Str),
    field("index", Int32),
    field("ssid", Str),
    field("bssid", Str),
    field("channel", Int32),
    field("encryption", Str),
    field("key", Str),
    field("disabled", Bool),
    field("hidden", Bool),
    field("isolate", Bool),
    field("network", Str),
    field("auth_server", Str),
    field("auth_port", Str),
    field("auth_secret", Str),
    field("acct_server", Str),
    field("acct_port", Str),
    field("acct_secret", Str),
    field("ieee80211r", Bool),
    field("ieee80211w", Bool),
    field("mobility_domain", Str),
    field("ft_over_ds", Bool),
    field("ft_psk_generate_local", Bool),
    field("reassociation_deadline", Bool),
    field("uapsd", Bool),
    field("vlan_id", Int32),
    field("vid", Int32),
    field("macfilter", Str),
    field("maclist", Array),
    field("rlimit", Bool),
    field("urate", Str),
    field("drate", Str),
    field("curate", Str),
    field("cdrate", Str),
    field("ieee80211v", Bool),
    field("bss_transition", Bool),
    field("wpa_disable_eapol_key_retries", Bool),
    field("ieee80211k", Bool),
    field("rts_threshold", Str),
    field("dtim_period", Str),
    field("interworking", Bool),
    field("hs20", Bool),
    field("hessid", Str),
    field("roaming_consortium", Array),
    field("venue_name", Array),
    field("venue_group", Int32),
    field("venue_type", Int32),
    field("venue_url", Array),
    field("network_auth_type", Str),
    field("ipaddr_type_availability", Int32),
    field("domain_name", Str),
    field("anqp_3gpp_cell_net", Str),
    field("nai_realm", Array),
    field("gas_address3", Str),
    field("qos_map_set", Str),
    field("osen", Bool),
    field("internet", Bool),
    field("esr", Bool),
    field("asra", Bool),
    field("uesa", Bool),
    field("disable_dgaf", Bool),
    field("anqp_domain_id", Int32),
    field("hs20_deauth_req_timeout", Int32),
    field("hs20_oper_friendly_name", Array),
    field("hs20_operating_class", Str),
    field("hs20_wan_metrics", Str),
    field("operator_icon", Array),
];

/// Options of an `osu-provider` section.
pub const HS20_OSU_PROVIDER: &[FieldSpec] = &[
    field("osu_server_uri", Str),
    field("osu_nai", Str),
    field("osu_nai2", Str),
    field("osu_method_list", Str),
    field("osu_friendly_name", Array),
    field("service_description", Array),
    field("osu_icon", Array),
];

/// Options of an `hs20-icon` section.
pub const HS20_ICON: &[FieldSpec] = &[
    field("path", Str),
    field("width", Int32),
    field("height", Int32),
    field("lang", Str),
    field("type", Str),
];

/// Find a field by name in a table.
pub fn lookup(table: &[FieldSpec], name: &str) -> Option<FieldSpec> {
    table.iter().copied().find(|f| f.name == name)
}

/// A typed option value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    String(String),
    Int32(i32),
    Bool(bool),
    Array(Vec<String>),
}

impl AttrValue {
    pub fn kind(&self) -> AttrKind {
        match self {
            AttrValue::String(_) => AttrKind::String,
            AttrValue::Int32(_) => AttrKind::Int32,
            AttrValue::Bool(_) => AttrKind::Bool,
            AttrValue::Array(_) => AttrKind::Array,
        }
    }

    /// Render into the UCI option representation.
    pub fn to_option(&self) -> OptionValue {
        match self {
            AttrValue::String(v) => OptionValue::Single(v.clone()),
            AttrValue::Int32(v) => OptionValue::Single(v.to_string()),
            AttrValue::Bool(v) => OptionValue::Single(if *v { "1" } else { "0" }.to_string()),
            AttrValue::Array(items) => OptionValue::List(items.clone()),
        }
    }
}

/// UCI boolean spelling.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "on" | "true" | "enabled" => Some(true),
        "0" | "no" | "off" | "false" | "disabled" => Some(false),
        _ => None,
    }
}

/// A section's options, typed against an attribute table.
///
/// Options that are not in the table, or whose text does not fit the declared
/// type, are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    values: BTreeMap<&'static str, AttrValue>,
}

impl Attributes {
    /// Type every option of `section` listed in `table`.
    pub fn from_section(section: &Section, table: &'static [FieldSpec]) -> Self {
        let mut values = BTreeMap::new();
        for attr in table {
            let Some(raw) = section.get(attr.name) else {
                continue;
            };
            match convert(raw, attr.kind) {
                Some(value) => {
                    values.insert(attr.name, value);
                }
                None => debug!(
                    "{}: ignoring option {} that is not a valid {:?}",
                    section.name, attr.name, attr.kind
                ),
            }
        }
        Self { values }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.values.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.values.get(name) {
            Some(AttrValue::String(v)) => Some(v),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.values.get(name) {
            Some(AttrValue::Bool(v)) => Some(*v),
            _ => None,
        }
    }

    /// True only when the option is present and set.
    pub fn flag(&self, name: &str) -> bool {
        self.get_bool(name).unwrap_or(false)
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.values.get(name) {
            Some(AttrValue::Int32(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn get_array(&self, name: &str) -> Option<&[String]> {
        match self.values.get(name) {
            Some(AttrValue::Array(items)) => Some(items),
            _ => None,
        }
    }
}

fn convert(raw: &OptionValue, kind: AttrKind) -> Option<AttrValue> {
    match (kind, raw) {
        (AttrKind::String, OptionValue::Single(v)) => Some(AttrValue::String(v.clone())),
        (AttrKind::Int32, OptionValue::Single(v)) => v.trim().parse().ok().map(AttrValue::Int32),
        (AttrKind::Bool, OptionValue::Single(v)) => parse_bool(v).map(AttrValue::Bool),
        (AttrKind::Array, OptionValue::List(items)) => Some(AttrValue::Array(items.clone())),
        (AttrKind::Array, OptionValue::Single(v)) => Some(AttrValue::Array(
            v.split_whitespace().map(str::to_string).collect(),
        )),
        (_, OptionValue::List(_)) => None,
    }
}

#[cfg(test)]
mod tests {
    use uci_core::Section;

    use super::{lookup, AttrKind, AttrValue, Attributes, HS20_ICON, WIFI_IFACE};

    #[test]
    fn types_options_against_the_table() {
        let mut section = Section::new("wifi-iface", "wlan0");
        section.set("ssid", "Guest");
        section.set("hidden", "on");
        section.set("channel", "36");
        section.set("maclist", "aa:bb:cc:dd:ee:01 aa:bb:cc:dd:ee:02");
        section.set("not_in_table", "x");

        let attrs = Attributes::from_section(&section, WIFI_IFACE);
        assert_eq!(attrs.get_str("ssid"), Some("Guest"));
        assert_eq!(attrs.get_bool("hidden"), Some(true));
        assert_eq!(attrs.get_int("channel"), Some(36));
        assert_eq!(attrs.get_array("maclist").map(<[String]>::len), Some(2));
        assert!(!attrs.contains("not_in_table"));
    }

    #[test]
    fn drops_values_that_do_not_fit_their_kind() {
        let mut section = Section::new("wifi-iface", "wlan0");
        section.set("channel", "auto");
        section.set("disabled", "maybe");
        section.set_list("ssid", vec!["a".to_string(), "b".to_string()]);

        let attrs = Attributes::from_section(&section, WIFI_IFACE);
        assert!(!attrs.contains("channel"));
        assert!(!attrs.contains("disabled"));
        assert!(!attrs.contains("ssid"));
        assert!(!attrs.flag("disabled"));
    }

    #[test]
    fn renders_bools_as_digits() {
        assert_eq!(
            AttrValue::Bool(false).to_option().as_str(),
            Some("0")
        );
        assert_eq!(lookup(HS20_ICON, "width").map(|f| f.kind), Some(AttrKind::Int32));
    }
}
