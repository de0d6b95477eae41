//! Security settings: schema `security` map <-> `wifi-iface` crypto options.

use tracing::debug;

use crate::attrs::Attributes;
use crate::builder::SectionBuilder;
use crate::schema::KvList;

pub const KEY_ENCRYPTION: &str = "encryption";
pub const KEY_MODE: &str = "mode";
pub const KEY_KEY: &str = "key";
pub const KEY_RADIUS_SERVER_IP: &str = "radius_server_ip";
pub const KEY_RADIUS_SERVER_PORT: &str = "radius_server_port";
pub const KEY_RADIUS_SERVER_SECRET: &str = "radius_server_secret";
pub const KEY_RADIUS_ACCT_IP: &str = "radius_acct_ip";
pub const KEY_RADIUS_ACCT_PORT: &str = "radius_acct_port";
pub const KEY_RADIUS_ACCT_SECRET: &str = "radius_acct_secret";

const OPEN: &str = "OPEN";
/// `encryption` value of an unsecured `wifi-iface`.
pub const UCI_OPEN: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encryption {
    Psk,
    Eap,
}

impl Encryption {
    pub fn schema_name(self) -> &'static str {
        match self {
            Encryption::Psk => "WPA-PSK",
            Encryption::Eap => "WPA-EAP",
        }
    }

    pub fn from_schema(value: &str) -> Option<Self> {
        match value {
            "WPA-PSK" => Some(Encryption::Psk),
            "WPA-EAP" => Some(Encryption::Eap),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityMode {
    Wpa1,
    Wpa2,
    Mixed,
}

impl SecurityMode {
    pub fn schema_name(self) -> &'static str {
        match self {
            SecurityMode::Wpa1 => "1",
            SecurityMode::Wpa2 => "2",
            SecurityMode::Mixed => "mixed",
        }
    }

    pub fn from_schema(value: &str) -> Option<Self> {
        match value {
            "1" => Some(SecurityMode::Wpa1),
            "2" => Some(SecurityMode::Wpa2),
            "mixed" => Some(SecurityMode::Mixed),
            _ => None,
        }
    }
}

/// One supported crypto suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CryptoEntry {
    pub uci: &'static str,
    pub encryption: Encryption,
    pub mode: SecurityMode,
    pub enterprise: bool,
}

const fn entry(
    uci: &'static str,
    encryption: Encryption,
    mode: SecurityMode,
    enterprise: bool,
) -> CryptoEntry {
    CryptoEntry {
        uci,
        encryption,
        mode,
        enterprise,
    }
}

pub const CRYPTO_TABLE: &[CryptoEntry] = &[
    entry("psk", Encryption::Psk, SecurityMode::Wpa1, false),
    entry("psk2", Encryption::Psk, SecurityMode::Wpa2, false),
    entry("psk-mixed", Encryption::Psk, SecurityMode::Mixed, false),
    entry("wpa", Encryption::Eap, SecurityMode::Wpa1, true),
    entry("wpa2", Encryption::Eap, SecurityMode::Wpa2, true),
    entry("wpa-mixed", Encryption::Eap, SecurityMode::Mixed, true),
];

pub fn find_by_uci(uci: &str) -> Option<&'static CryptoEntry> {
    CRYPTO_TABLE.iter().find(|e| e.uci == uci)
}

pub fn find_by_schema(encryption: Encryption, mode: SecurityMode) -> Option<&'static CryptoEntry> {
    CRYPTO_TABLE
        .iter()
        .find(|e| e.encryption == encryption && e.mode == mode)
}

fn open() -> KvList {
    let mut list = KvList::new();
    list.push(KEY_ENCRYPTION, OPEN);
    list
}

/// Rebuild the schema security map from a `wifi-iface`'s options.
///
/// Anything incomplete is reported as an open network.
pub fn decode(attrs: &Attributes) -> KvList {
    let Some(entry) = attrs
        .get_str("encryption")
        .filter(|e| *e != UCI_OPEN)
        .and_then(find_by_uci)
    else {
        return open();
    };

    let mut list = KvList::new();
    if entry.enterprise {
        let (Some(server), Some(port), Some(secret)) = (
            attrs.get_str("auth_server"),
            attrs.get_str("auth_port"),
            attrs.get_str("auth_secret"),
        ) else {
            debug!("{}: incomplete RADIUS settings, reporting open", entry.uci);
            return open();
        };
        list.push(KEY_ENCRYPTION, entry.encryption.schema_name());
        list.push(KEY_MODE, entry.mode.schema_name());
        list.push(KEY_RADIUS_SERVER_IP, server);
        list.push(KEY_RADIUS_SERVER_PORT, port);
        list.push(KEY_RADIUS_SERVER_SECRET, secret);

        if let (Some(server), Some(port), Some(secret)) = (
            attrs.get_str("acct_server"),
            attrs.get_str("acct_port"),
            attrs.get_str("acct_secret"),
        ) {
            list.push(KEY_RADIUS_ACCT_IP, server);
            list.push(KEY_RADIUS_ACCT_PORT, port);
            list.push(KEY_RADIUS_ACCT_SECRET, secret);
        }
    } else {
        let Some(key) = attrs.get_str("key") else {
            return open();
        };
        list.push(KEY_ENCRYPTION, entry.encryption.schema_name());
        list.push(KEY_MODE, entry.mode.schema_name());
        list.push(KEY_KEY, key);
    }
    list
}

fn encode_open(builder: &mut SectionBuilder) {
    builder.add_string("encryption", UCI_OPEN);
    builder.add_string("key", "");
    builder.add_bool("ieee80211w", false);
}

/// Write the crypto options for a schema security map.
///
/// With `legacy_open_fallthrough` the open options are appended after a
/// matched suite as well, which leaves the interface open once written.
pub fn encode(security: &KvList, builder: &mut SectionBuilder, legacy_open_fallthrough: bool) {
    let encryption = security.get(KEY_ENCRYPTION);
    let mode = security.get(KEY_MODE);

    let matched = match (encryption, mode) {
        (Some(enc), Some(mode)) if enc != OPEN => Encryption::from_schema(enc)
            .zip(SecurityMode::from_schema(mode))
            .and_then(|(enc, mode)| find_by_schema(enc, mode)),
        _ => None,
    };

    let Some(entry) = matched else {
        if let Some(enc) = encryption.filter(|e| *e != OPEN) {
            debug!("unsupported security {enc}/{}, writing open", mode.unwrap_or("-"));
        }
        encode_open(builder);
        return;
    };

    builder.add_string("encryption", entry.uci);
    builder.add_bool("ieee80211w", true);
    if entry.enterprise {
        let field = |key: &str| security.get(key).unwrap_or_default().to_string();
        builder.add_string("auth_server", field(KEY_RADIUS_SERVER_IP));
        builder.add_string("auth_port", field(KEY_RADIUS_SERVER_PORT));
        builder.add_string("auth_secret", field(KEY_RADIUS_SERVER_SECRET));
        builder.add_string("acct_server", field(KEY_RADIUS_ACCT_IP));
        builder.add_string("acct_port", field(KEY_RADIUS_ACCT_PORT));
        builder.add_string("acct_secret", field(KEY_RADIUS_ACCT_SECRET));
    } else {
        builder.add_string("key", security.get(KEY_KEY).unwrap_or_default());
    }

    if legacy_open_fallthrough {
        encode_open(builder);
    }
}
