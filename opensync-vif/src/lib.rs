//! OpenSync Wi-Fi VIF translation for OpenWrt.
//!
//! This library translates wireless virtual-interface configuration between
//! the OpenSync database schema (desired `Wifi_VIF_Config` rows, observed
//! `Wifi_VIF_State` rows, Hotspot 2.0 profiles) and the `wireless` UCI package
//! read by netifd/hostapd. Desired rows are flattened into `wifi-iface`
//! sections; observed state is read back from those sections and re-inflated
//! into typed records.
//!
//! # Architecture
//!
//! ## Tables & Codecs
//!
//! - [`attrs`]: typed option tables per section kind
//! - [`builder`]: owned accumulator for one section write
//! - [`security`]: crypto suite table, security map <-> options
//! - [`custom_options`]: rate limit, 802.11k, RTS and DTIM extras
//!
//! ## Translation
//!
//! - [`translator`]: entry points bound to a set of collaborators
//! - [`vif_state`]: section -> observed state (and rebuilt desired config)
//! - [`vif_config`]: desired config -> section, VLAN and portal side effects
//! - [`hotspot20`]: Hotspot 2.0 profiles and OSU providers
//! - [`icon`]: icon download and registration
//!
//! ## Collaborators
//!
//! - [`traits`]: the seams the translator talks through
//! - [`platform`]: UCI file store, sysfs, VLAN devices, JSON rows, HTTP
//! - [`config`]: TOML settings
//!
//! # Examples
//!
//! ```ignore
//! use opensync_vif::platform::{JsonLinesPublisher, JsonRecords, SysfsInterfaces, UciStore};
//! use opensync_vif::traits::ConfigStore;
//!
//! let mut store = UciStore::open("/etc/config");
//! let wireless = store.load("wireless")?;
//! let interfaces = SysfsInterfaces::new("/sys/class/net").with_radios(&wireless);
//! // ...build a Translator and call update_observed_state for each wifi-iface.
//! ```

pub mod attrs;
pub mod builder;
pub mod config;
pub mod custom_options;
pub mod error;
pub mod hotspot20;
pub mod icon;
pub mod path_guard;
pub mod platform;
pub mod report;
pub mod schema;
pub mod security;
pub mod traits;
pub mod translator;
pub mod vif_config;
pub mod vif_state;

#[cfg(test)]
mod fakes;
