//! Desired VIF config -> `wifi-iface` section, plus interface removal.

use tracing::{info, warn};

use crate::attrs::{AttrValue, WIFI_IFACE};
use crate::builder::SectionBuilder;
use crate::schema::{CredentialConfig, MacFilter, RadioConfig, VifConfig, VifConfigFlags};
use crate::translator::{Translator, KIND_WIFI_IFACE, WIRELESS};
use crate::{custom_options, security};

/// VLAN ids up to this value are carried untagged.
pub const MAX_UNTAGGED_VLAN: i32 = 2;

/// Section attributes for a desired config.
///
/// Returns the builder and the VLAN tag to attach (0 for none).
pub fn build_vif_section(
    vconf: &VifConfig,
    rconf: &RadioConfig,
    changed: VifConfigFlags,
    legacy_open_fallthrough: bool,
) -> (SectionBuilder, i32) {
    let mut b = SectionBuilder::new(WIFI_IFACE);
    let mut vid = 0;

    b.add_string("ifname", vconf.if_name.as_str());
    b.add_string("device", rconf.if_name.as_str());
    b.add_string("mode", "ap");

    if changed.contains(VifConfigFlags::ENABLED) {
        b.add_bool("disabled", !vconf.enabled);
    }
    if changed.contains(VifConfigFlags::SSID) {
        b.add_string("ssid", vconf.ssid.as_str());
    }
    if changed.contains(VifConfigFlags::SSID_BROADCAST) {
        b.add_bool("hidden", vconf.ssid_broadcast == "disabled");
    }
    if changed.contains(VifConfigFlags::AP_BRIDGE) {
        b.add_bool("isolate", !vconf.ap_bridge);
    }
    if changed.contains(VifConfigFlags::UAPSD_ENABLE) {
        b.add_bool("uapsd", vconf.uapsd_enable);
    }

    if changed.intersects(VifConfigFlags::FT_PSK | VifConfigFlags::FT_MOBILITY_DOMAIN) {
        if vconf.ft_psk != 0 && vconf.ft_mobility_domain != 0 {
            b.add_bool("ieee80211r", true);
            // Only the low 16 bits form a mobility domain.
            b.add_hex16("mobility_domain", vconf.ft_mobility_domain as u16);
            b.add_bool("ft_psk_generate_local", true);
            b.add_bool("ft_over_ds", false);
            b.add_bool("reassociation_deadline", true);
        } else {
            b.add_bool("ieee80211r", false);
        }
    }

    if changed.contains(VifConfigFlags::BTM) {
        b.add_bool("ieee80211v", vconf.btm != 0);
        b.add_bool("bss_transition", vconf.btm != 0);
    }
    if changed.contains(VifConfigFlags::BRIDGE) {
        b.add_string("network", vconf.bridge.as_str());
    }
    if changed.contains(VifConfigFlags::VLAN_ID) {
        b.add_int("vlan_id", vconf.vlan_id);
        if vconf.vlan_id > MAX_UNTAGGED_VLAN {
            vid = vconf.vlan_id;
        }
        b.add_int("vid", vid);
    }
    if changed.contains(VifConfigFlags::MAC_LIST_TYPE) {
        let filter = MacFilter::from_schema(&vconf.mac_list_type);
        b.add_string("macfilter", filter.uci_name());
        b.add_array("maclist", vconf.mac_list.iter().map(String::as_str));
    }

    b.add_bool("wpa_disable_eapol_key_retries", true);
    b.add_int("channel", rconf.channel);

    security::encode(&vconf.security, &mut b, legacy_open_fallthrough);
    if changed.contains(VifConfigFlags::CUSTOM_OPTIONS) {
        custom_options::encode(&vconf.custom_options, &mut b);
    }

    (b, vid)
}

impl Translator<'_> {
    /// Write a desired VIF config into the store and drive VLAN, captive
    /// portal and allowlist side effects.
    ///
    /// Credential rows are accepted but not translated.
    pub fn apply_desired_config(
        &mut self,
        vconf: &VifConfig,
        rconf: &RadioConfig,
        _cconfs: &[CredentialConfig],
        changed: VifConfigFlags,
    ) -> bool {
        info!("{}: applying config ({:?})", vconf.if_name, changed);
        let (builder, vid) =
            build_vif_section(vconf, rconf, changed, self.options.legacy_open_fallthrough);
        if matches!(builder.get("encryption"), Some(AttrValue::String(e)) if e == security::UCI_OPEN)
            && vconf.security.get(security::KEY_ENCRYPTION).is_some_and(|e| e != "OPEN")
        {
            warn!("{}: security written as open", vconf.if_name);
        }

        let section = builder.into_section(KIND_WIFI_IFACE, &vconf.if_name);
        if let Err(err) = self
            .store
            .write_section(WIRELESS, section)
            .and_then(|()| self.store.commit(WIRELESS))
        {
            warn!("{}: failed to write config: {err}", vconf.if_name);
            return false;
        }

        let vlan_result = if vid != 0 {
            self.vlan.attach(&vconf.if_name, vid, vconf.bridge == "wan")
        } else {
            self.vlan.detach(&vconf.if_name)
        };
        if let Err(err) = vlan_result {
            warn!("{}: vlan update failed: {err}", vconf.if_name);
        }

        if changed.contains(VifConfigFlags::CAPTIVE_PORTAL) {
            self.captive.apply(vconf, &vconf.if_name);
        }
        if changed.contains(VifConfigFlags::CAPTIVE_ALLOWLIST) {
            self.allowlist.apply(vconf, &vconf.if_name);
        }
        true
    }

    /// Remove the `wifi-iface` section carrying `vconf`'s interface name.
    pub fn delete_vif_config(&mut self, vconf: &VifConfig) -> bool {
        if let Err(err) = self.vlan.detach(&vconf.if_name) {
            warn!("{}: vlan removal failed: {err}", vconf.if_name);
        }

        let package = match self.store.load(WIRELESS) {
            Ok(package) => package,
            Err(err) => {
                warn!("{}: {err}", vconf.if_name);
                return false;
            }
        };
        let target = package
            .sections_of_kind(KIND_WIFI_IFACE)
            .find(|s| s.get_str("ifname") == Some(vconf.if_name.as_str()))
            .map(|s| s.name.clone());

        let result = match &target {
            Some(name) => {
                info!("{}: deleting section {name}", vconf.if_name);
                self.store
                    .delete_section(WIRELESS, KIND_WIFI_IFACE, name)
                    .map(|_| ())
            }
            None => {
                info!("{}: no section to delete", vconf.if_name);
                Ok(())
            }
        };
        if let Err(err) = result.and_then(|()| self.store.commit(WIRELESS)) {
            warn!("{}: failed to delete config: {err}", vconf.if_name);
            return false;
        }
        true
    }
}
