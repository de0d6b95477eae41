//! Hotspot 2.0 profile and OSU provider sections.

use tracing::{info, warn};

use crate::attrs::{HS20_OSU_PROVIDER, WIFI_IFACE};
use crate::builder::SectionBuilder;
use crate::schema::{Hotspot20Config, Hotspot20OsuProvider};
use crate::traits::RecordLookup;
use crate::translator::{Translator, KIND_OSU_PROVIDER, KIND_WIFI_IFACE, WIRELESS};

/// Upper bound on the joined `domain_name` value.
pub const DOMAIN_NAME_MAX: usize = 256;

/// Join domain names with commas. A name is kept only while the running
/// length of all names seen so far stays under [`DOMAIN_NAME_MAX`].
pub fn join_domain_names(names: &[String]) -> String {
    let mut total = 0;
    let mut kept = Vec::new();
    for name in names {
        total += name.len();
        if total < DOMAIN_NAME_MAX {
            kept.push(name.as_str());
        }
    }
    kept.join(",")
}

/// Parse `"<group>:<type>"`.
pub fn parse_venue_group_type(value: &str) -> Option<(i32, i32)> {
    let (group, kind) = value.split_once(':')?;
    Some((group.trim().parse().ok()?, kind.trim().parse().ok()?))
}

fn icon_names(records: &dyn RecordLookup, uuids: &[String]) -> Vec<String> {
    uuids
        .iter()
        .filter_map(|uuid| records.find_icon(uuid))
        .map(|icon| icon.name)
        .collect()
}

/// Interworking / Hotspot 2.0 options added to each `wifi-iface` a profile covers.
pub fn build_hotspot20_section(
    profile: &Hotspot20Config,
    records: &dyn RecordLookup,
) -> SectionBuilder {
    let mut b = SectionBuilder::new(WIFI_IFACE);

    b.add_bool("interworking", profile.enable);
    b.add_bool("hs20", profile.enable);
    if !profile.hessid.is_empty() {
        b.add_string("hessid", profile.hessid.as_str());
    }
    b.add_array("roaming_consortium", profile.roaming_oi.iter().map(String::as_str));
    b.add_array("venue_name", profile.venue_name.iter().map(String::as_str));
    b.add_array("venue_url", profile.venue_url.iter().map(String::as_str));
    b.add_string("domain_name", join_domain_names(&profile.domain_name));
    b.add_array("nai_realm", profile.nai_realm.iter().map(String::as_str));

    if !profile.network_auth_type.is_empty() {
        b.add_string("network_auth_type", profile.network_auth_type.as_str());
    }
    if !profile.mcc_mnc.is_empty() {
        b.add_string("anqp_3gpp_cell_net", profile.mcc_mnc.as_str());
    }
    if (0..3).contains(&profile.gas_addr3_behavior) {
        b.add_string("gas_address3", profile.gas_addr3_behavior.to_string());
    }
    if !profile.qos_map_set.is_empty() {
        b.add_string("qos_map_set", profile.qos_map_set.as_str());
    }

    b.add_bool("osen", profile.osen);
    b.add_bool("internet", profile.internet);
    b.add_bool("esr", profile.esr);
    b.add_bool("asra", profile.asra);
    b.add_bool("uesa", profile.uesa);
    b.add_bool("disable_dgaf", profile.disable_dgaf);

    if profile.anqp_domain_id > 0 {
        b.add_int("anqp_domain_id", profile.anqp_domain_id);
    }
    if profile.deauth_request_timeout > 0 {
        b.add_int("hs20_deauth_req_timeout", profile.deauth_request_timeout);
    }
    if profile.operating_class > 0 {
        b.add_string("hs20_operating_class", profile.operating_class.to_string());
    }
    if !profile.wan_metrics.is_empty() {
        b.add_string("hs20_wan_metrics", profile.wan_metrics.as_str());
    }
    b.add_array(
        "hs20_oper_friendly_name",
        profile.operator_friendly_name.iter().map(String::as_str),
    );

    if !profile.venue_group_type.is_empty() {
        match parse_venue_group_type(&profile.venue_group_type) {
            Some((group, kind)) => {
                b.add_int("venue_group", group);
                b.add_int("venue_type", kind);
            }
            None => warn!(
                "ignoring malformed venue_group_type {:?}",
                profile.venue_group_type
            ),
        }
    }

    if !profile.operator_icons.is_empty() {
        b.add_array("operator_icon", icon_names(records, &profile.operator_icons));
    }
    b
}

/// `osu-provider` section for one provider.
pub fn build_osu_section(provider: &Hotspot20OsuProvider, records: &dyn RecordLookup) -> SectionBuilder {
    let mut b = SectionBuilder::new(HS20_OSU_PROVIDER);
    b.add_array(
        "osu_friendly_name",
        provider.osu_friendly_name.iter().map(String::as_str),
    );
    b.add_array(
        "service_description",
        provider.service_description.iter().map(String::as_str),
    );
    if !provider.osu_nai.is_empty() {
        b.add_string("osu_nai", provider.osu_nai.as_str());
    }
    if !provider.osu_nai2.is_empty() {
        b.add_string("osu_nai2", provider.osu_nai2.as_str());
    }
    if !provider.server_uri.is_empty() {
        b.add_string("osu_server_uri", provider.server_uri.as_str());
    }
    if let Some(method) = provider.method_list.first() {
        b.add_string("osu_method_list", method.to_string());
    }
    if !provider.osu_icons.is_empty() {
        b.add_array("osu_icon", icon_names(records, &provider.osu_icons));
    }
    b
}

impl Translator<'_> {
    /// Apply a Hotspot 2.0 profile to every VIF it references.
    ///
    /// Returns the number of `wifi-iface` sections written.
    pub fn update_hotspot20(&mut self, profile: &Hotspot20Config) -> usize {
        let mut written = 0;
        for uuid in &profile.vif_config {
            let Some(vconf) = self.records.find_vif_config(uuid) else {
                warn!("hotspot20: no VIF config {uuid}");
                continue;
            };
            let section = build_hotspot20_section(profile, self.records)
                .into_section(KIND_WIFI_IFACE, &vconf.if_name);
            match self.store.write_section(WIRELESS, section) {
                Ok(()) => {
                    info!("{}: hotspot20 profile applied", vconf.if_name);
                    written += 1;
                }
                Err(err) => warn!("{}: failed to write hotspot20 profile: {err}", vconf.if_name),
            }
        }

        if written > 0 {
            if let Err(err) = self.store.commit(WIRELESS) {
                warn!("hotspot20: commit failed: {err}");
                return 0;
            }
        }
        written
    }

    /// Write one OSU provider section named after the provider.
    pub fn update_osu_provider(&mut self, provider: &Hotspot20OsuProvider) -> bool {
        if provider.osu_provider_name.is_empty() {
            warn!("osu provider without a name");
            return false;
        }
        let section = build_osu_section(provider, self.records)
            .into_section(KIND_OSU_PROVIDER, &provider.osu_provider_name);
        if let Err(err) = self
            .store
            .write_section(WIRELESS, section)
            .and_then(|()| self.store.commit(WIRELESS))
        {
            warn!("{}: failed to write osu provider: {err}", provider.osu_provider_name);
            return false;
        }
        true
    }
}
