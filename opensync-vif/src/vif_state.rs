//! `wifi-iface` section -> observed VIF state.

use tracing::{debug, info, warn};
use uci_core::Section;

use crate::attrs::{Attributes, WIFI_IFACE};
use crate::schema::{MacFilter, VifConfig, VifState};
use crate::traits::InterfaceQuery;
use crate::translator::Translator;
use crate::{custom_options, security};

/// An observed state together with the radio it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedVif {
    pub radio: String,
    pub state: VifState,
}

/// Build the observed state of one `wifi-iface` section.
///
/// Returns `None` when the section lacks `device`, `ifname` or `ssid`.
/// Captive-portal and allowlist columns are left empty.
pub fn build_state(section: &Section, interfaces: &dyn InterfaceQuery) -> Option<ObservedVif> {
    let attrs = Attributes::from_section(section, WIFI_IFACE);
    let (Some(radio), Some(ifname), Some(ssid)) = (
        attrs.get_str("device"),
        attrs.get_str("ifname"),
        attrs.get_str("ssid"),
    ) else {
        info!("{}: skipping invalid radio/ifname", section.name);
        return None;
    };

    let mut state = VifState {
        if_name: ifname.to_string(),
        ..VifState::default()
    };

    state.ssid_broadcast = if attrs.flag("hidden") {
        "disabled"
    } else {
        "enabled"
    }
    .to_string();
    state.mode = attrs.get_str("mode").unwrap_or("ap").to_string();
    state.state = if interfaces.is_active(ifname) {
        "up"
    } else {
        "down"
    }
    .to_string();
    state.enabled = !attrs.flag("disabled");
    state.btm = i32::from(attrs.flag("ieee80211v"));
    state.ap_bridge = !attrs.flag("isolate");

    state.bridge = attrs.get_str("network").map(str::to_string);
    if state.bridge.is_none() {
        warn!("{}: unknown bridge/network", section.name);
    }
    state.vlan_id = attrs.get_int("vlan_id").unwrap_or(1);
    state.ssid = ssid.to_string();

    state.channel = attrs.get_int("channel");
    if state.channel.is_none() {
        info!("{ifname}: failed to get channel");
    }

    let band = interfaces.radio_band(radio).unwrap_or_default();
    debug!("{ifname}: radio {radio} band {band:?}");
    state.min_hw_mode = if band.contains('5') { "11ac" } else { "11n" }.to_string();

    state.mac = attrs
        .get_str("bssid")
        .map(str::to_string)
        .or_else(|| interfaces.hardware_address(ifname));
    if state.mac.is_none() {
        info!("{ifname}: failed to get base BSSID (mac)");
    }

    if let Some(filter) = attrs.get_str("macfilter") {
        state.mac_list_type = MacFilter::from_uci(filter).map(|f| f.schema_name().to_string());
    }
    if let Some(list) = attrs.get_array("maclist") {
        state.mac_list = list.to_vec();
    }

    state.security = security::decode(&attrs);
    state.custom_options = custom_options::decode(&attrs);

    Some(ObservedVif {
        radio: radio.to_string(),
        state,
    })
}

/// Rebuild the desired record a state corresponds to. The record identifier
/// of `vconf` is kept.
pub fn state_to_config(state: &VifState, vconf: &mut VifConfig) {
    *vconf = VifConfig {
        uuid: vconf.uuid.take(),
        if_name: state.if_name.clone(),
        mode: state.mode.clone(),
        enabled: state.enabled,
        ssid: state.ssid.clone(),
        ssid_broadcast: state.ssid_broadcast.clone(),
        ap_bridge: state.ap_bridge,
        uapsd_enable: state.uapsd_enable,
        btm: state.btm,
        rrm: state.rrm,
        ft_psk: state.ft_psk,
        ft_mobility_domain: 0,
        group_rekey: state.group_rekey,
        bridge: state.bridge.clone().unwrap_or_default(),
        vlan_id: state.vlan_id,
        min_hw_mode: state.min_hw_mode.clone(),
        mac_list_type: state.mac_list_type.clone().unwrap_or_default(),
        mac_list: state.mac_list.clone(),
        security: state.security.clone(),
        custom_options: state.custom_options.clone(),
        captive_portal: state.captive_portal.clone(),
        captive_allowlist: state.captive_allowlist.clone(),
    };
}

impl Translator<'_> {
    /// Read one `wifi-iface` section and publish its observed state.
    ///
    /// When `vconf` is given it is overwritten with the matching desired record
    /// and published too. Returns false, publishing nothing, when the section
    /// is not a usable interface.
    pub fn update_observed_state(&mut self, section: &Section, vconf: Option<&mut VifConfig>) -> bool {
        info!("{}: get state", section.name);
        let Some(ObservedVif { radio, mut state }) = build_state(section, self.interfaces) else {
            return false;
        };

        self.captive.decode_into(&mut state, section);
        self.allowlist.decode_into(&mut state);

        if let Some(vconf) = vconf {
            info!("{radio}: updating vif config");
            state_to_config(&state, vconf);
            self.publisher.publish_config(vconf, &radio);
        }
        info!("{radio}: updating vif state {}", state.ssid);
        self.publisher.publish_state(&state, &radio);
        true
    }
}
