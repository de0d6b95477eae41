use tracing::debug;
use uci_core::Section;

use crate::schema::{VifConfig, VifState};
use crate::traits::{CaptivePortal, DhcpAllowlist};

/// Captive portal and DHCP allowlist left to another daemon. Requests are
/// logged and state columns stay empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unmanaged;

impl CaptivePortal for Unmanaged {
    fn apply(&mut self, vconf: &VifConfig, ifname: &str) {
        debug!(
            "{ifname}: captive portal not managed ({} options)",
            vconf.captive_portal.len()
        );
    }

    fn decode_into(&self, _state: &mut VifState, _section: &Section) {}
}

impl DhcpAllowlist for Unmanaged {
    fn apply(&mut self, vconf: &VifConfig, ifname: &str) {
        debug!(
            "{ifname}: dhcp allowlist not managed ({} entries)",
            vconf.captive_allowlist.len()
        );
    }

    fn decode_into(&self, _state: &mut VifState) {}
}
