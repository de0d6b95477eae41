use tracing::{debug, info};
use uci_core::Section;

use crate::error::VlanError;
use crate::platform::UciStore;
use crate::traits::{ConfigStore, VlanControl};

pub const NETWORK: &str = "network";
const KIND_DEVICE: &str = "device";

/// 802.1Q devices kept as `network/vlan_<ifname>` sections.
#[derive(Debug)]
pub struct UciVlan {
    store: UciStore,
}

impl UciVlan {
    pub fn new(store: UciStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &UciStore {
        &self.store
    }

    fn section_name(ifname: &str) -> String {
        format!("vlan_{ifname}")
    }
}

impl VlanControl for UciVlan {
    fn attach(&mut self, ifname: &str, vid: i32, is_wan: bool) -> Result<(), VlanError> {
        if !(1..=4094).contains(&vid) {
            return Err(VlanError::InvalidId {
                ifname: ifname.to_string(),
                vid,
            });
        }
        let mut section = Section::new(KIND_DEVICE, Self::section_name(ifname));
        section.set("type", "8021q");
        section.set("ifname", ifname);
        section.set("vid", vid.to_string());
        section.set("name", format!("{ifname}.{vid}"));
        section.set("network", if is_wan { "wan" } else { "lan" });

        info!("{ifname}: attaching vlan {vid}");
        self.store.write_section(NETWORK, section)?;
        self.store.commit(NETWORK)?;
        Ok(())
    }

    fn detach(&mut self, ifname: &str) -> Result<(), VlanError> {
        let name = Self::section_name(ifname);
        if self.store.delete_section(NETWORK, KIND_DEVICE, &name)? {
            info!("{ifname}: vlan removed");
            self.store.commit(NETWORK)?;
        } else {
            debug!("{ifname}: no vlan to remove");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::UciVlan;
    use crate::error::VlanError;
    use crate::platform::UciStore;
    use crate::traits::{ConfigStore, VlanControl};

    #[test]
    fn attach_then_detach() {
        let mut vlan = UciVlan::new(UciStore::in_memory());
        vlan.attach("wlan0", 100, true).expect("attach");

        let network = vlan.store().load("network").expect("network");
        let device = network.get_section("vlan_wlan0").expect("device");
        assert_eq!(device.kind, "device");
        assert_eq!(device.get_str("type"), Some("8021q"));
        assert_eq!(device.get_str("vid"), Some("100"));
        assert_eq!(device.get_str("name"), Some("wlan0.100"));
        assert_eq!(device.get_str("network"), Some("wan"));

        vlan.detach("wlan0").expect("detach");
        vlan.detach("wlan0").expect("detach again");
        let network = vlan.store().load("network").expect("network");
        assert!(network.get_section("vlan_wlan0").is_none());
    }

    #[test]
    fn rejects_out_of_range_ids() {
        let mut vlan = UciVlan::new(UciStore::in_memory());
        assert!(matches!(
            vlan.attach("wlan0", 5000, false),
            Err(VlanError::InvalidId { vid: 5000, .. })
        ));
    }
}
