//! Collaborator seams of the translator.
//!
//! The translation code only talks to the outside world through these traits.
//! Concrete implementations live in [`crate::platform`].

use uci_core::{Package, Section};

use crate::error::{StoreError, TransportError, VlanError};
use crate::schema::{Hotspot20IconConfig, VifConfig, VifState};

/// Section-level access to the key-value configuration store.
pub trait ConfigStore {
    /// Current view of a package, staged writes included.
    fn load(&self, package: &str) -> Result<Package, StoreError>;
    /// Stage a section. Options already on a section of the same name are kept
    /// unless the new section sets them.
    fn write_section(&mut self, package: &str, section: Section) -> Result<(), StoreError>;
    /// Stage removal of a section. Returns whether the section existed.
    fn delete_section(&mut self, package: &str, kind: &str, name: &str)
        -> Result<bool, StoreError>;
    /// Persist staged changes of a package.
    fn commit(&mut self, package: &str) -> Result<(), StoreError>;
}

/// Read-only queries about network interfaces and radios.
pub trait InterfaceQuery {
    fn is_active(&self, ifname: &str) -> bool;
    fn hardware_address(&self, ifname: &str) -> Option<String>;
    /// Band label of a radio such as `2.4G` or `5GL`.
    fn radio_band(&self, radio: &str) -> Option<String>;
}

pub trait VlanControl {
    fn attach(&mut self, ifname: &str, vid: i32, is_wan: bool) -> Result<(), VlanError>;
    fn detach(&mut self, ifname: &str) -> Result<(), VlanError>;
}

/// Lookup of database rows by identifier.
pub trait RecordLookup {
    fn find_vif_config(&self, uuid: &str) -> Option<VifConfig>;
    fn find_icon(&self, uuid: &str) -> Option<Hotspot20IconConfig>;
}

pub trait CaptivePortal {
    fn apply(&mut self, vconf: &VifConfig, ifname: &str);
    fn decode_into(&self, state: &mut VifState, section: &Section);
}

pub trait DhcpAllowlist {
    fn apply(&mut self, vconf: &VifConfig, ifname: &str);
    fn decode_into(&self, state: &mut VifState);
}

/// Sink for records going back to the database.
pub trait Publisher {
    fn publish_state(&mut self, state: &VifState, radio: &str);
    fn publish_config(&mut self, config: &VifConfig, radio: &str);
}

pub trait FileTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}
