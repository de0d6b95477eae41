//! Recording test doubles for the collaborator traits.

use std::collections::BTreeMap;

use uci_core::{Package, Section};

use crate::error::{StoreError, TransportError, VlanError};
use crate::schema::{Hotspot20IconConfig, KvList, VifConfig, VifState};
use crate::traits::{
    CaptivePortal, ConfigStore, DhcpAllowlist, FileTransport, InterfaceQuery, Publisher,
    RecordLookup, VlanControl,
};
use crate::translator::{TranslateOptions, Translator};

#[derive(Debug, Default)]
pub struct FakeStore {
    pub packages: BTreeMap<String, Package>,
    pub writes: Vec<(String, Section)>,
    pub deletes: Vec<(String, String)>,
    pub commits: Vec<String>,
    pub fail_writes: bool,
}

impl FakeStore {
    pub fn section(&self, package: &str, name: &str) -> Option<&Section> {
        self.packages.get(package)?.get_section(name)
    }
}

impl ConfigStore for FakeStore {
    fn load(&self, package: &str) -> Result<Package, StoreError> {
        Ok(self
            .packages
            .get(package)
            .cloned()
            .unwrap_or_else(|| Package::new(package)))
    }

    fn write_section(&mut self, package: &str, section: Section) -> Result<(), StoreError> {
        if self.fail_writes {
            return Err(StoreError::MissingPackage(package.to_string()));
        }
        self.writes.push((package.to_string(), section.clone()));
        self.packages
            .entry(package.to_string())
            .or_insert_with(|| Package::new(package))
            .upsert_section(section);
        Ok(())
    }

    fn delete_section(
        &mut self,
        package: &str,
        kind: &str,
        name: &str,
    ) -> Result<bool, StoreError> {
        self.deletes.push((package.to_string(), name.to_string()));
        Ok(self
            .packages
            .get_mut(package)
            .is_some_and(|pkg| pkg.remove_section(kind, name)))
    }

    fn commit(&mut self, package: &str) -> Result<(), StoreError> {
        self.commits.push(package.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeInterfaces {
    pub active: Vec<String>,
    pub macs: BTreeMap<String, String>,
    pub bands: BTreeMap<String, String>,
}

impl InterfaceQuery for FakeInterfaces {
    fn is_active(&self, ifname: &str) -> bool {
        self.active.iter().any(|i| i == ifname)
    }

    fn hardware_address(&self, ifname: &str) -> Option<String> {
        self.macs.get(ifname).cloned()
    }

    fn radio_band(&self, radio: &str) -> Option<String> {
        self.bands.get(radio).cloned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VlanCall {
    Attach { ifname: String, vid: i32, is_wan: bool },
    Detach(String),
}

#[derive(Debug, Default)]
pub struct FakeVlan {
    pub calls: Vec<VlanCall>,
}

impl VlanControl for FakeVlan {
    fn attach(&mut self, ifname: &str, vid: i32, is_wan: bool) -> Result<(), VlanError> {
        self.calls.push(VlanCall::Attach {
            ifname: ifname.to_string(),
            vid,
            is_wan,
        });
        Ok(())
    }

    fn detach(&mut self, ifname: &str) -> Result<(), VlanError> {
        self.calls.push(VlanCall::Detach(ifname.to_string()));
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct FakeRecords {
    pub vifs: BTreeMap<String, VifConfig>,
    pub icons: BTreeMap<String, Hotspot20IconConfig>,
}

impl RecordLookup for FakeRecords {
    fn find_vif_config(&self, uuid: &str) -> Option<VifConfig> {
        self.vifs.get(uuid).cloned()
    }

    fn find_icon(&self, uuid: &str) -> Option<Hotspot20IconConfig> {
        self.icons.get(uuid).cloned()
    }
}

#[derive(Debug, Default)]
pub struct FakeCaptive {
    pub applied: Vec<String>,
    pub portal: KvList,
}

impl CaptivePortal for FakeCaptive {
    fn apply(&mut self, _vconf: &VifConfig, ifname: &str) {
        self.applied.push(ifname.to_string());
    }

    fn decode_into(&self, state: &mut VifState, _section: &Section) {
        state.captive_portal = self.portal.clone();
    }
}

#[derive(Debug, Default)]
pub struct FakeAllowlist {
    pub applied: Vec<String>,
    pub allowlist: Vec<String>,
}

impl DhcpAllowlist for FakeAllowlist {
    fn apply(&mut self, _vconf: &VifConfig, ifname: &str) {
        self.applied.push(ifname.to_string());
    }

    fn decode_into(&self, state: &mut VifState) {
        state.captive_allowlist = self.allowlist.clone();
    }
}

#[derive(Debug, Default)]
pub struct FakePublisher {
    pub states: Vec<(VifState, String)>,
    pub configs: Vec<(VifConfig, String)>,
}

impl Publisher for FakePublisher {
    fn publish_state(&mut self, state: &VifState, radio: &str) {
        self.states.push((state.clone(), radio.to_string()));
    }

    fn publish_config(&mut self, config: &VifConfig, radio: &str) {
        self.configs.push((config.clone(), radio.to_string()));
    }
}

#[derive(Debug, Default)]
pub struct FakeTransport {
    pub files: BTreeMap<String, Vec<u8>>,
}

impl FileTransport for FakeTransport {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Owns one of each fake and hands out translators borrowing them.
#[derive(Debug, Default)]
pub struct Harness {
    pub store: FakeStore,
    pub interfaces: FakeInterfaces,
    pub vlan: FakeVlan,
    pub records: FakeRecords,
    pub captive: FakeCaptive,
    pub allowlist: FakeAllowlist,
    pub publisher: FakePublisher,
    pub transport: FakeTransport,
    pub options: TranslateOptions,
}

impl Harness {
    pub fn translator(&mut self) -> Translator<'_> {
        Translator {
            store: &mut self.store,
            interfaces: &self.interfaces,
            vlan: &mut self.vlan,
            records: &self.records,
            captive: &mut self.captive,
            allowlist: &mut self.allowlist,
            publisher: &mut self.publisher,
            transport: &self.transport,
            options: self.options.clone(),
        }
    }
}
