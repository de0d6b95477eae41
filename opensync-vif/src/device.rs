use std::io::{self, Stdout};

use anyhow::{Context, Result};
use opensync_vif::config::Settings;
use opensync_vif::platform::{
    HttpTransport, JsonLinesPublisher, JsonRecords, SysfsInterfaces, UciStore, UciVlan, Unmanaged,
};
use opensync_vif::traits::ConfigStore;
use opensync_vif::translator::{TranslateOptions, Translator, WIRELESS};
use uci_core::Package;

/// Every collaborator the translator needs, built from settings.
pub struct Device {
    pub store: UciStore,
    /// The wireless package as loaded when the device was opened.
    pub wireless: Package,
    pub interfaces: SysfsInterfaces,
    pub vlan: UciVlan,
    pub records: JsonRecords,
    pub captive: Unmanaged,
    pub allowlist: Unmanaged,
    pub publisher: JsonLinesPublisher<Stdout>,
    pub transport: HttpTransport,
    pub options: TranslateOptions,
}

impl Device {
    pub fn open(settings: &Settings, records: JsonRecords) -> Result<Self> {
        let store = UciStore::open(settings.uci_dir.clone());
        let wireless = store
            .load(WIRELESS)
            .with_context(|| format!("failed to load {WIRELESS} package"))?;
        let interfaces =
            SysfsInterfaces::new(settings.sys_class_net.clone()).with_radios(&wireless);
        let transport = HttpTransport::new(settings.http.accept_invalid_certs)
            .context("failed to set up HTTP transport")?;

        Ok(Self {
            store,
            wireless,
            interfaces,
            vlan: UciVlan::new(UciStore::open(settings.uci_dir.clone())),
            records,
            captive: Unmanaged,
            allowlist: Unmanaged,
            publisher: JsonLinesPublisher::new(io::stdout()),
            transport,
            options: settings.translate_options(),
        })
    }

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
