//! Hotspot 2.0 icon download and `hs20-icon` section.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::attrs::HS20_ICON;
use crate::builder::SectionBuilder;
use crate::path_guard::file_in_dir;
use crate::schema::Hotspot20IconConfig;
use crate::translator::{Translator, KIND_HS20_ICON, WIRELESS};

pub fn build_icon_section(icon: &Hotspot20IconConfig, path: &Path) -> SectionBuilder {
    let mut b = SectionBuilder::new(HS20_ICON);
    if icon.height != 0 {
        b.add_int("height", icon.height);
    }
    if icon.width != 0 {
        b.add_int("width", icon.width);
    }
    if !icon.lang_code.is_empty() {
        b.add_string("lang", icon.lang_code.as_str());
    }
    if !icon.img_type.is_empty() {
        b.add_string("type", icon.img_type.as_str());
    }
    b.add_string("path", path.display().to_string());
    b
}

impl Translator<'_> {
    /// Download an icon into the icon directory and register it.
    ///
    /// Nothing is written to the store unless the download succeeds.
    pub fn update_icon(&mut self, icon: &Hotspot20IconConfig) -> bool {
        let path = match file_in_dir(&self.options.icon_dir, &icon.name) {
            Ok(path) => path,
            Err(err) => {
                warn!("icon {:?}: {err}", icon.name);
                return false;
            }
        };
        if icon.url.is_empty() {
            warn!("{}: icon has no url", icon.name);
            return false;
        }

        let bytes = match self.transport.fetch(&icon.url) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("{}: download failed: {err}", icon.name);
                return false;
            }
        };
        if let Err(err) = fs::write(&path, &bytes) {
            warn!("{}: failed to save {}: {err}", icon.name, path.display());
            return false;
        }
        info!("{}: saved {} bytes to {}", icon.name, bytes.len(), path.display());

        let section = build_icon_section(icon, &path).into_section(KIND_HS20_ICON, &icon.name);
        if let Err(err) = self
            .store
            .write_section(WIRELESS, section)
            .and_then(|()| self.store.commit(WIRELESS))
        {
            warn!("{}: failed to write icon: {err}", icon.name);
            return false;
        }
        true
    }
}
