use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use tracing::debug;
use uci_core::{parse_file, write_file, Package, Section};

use crate::error::StoreError;
use crate::traits::ConfigStore;

/// UCI packages backed by a directory of text files (normally `/etc/config`).
///
/// Writes are staged in memory and reach disk on [`ConfigStore::commit`].
/// A store without a directory never touches disk.
#[derive(Debug, Default)]
pub struct UciStore {
    root: Option<PathBuf>,
    packages: BTreeMap<String, Package>,
    dirty: BTreeSet<String>,
}

impl UciStore {
    pub fn open(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Seed or replace a package without marking it dirty.
    pub fn insert_package(&mut self, package: Package) {
        self.packages.insert(package.name.clone(), package);
    }

    pub fn is_dirty(&self, package: &str) -> bool {
        self.dirty.contains(package)
    }

    fn package_path(&self, package: &str) -> Option<PathBuf> {
        self.root.as_ref().map(|root| root.join(package))
    }

    fn read(&self, package: &str) -> Result<Package, StoreError> {
        let Some(path) = self.package_path(package) else {
            return Err(StoreError::MissingPackage(package.to_string()));
        };
        if !path.exists() {
            debug!("{}: not found, starting empty", path.display());
            return Ok(Package::new(package));
        }
        parse_file(&path).map_err(|source| StoreError::Read {
            path: path.display().to_string(),
            source,
        })
    }

    fn package_mut(&mut self, package: &str) -> Result<&mut Package, StoreError> {
        if !self.packages.contains_key(package) {
            let loaded = match self.read(package) {
                Err(StoreError::MissingPackage(_)) => Package::new(package),
                other => other?,
            };
            self.packages.insert(package.to_string(), loaded);
        }
        self.packages
            .get_mut(package)
            .ok_or_else(|| StoreError::MissingPackage(package.to_string()))
    }
}

impl ConfigStore for UciStore {
    fn load(&self, package: &str) -> Result<Package, StoreError> {
        match self.packages.get(package) {
            Some(cached) => Ok(cached.clone()),
            None => self.read(package),
        }
    }

    fn write_section(&mut self, package: &str, section: Section) -> Result<(), StoreError> {
        debug!("{package}: staging {section}");
        self.package_mut(package)?.upsert_section(section);
        self.dirty.insert(package.to_string());
        Ok(())
    }

    fn delete_section(
        &mut self,
        package: &str,
        kind: &str,
        name: &str,
    ) -> Result<bool, StoreError> {
        let removed = self.package_mut(package)?.remove_section(kind, name);
        if removed {
            self.dirty.insert(package.to_string());
        }
        Ok(removed)
    }

    fn commit(&mut self, package: &str) -> Result<(), StoreError> {
        if !self.dirty.remove(package) {
            return Ok(());
        }
        let (Some(path), Some(pkg)) = (self.package_path(package), self.packages.get(package))
        else {
            return Ok(());
        };
        write_file(pkg, &path).map_err(|source| StoreError::Write {
            path: path.display().to_string(),
            source,
        })?;
        debug!("{package}: committed to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use uci_core::{Package, Section};

    use super::UciStore;
    use crate::error::StoreError;
    use crate::traits::ConfigStore;

    #[test]
    fn in_memory_store_stages_and_merges() {
        let mut store = UciStore::in_memory();
        assert!(matches!(
            store.load("wireless"),
            Err(StoreError::MissingPackage(_))
        ));

        let mut section = Section::new("wifi-iface", "wlan0");
        section.set("ssid", "Corp");
        section.set("network", "lan");
        store.write_section("wireless", section).expect("write");

        let mut update = Section::new("wifi-iface", "wlan0");
        update.set("ssid", "Guest");
        store.write_section("wireless", update).expect("write");

        let pkg = store.load("wireless").expect("load");
        let wlan0 = pkg.get_section("wlan0").expect("wlan0");
        assert_eq!(wlan0.get_str("ssid"), Some("Guest"));
        assert_eq!(wlan0.get_str("network"), Some("lan"));
        assert!(store.is_dirty("wireless"));
        store.commit("wireless").expect("commit");
        assert!(!store.is_dirty("wireless"));
    }

    #[test]
    fn commit_writes_dirty_packages_to_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = UciStore::open(dir.path());
        let mut pkg = Package::new("wireless");
        pkg.sections.push(Section::new("wifi-iface", "wlan0"));
        store.insert_package(pkg);

        assert!(store
            .delete_section("wireless", "wifi-iface", "wlan0")
            .expect("delete"));
        assert!(!store
            .delete_section("wireless", "wifi-iface", "wlan9")
            .expect("delete"));
        store.commit("wireless").expect("commit");

        let text = fs::read_to_string(dir.path().join("wireless")).expect("written");
        assert!(!text.contains("wlan0"));
    }

    #[test]
    fn missing_file_reads_as_empty_package() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = UciStore::open(dir.path());
        let pkg = store.load("network").expect("load");
        assert!(pkg.sections.is_empty());
        assert_eq!(pkg.name, "network");
    }
}
