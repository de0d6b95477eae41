use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::translator::TranslateOptions;

/// Runtime settings, read from an optional TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the `wireless` and `network` packages.
    pub uci_dir: PathBuf,
    pub sys_class_net: PathBuf,
    /// Where downloaded Hotspot 2.0 icons are stored.
    pub icon_dir: PathBuf,
    pub security: SecuritySettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SecuritySettings {
    /// Write the open options after a matched suite, as older firmware did.
    pub legacy_open_fallthrough: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HttpSettings {
    pub accept_invalid_certs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            uci_dir: PathBuf::from("/etc/config"),
            sys_class_net: PathBuf::from("/sys/class/net"),
            icon_dir: PathBuf::from("/tmp"),
            security: SecuritySettings::default(),
            http: HttpSettings::default(),
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            accept_invalid_certs: true,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&raw, path.display().to_string())
    }

    fn parse(raw: &str, path: String) -> Result<Self, ConfigError> {
        toml::from_str(raw).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn translate_options(&self) -> TranslateOptions {
        TranslateOptions {
            legacy_open_fallthrough: self.security.legacy_open_fallthrough,
            icon_dir: self.icon_dir.clone(),
        }
    }
}
