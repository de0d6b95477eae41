use thiserror::Error;

/// Errors returned by a configuration store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read package {path}: {source}")]
    Read {
        path: String,
        source: uci_core::ParseError,
    },
    #[error("failed to write package {path}: {source}")]
    Write {
        path: String,
        source: uci_core::WriteError,
    },
    #[error("package {0} not found")]
    MissingPackage(String),
}

/// Errors returned when fetching a remote file.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request for {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Errors returned by VLAN attach/detach.
#[derive(Debug, Error)]
pub enum VlanError {
    #[error("vlan {vid} out of range for {ifname}")]
    InvalidId { ifname: String, vid: i32 },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors returned when loading the record database.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read records file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse records file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Errors returned when loading settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}
