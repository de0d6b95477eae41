//! Concrete collaborators for running the translator on a device or against
//! a directory of exported files.

mod http;
mod publisher;
mod records;
mod sysfs;
mod uci_store;
mod unmanaged;
mod vlan;

pub use http::HttpTransport;
pub use publisher::{JsonLinesPublisher, TABLE_VIF_CONFIG, TABLE_VIF_STATE};
pub use records::JsonRecords;
pub use sysfs::SysfsInterfaces;
pub use uci_store::UciStore;
pub use unmanaged::Unmanaged;
pub use vlan::{UciVlan, NETWORK};
