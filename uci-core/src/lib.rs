//! Generic UCI (OpenWrt Unified Configuration Interface) primitives used by higher-level tools.

pub mod json;
pub mod parser;
pub mod section;
pub mod writer;

pub use json::format_json;
pub use parser::{parse, parse_file, ParseError};
pub use section::{OptionValue, Package, Section};
pub use writer::{write, write_file, WriteError};
