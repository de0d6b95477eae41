use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::section::{OptionValue, Package};

/// Errors that can occur while writing a [`Package`] to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to write output file.
    #[error("failed to write UCI file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a [`Package`] into UCI text.
///
/// Empty list options have no UCI representation and are left out.
pub fn write(pkg: &Package) -> String {
    let mut out = String::new();
    for (idx, section) in pkg.sections.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        if section.name.starts_with('@') {
            out.push_str(&format!("config {}\n", section.kind));
        } else {
            out.push_str(&format!(
                "config {} {}\n",
                section.kind,
                quote(&section.name)
            ));
        }
        for (key, value) in &section.options {
            match value {
                OptionValue::Single(v) => {
                    out.push_str(&format!("\toption {key} {}\n", quote(v)));
                }
                OptionValue::List(items) => {
                    for item in items {
                        out.push_str(&format!("\tlist {key} {}\n", quote(item)));
                    }
                }
            }
        }
    }
    out
}

/// Serialize a [`Package`] and write it to `path`.
///
/// The text goes to a sibling temporary file first and is renamed into place.
pub fn write_file(pkg: &Package, path: &Path) -> Result<(), WriteError> {
    let tmp = path.with_extension("uci-tmp");
    fs::write(&tmp, write(pkg))?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}
