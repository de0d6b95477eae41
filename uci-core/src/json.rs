use crate::section::Package;

/// Format a package as pretty JSON.
pub fn format_json(pkg: &Package) -> String {
    serde_json::to_string_pretty(pkg).unwrap_or_else(|_| "{}".to_string())
}
