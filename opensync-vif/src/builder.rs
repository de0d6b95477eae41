use tracing::{debug, warn};
use uci_core::Section;

use crate::attrs::{lookup, AttrValue, FieldSpec};

/// Accumulates typed attributes for one section write.
///
/// Entries keep their insertion order. When the same key is added twice the
/// later value is the one that reaches the store.
#[derive(Debug, Clone)]
pub struct SectionBuilder {
    table: &'static [FieldSpec],
    entries: Vec<(&'static str, AttrValue)>,
}

impl SectionBuilder {
    pub fn new(table: &'static [FieldSpec]) -> Self {
        Self {
            table,
            entries: Vec::new(),
        }
    }

    pub fn add_string(&mut self, key: &'static str, value: impl Into<String>) {
        self.entries.push((key, AttrValue::String(value.into())));
    }

    pub fn add_bool(&mut self, key: &'static str, value: bool) {
        self.entries.push((key, AttrValue::Bool(value)));
    }

    pub fn add_int(&mut self, key: &'static str, value: i32) {
        self.entries.push((key, AttrValue::Int32(value)));
    }

    /// Four lower-case hex digits, the form hostapd expects for a mobility domain.
    pub fn add_hex16(&mut self, key: &'static str, value: u16) {
        self.entries
            .push((key, AttrValue::String(format!("{value:04x}"))));
    }

    pub fn add_array<I, S>(&mut self, key: &'static str, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items.into_iter().map(Into::into).collect();
        self.entries.push((key, AttrValue::Array(items)));
    }

    /// The effective (last written) value for a key.
    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .rev()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Distinct keys in first-insertion order.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<&'static str> = Vec::new();
        for (key, _) in &self.entries {
            if !keys.contains(key) {
                keys.push(*key);
            }
        }
        keys
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into a UCI section, validating each entry against the table.
    ///
    /// Keys the table does not know and values of the wrong kind are dropped.
    pub fn into_section(self, kind: &str, name: &str) -> Section {
        let mut section = Section::new(kind, name);
        for (key, value) in self.entries {
            let Some(attr) = lookup(self.table, key) else {
                debug!("{name}: dropping attribute {key} not in the {kind} table");
                continue;
            };
            if attr.kind != value.kind() {
                warn!(
                    "{name}: attribute {key} is {:?}, expected {:?}",
                    value.kind(),
                    attr.kind
                );
                continue;
            }
            section.options.insert(key.to_string(), value.to_option());
        }
        section
    }
}
