use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// Value of a single UCI option: either `option key 'v'` or a set of `list key 'v'` lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Single(String),
    List(Vec<String>),
}

impl OptionValue {
    /// Scalar text, if this is a single-valued option.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Single(value) => Some(value),
            OptionValue::List(_) => None,
        }
    }

    /// List items, if this is a list option.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            OptionValue::Single(_) => None,
            OptionValue::List(items) => Some(items),
        }
    }
}

/// A named, typed UCI section (`config <kind> '<name>'`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    /// Section type, for example `wifi-iface`.
    pub kind: String,
    /// Section name. Anonymous sections get a generated `@kind[n]` name on parse.
    pub name: String,
    /// Options keyed by name.
    pub options: BTreeMap<String, OptionValue>,
}

impl Section {
    /// Create an empty section.
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            options: BTreeMap::new(),
        }
    }

    /// Return the raw option value.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    /// Return the scalar text of an option.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.options.get(key).and_then(OptionValue::as_str)
    }

    /// Set a scalar option, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.options
            .insert(key.into(), OptionValue::Single(value.into()));
    }

    /// Set a list option, replacing any previous value.
    pub fn set_list(&mut self, key: impl Into<String>, items: Vec<String>) {
        self.options.insert(key.into(), OptionValue::List(items));
    }

    /// Append one item to a list option, converting a scalar into a list if needed.
    pub fn push_list(&mut self, key: &str, item: impl Into<String>) {
        let item = item.into();
        match self.options.get_mut(key) {
            Some(OptionValue::List(items)) => items.push(item),
            Some(existing) => {
                let previous = existing.as_str().unwrap_or_default().to_string();
                *existing = OptionValue::List(vec![previous, item]);
            }
            None => {
                self.options
                    .insert(key.to_string(), OptionValue::List(vec![item]));
            }
        }
    }

    /// Overlay `other`'s options onto this section. Options not mentioned in `other` are kept.
    pub fn merge_from(&mut self, other: &Section) {
        for (key, value) in &other.options {
            self.options.insert(key.clone(), value.clone());
        }
    }
}

/// A UCI package: one file under `/etc/config`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Package {
    pub name: String,
    pub sections: Vec<Section>,
}

impl Package {
    /// Create an empty package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Return the section with the provided name.
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Return all sections of a given kind, in file order.
    pub fn sections_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Section> + 'a {
        self.sections.iter().filter(move |s| s.kind == kind)
    }

    /// Merge `section` into an existing section of the same name, or append it.
    ///
    /// An existing section keeps options the update does not mention and takes the
    /// update's kind.
    pub fn upsert_section(&mut self, section: Section) {
        if let Some(existing) = self.sections.iter_mut().find(|s| s.name == section.name) {
            existing.kind = section.kind.clone();
            existing.merge_from(&section);
            return;
        }
        self.sections.push(section);
    }

    /// Remove a section by kind and name. Returns whether a section was removed.
    pub fn remove_section(&mut self, kind: &str, name: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|s| !(s.kind == kind && s.name == name));
        self.sections.len() != before
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.kind, self.name)?;
        if self.options.is_empty() {
            return Ok(());
        }
        write!(f, " {{")?;
        for (idx, (key, value)) in self.options.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            match value {
                OptionValue::Single(v) => write!(f, " {key}={v:?}")?,
                OptionValue::List(items) => write!(f, " {key}={items:?}")?,
            }
        }
        write!(f, " }}")
    }
}
