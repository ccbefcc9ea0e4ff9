//! Config entry — one integration instance stored in `core.config_entries`.
//!
//! The entries document is kept as an order-preserving JSON value so that a
//! save cycle only touches `unique_id` and `title` of edited entries. Every
//! other key, including ones this crate knows nothing about, is written back
//! in its original position.

use serde_json::{Map, Value};

use crate::error::{DocumentKind, MalformedError};

const ENTRY_ID: &str = "entry_id";
const DOMAIN: &str = "domain";
const UNIQUE_ID: &str = "unique_id";
const TITLE: &str = "title";

/// Read-only snapshot of a config entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub entry_id: String,
    pub domain: String,
    /// `None` when the stored value is missing or `null`.
    pub unique_id: Option<String>,
    pub title: String,
}

fn str_field<'m>(map: &'m Map<String, Value>, key: &str) -> Option<&'m str> {
    map.get(key).and_then(Value::as_str)
}

/// Mutable view over one entry object inside the entries document.
pub struct EntryRecord<'a> {
    map: &'a mut Map<String, Value>,
}

impl<'a> EntryRecord<'a> {
    fn new(map: &'a mut Map<String, Value>) -> Self {
        Self { map }
    }

    /// The entry identifier, or an empty string if the entry has none.
    #[must_use]
    pub fn entry_id(&self) -> &str {
        str_field(self.map, ENTRY_ID).unwrap_or_default()
    }

    #[must_use]
    pub fn unique_id(&self) -> Option<&str> {
        str_field(self.map, UNIQUE_ID)
    }

    /// Replace the unique id, keeping the key at its original position.
    pub fn set_unique_id(&mut self, unique_id: impl Into<String>) {
        self.map
            .insert(UNIQUE_ID.to_string(), Value::String(unique_id.into()));
    }

    /// The display title, or an empty string if the entry has none.
    #[must_use]
    pub fn title(&self) -> &str {
        str_field(self.map, TITLE).unwrap_or_default()
    }

    /// Replace the title, keeping the key at its original position.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.map
            .insert(TITLE.to_string(), Value::String(title.into()));
    }
}

fn snapshot(map: &Map<String, Value>) -> ConfigEntry {
    ConfigEntry {
        entry_id: str_field(map, ENTRY_ID).unwrap_or_default().to_string(),
        domain: str_field(map, DOMAIN).unwrap_or_default().to_string(),
        unique_id: str_field(map, UNIQUE_ID).map(ToString::to_string),
        title: str_field(map, TITLE).unwrap_or_default().to_string(),
    }
}

/// The whole `core.config_entries` document.
///
/// Entries live under `data.entries`. A missing `data` or `entries` key is
/// read as an empty list and list items that are not objects are skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct EntriesDocument {
    root: Value,
}

impl EntriesDocument {
    /// Wrap a parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedError::NotAnObject`] when `value` is not a JSON object.
    pub fn from_value(value: Value) -> Result<Self, MalformedError> {
        if !value.is_object() {
            return Err(MalformedError::NotAnObject {
                document: DocumentKind::Entries,
            });
        }
        Ok(Self { root: value })
    }

    #[must_use]
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    #[must_use]
    pub fn into_value(self) -> Value {
        self.root
    }

    fn raw_entries(&self) -> impl Iterator<Item = &Map<String, Value>> {
        self.root
            .get("data")
            .and_then(|data| data.get("entries"))
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object)
    }

    /// Snapshot every entry, in document order.
    #[must_use]
    pub fn entries(&self) -> Vec<ConfigEntry> {
        self.raw_entries().map(snapshot).collect()
    }

    /// Mutable views over every entry, in document order.
    pub fn records_mut(&mut self) -> impl Iterator<Item = EntryRecord<'_>> {
        self.root
            .get_mut("data")
            .and_then(|data| data.get_mut("entries"))
            .and_then(Value::as_array_mut)
            .into_iter()
            .flatten()
            .filter_map(Value::as_object_mut)
            .map(EntryRecord::new)
    }
}
