mod builtin;
mod ids;

use serde::Serialize;
use serde_json::{Map, Value};

pub use ids::{RandomUuids, SequentialUuids, UuidSource};

/// A named example configuration. Serializes as the metadata followed by the
/// flattened session config fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub last_updated: String,
    #[serde(flatten)]
    pub config: Map<String, Value>,
}

impl CatalogEntry {
    /// Session config fields only, without the metadata.
    pub fn payload(&self) -> Value {
        Value::Object(self.config.clone())
    }

    /// Whole entry, metadata included, as shown in the detail pane.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Fixed, ordered list of example entries. Read-only once built.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn build(ids: &mut impl UuidSource) -> Self {
        let entries = builtin::builtin_entries(ids);
        tracing::debug!(count = entries.len(), "built session config catalog");
        Self { entries }
    }

    #[cfg(test)]
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    pub fn list(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Case-insensitive lookup by entry name.
    pub fn find(&self, name: &str) -> Option<(usize, &CatalogEntry)> {
        let needle = name.trim();
        self.entries
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name.eq_ignore_ascii_case(needle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
