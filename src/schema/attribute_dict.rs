use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::ResolvedAttribute;

/// Resolved attributes of one table.
///
/// Keyed by column name and iterated in declaration order. Serializes as a
/// JSON object `{ "<column>": { "type": ..., "default": ... } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AttributeDict {
    /// Map of column name -> resolved attribute
    pub fields: IndexMap<String, ResolvedAttribute>,
}

impl AttributeDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the attribute for a column name if present.
    pub fn get(&self, name: &str) -> Option<&ResolvedAttribute> {
        self.fields.get(name)
    }

    /// Add an attribute. A repeated column name replaces the earlier entry
    /// in place.
    pub fn insert(&mut self, attribute: ResolvedAttribute) {
        if self.fields.contains_key(&attribute.name) {
            warn!(column = %attribute.name, "duplicate column name, keeping the last declaration");
        }
        self.fields.insert(attribute.name.clone(), attribute);
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResolvedAttribute> {
        self.fields.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<ResolvedAttribute> for AttributeDict {
    fn from_iter<I: IntoIterator<Item = ResolvedAttribute>>(iter: I) -> Self {
        let mut dict = AttributeDict::new();
        for attribute in iter {
            dict.insert(attribute);
        }
        dict
    }
}

impl IntoIterator for AttributeDict {
    type Item = ResolvedAttribute;
    type IntoIter = indexmap::map::IntoValues<String, ResolvedAttribute>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_values()
    }
}
