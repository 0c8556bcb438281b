//! Draft and final record containers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::Identifiable;
use crate::domain::field::FieldValue;
use crate::locale::Locale;

/// Accumulating answer set for one wizard session.
///
/// Owned exclusively by the active session. Entries grow monotonically while
/// the user fills the form; the only removals are cascading dependency
/// resets, which route through the resolver, hence the crate-private
/// mutators.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordDraft {
    values: BTreeMap<String, FieldValue>,
}

impl RecordDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.values.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub(crate) fn insert(&mut self, key: impl Into<String>, value: FieldValue) {
        self.values.insert(key.into(), value);
    }

    pub(crate) fn remove(&mut self, key: &str) -> Option<FieldValue> {
        self.values.remove(key)
    }
}

/// Fully assembled, default-filled output handed to the host `save`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalRecord {
    pub id: Uuid,
    /// Locale the session ran under. Informational only: the value map is
    /// locale-independent.
    pub locale: Locale,
    pub assembled_at: DateTime<Utc>,
    pub values: BTreeMap<String, FieldValue>,
}

impl Identifiable for FinalRecord {
    fn id(&self) -> Uuid {
        self.id
    }
}
