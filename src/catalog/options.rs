//! Enumerable option sets with runtime extension.
//!
//! Built-in sets ship with the catalog; users can append custom entries at
//! runtime ("add custom option"). A custom entry's identity is a canonical
//! slug derived from its display name, so creating the same option twice is
//! a no-op. Pair the in-memory catalog with an [`OptionRepository`] to carry
//! custom entries across sessions.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::common::NamedEntity;
use crate::errors::{IntakeError, Result};
use crate::locale::{label, Locale};

/// One selectable entry of an option set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionEntry {
    /// Canonical slug; the value stored in drafts and final records.
    pub slug: String,
    /// Label-table key for built-ins; the raw display name for custom
    /// entries (the label table falls back to the key itself).
    pub label_key: String,
    #[serde(default)]
    pub custom: bool,
}

impl OptionEntry {
    pub fn builtin(slug: &'static str, label_key: &'static str) -> Self {
        Self {
            slug: slug.into(),
            label_key: label_key.into(),
            custom: false,
        }
    }

    pub fn custom(display_name: &str) -> Self {
        Self {
            slug: slugify(display_name),
            label_key: display_name.trim().to_string(),
            custom: true,
        }
    }

    pub fn label(&self, locale: Locale) -> &str {
        label(&self.label_key, locale)
    }
}

impl NamedEntity for OptionEntry {
    fn name(&self) -> &str {
        &self.label_key
    }
}

/// Derives the canonical slug for a display name: lowercase alphanumerics
/// with single underscores between words.
pub fn slugify(name: &str) -> String {
    let mut slug = String::new();
    let mut last_sep = false;
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            last_sep = false;
        } else if !slug.is_empty() && !last_sep {
            slug.push('_');
            last_sep = true;
        }
    }
    slug.trim_matches('_').to_string()
}

/// In-memory option sets for one wizard session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionCatalog {
    sets: BTreeMap<String, Vec<OptionEntry>>,
}

impl OptionCatalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in sets referenced by the shipped intake catalog.
    pub fn standard() -> Self {
        let mut catalog = Self::default();
        for (set, entries) in STANDARD_SETS {
            catalog.insert_set(
                *set,
                entries
                    .iter()
                    .map(|(slug, key)| OptionEntry::builtin(slug, key))
                    .collect(),
            );
        }
        catalog
    }

    /// Installs or replaces a whole set. Catalog bootstrap only; runtime
    /// additions go through [`OptionCatalog::add_custom`].
    pub fn insert_set(&mut self, set: impl Into<String>, entries: Vec<OptionEntry>) {
        self.sets.insert(set.into(), entries);
    }

    pub fn has_set(&self, set: &str) -> bool {
        self.sets.contains_key(set)
    }

    pub fn set_keys(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    pub fn entries(&self, set: &str) -> Option<&[OptionEntry]> {
        self.sets.get(set).map(Vec::as_slice)
    }

    pub fn contains(&self, set: &str, slug: &str) -> bool {
        self.sets
            .get(set)
            .is_some_and(|entries| entries.iter().any(|entry| entry.slug == slug))
    }

    /// Appends a custom option derived from its display name and returns the
    /// entry. Re-adding a name that slugs to an existing entry returns that
    /// entry unchanged.
    pub fn add_custom(&mut self, set: &str, display_name: &str) -> Result<OptionEntry> {
        let entry = OptionEntry::custom(display_name);
        if entry.slug.is_empty() {
            return Err(IntakeError::InvalidInput(
                "option name must contain letters or digits".into(),
            ));
        }
        let entries = self
            .sets
            .get_mut(set)
            .ok_or_else(|| IntakeError::UnknownOptionSet(set.to_string()))?;
        if let Some(existing) = entries.iter().find(|candidate| candidate.slug == entry.slug) {
            return Ok(existing.clone());
        }
        entries.push(entry.clone());
        Ok(entry)
    }

    /// Merges previously persisted custom entries into a set, skipping slugs
    /// already present.
    pub fn extend_custom(&mut self, set: &str, entries: Vec<OptionEntry>) -> Result<()> {
        let existing = self
            .sets
            .get_mut(set)
            .ok_or_else(|| IntakeError::UnknownOptionSet(set.to_string()))?;
        for entry in entries {
            if !existing.iter().any(|candidate| candidate.slug == entry.slug) {
                existing.push(entry);
            }
        }
        Ok(())
    }
}

/// Create/list contract for persisting custom options beyond a session.
pub trait OptionRepository {
    fn create(&mut self, set: &str, entry: &OptionEntry) -> Result<()>;
    fn list(&self, set: &str) -> Result<Vec<OptionEntry>>;
}

/// Process-local repository used by tests and single-run hosts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOptionRepository {
    sets: BTreeMap<String, Vec<OptionEntry>>,
}

impl InMemoryOptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OptionRepository for InMemoryOptionRepository {
    fn create(&mut self, set: &str, entry: &OptionEntry) -> Result<()> {
        let entries = self.sets.entry(set.to_string()).or_default();
        if !entries.iter().any(|candidate| candidate.slug == entry.slug) {
            entries.push(entry.clone());
        }
        Ok(())
    }

    fn list(&self, set: &str) -> Result<Vec<OptionEntry>> {
        Ok(self.sets.get(set).cloned().unwrap_or_default())
    }
}

#[rustfmt::skip]
const STANDARD_SETS: &[(&str, &[(&str, &str)])] = &[
    ("sex", &[
        ("mare", "option.sex.mare"),
        ("stallion", "option.sex.stallion"),
        ("gelding", "option.sex.gelding"),
        ("colt", "option.sex.colt"),
        ("filly", "option.sex.filly"),
    ]),
    ("color", &[
        ("bay", "option.color.bay"),
        ("chestnut", "option.color.chestnut"),
        ("grey", "option.color.grey"),
        ("black", "option.color.black"),
        ("palomino", "option.color.palomino"),
        ("roan", "option.color.roan"),
        ("dun", "option.color.dun"),
    ]),
    ("registry", &[
        ("jockey_club", "option.registry.jockey_club"),
        ("aqha", "option.registry.aqha"),
        ("warmblood_registry", "option.registry.warmblood_registry"),
        ("arabian_registry", "option.registry.arabian_registry"),
    ]),
    ("health_status", &[
        ("sound", "option.health_status.sound"),
        ("recovering", "option.health_status.recovering"),
        ("under_treatment", "option.health_status.under_treatment"),
    ]),
    ("discipline", &[
        ("dressage", "option.discipline.dressage"),
        ("show_jumping", "option.discipline.show_jumping"),
        ("eventing", "option.discipline.eventing"),
        ("racing", "option.discipline.racing"),
        ("western", "option.discipline.western"),
        ("endurance", "option.discipline.endurance"),
    ]),
    ("racing_class", &[
        ("flat", "option.racing_class.flat"),
        ("steeplechase", "option.racing_class.steeplechase"),
        ("harness", "option.racing_class.harness"),
    ]),
    ("racing_distance", &[
        ("sprint", "option.racing_distance.sprint"),
        ("mile", "option.racing_distance.mile"),
        ("middle", "option.racing_distance.middle"),
        ("staying", "option.racing_distance.staying"),
    ]),
    ("stabling_type", &[
        ("stall", "option.stabling_type.stall"),
        ("paddock", "option.stabling_type.paddock"),
        ("pasture", "option.stabling_type.pasture"),
    ]),
    ("turnout_group", &[
        ("mares", "option.turnout_group.mares"),
        ("geldings", "option.turnout_group.geldings"),
        ("youngstock", "option.turnout_group.youngstock"),
        ("mixed", "option.turnout_group.mixed"),
    ]),
    ("insurer", &[
        ("equisure", "option.insurer.equisure"),
        ("paddock_mutual", "option.insurer.paddock_mutual"),
        ("bridleway", "option.insurer.bridleway"),
    ]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_is_deterministic_and_canonical() {
        assert_eq!(slugify("Paddock Mutual"), "paddock_mutual");
        assert_eq!(slugify("  Élan -- Stables 9 "), "lan_stables_9");
        assert_eq!(slugify(slugify("Paddock Mutual").as_str()), "paddock_mutual");
    }

    #[test]
    fn add_custom_appends_and_dedups_by_slug() {
        let mut catalog = OptionCatalog::standard();
        let entry = catalog.add_custom("insurer", "Shire & Stable").unwrap();
        assert_eq!(entry.slug, "shire_stable");
        assert!(entry.custom);
        assert!(catalog.contains("insurer", "shire_stable"));

        let again = catalog.add_custom("insurer", "shire   stable").unwrap();
        assert_eq!(again.slug, entry.slug);
        let count = catalog
            .entries("insurer")
            .unwrap()
            .iter()
            .filter(|candidate| candidate.slug == "shire_stable")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn add_custom_rejects_unknown_set_and_blank_names() {
        let mut catalog = OptionCatalog::standard();
        assert!(matches!(
            catalog.add_custom("planets", "Mars"),
            Err(IntakeError::UnknownOptionSet(_))
        ));
        assert!(matches!(
            catalog.add_custom("insurer", "  --  "),
            Err(IntakeError::InvalidInput(_))
        ));
    }

    #[test]
    fn custom_label_falls_back_to_display_name() {
        let entry = OptionEntry::custom("Shire & Stable");
        assert_eq!(entry.label(Locale::En), "Shire & Stable");
        assert_eq!(entry.label(Locale::Ar), "Shire & Stable");
    }

    #[test]
    fn repository_round_trip() {
        let mut repo = InMemoryOptionRepository::new();
        let entry = OptionEntry::custom("Shire & Stable");
        repo.create("insurer", &entry).unwrap();
        repo.create("insurer", &entry).unwrap();
        assert_eq!(repo.list("insurer").unwrap(), vec![entry]);
        assert!(repo.list("registry").unwrap().is_empty());
    }
}
