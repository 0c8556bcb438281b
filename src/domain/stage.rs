//! Stage definitions and the per-stage status derived at read time.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::common::Localized;

/// Identifies one ordered step of the intake wizard.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StageId {
    Identity,
    Ownership,
    Pedigree,
    Health,
    Training,
    Stabling,
    Insurance,
    Media,
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StageId::Identity => "identity",
            StageId::Ownership => "ownership",
            StageId::Pedigree => "pedigree",
            StageId::Health => "health",
            StageId::Training => "training",
            StageId::Stabling => "stabling",
            StageId::Insurance => "insurance",
            StageId::Media => "media",
        };
        f.write_str(label)
    }
}

/// Immutable description of one wizard stage.
///
/// Display text is resolved through the label table, so a single definition
/// serves every locale; only the `title_key`/`description_key` indirection
/// differs from a hard-coded string.
#[derive(Debug, Clone)]
pub struct StageDefinition {
    pub id: StageId,
    pub title_key: &'static str,
    pub description_key: &'static str,
    /// Ordered keys of the fields shown on this stage.
    pub field_keys: &'static [&'static str],
    /// Whether the stage holds answers the facility cannot register without.
    pub required: bool,
}

impl Localized for StageDefinition {
    fn label_key(&self) -> &str {
        self.title_key
    }
}

/// Stage state derived on read from the history sets plus live validation.
///
/// `Completed` is not sticky: a stage that passed the gate once reads as
/// `VisitedIncomplete` again when a later edit invalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Unvisited,
    Current,
    VisitedIncomplete,
    Completed,
}
