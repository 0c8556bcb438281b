use uuid::Uuid;

use crate::locale::Locale;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> Uuid;
}

/// Provides access to a human-friendly entity name.
pub trait NamedEntity {
    fn name(&self) -> &str;
}

/// Resolves display text through the label table for a given locale.
pub trait Localized {
    fn label_key(&self) -> &str;

    fn label(&self, locale: Locale) -> &str {
        crate::locale::label(self.label_key(), locale)
    }
}

// Re-export common dependencies so consumers can rely on this module as a façade.
pub use chrono;
pub use serde;
pub use uuid;
