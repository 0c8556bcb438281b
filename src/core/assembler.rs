//! Final record assembly and the host submission contract.

use std::collections::BTreeMap;

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::core::resolver::DependencyResolver;
use crate::domain::record::{FinalRecord, RecordDraft};
use crate::errors::SaveError;
use crate::locale::Locale;

/// Persistence/navigation surface supplied by the caller.
///
/// The host owns storage, navigation-away, and user feedback; the wizard
/// core only hands over the finished record or announces cancellation. The
/// contract is synchronous; a host that talks to a slow backend bounds the
/// wait itself and reports a deadline miss through [`SaveError`].
pub trait IntakeHost {
    fn save(&mut self, record: FinalRecord) -> Result<(), SaveError>;
    fn cancel(&mut self);
}

/// Copies the draft into a final record.
///
/// Every active optional field left unanswered receives its declared default
/// (empty list for multi-value fields, `false` for booleans). Inactive
/// fields are omitted entirely so the record never contradicts the
/// dependency graph.
pub fn assemble(catalog: &Catalog, draft: &RecordDraft, locale: Locale) -> FinalRecord {
    let resolver = DependencyResolver::new(catalog);
    let mut values = BTreeMap::new();
    for spec in resolver.active_fields(draft) {
        match draft.get(spec.key) {
            Some(value) => {
                values.insert(spec.key.to_string(), value.clone());
            }
            None => {
                if let Some(default) = &spec.default {
                    values.insert(spec.key.to_string(), default.clone());
                }
            }
        }
    }
    FinalRecord {
        id: Uuid::new_v4(),
        locale,
        assembled_at: Utc::now(),
        values,
    }
}
