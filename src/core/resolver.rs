//! Conditional field activity and cascading resets.
//!
//! Dependencies are declared as field → predicate over an earlier field.
//! The catalog guarantees declaration order is topological, so one ordered
//! sweep settles every downstream reset deterministically, however many
//! hops the chain runs.

use tracing::debug;

use crate::catalog::Catalog;
use crate::domain::field::{FieldSpec, FieldValue};
use crate::domain::record::RecordDraft;
use crate::errors::{IntakeError, Result};

/// Computes which fields are currently relevant and prunes answers whose
/// governing predicate no longer holds.
#[derive(Debug, Clone, Copy)]
pub struct DependencyResolver<'a> {
    catalog: &'a Catalog,
}

/// Result of [`DependencyResolver::apply_change`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeOutcome {
    /// False when the write matched the existing answer and nothing moved.
    pub applied: bool,
    /// Keys removed by the cascade, in declaration order.
    pub removed: Vec<String>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Every field whose predicate (or absence of one) holds against the
    /// draft, in declaration order.
    pub fn active_fields(&self, draft: &RecordDraft) -> Vec<&'a FieldSpec> {
        self.catalog
            .fields()
            .iter()
            .filter(|spec| self.is_active(spec, draft))
            .collect()
    }

    /// Whether the field's governing predicate currently holds. Drafts
    /// maintained through this resolver never hold answers for inactive
    /// fields, so a single predicate check covers chained dependencies.
    pub fn is_active(&self, spec: &FieldSpec, draft: &RecordDraft) -> bool {
        match &spec.depends_on {
            None => true,
            Some(dep) => dep.predicate.holds(draft.get(dep.field)),
        }
    }

    /// Sets `key`, then removes every answer invalidated by the change,
    /// however many dependency hops downstream.
    ///
    /// Setting a field to its current value is a no-op: no cascade runs and
    /// no unrelated entry is touched. A write to a known but currently
    /// inactive field is accepted and immediately swept back out, which
    /// keeps the cascading-reset invariant without a separate error path.
    pub fn apply_change(
        &self,
        draft: &mut RecordDraft,
        key: &str,
        value: FieldValue,
    ) -> Result<ChangeOutcome> {
        if self.catalog.field(key).is_none() {
            return Err(IntakeError::UnknownField(key.to_string()));
        }
        if draft.get(key) == Some(&value) {
            return Ok(ChangeOutcome::default());
        }
        draft.insert(key, value);
        let removed = self.sweep(draft);
        Ok(ChangeOutcome {
            applied: true,
            removed,
        })
    }

    /// Removes an answer outright, cascading like any other change.
    pub fn clear(&self, draft: &mut RecordDraft, key: &str) -> Result<ChangeOutcome> {
        if self.catalog.field(key).is_none() {
            return Err(IntakeError::UnknownField(key.to_string()));
        }
        if draft.remove(key).is_none() {
            return Ok(ChangeOutcome::default());
        }
        let removed = self.sweep(draft);
        Ok(ChangeOutcome {
            applied: true,
            removed,
        })
    }

    fn sweep(&self, draft: &mut RecordDraft) -> Vec<String> {
        let mut removed = Vec::new();
        for spec in self.catalog.fields() {
            if draft.contains(spec.key) && !self.is_active(spec, draft) {
                draft.remove(spec.key);
                removed.push(spec.key.to_string());
                debug!(field = spec.key, "dependency reset removed answer");
            }
        }
        removed
    }
}
