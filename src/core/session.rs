//! Navigation state machine for one wizard run.
//!
//! The session owns the draft and the navigation history. `visited` and
//! `completed` record *history* only: whether a stage has ever been reached
//! or has ever passed the gate; current validity is re-derived on every
//! status read, so a stage completed earlier and invalidated by a later edit
//! reads as visited-incomplete without any eager bookkeeping.

use std::collections::BTreeSet;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::options::{OptionCatalog, OptionEntry};
use crate::catalog::Catalog;
use crate::core::assembler::{assemble, IntakeHost};
use crate::core::gate::{FieldIssue, ValidationGate};
use crate::core::resolver::{ChangeOutcome, DependencyResolver};
use crate::domain::field::FieldValue;
use crate::domain::record::{FinalRecord, RecordDraft};
use crate::domain::stage::{StageDefinition, StageId, StageStatus};
use crate::errors::{IntakeError, Result};
use crate::locale::{label, Locale};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    Submitting,
    Finished,
    Cancelled,
}

/// Outcome of a forward navigation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum NextOutcome {
    Advanced { to: StageId },
    /// Already on the final stage and it passes the gate; call
    /// [`WizardSession::submit`].
    ReadyToSubmit,
    /// The gate refused; the offending fields are reported, not thrown.
    Blocked(Vec<FieldIssue>),
}

/// Outcome of a jump request.
#[derive(Debug, Clone, PartialEq)]
pub enum JumpOutcome {
    Moved { to: StageId },
    /// Only previously visited stages and the first never-visited stage are
    /// reachable; skipping further ahead is refused.
    NotAllowed,
}

/// Outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Saved(Uuid),
    /// Some stage still has invalid or missing required answers.
    Blocked(Vec<FieldIssue>),
    /// The host rejected the record; the session survives for a retry.
    SaveFailed(String),
}

/// The aggregate root for one wizard run.
pub struct WizardSession<'a> {
    id: Uuid,
    catalog: &'a Catalog,
    options: OptionCatalog,
    locale: Locale,
    draft: RecordDraft,
    current: usize,
    visited: BTreeSet<StageId>,
    completed: BTreeSet<StageId>,
    state: SessionState,
}

impl<'a> WizardSession<'a> {
    /// Opens a fresh session on stage 0 with the standard option sets.
    pub fn new(catalog: &'a Catalog, locale: Locale) -> Self {
        Self::with_options(catalog, locale, OptionCatalog::standard())
    }

    /// Opens a fresh session with a caller-seeded option catalog (e.g. one
    /// extended with custom options from an option repository).
    pub fn with_options(catalog: &'a Catalog, locale: Locale, options: OptionCatalog) -> Self {
        let mut visited = BTreeSet::new();
        if let Some(first) = catalog.stage(0) {
            visited.insert(first.id);
        }
        let session = Self {
            id: Uuid::new_v4(),
            catalog,
            options,
            locale,
            draft: RecordDraft::new(),
            current: 0,
            visited,
            completed: BTreeSet::new(),
            state: SessionState::Active,
        };
        info!(session = %session.id, locale = %locale, "wizard session opened");
        session
    }

    /// Reopens a session pre-populated from an existing record (edit mode).
    ///
    /// Values are replayed through the resolver in declaration order so the
    /// dependency invariants hold; every stage counts as visited, and stages
    /// that validate against the replayed draft count as completed.
    pub fn resume(
        catalog: &'a Catalog,
        locale: Locale,
        options: OptionCatalog,
        record: &FinalRecord,
    ) -> Result<Self> {
        for key in record.values.keys() {
            if catalog.field(key).is_none() {
                return Err(IntakeError::UnknownField(key.clone()));
            }
        }
        let mut session = Self::with_options(catalog, locale, options);
        let resolver = DependencyResolver::new(catalog);
        for spec in catalog.fields() {
            if let Some(value) = record.values.get(spec.key) {
                resolver.apply_change(&mut session.draft, spec.key, value.clone())?;
            }
        }
        let gate = ValidationGate::new(catalog, &session.options);
        for stage in catalog.stages() {
            session.visited.insert(stage.id);
            if gate.is_stage_valid(stage, &session.draft) {
                session.completed.insert(stage.id);
            }
        }
        debug!(session = %session.id, record = %record.id, "session resumed for edit");
        Ok(session)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn draft(&self) -> &RecordDraft {
        &self.draft
    }

    pub fn options(&self) -> &OptionCatalog {
        &self.options
    }

    pub fn stage_count(&self) -> usize {
        self.catalog.stage_count()
    }

    pub fn current_stage_index(&self) -> usize {
        self.current
    }

    pub fn current_stage(&self) -> &StageDefinition {
        &self.catalog.stages()[self.current]
    }

    /// Routes a draft mutation through the dependency resolver.
    pub fn apply(&mut self, key: &str, value: FieldValue) -> Result<ChangeOutcome> {
        self.ensure_active()?;
        let resolver = DependencyResolver::new(self.catalog);
        resolver.apply_change(&mut self.draft, key, value)
    }

    /// Removes an answer, cascading like any other change.
    pub fn clear(&mut self, key: &str) -> Result<ChangeOutcome> {
        self.ensure_active()?;
        let resolver = DependencyResolver::new(self.catalog);
        resolver.clear(&mut self.draft, key)
    }

    /// Appends a custom option for the rest of the session. Persisting it
    /// beyond the session is the host's job via an option repository.
    pub fn add_custom_option(&mut self, set: &str, display_name: &str) -> Result<OptionEntry> {
        self.ensure_active()?;
        self.options.add_custom(set, display_name)
    }

    /// Gate issues for the stage the user is currently on.
    pub fn current_issues(&self) -> Vec<FieldIssue> {
        let catalog = self.catalog;
        ValidationGate::new(catalog, &self.options)
            .stage_issues(self.current_stage(), &self.draft)
    }

    /// Derives the status of a stage from history plus live validation.
    pub fn stage_status(&self, index: usize) -> StageStatus {
        let catalog = self.catalog;
        let Some(stage) = catalog.stage(index) else {
            return StageStatus::Unvisited;
        };
        if index == self.current {
            return StageStatus::Current;
        }
        if !self.visited.contains(&stage.id) {
            return StageStatus::Unvisited;
        }
        let gate = ValidationGate::new(catalog, &self.options);
        if self.completed.contains(&stage.id) && gate.is_stage_valid(stage, &self.draft) {
            StageStatus::Completed
        } else {
            StageStatus::VisitedIncomplete
        }
    }

    /// Advances past the current stage if it passes the gate.
    pub fn go_next(&mut self) -> Result<NextOutcome> {
        self.ensure_active()?;
        let catalog = self.catalog;
        let stage = &catalog.stages()[self.current];
        let issues = ValidationGate::new(catalog, &self.options).stage_issues(stage, &self.draft);
        if !issues.is_empty() {
            debug!(stage = %stage.id, issues = issues.len(), "gate refused advance");
            return Ok(NextOutcome::Blocked(issues));
        }
        self.completed.insert(stage.id);
        if self.current + 1 == catalog.stage_count() {
            info!(stage = %stage.id, "final stage complete; ready to submit");
            return Ok(NextOutcome::ReadyToSubmit);
        }
        self.current += 1;
        let next = catalog.stages()[self.current].id;
        self.visited.insert(next);
        debug!(to = %next, "advanced to next stage");
        Ok(NextOutcome::Advanced { to: next })
    }

    /// Steps back one stage; history is untouched.
    pub fn go_previous(&mut self) -> Result<bool> {
        self.ensure_active()?;
        if self.current == 0 {
            return Ok(false);
        }
        self.current -= 1;
        Ok(true)
    }

    /// Jumps to a previously visited stage or the first never-visited one.
    pub fn jump_to(&mut self, index: usize) -> Result<JumpOutcome> {
        self.ensure_active()?;
        let catalog = self.catalog;
        let Some(stage) = catalog.stage(index) else {
            return Ok(JumpOutcome::NotAllowed);
        };
        let first_unvisited = catalog
            .stages()
            .iter()
            .position(|candidate| !self.visited.contains(&candidate.id));
        let allowed = self.visited.contains(&stage.id) || first_unvisited == Some(index);
        if !allowed {
            debug!(requested = index, "jump past first unvisited stage refused");
            return Ok(JumpOutcome::NotAllowed);
        }
        self.current = index;
        self.visited.insert(stage.id);
        Ok(JumpOutcome::Moved { to: stage.id })
    }

    /// Percentage in `[0, 100]`. The current stage counts toward progress
    /// even before it is completed. This is a UX affordance, not a correctness
    /// property: the user sees more than 0% while sitting on an invalid
    /// first stage, and exactly 100% once the final stage completes.
    pub fn progress(&self) -> f64 {
        let current_id = self.current_stage().id;
        let mut counted = self.completed.len();
        if !self.completed.contains(&current_id) {
            counted += 1;
        }
        100.0 * counted as f64 / self.catalog.stage_count() as f64
    }

    /// Localized label/value pairs for every answered active field, in stage
    /// order, for a review step before submission.
    pub fn summary(&self) -> Vec<(String, String)> {
        let resolver = DependencyResolver::new(self.catalog);
        let mut entries = Vec::new();
        for stage in self.catalog.stages() {
            for spec in self.catalog.stage_fields(stage) {
                if !resolver.is_active(spec, &self.draft) {
                    continue;
                }
                if let Some(value) = self.draft.get(spec.key) {
                    entries.push((
                        label(spec.label_key, self.locale).to_string(),
                        self.render_value(spec.option_set, value),
                    ));
                }
            }
        }
        entries
    }

    /// Validates the whole record and hands it to the host.
    ///
    /// A rejected save preserves the session: the draft is intact, the user
    /// stays on the final stage, and a retry is possible. Re-entrant calls
    /// while a save is outstanding are refused.
    pub fn submit(&mut self, host: &mut dyn IntakeHost) -> Result<SubmitOutcome> {
        match self.state {
            SessionState::Submitting => return Err(IntakeError::SubmissionInProgress),
            SessionState::Finished | SessionState::Cancelled => {
                return Err(IntakeError::SessionFinished)
            }
            SessionState::Active => {}
        }
        let catalog = self.catalog;
        let issues = ValidationGate::new(catalog, &self.options).all_issues(&self.draft);
        if !issues.is_empty() {
            debug!(session = %self.id, issues = issues.len(), "submission blocked by gate");
            return Ok(SubmitOutcome::Blocked(issues));
        }
        self.state = SessionState::Submitting;
        let record = assemble(catalog, &self.draft, self.locale);
        let record_id = record.id;
        info!(session = %self.id, record = %record_id, "submitting intake record");
        match host.save(record) {
            Ok(()) => {
                self.state = SessionState::Finished;
                if let Some(last) = catalog.stages().last() {
                    self.completed.insert(last.id);
                }
                Ok(SubmitOutcome::Saved(record_id))
            }
            Err(err) => {
                warn!(session = %self.id, reason = %err.reason, "host rejected save");
                self.state = SessionState::Active;
                Ok(SubmitOutcome::SaveFailed(err.reason))
            }
        }
    }

    /// Discards the session; no partial save. Refused while a save is
    /// outstanding; the submission settles first.
    pub fn cancel(&mut self, host: &mut dyn IntakeHost) -> Result<()> {
        match self.state {
            SessionState::Submitting => Err(IntakeError::SubmissionInProgress),
            SessionState::Finished | SessionState::Cancelled => {
                Err(IntakeError::SessionFinished)
            }
            SessionState::Active => {
                self.state = SessionState::Cancelled;
                self.draft = RecordDraft::new();
                info!(session = %self.id, "wizard session cancelled");
                host.cancel();
                Ok(())
            }
        }
    }

    fn ensure_active(&self) -> Result<()> {
        match self.state {
            SessionState::Active => Ok(()),
            SessionState::Submitting => Err(IntakeError::SubmissionInProgress),
            SessionState::Finished | SessionState::Cancelled => Err(IntakeError::SessionFinished),
        }
    }

    fn render_value(&self, option_set: Option<&str>, value: &FieldValue) -> String {
        let option_label = |slug: &str| -> String {
            option_set
                .and_then(|set| self.options.entries(set))
                .and_then(|entries| entries.iter().find(|entry| entry.slug == slug))
                .map(|entry| entry.label(self.locale).to_string())
                .unwrap_or_else(|| slug.to_string())
        };
        match value {
            FieldValue::Choice(slug) => option_label(slug),
            FieldValue::List(items) => items
                .iter()
                .map(|item| option_label(item))
                .collect::<Vec<_>>()
                .join(", "),
            other => other.to_string(),
        }
    }
}
