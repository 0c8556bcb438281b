//! Per-field and per-stage validation over the active field set.
//!
//! Gate failures are expected, user-facing conditions: every operation here
//! reports issues as plain return values for inline rendering and never
//! returns an error. Hidden (inactive) fields are never evaluated, so a
//! field suppressed by a dependency predicate cannot block progress.

use std::fmt;

use crate::catalog::options::OptionCatalog;
use crate::catalog::Catalog;
use crate::core::resolver::DependencyResolver;
use crate::domain::field::{Constraint, FieldSpec, FieldValue, ValueType};
use crate::domain::record::RecordDraft;
use crate::domain::stage::StageDefinition;

/// Machine-readable explanation for a rejected answer. Hosts localize the
/// rendering; the core only names the violated rule.
#[derive(Debug, Clone, PartialEq)]
pub enum IssueReason {
    /// Required field left unanswered.
    Missing,
    WrongType { expected: ValueType },
    Empty,
    TooLong { max: usize },
    OutOfRange { min: Option<f64>, max: Option<f64> },
    UnknownOption { set: String },
}

impl fmt::Display for IssueReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssueReason::Missing => f.write_str("value is required"),
            IssueReason::WrongType { expected } => write!(f, "expected a {} value", expected),
            IssueReason::Empty => f.write_str("value cannot be empty"),
            IssueReason::TooLong { max } => write!(f, "value cannot exceed {} characters", max),
            IssueReason::OutOfRange { min, max } => match (min, max) {
                (Some(min), Some(max)) => write!(f, "value must be between {} and {}", min, max),
                (Some(min), None) => write!(f, "value must be at least {}", min),
                (None, Some(max)) => write!(f, "value must be at most {}", max),
                (None, None) => f.write_str("value is out of range"),
            },
            IssueReason::UnknownOption { set } => {
                write!(f, "value is not a known `{}` option", set)
            }
        }
    }
}

/// One rejected field, surfaced inline by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldIssue {
    pub field: String,
    pub reason: IssueReason,
}

impl FieldIssue {
    fn new(spec: &FieldSpec, reason: IssueReason) -> Self {
        Self {
            field: spec.key.to_string(),
            reason,
        }
    }
}

/// Decides whether a stage's active, required fields are all valid.
pub struct ValidationGate<'a> {
    catalog: &'a Catalog,
    options: &'a OptionCatalog,
}

impl<'a> ValidationGate<'a> {
    pub fn new(catalog: &'a Catalog, options: &'a OptionCatalog) -> Self {
        Self { catalog, options }
    }

    /// Validates one answer against its spec; `None` means valid. An absent
    /// answer is valid for optional fields and `Missing` for required ones.
    pub fn check_field(
        &self,
        spec: &FieldSpec,
        value: Option<&FieldValue>,
    ) -> Option<FieldIssue> {
        let Some(value) = value else {
            return spec
                .required
                .then(|| FieldIssue::new(spec, IssueReason::Missing));
        };
        if value.value_type() != spec.value_type {
            return Some(FieldIssue::new(
                spec,
                IssueReason::WrongType {
                    expected: spec.value_type,
                },
            ));
        }
        for constraint in &spec.constraints {
            if let Some(reason) = check_constraint(constraint, value) {
                return Some(FieldIssue::new(spec, reason));
            }
        }
        if let Some(set) = spec.option_set {
            if let Some(reason) = self.check_membership(set, value) {
                return Some(FieldIssue::new(spec, reason));
            }
        }
        None
    }

    /// Issues for every active field of the stage, in stage field order.
    pub fn stage_issues(&self, stage: &StageDefinition, draft: &RecordDraft) -> Vec<FieldIssue> {
        let resolver = DependencyResolver::new(self.catalog);
        self.catalog
            .stage_fields(stage)
            .filter(|spec| resolver.is_active(spec, draft))
            .filter_map(|spec| self.check_field(spec, draft.get(spec.key)))
            .collect()
    }

    pub fn is_stage_valid(&self, stage: &StageDefinition, draft: &RecordDraft) -> bool {
        self.stage_issues(stage, draft).is_empty()
    }

    /// Issues across every stage; the submission pre-check.
    pub fn all_issues(&self, draft: &RecordDraft) -> Vec<FieldIssue> {
        self.catalog
            .stages()
            .iter()
            .flat_map(|stage| self.stage_issues(stage, draft))
            .collect()
    }

    fn check_membership(&self, set: &str, value: &FieldValue) -> Option<IssueReason> {
        let unknown = |slug: &str| {
            (!self.options.contains(set, slug)).then(|| IssueReason::UnknownOption {
                set: set.to_string(),
            })
        };
        match value {
            FieldValue::Choice(slug) => unknown(slug),
            FieldValue::List(items) => items.iter().find_map(|item| unknown(item)),
            _ => None,
        }
    }
}

fn check_constraint(constraint: &Constraint, value: &FieldValue) -> Option<IssueReason> {
    match (constraint, value) {
        (Constraint::NonEmpty, FieldValue::Text(text)) => {
            text.trim().is_empty().then_some(IssueReason::Empty)
        }
        (Constraint::MaxLength(max), FieldValue::Text(text)) => (text.chars().count() > *max)
            .then_some(IssueReason::TooLong { max: *max }),
        (Constraint::NumberRange { min, max }, FieldValue::Number(number)) => {
            let below = min.is_some_and(|bound| *number < bound);
            let above = max.is_some_and(|bound| *number > bound);
            (below || above).then_some(IssueReason::OutOfRange {
                min: *min,
                max: *max,
            })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::core::resolver::DependencyResolver;

    fn gate_fixtures() -> (&'static Catalog, OptionCatalog) {
        (Catalog::intake(), OptionCatalog::standard())
    }

    #[test]
    fn required_field_gates_the_stage_optional_does_not() {
        let (catalog, options) = gate_fixtures();
        let gate = ValidationGate::new(catalog, &options);
        let resolver = DependencyResolver::new(catalog);
        let stage = catalog.stage(0).unwrap();
        let mut draft = RecordDraft::new();

        // Required fields missing: name, foaling date, sex.
        let issues = gate.stage_issues(stage, &draft);
        assert_eq!(issues.len(), 3);
        assert!(issues
            .iter()
            .all(|issue| issue.reason == IssueReason::Missing));

        resolver
            .apply_change(&mut draft, "name", FieldValue::text("Aldebaran"))
            .unwrap();
        resolver
            .apply_change(
                &mut draft,
                "foaling_date",
                FieldValue::Date(chrono::NaiveDate::from_ymd_opt(2019, 4, 2).unwrap()),
            )
            .unwrap();
        resolver
            .apply_change(&mut draft, "sex", FieldValue::choice("mare"))
            .unwrap();

        // Optional color/microchip/markings untouched: still valid.
        assert!(gate.is_stage_valid(stage, &draft));
    }

    #[test]
    fn hidden_required_field_cannot_block_progress() {
        let (catalog, options) = gate_fixtures();
        let gate = ValidationGate::new(catalog, &options);
        let resolver = DependencyResolver::new(catalog);
        let stage = catalog.stage(1).unwrap();
        let mut draft = RecordDraft::new();

        resolver
            .apply_change(&mut draft, "owner_name", FieldValue::text("E. Marsh"))
            .unwrap();
        resolver
            .apply_change(&mut draft, "owner_contact", FieldValue::text("e@marsh.example"))
            .unwrap();
        // co_owner_name is required but inactive while co_owned is unset.
        assert!(gate.is_stage_valid(stage, &draft));

        resolver
            .apply_change(&mut draft, "co_owned", FieldValue::Boolean(true))
            .unwrap();
        let issues = gate.stage_issues(stage, &draft);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "co_owner_name");
        assert_eq!(issues[0].reason, IssueReason::Missing);
    }

    #[test]
    fn constraints_reject_out_of_band_values() {
        let (catalog, options) = gate_fixtures();
        let gate = ValidationGate::new(catalog, &options);

        let weight = catalog.field("weight_kg").unwrap();
        assert!(gate.check_field(weight, Some(&FieldValue::Number(450.0))).is_none());
        let issue = gate
            .check_field(weight, Some(&FieldValue::Number(20.0)))
            .unwrap();
        assert!(matches!(issue.reason, IssueReason::OutOfRange { .. }));

        let name = catalog.field("name").unwrap();
        let issue = gate.check_field(name, Some(&FieldValue::text("   "))).unwrap();
        assert_eq!(issue.reason, IssueReason::Empty);
        let issue = gate
            .check_field(name, Some(&FieldValue::text("x".repeat(81))))
            .unwrap();
        assert_eq!(issue.reason, IssueReason::TooLong { max: 80 });

        let issue = gate
            .check_field(name, Some(&FieldValue::Number(7.0)))
            .unwrap();
        assert_eq!(
            issue.reason,
            IssueReason::WrongType {
                expected: ValueType::Text
            }
        );
    }

    #[test]
    fn choice_must_belong_to_its_option_set() {
        let (catalog, mut options) = gate_fixtures();
        let sex = catalog.field("sex").unwrap();
        {
            let gate = ValidationGate::new(catalog, &options);
            let issue = gate
                .check_field(sex, Some(&FieldValue::choice("unicorn")))
                .unwrap();
            assert_eq!(
                issue.reason,
                IssueReason::UnknownOption { set: "sex".into() }
            );
        }

        // Custom options validate once added to the session catalog.
        options.add_custom("insurer", "Shire & Stable").unwrap();
        let gate = ValidationGate::new(catalog, &options);
        let insurer = catalog.field("insurer").unwrap();
        assert!(gate
            .check_field(insurer, Some(&FieldValue::choice("shire_stable")))
            .is_none());
    }
}
