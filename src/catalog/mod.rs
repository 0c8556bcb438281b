//! Stage catalog: ordered stage definitions, the field schema they
//! reference, and the fail-fast consistency check run at startup.

pub mod options;

mod intake;

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;

use crate::domain::field::{FieldSpec, ValueType};
use crate::domain::stage::StageDefinition;
use crate::errors::CatalogError;
use options::OptionCatalog;

/// Ordered stages plus the field schema they reference.
///
/// Construction runs the full consistency check; a `Catalog` value is always
/// internally coherent, so downstream components index into it without
/// re-validating.
#[derive(Debug, Clone)]
pub struct Catalog {
    stages: Vec<StageDefinition>,
    fields: Vec<FieldSpec>,
    index: HashMap<&'static str, usize>,
}

static INTAKE: Lazy<Catalog> = Lazy::new(|| {
    Catalog::new(
        intake::stages(),
        intake::fields(),
        &OptionCatalog::standard(),
    )
    .expect("shipped intake catalog is consistent")
});

impl Catalog {
    /// Builds a catalog, verifying it against the option sets the session
    /// will start from. Inconsistencies are programming errors and surface
    /// here, at startup, never mid-session.
    pub fn new(
        stages: Vec<StageDefinition>,
        fields: Vec<FieldSpec>,
        options: &OptionCatalog,
    ) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(fields.len());
        for (position, spec) in fields.iter().enumerate() {
            if index.insert(spec.key, position).is_some() {
                return Err(CatalogError::DuplicateField(spec.key.into()));
            }
        }
        let catalog = Self {
            stages,
            fields,
            index,
        };
        catalog.verify(options)?;
        Ok(catalog)
    }

    /// The shipped animal-intake catalog.
    pub fn intake() -> &'static Catalog {
        &INTAKE
    }

    pub fn stages(&self) -> &[StageDefinition] {
        &self.stages
    }

    pub fn stage(&self, index: usize) -> Option<&StageDefinition> {
        self.stages.get(index)
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// All field specs in declaration (and therefore dependency) order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&FieldSpec> {
        self.index.get(key).map(|position| &self.fields[*position])
    }

    /// The specs of one stage, in the stage's declared field order.
    pub fn stage_fields<'a>(
        &'a self,
        stage: &'a StageDefinition,
    ) -> impl Iterator<Item = &'a FieldSpec> {
        stage.field_keys.iter().filter_map(|key| self.field(key))
    }

    fn verify(&self, options: &OptionCatalog) -> Result<(), CatalogError> {
        let mut assigned: HashSet<&str> = HashSet::new();
        for stage in &self.stages {
            for key in stage.field_keys {
                if self.field(key).is_none() {
                    return Err(CatalogError::UnknownStageField {
                        stage: stage.id.to_string(),
                        field: (*key).into(),
                    });
                }
                if !assigned.insert(key) {
                    return Err(CatalogError::FieldInMultipleStages((*key).into()));
                }
            }
            if stage.required
                && !self
                    .stage_fields(stage)
                    .any(|spec| spec.required && spec.depends_on.is_none())
            {
                return Err(CatalogError::RequiredStageWithoutRequiredFields(
                    stage.id.to_string(),
                ));
            }
        }

        for (position, spec) in self.fields.iter().enumerate() {
            if !assigned.contains(spec.key) {
                return Err(CatalogError::UnassignedField(spec.key.into()));
            }
            if let Some(dep) = &spec.depends_on {
                // Declaration order is the evaluation order of the cascade
                // sweep, so upstream fields must be declared first.
                match self.index.get(dep.field) {
                    Some(upstream) if *upstream < position => {
                        let upstream_type = self.fields[*upstream].value_type;
                        if !dep.predicate.applies_to(upstream_type) {
                            return Err(CatalogError::PredicateTypeMismatch {
                                field: spec.key.into(),
                                upstream: dep.field.into(),
                            });
                        }
                    }
                    _ => {
                        return Err(CatalogError::BadDependency {
                            field: spec.key.into(),
                            upstream: dep.field.into(),
                        });
                    }
                }
            }
            match (spec.value_type, spec.option_set) {
                (ValueType::Choice, None) => {
                    return Err(CatalogError::MissingOptionSet(spec.key.into()));
                }
                (ValueType::Choice | ValueType::List, Some(set)) => {
                    if !options.has_set(set) {
                        return Err(CatalogError::UnknownOptionSet {
                            field: spec.key.into(),
                            set: set.into(),
                        });
                    }
                }
                (_, Some(_)) => {
                    return Err(CatalogError::UnexpectedOptionSet(spec.key.into()));
                }
                _ => {}
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::field::{FieldSpec, Predicate, ValueType};
    use crate::domain::stage::{StageDefinition, StageId};

    fn stage(id: StageId, field_keys: &'static [&'static str], required: bool) -> StageDefinition {
        StageDefinition {
            id,
            title_key: "stage.test.title",
            description_key: "stage.test.description",
            field_keys,
            required,
        }
    }

    #[test]
    fn shipped_catalog_is_consistent() {
        let catalog = Catalog::intake();
        assert_eq!(catalog.stage_count(), 8);
        assert!(catalog.field("racing_class").is_some());
        // Every stage field resolves to a spec.
        for stage in catalog.stages() {
            assert_eq!(
                catalog.stage_fields(stage).count(),
                stage.field_keys.len(),
                "stage {} references unknown fields",
                stage.id
            );
        }
    }

    #[test]
    fn dependency_must_point_at_earlier_field() {
        let fields = vec![
            FieldSpec::new("b", "field.b", ValueType::Text)
                .with_dependency("a", Predicate::IsSet),
            FieldSpec::new("a", "field.a", ValueType::Text),
        ];
        let stages = vec![stage(StageId::Identity, &["b", "a"], false)];
        let err = Catalog::new(stages, fields, &OptionCatalog::standard()).unwrap_err();
        assert_eq!(
            err,
            CatalogError::BadDependency {
                field: "b".into(),
                upstream: "a".into(),
            }
        );
    }

    #[test]
    fn predicate_must_fit_upstream_type() {
        let fields = vec![
            FieldSpec::new("a", "field.a", ValueType::Text),
            FieldSpec::new("b", "field.b", ValueType::Text)
                .with_dependency("a", Predicate::IsTrue),
        ];
        let stages = vec![stage(StageId::Identity, &["a", "b"], false)];
        let err = Catalog::new(stages, fields, &OptionCatalog::standard()).unwrap_err();
        assert!(matches!(err, CatalogError::PredicateTypeMismatch { .. }));
    }

    #[test]
    fn choice_field_needs_a_known_option_set() {
        let fields = vec![FieldSpec::new("a", "field.a", ValueType::Choice)];
        let stages = vec![stage(StageId::Identity, &["a"], false)];
        let err = Catalog::new(stages, fields, &OptionCatalog::standard()).unwrap_err();
        assert_eq!(err, CatalogError::MissingOptionSet("a".into()));

        let fields = vec![FieldSpec::new("a", "field.a", ValueType::Choice).with_options("nope")];
        let stages = vec![stage(StageId::Identity, &["a"], false)];
        let err = Catalog::new(stages, fields, &OptionCatalog::standard()).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownOptionSet { .. }));
    }

    #[test]
    fn every_field_belongs_to_exactly_one_stage() {
        let fields = vec![
            FieldSpec::new("a", "field.a", ValueType::Text),
            FieldSpec::new("b", "field.b", ValueType::Text),
        ];
        let stages = vec![stage(StageId::Identity, &["a"], false)];
        let err = Catalog::new(stages, fields, &OptionCatalog::standard()).unwrap_err();
        assert_eq!(err, CatalogError::UnassignedField("b".into()));

        let fields = vec![FieldSpec::new("a", "field.a", ValueType::Text)];
        let stages = vec![
            stage(StageId::Identity, &["a"], false),
            stage(StageId::Ownership, &["a"], false),
        ];
        let err = Catalog::new(stages, fields, &OptionCatalog::standard()).unwrap_err();
        assert_eq!(err, CatalogError::FieldInMultipleStages("a".into()));
    }

    #[test]
    fn required_stage_needs_an_unconditional_required_field() {
        let fields = vec![FieldSpec::new("a", "field.a", ValueType::Text).with_optional()];
        let stages = vec![stage(StageId::Identity, &["a"], true)];
        let err = Catalog::new(stages, fields, &OptionCatalog::standard()).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::RequiredStageWithoutRequiredFields(_)
        ));
    }
}
