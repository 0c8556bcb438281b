//! The shipped animal-intake catalog: eight ordered stages and their fields.
//!
//! Field declaration order doubles as dependency order: a dependent field
//! is always declared after the field it depends on, which the catalog
//! consistency check enforces.

use crate::domain::field::{Constraint, FieldSpec, FieldValue, Predicate, ValueType};
use crate::domain::stage::{StageDefinition, StageId};

pub(super) fn stages() -> Vec<StageDefinition> {
    vec![
        StageDefinition {
            id: StageId::Identity,
            title_key: "stage.identity.title",
            description_key: "stage.identity.description",
            field_keys: &[
                "name",
                "foaling_date",
                "sex",
                "color",
                "microchip",
                "markings",
            ],
            required: true,
        },
        StageDefinition {
            id: StageId::Ownership,
            title_key: "stage.ownership.title",
            description_key: "stage.ownership.description",
            field_keys: &[
                "owner_name",
                "owner_contact",
                "co_owned",
                "co_owner_name",
                "syndicate_share",
            ],
            required: true,
        },
        StageDefinition {
            id: StageId::Pedigree,
            title_key: "stage.pedigree.title",
            description_key: "stage.pedigree.description",
            field_keys: &[
                "registered",
                "registry",
                "registration_number",
                "sire_name",
                "dam_name",
            ],
            required: false,
        },
        StageDefinition {
            id: StageId::Health,
            title_key: "stage.health.title",
            description_key: "stage.health.description",
            field_keys: &[
                "health_status",
                "treatment_notes",
                "vaccinated",
                "last_vaccination",
                "weight_kg",
                "height_hands",
            ],
            required: true,
        },
        StageDefinition {
            id: StageId::Training,
            title_key: "stage.training.title",
            description_key: "stage.training.description",
            field_keys: &[
                "trained",
                "discipline",
                "racing_class",
                "preferred_distance",
                "trainer_name",
            ],
            required: false,
        },
        StageDefinition {
            id: StageId::Stabling,
            title_key: "stage.stabling.title",
            description_key: "stage.stabling.description",
            field_keys: &[
                "stabling_type",
                "stall_number",
                "turnout_group",
                "special_diet",
                "diet_notes",
            ],
            required: false,
        },
        StageDefinition {
            id: StageId::Insurance,
            title_key: "stage.insurance.title",
            description_key: "stage.insurance.description",
            field_keys: &[
                "insured",
                "insurer",
                "policy_number",
                "coverage_amount",
                "expiry_date",
            ],
            required: false,
        },
        StageDefinition {
            id: StageId::Media,
            title_key: "stage.media.title",
            description_key: "stage.media.description",
            field_keys: &["photos", "documents", "notes"],
            required: false,
        },
    ]
}

pub(super) fn fields() -> Vec<FieldSpec> {
    vec![
        // Identity
        FieldSpec::new("name", "field.name", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(80)),
        FieldSpec::new("foaling_date", "field.foaling_date", ValueType::Date),
        FieldSpec::new("sex", "field.sex", ValueType::Choice).with_options("sex"),
        FieldSpec::new("color", "field.color", ValueType::Choice)
            .with_options("color")
            .with_optional(),
        FieldSpec::new("microchip", "field.microchip", ValueType::Text)
            .with_constraint(Constraint::MaxLength(24))
            .with_optional(),
        FieldSpec::new("markings", "field.markings", ValueType::Text)
            .with_constraint(Constraint::MaxLength(512))
            .with_optional(),
        // Ownership
        FieldSpec::new("owner_name", "field.owner_name", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(120)),
        FieldSpec::new("owner_contact", "field.owner_contact", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(160)),
        FieldSpec::new("co_owned", "field.co_owned", ValueType::Boolean)
            .with_optional()
            .with_default(FieldValue::Boolean(false)),
        FieldSpec::new("co_owner_name", "field.co_owner_name", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(120))
            .with_dependency("co_owned", Predicate::IsTrue),
        FieldSpec::new("syndicate_share", "field.syndicate_share", ValueType::Number)
            .with_constraint(Constraint::NumberRange {
                min: Some(1.0),
                max: Some(99.0),
            })
            .with_dependency("co_owned", Predicate::IsTrue)
            .with_optional(),
        // Pedigree
        FieldSpec::new("registered", "field.registered", ValueType::Boolean)
            .with_optional()
            .with_default(FieldValue::Boolean(false)),
        FieldSpec::new("registry", "field.registry", ValueType::Choice)
            .with_options("registry")
            .with_dependency("registered", Predicate::IsTrue),
        FieldSpec::new(
            "registration_number",
            "field.registration_number",
            ValueType::Text,
        )
        .with_constraint(Constraint::NonEmpty)
        .with_constraint(Constraint::MaxLength(40))
        .with_dependency("registered", Predicate::IsTrue),
        FieldSpec::new("sire_name", "field.sire_name", ValueType::Text)
            .with_constraint(Constraint::MaxLength(80))
            .with_optional(),
        FieldSpec::new("dam_name", "field.dam_name", ValueType::Text)
            .with_constraint(Constraint::MaxLength(80))
            .with_optional(),
        // Health
        FieldSpec::new("health_status", "field.health_status", ValueType::Choice)
            .with_options("health_status"),
        FieldSpec::new("treatment_notes", "field.treatment_notes", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(512))
            .with_dependency(
                "health_status",
                Predicate::Equals(FieldValue::Choice("under_treatment".into())),
            ),
        FieldSpec::new("vaccinated", "field.vaccinated", ValueType::Boolean)
            .with_optional()
            .with_default(FieldValue::Boolean(false)),
        FieldSpec::new("last_vaccination", "field.last_vaccination", ValueType::Date)
            .with_dependency("vaccinated", Predicate::IsTrue),
        FieldSpec::new("weight_kg", "field.weight_kg", ValueType::Number)
            .with_constraint(Constraint::NumberRange {
                min: Some(40.0),
                max: Some(1500.0),
            })
            .with_optional(),
        FieldSpec::new("height_hands", "field.height_hands", ValueType::Number)
            .with_constraint(Constraint::NumberRange {
                min: Some(5.0),
                max: Some(20.0),
            })
            .with_optional(),
        // Training
        FieldSpec::new("trained", "field.trained", ValueType::Boolean)
            .with_optional()
            .with_default(FieldValue::Boolean(false)),
        FieldSpec::new("discipline", "field.discipline", ValueType::Choice)
            .with_options("discipline")
            .with_dependency("trained", Predicate::IsTrue),
        FieldSpec::new("racing_class", "field.racing_class", ValueType::Choice)
            .with_options("racing_class")
            .with_dependency(
                "discipline",
                Predicate::Equals(FieldValue::Choice("racing".into())),
            ),
        FieldSpec::new(
            "preferred_distance",
            "field.preferred_distance",
            ValueType::Choice,
        )
        .with_options("racing_distance")
        .with_dependency("racing_class", Predicate::IsSet)
        .with_optional(),
        FieldSpec::new("trainer_name", "field.trainer_name", ValueType::Text)
            .with_constraint(Constraint::MaxLength(120))
            .with_dependency("trained", Predicate::IsTrue)
            .with_optional(),
        // Stabling
        FieldSpec::new("stabling_type", "field.stabling_type", ValueType::Choice)
            .with_options("stabling_type")
            .with_optional(),
        FieldSpec::new("stall_number", "field.stall_number", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(16))
            .with_dependency(
                "stabling_type",
                Predicate::Equals(FieldValue::Choice("stall".into())),
            ),
        FieldSpec::new("turnout_group", "field.turnout_group", ValueType::Choice)
            .with_options("turnout_group")
            .with_dependency("stabling_type", Predicate::AnyOf(&["paddock", "pasture"]))
            .with_optional(),
        FieldSpec::new("special_diet", "field.special_diet", ValueType::Boolean)
            .with_optional()
            .with_default(FieldValue::Boolean(false)),
        FieldSpec::new("diet_notes", "field.diet_notes", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(512))
            .with_dependency("special_diet", Predicate::IsTrue),
        // Insurance
        FieldSpec::new("insured", "field.insured", ValueType::Boolean)
            .with_optional()
            .with_default(FieldValue::Boolean(false)),
        FieldSpec::new("insurer", "field.insurer", ValueType::Choice)
            .with_options("insurer")
            .with_dependency("insured", Predicate::IsTrue),
        FieldSpec::new("policy_number", "field.policy_number", ValueType::Text)
            .with_constraint(Constraint::NonEmpty)
            .with_constraint(Constraint::MaxLength(40))
            .with_dependency("insured", Predicate::IsTrue),
        FieldSpec::new("coverage_amount", "field.coverage_amount", ValueType::Number)
            .with_constraint(Constraint::NumberRange {
                min: Some(0.0),
                max: None,
            })
            .with_dependency("insured", Predicate::IsTrue)
            .with_optional(),
        FieldSpec::new("expiry_date", "field.expiry_date", ValueType::Date)
            .with_dependency("insured", Predicate::IsTrue)
            .with_optional(),
        // Media
        FieldSpec::new("photos", "field.photos", ValueType::List)
            .with_optional()
            .with_default(FieldValue::List(Vec::new())),
        FieldSpec::new("documents", "field.documents", ValueType::List)
            .with_optional()
            .with_default(FieldValue::List(Vec::new())),
        FieldSpec::new("notes", "field.notes", ValueType::Text)
            .with_constraint(Constraint::MaxLength(1000))
            .with_optional(),
    ]
}
