pub mod common;
pub mod field;
pub mod record;
pub mod stage;

pub use common::{Identifiable, Localized, NamedEntity};
pub use field::{Constraint, DependsOn, FieldSpec, FieldValue, Predicate, ValueType};
pub use record::{FinalRecord, RecordDraft};
pub use stage::{StageDefinition, StageId, StageStatus};
