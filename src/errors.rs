use std::result::Result as StdResult;

use thiserror::Error;

/// Unified error type for catalog, session, storage, and config layers.
///
/// Field and stage-gate failures are expected, user-facing conditions and are
/// reported as return values ([`crate::core::gate::FieldIssue`], outcome
/// enums), never through this type.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Catalog invalid: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Unknown option set: {0}")]
    UnknownOptionSet(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Session already finished")]
    SessionFinished,
    #[error("Submission already in progress")]
    SubmissionInProgress,
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = StdResult<T, IntakeError>;

/// Catalog consistency faults.
///
/// These are programming errors surfaced at startup by
/// [`crate::catalog::Catalog::new`], not runtime conditions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate field key: {0}")]
    DuplicateField(String),
    #[error("Stage `{stage}` references unknown field `{field}`")]
    UnknownStageField { stage: String, field: String },
    #[error("Field `{0}` is not assigned to any stage")]
    UnassignedField(String),
    #[error("Field `{0}` is assigned to more than one stage")]
    FieldInMultipleStages(String),
    #[error("Field `{field}` depends on `{upstream}`, which is unknown or declared later")]
    BadDependency { field: String, upstream: String },
    #[error("Field `{field}` predicate does not fit the type of `{upstream}`")]
    PredicateTypeMismatch { field: String, upstream: String },
    #[error("Choice field `{0}` has no option set")]
    MissingOptionSet(String),
    #[error("Field `{field}` references unknown option set `{set}`")]
    UnknownOptionSet { field: String, set: String },
    #[error("Non-enumerable field `{0}` carries an option set")]
    UnexpectedOptionSet(String),
    #[error("Required stage `{0}` has no unconditionally required field")]
    RequiredStageWithoutRequiredFields(String),
}

/// Failure reported by the host when persisting a finished record.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Save rejected: {reason}")]
pub struct SaveError {
    pub reason: String,
}

impl SaveError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        IntakeError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for IntakeError {
    fn from(err: serde_json::Error) -> Self {
        IntakeError::Storage(err.to_string())
    }
}
