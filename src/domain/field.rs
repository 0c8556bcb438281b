//! Declarative field schema for the intake wizard.
//!
//! Every question the wizard can ask is described by a [`FieldSpec`]:
//! its value type and constraints, plus (for dependent fields) the upstream
//! answer that makes it active. The dependency resolver and the
//! validation gate consume these descriptions; nothing else in the crate
//! hard-codes per-field behaviour.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::Localized;

/// Supported data kinds for intake fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Text,
    Number,
    Date,
    Choice,
    Boolean,
    List,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueType::Text => "text",
            ValueType::Number => "number",
            ValueType::Date => "date",
            ValueType::Choice => "choice",
            ValueType::Boolean => "boolean",
            ValueType::List => "list",
        };
        f.write_str(label)
    }
}

/// A concrete answer held in the draft or the final record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Date(NaiveDate),
    /// Canonical slug of an option-set entry.
    Choice(String),
    Boolean(bool),
    List(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn choice(slug: impl Into<String>) -> Self {
        FieldValue::Choice(slug.into())
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            FieldValue::Text(_) => ValueType::Text,
            FieldValue::Number(_) => ValueType::Number,
            FieldValue::Date(_) => ValueType::Date,
            FieldValue::Choice(_) => ValueType::Choice,
            FieldValue::Boolean(_) => ValueType::Boolean,
            FieldValue::List(_) => ValueType::List,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(value) | FieldValue::Choice(value) => f.write_str(value),
            FieldValue::Number(value) => write!(f, "{}", value),
            FieldValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
            FieldValue::Boolean(value) => f.write_str(if *value { "yes" } else { "no" }),
            FieldValue::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// Declarative constraints checked by the validation gate.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Text answers must contain non-whitespace content.
    NonEmpty,
    MaxLength(usize),
    NumberRange { min: Option<f64>, max: Option<f64> },
}

/// Describes when a dependent field is active.
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Upstream answer equals the given value.
    Equals(FieldValue),
    /// Upstream choice is one of the listed slugs.
    AnyOf(&'static [&'static str]),
    /// Upstream boolean answer is true.
    IsTrue,
    /// Upstream field holds any value at all.
    IsSet,
}

impl Predicate {
    /// Evaluates the predicate against the upstream answer. An absent answer
    /// never satisfies a predicate, so removing an upstream value cascades.
    pub fn holds(&self, upstream: Option<&FieldValue>) -> bool {
        let Some(value) = upstream else {
            return false;
        };
        match self {
            Predicate::Equals(expected) => value == expected,
            Predicate::AnyOf(slugs) => {
                matches!(value, FieldValue::Choice(slug) if slugs.contains(&slug.as_str()))
            }
            Predicate::IsTrue => matches!(value, FieldValue::Boolean(true)),
            Predicate::IsSet => true,
        }
    }

    /// Whether the predicate can be evaluated against an upstream field of
    /// the given type. Checked once at catalog startup.
    pub fn applies_to(&self, upstream: ValueType) -> bool {
        match self {
            Predicate::Equals(expected) => expected.value_type() == upstream,
            Predicate::AnyOf(_) => upstream == ValueType::Choice,
            Predicate::IsTrue => upstream == ValueType::Boolean,
            Predicate::IsSet => true,
        }
    }
}

/// Link from a dependent field to the upstream answer that governs it.
#[derive(Debug, Clone, PartialEq)]
pub struct DependsOn {
    pub field: &'static str,
    pub predicate: Predicate,
}

/// Declarative description of a single intake field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label_key: &'static str,
    pub value_type: ValueType,
    pub required: bool,
    pub constraints: Vec<Constraint>,
    pub depends_on: Option<DependsOn>,
    /// Option set consulted for `Choice` answers and constrained `List` items.
    pub option_set: Option<&'static str>,
    /// Filled in by the assembler when an optional field is left unanswered.
    pub default: Option<FieldValue>,
}

impl FieldSpec {
    pub fn new(key: &'static str, label_key: &'static str, value_type: ValueType) -> Self {
        Self {
            key,
            label_key,
            value_type,
            required: true,
            constraints: Vec::new(),
            depends_on: None,
            option_set: None,
            default: None,
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    pub fn with_options(mut self, set: &'static str) -> Self {
        self.option_set = Some(set);
        self
    }

    pub fn with_dependency(mut self, field: &'static str, predicate: Predicate) -> Self {
        self.depends_on = Some(DependsOn { field, predicate });
        self
    }

    pub fn with_default(mut self, value: FieldValue) -> Self {
        self.default = Some(value);
        self
    }
}

impl Localized for FieldSpec {
    fn label_key(&self) -> &str {
        self.label_key
    }
}
