//! Data-driven request validation.
//!
//! Each endpoint declares a [`RuleSet`]: the fields it accepts, whether each is
//! required, and the rules its value must satisfy. One generic evaluator walks
//! the set and stops at the first violation:
//!
//! 1. declared fields in declaration order (presence, then each rule in order)
//! 2. undeclared fields in key order, unless extra fields are allowed
//!
//! Type, choice and range rules ignore `null`; pair them with [`Rule::NotNull`]
//! to reject it.

pub mod rules;

use serde_json::{Map, Value};

use crate::error::AppError;

pub const MISSING_MESSAGE: &str = "This field is missing.";
pub const UNEXPECTED_MESSAGE: &str = "This field was not expected.";
pub const BLANK_MESSAGE: &str = "This value should not be blank.";
pub const NULL_MESSAGE: &str = "This value should not be null.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueType {
    String,
}

/// A single constraint on a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Rejects `null`, empty or whitespace-only strings and empty arrays.
    NotBlank,
    NotNull,
    Type(ValueType, &'static str),
    /// Value, in its textual form, must be one of the listed values.
    Choice(&'static [&'static str], &'static str),
    /// Value must be an integer (number or numeric string) `>=` the bound.
    GreaterThanOrEqual(i64, &'static str),
}

#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub presence: Presence,
    pub rules: &'static [Rule],
}

#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub fields: &'static [FieldRule],
    pub allow_extra_fields: bool,
}

impl RuleSet {
    /// Validates `input` against this set.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] carrying the message of the first violation.
    pub fn validate(&self, input: &Map<String, Value>) -> Result<(), AppError> {
        for field in self.fields {
            match input.get(field.name) {
                None if field.presence == Presence::Required => {
                    return Err(AppError::validation(MISSING_MESSAGE));
                }
                None => {}
                Some(value) => {
                    for rule in field.rules {
                        rule.check(value)?;
                    }
                }
            }
        }

        if !self.allow_extra_fields {
            let mut unexpected: Vec<&String> = input
                .keys()
                .filter(|key| !self.fields.iter().any(|f| f.name == key.as_str()))
                .collect();
            unexpected.sort();

            if let Some(key) = unexpected.first() {
                tracing::debug!(field = %key, "unexpected field");
                return Err(AppError::validation(UNEXPECTED_MESSAGE));
            }
        }

        Ok(())
    }
}

impl Rule {
    fn check(&self, value: &Value) -> Result<(), AppError> {
        let ok = match *self {
            Rule::NotBlank => !is_blank(value),
            Rule::NotNull => !value.is_null(),
            Rule::Type(ValueType::String, _) => value.is_null() || value.is_string(),
            Rule::Choice(values, _) => {
                value.is_null() || text_of(value).is_some_and(|t| values.contains(&t.as_str()))
            }
            Rule::GreaterThanOrEqual(bound, _) => {
                value.is_null() || integer_of(value).is_some_and(|n| n >= bound)
            }
        };

        if ok {
            Ok(())
        } else {
            Err(AppError::validation(self.message()))
        }
    }

    fn message(&self) -> &'static str {
        match *self {
            Rule::NotBlank => BLANK_MESSAGE,
            Rule::NotNull => NULL_MESSAGE,
            Rule::Type(_, message)
            | Rule::Choice(_, message)
            | Rule::GreaterThanOrEqual(_, message) => message,
        }
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Textual form of a scalar: strings as-is, booleans and numbers printed.
pub(crate) fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn integer_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
