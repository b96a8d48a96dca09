//! Extractors that collect raw request input for rule-set validation.
//!
//! Handlers validate the raw field map before anything else runs, so these
//! extractors only parse. Typed access happens afterwards through the helpers
//! on [`Fields`].

use std::collections::HashMap;

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use serde_json::{Map, Value};

use crate::api::validation::{RuleSet, integer_of, text_of};
use crate::error::AppError;

/// Raw input fields of a request body or query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(pub Map<String, Value>);

impl Fields {
    /// Validates these fields against `rules`.
    pub fn validate(&self, rules: &RuleSet) -> Result<(), AppError> {
        rules.validate(&self.0)
    }

    /// Textual value of `key`; `None` when absent, `null` or not a scalar.
    pub fn text(&self, key: &str) -> Option<String> {
        self.0.get(key).and_then(text_of)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.0.get(key).and_then(integer_of)
    }

    /// Strict boolean: `true`/`false` as JSON booleans or text.
    pub fn flag(&self, key: &str) -> Option<bool> {
        match self.text(key)?.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }
}

impl<const N: usize> From<[(&str, Value); N]> for Fields {
    fn from(pairs: [(&str, Value); N]) -> Self {
        Self(pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect())
    }
}

fn from_pairs(pairs: HashMap<String, String>) -> Fields {
    Fields(
        pairs
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect(),
    )
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

/// Body accepted as a JSON object or a urlencoded form. An empty body
/// yields no fields.
impl<S> FromRequest<S> for Fields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(pairs) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::validation(e.body_text()))?;
            return Ok(from_pairs(pairs));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => Ok(Self(map)),
            Ok(_) => Err(AppError::validation("Request body must be a JSON object")),
            Err(e) => Err(AppError::validation(format!("Invalid JSON body: {e}"))),
        }
    }
}

/// Query string parameters, every value kept as text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryFields(pub Fields);

impl<S> FromRequestParts<S> for QueryFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        Ok(Self(from_pairs(pairs)))
    }
}
