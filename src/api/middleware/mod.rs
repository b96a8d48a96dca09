//! HTTP middleware and request-level extractors.
//!
//! Provides bearer token extraction and request tracing.

pub mod auth;
pub mod tracing;
