//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses in the shared envelope.
//!
//! # Modules
//!
//! - [`dto`] - Response DTOs and conversions from validated input
//! - [`extract`] - Body and query extractors producing raw fields
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Bearer token extraction and tracing
//! - [`routes`] - Route configuration
//! - [`validation`] - Rule sets and the generic validator

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod validation;
