//! Data Transfer Objects for API requests and responses.
//!
//! Response DTOs serialize with Serde in camelCase. Request DTOs are built
//! from already-validated [`crate::api::extract::Fields`].

pub mod envelope;
pub mod restaurant;
pub mod user;
