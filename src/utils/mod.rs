//! Utility functions shared across layers.
//!
//! - [`password`] - Argon2 password hashing and verification
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod password;
