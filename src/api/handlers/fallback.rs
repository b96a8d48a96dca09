//! Envelope-shaped responses for unmatched routes and methods.

use crate::error::AppError;

/// Any path without a route.
pub async fn not_found_handler() -> AppError {
    AppError::RouteNotFound
}

/// A known path requested with an unsupported method.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
