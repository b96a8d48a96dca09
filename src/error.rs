//! Application error type and its HTTP mapping.
//!
//! Every failure a handler can produce is an [`AppError`]. Each variant maps to
//! exactly one status code and one client-facing message, rendered through the
//! same envelope as successful responses:
//!
//! ```json
//! { "success": false, "result": [], "message": "Restaurant not found" }
//! ```
//!
//! Entity-not-found conditions answer `400 Bad Request`, not `404`. Existing
//! clients rely on that, so `404`/`405` are reserved for unmatched routes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::envelope::Envelope;

/// Unified error for services, repositories and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// First failing rule of a request rule set.
    #[error("{0}")]
    Validation(String),

    /// Missing, malformed, expired or forged token, or bad credentials.
    #[error("User authorization failed")]
    AuthorizationFailed,

    #[error("User not found")]
    UserNotFound,

    #[error("Restaurant not found")]
    RestaurantNotFound,

    #[error("Username is already taken")]
    UsernameTaken,

    /// Authenticated user does not own the target resource.
    #[error("User is not authorized to do this action")]
    UnauthorizedAction,

    #[error("There was an error with the request")]
    DeleteFailed,

    #[error("Resource not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Unexpected fault. `detail` is logged, never sent to the client.
    #[error("Internal server error")]
    Internal { detail: String },
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_)
            | AppError::RestaurantNotFound
            | AppError::UsernameTaken
            | AppError::DeleteFailed => StatusCode::BAD_REQUEST,
            AppError::AuthorizationFailed | AppError::UserNotFound => StatusCode::UNAUTHORIZED,
            AppError::UnauthorizedAction => StatusCode::FORBIDDEN,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("database error: {e}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Internal { detail } => {
                tracing::error!(%status, detail = %detail, "request failed");
            }
            AppError::AuthorizationFailed
            | AppError::UserNotFound
            | AppError::UnauthorizedAction => {
                tracing::warn!(%status, error = %self, "request rejected");
            }
            _ => tracing::debug!(%status, error = %self, "request rejected"),
        }

        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}
