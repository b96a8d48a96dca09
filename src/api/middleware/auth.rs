//! Bearer token extraction.
//!
//! Protected handlers validate their input before authenticating, so the token
//! is extracted without rejecting the request. The handler calls
//! [`BearerToken::require`] once validation has passed and resolves the
//! identity through [`crate::application::services::UserService`].

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_auth::AuthBearer;

use crate::error::AppError;

/// Token from an `Authorization: Bearer <token>` header, if one was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub Option<String>);

impl BearerToken {
    /// Returns the token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthorizationFailed`] if the header was missing or
    /// not a bearer credential.
    pub fn require(&self) -> Result<&str, AppError> {
        self.0.as_deref().ok_or_else(|| {
            tracing::warn!("missing or malformed bearer token");
            AppError::AuthorizationFailed
        })
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = AuthBearer::from_request_parts(parts, &())
            .await
            .ok()
            .map(|AuthBearer(token)| token)
            .filter(|token| !token.is_empty());

        Ok(Self(token))
    }
}
