//! Signed, short-lived bearer tokens.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    /// Issued at (unix seconds).
    pub iat: i64,
    /// Expires at (unix seconds).
    pub exp: i64,
}

/// Signing parameters, taken from [`crate::config::Config::token_settings`].
#[derive(Debug, Clone)]
pub struct TokenSettings {
    pub secret: String,
    pub algorithm: Algorithm,
    pub ttl_seconds: u64,
}

/// Issues and verifies HMAC-signed JWTs carrying a user id.
///
/// Expiry is checked without leeway, so a token is accepted for exactly
/// `ttl_seconds` after issue.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    algorithm: Algorithm,
    ttl_seconds: i64,
}

impl TokenService {
    pub fn new(settings: &TokenSettings) -> Self {
        Self {
            encoding: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding: DecodingKey::from_secret(settings.secret.as_bytes()),
            algorithm: settings.algorithm,
            ttl_seconds: i64::try_from(settings.ttl_seconds).unwrap_or(i64::MAX),
        }
    }

    /// Issues a token for `user_id`, valid from now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue(&self, user_id: i64) -> Result<String, AppError> {
        self.issue_at(user_id, Utc::now())
    }

    /// Issues a token as if it had been created at `issued_at`.
    ///
    /// Deterministic for a given user, instant and key.
    pub fn issue_at(&self, user_id: i64, issued_at: DateTime<Utc>) -> Result<String, AppError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            user_id,
            iat,
            exp: iat.saturating_add(self.ttl_seconds),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("failed to sign token: {e}")))
    }

    /// Verifies signature, algorithm and expiry.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthorizationFailed`] for malformed, forged or
    /// expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "token rejected");
                AppError::AuthorizationFailed
            })
    }
}
