//! Registration, credential checks and bearer-token identity resolution.

use std::sync::Arc;

use crate::application::services::TokenService;
use crate::domain::entities::{NewUser, User, UserRegistration};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::utils::password::{hash_password, verify_password};

/// Service for user accounts and authentication.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    tokens: TokenService,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(repository: Arc<dyn UserRepository>, tokens: TokenService) -> Self {
        Self { repository, tokens }
    }

    /// Registers a new user, storing a salted hash of the password.
    ///
    /// The lookup before insert only gives a fast answer; the unique constraint
    /// on `users.username` decides when two registrations race.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UsernameTaken`] if the username is in use.
    /// Returns [`AppError::Internal`] on hashing or database errors.
    pub async fn create_user(&self, registration: UserRegistration) -> Result<User, AppError> {
        if self
            .repository
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::UsernameTaken);
        }

        let password_hash =
            hash_password(&registration.password).map_err(|e| AppError::internal(e.to_string()))?;

        let user = self
            .repository
            .create(NewUser {
                username: registration.username,
                password_hash,
                first_name: registration.first_name,
                last_name: registration.last_name,
            })
            .await?;

        tracing::info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] if no user has that username.
    pub async fn find_by_username(&self, username: &str) -> Result<User, AppError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(AppError::UserNotFound)
    }

    /// Checks a username/password pair.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UserNotFound`] for an unknown username.
    /// Returns [`AppError::AuthorizationFailed`] if the password does not match.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self.find_by_username(username).await?;

        match verify_password(password, &user.password_hash) {
            Ok(true) => Ok(user),
            Ok(false) => {
                tracing::warn!(user_id = user.id, "invalid credentials");
                Err(AppError::AuthorizationFailed)
            }
            Err(e) => {
                tracing::error!(user_id = user.id, error = %e, "stored password hash unusable");
                Err(AppError::AuthorizationFailed)
            }
        }
    }

    /// Issues a short-lived bearer token for `user`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if signing fails.
    pub fn issue_token(&self, user: &User) -> Result<String, AppError> {
        self.tokens.issue(user.id)
    }

    /// Resolves a bearer token to the stored user it was issued for.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AuthorizationFailed`] if the token is malformed,
    /// forged or expired.
    /// Returns [`AppError::UserNotFound`] if the user no longer exists.
    pub async fn resolve_identity(&self, token: &str) -> Result<User, AppError> {
        let claims = self.tokens.verify(token)?;

        self.repository
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| {
                tracing::warn!(user_id = claims.user_id, "token refers to missing user");
                AppError::UserNotFound
            })
    }
}
