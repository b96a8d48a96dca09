//! DTOs for user registration and login.

use serde::Serialize;

use crate::api::extract::Fields;
use crate::domain::entities::{User, UserRegistration};
use crate::error::AppError;

/// User as returned to clients: display names only.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserItem {
    pub first_name: String,
    pub last_name: String,
}

impl From<User> for UserItem {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Login credentials.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

fn required_text(fields: &Fields, key: &str) -> Result<String, AppError> {
    fields
        .text(key)
        .ok_or_else(|| AppError::validation(crate::api::validation::MISSING_MESSAGE))
}

impl TryFrom<&Fields> for Credentials {
    type Error = AppError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        Ok(Self {
            username: required_text(fields, "username")?,
            password: required_text(fields, "password")?,
        })
    }
}

impl TryFrom<&Fields> for UserRegistration {
    type Error = AppError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        Ok(Self {
            username: required_text(fields, "username")?,
            password: required_text(fields, "password")?,
            first_name: required_text(fields, "firstName")?,
            last_name: required_text(fields, "lastName")?,
        })
    }
}
