//! User entity: an account that can own restaurants.

/// A registered user.
///
/// `password_hash` holds an Argon2 PHC string. It never leaves the service
/// layer; response DTOs expose only the display names.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(
        id: i64,
        username: String,
        password_hash: String,
        first_name: String,
        last_name: String,
    ) -> Self {
        Self {
            id,
            username,
            password_hash,
            first_name,
            last_name,
        }
    }
}

/// Input data for inserting a user. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

/// Registration attributes as submitted by the client.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}
