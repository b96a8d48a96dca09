//! Helpers for classifying database errors.

/// Unique constraint guarding usernames.
pub const USERNAME_UNIQUE_CONSTRAINT: &str = "users_username_key";

/// Returns true if `e` is a unique violation on the named constraint.
pub fn is_unique_violation_on(e: &sqlx::Error, constraint: &str) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    db_err.constraint() == Some(constraint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_a_violation() {
        let err = sqlx::Error::RowNotFound;

        assert!(!is_unique_violation_on(&err, USERNAME_UNIQUE_CONSTRAINT));
    }
}
