//! Handlers for registration and login.

use axum::{Json, extract::State};

use crate::api::dto::envelope::Envelope;
use crate::api::dto::user::{Credentials, UserItem};
use crate::api::extract::Fields;
use crate::api::validation::rules;
use crate::domain::entities::UserRegistration;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a user and returns a bearer token for them.
///
/// # Endpoint
///
/// `POST /user`
///
/// # Errors
///
/// Returns 400 on validation failure or if the username is taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    fields: Fields,
) -> Result<Json<Envelope<UserItem>>, AppError> {
    fields.validate(&rules::CREATE_USER)?;
    let registration = UserRegistration::try_from(&fields)?;

    let user = state.user_service.create_user(registration).await?;
    let token = state.user_service.issue_token(&user)?;

    Ok(Json(Envelope::ok(UserItem::from(user)).with("token", token)))
}

/// Exchanges username and password for a bearer token.
///
/// # Endpoint
///
/// `POST /auth`
///
/// # Errors
///
/// Returns 400 on validation failure.
/// Returns 401 for an unknown username or a wrong password.
pub async fn auth_handler(
    State(state): State<AppState>,
    fields: Fields,
) -> Result<Json<Envelope<UserItem>>, AppError> {
    fields.validate(&rules::AUTH)?;
    let credentials = Credentials::try_from(&fields)?;

    let user = state
        .user_service
        .authenticate(&credentials.username, &credentials.password)
        .await
        .map_err(|e| match e {
            AppError::UserNotFound => AppError::AuthorizationFailed,
            other => other,
        })?;
    let token = state.user_service.issue_token(&user)?;

    tracing::info!(user_id = user.id, "user authenticated");
    Ok(Json(Envelope::ok(UserItem::from(user)).with("token", token)))
}

#[cfg(test)]
mod tests {
    use crate::api::handlers::test_support::{server, tokens};
    use crate::domain::entities::User;
    use crate::domain::repositories::{MockRestaurantRepository, MockUserRepository};
    use crate::utils::password::hash_password;
    use axum::http::StatusCode;
    use serde_json::{Value, json};

    fn stored_user(password: &str) -> User {
        User::new(
            5,
            "t".to_string(),
            hash_password(password).unwrap(),
            "F".to_string(),
            "L".to_string(),
        )
    }

    fn registration_body() -> Value {
        json!({ "username": "t", "password": "p", "firstName": "F", "lastName": "L" })
    }

    #[tokio::test]
    async fn test_create_user_returns_token_and_hides_password() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users.expect_create().times(1).returning(|new_user| {
            Ok(User::new(
                1,
                new_user.username,
                new_user.password_hash,
                new_user.first_name,
                new_user.last_name,
            ))
        });

        let server = server(users, MockRestaurantRepository::new());

        let response = server.post("/user").json(&registration_body()).await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["result"], json!({ "firstName": "F", "lastName": "L" }));

        let token = body["token"].as_str().unwrap();
        assert_eq!(tokens().verify(token).unwrap().user_id, 1);
    }

    #[tokio::test]
    async fn test_create_user_accepts_form_body() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));
        users.expect_create().times(1).returning(|new_user| {
            Ok(User::new(
                2,
                new_user.username,
                new_user.password_hash,
                new_user.first_name,
                new_user.last_name,
            ))
        });

        let server = server(users, MockRestaurantRepository::new());

        let response = server
            .post("/user")
            .form(&[
                ("username", "t"),
                ("password", "p"),
                ("firstName", "F"),
                ("lastName", "L"),
            ])
            .await;

        response.assert_status_ok();
        assert!(response.json::<Value>()["token"].is_string());
    }

    #[tokio::test]
    async fn test_create_user_missing_field() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().never();
        users.expect_create().never();

        let server = server(users, MockRestaurantRepository::new());

        let response = server
            .post("/user")
            .json(&json!({ "username": "t", "password": "p" }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(response.json::<Value>()["message"], "This field is missing.");
    }

    #[tokio::test]
    async fn test_create_user_username_taken() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("x"))));
        users.expect_create().never();

        let server = server(users, MockRestaurantRepository::new());

        let response = server.post("/user").json(&registration_body()).await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>(),
            json!({ "success": false, "result": [], "message": "Username is already taken" })
        );
    }

    #[tokio::test]
    async fn test_auth_success() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .withf(|username| username == "t")
            .returning(|_| Ok(Some(stored_user("p"))));

        let server = server(users, MockRestaurantRepository::new());

        let response = server
            .post("/auth")
            .json(&json!({ "username": "t", "password": "p" }))
            .await;

        response.assert_status_ok();
        let body = response.json::<Value>();
        assert_eq!(body["result"]["firstName"], "F");
        assert!(body["result"].get("password").is_none());
        assert_eq!(
            tokens()
                .verify(body["token"].as_str().unwrap())
                .unwrap()
                .user_id,
            5
        );
    }

    #[tokio::test]
    async fn test_auth_wrong_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user("p"))));

        let server = server(users, MockRestaurantRepository::new());

        let response = server
            .post("/auth")
            .json(&json!({ "username": "t", "password": "wrong" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>()["message"],
            "User authorization failed"
        );
    }

    #[tokio::test]
    async fn test_auth_unknown_user_reports_authorization_failure() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_username().returning(|_| Ok(None));

        let server = server(users, MockRestaurantRepository::new());

        let response = server
            .post("/auth")
            .json(&json!({ "username": "ghost", "password": "p" }))
            .await;

        response.assert_status(StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.json::<Value>()["message"],
            "User authorization failed"
        );
    }

    #[tokio::test]
    async fn test_auth_blank_password() {
        let server = server(MockUserRepository::new(), MockRestaurantRepository::new());

        let response = server
            .post("/auth")
            .json(&json!({ "username": "t", "password": "  " }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            response.json::<Value>()["message"],
            "This value should not be blank."
        );
    }
}
