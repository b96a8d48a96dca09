//! API route configuration.
//!
//! Authentication is not a layer here: protected handlers take a
//! [`crate::api::middleware::auth::BearerToken`] and resolve it after
//! validating their input.

use crate::api::handlers::{
    auth_handler, create_restaurant_handler, create_user_handler, delete_restaurant_handler,
    get_restaurant_handler, list_restaurants_handler, method_not_allowed_handler,
    not_found_handler, search_restaurants_handler, update_restaurant_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET    /restaurants`         - List restaurants (optionally paginated)
/// - `POST   /restaurants`         - Create a restaurant (token)
/// - `GET    /restaurants/search`  - Search by name and vegetarian option
/// - `GET    /restaurants/{id}`    - Fetch one restaurant
/// - `PATCH  /restaurants/{id}`    - Update own restaurant (token)
/// - `DELETE /restaurants/{id}`    - Delete own restaurant (token)
/// - `POST   /user`                - Register
/// - `POST   /auth`                - Log in
///
/// Unmatched paths and methods answer with the error envelope.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/restaurants",
            get(list_restaurants_handler).post(create_restaurant_handler),
        )
        .route("/restaurants/search", get(search_restaurants_handler))
        .route(
            "/restaurants/{id}",
            get(get_restaurant_handler)
                .patch(update_restaurant_handler)
                .delete(delete_restaurant_handler),
        )
        .route("/user", post(create_user_handler))
        .route("/auth", post(auth_handler))
        .fallback(not_found_handler)
        .method_not_allowed_fallback(method_not_allowed_handler)
}
