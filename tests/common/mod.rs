#![allow(dead_code)]

use jsonwebtoken::Algorithm;
use restaurant_api::application::services::{TokenService, TokenSettings};
use restaurant_api::infrastructure::persistence::{PgRestaurantRepository, PgUserRepository};
use restaurant_api::state::AppState;
use restaurant_api::utils::password::hash_password;
use sqlx::PgPool;
use std::sync::Arc;

pub fn test_tokens() -> TokenService {
    TokenService::new(&TokenSettings {
        secret: "integration-test-secret".to_string(),
        algorithm: Algorithm::HS256,
        ttl_seconds: 60,
    })
}

pub async fn create_test_user(pool: &PgPool, username: &str, password: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (username, password, first_name, last_name) VALUES ($1, $2, 'Test', 'User') RETURNING id",
    )
    .bind(username)
    .bind(hash_password(password).unwrap())
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_restaurant(
    pool: &PgPool,
    name: &str,
    has_vegetarian: bool,
    owner_id: i64,
) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO restaurants (name, has_vegetarian, user_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(name)
    .bind(has_vegetarian)
    .bind(owner_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn rate(pool: &PgPool, restaurant_id: i64, rating: i16) {
    sqlx::query("INSERT INTO ratings (restaurant_id, rating) VALUES ($1, $2)")
        .bind(restaurant_id)
        .bind(rating)
        .execute(pool)
        .await
        .unwrap();
}

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);

    AppState::new(
        Arc::new(PgUserRepository::new(pool.clone())),
        Arc::new(PgRestaurantRepository::new(pool)),
        test_tokens(),
    )
}
