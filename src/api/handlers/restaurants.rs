//! Handlers for restaurant endpoints.

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
};
use serde_json::Value;

use crate::api::dto::envelope::Envelope;
use crate::api::dto::restaurant::{ListParams, RestaurantItem};
use crate::api::extract::{Fields, QueryFields};
use crate::api::middleware::auth::BearerToken;
use crate::api::validation::rules;
use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::domain::repositories::RestaurantSearch;
use crate::error::AppError;
use crate::state::AppState;

/// Non-numeric ids cannot name a stored restaurant.
fn restaurant_id(id: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::RestaurantNotFound)
}

fn items(restaurants: Vec<Restaurant>) -> Vec<RestaurantItem> {
    restaurants.into_iter().map(RestaurantItem::from).collect()
}

/// Lists restaurants, optionally one page of them.
///
/// # Endpoint
///
/// `GET /restaurants?from=&size=&orderBy=&order=`
///
/// Pagination applies only when both `from` and `size` are given. The
/// envelope carries `total` (items returned) and `allRestaurantCount`.
pub async fn list_restaurants_handler(
    State(state): State<AppState>,
    QueryFields(fields): QueryFields,
) -> Result<Json<Envelope<Vec<RestaurantItem>>>, AppError> {
    fields.validate(&rules::LIST_RESTAURANTS)?;
    let params = ListParams::try_from(&fields)?;

    let service = &state.restaurant_service;
    let restaurants = match params.page {
        Some(page) => service.paginate(page, params.ordering).await?,
        None => service.list_all(params.ordering).await?,
    };
    let all_restaurant_count = service.count_all().await?;

    let items = items(restaurants);
    let total = items.len();

    Ok(Json(
        Envelope::ok(items)
            .with("total", total)
            .with("allRestaurantCount", all_restaurant_count),
    ))
}

/// Searches restaurants by name fragment and vegetarian option.
///
/// # Endpoint
///
/// `GET /restaurants/search?name=&hasVegetarian=&orderBy=&order=`
pub async fn search_restaurants_handler(
    State(state): State<AppState>,
    QueryFields(fields): QueryFields,
) -> Result<Json<Envelope<Vec<RestaurantItem>>>, AppError> {
    fields.validate(&rules::SEARCH_RESTAURANTS)?;
    let search = RestaurantSearch::try_from(&fields)?;

    let items = items(state.restaurant_service.search(search).await?);
    let total = items.len();

    Ok(Json(Envelope::ok(items).with("total", total)))
}

/// Returns one restaurant.
///
/// # Endpoint
///
/// `GET /restaurants/{id}`
///
/// # Errors
///
/// Returns 400 if the restaurant does not exist.
pub async fn get_restaurant_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Envelope<RestaurantItem>>, AppError> {
    let restaurant = state
        .restaurant_service
        .get_by_id(restaurant_id(id)?)
        .await?;

    Ok(Json(Envelope::ok(RestaurantItem::from(restaurant))))
}

/// Creates a restaurant owned by the caller.
///
/// # Endpoint
///
/// `POST /restaurants` (Bearer token required)
///
/// # Errors
///
/// Returns 400 on validation failure, checked before the token.
/// Returns 401 if the token is missing or invalid.
pub async fn create_restaurant_handler(
    State(state): State<AppState>,
    token: BearerToken,
    fields: Fields,
) -> Result<Json<Envelope<RestaurantItem>>, AppError> {
    fields.validate(&rules::CREATE_RESTAURANT)?;
    let new_restaurant = NewRestaurant::try_from(&fields)?;

    let user = state
        .user_service
        .resolve_identity(token.require()?)
        .await?;

    let restaurant = state
        .restaurant_service
        .create(new_restaurant, &user)
        .await?;

    Ok(Json(Envelope::ok(RestaurantItem::from(restaurant))))
}

/// Partially updates a restaurant owned by the caller.
///
/// # Endpoint
///
/// `PATCH /restaurants/{id}` (Bearer token required)
///
/// # Errors
///
/// Returns 400 on validation failure or unknown restaurant.
/// Returns 401 if the token is missing or invalid.
/// Returns 403 if the caller does not own the restaurant.
pub async fn update_restaurant_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    token: BearerToken,
    fields: Fields,
) -> Result<Json<Envelope<RestaurantItem>>, AppError> {
    fields.validate(&rules::UPDATE_RESTAURANT)?;
    let patch = RestaurantPatch::from(&fields);

    let user = state
        .user_service
        .resolve_identity(token.require()?)
        .await?;

    let service = &state.restaurant_service;
    let restaurant = service.get_by_id(restaurant_id(id)?).await?;

    if !service.user_can_edit(&user, &restaurant) {
        tracing::warn!(
            user_id = user.id,
            restaurant_id = restaurant.id,
            "update by non-owner refused"
        );
        return Err(AppError::UnauthorizedAction);
    }

    let updated = service.update(&restaurant, patch).await?;

    Ok(Json(Envelope::ok(RestaurantItem::from(updated))))
}

/// Deletes a restaurant owned by the caller.
///
/// # Endpoint
///
/// `DELETE /restaurants/{id}` (Bearer token required)
///
/// # Errors
///
/// Returns 400 for an unknown restaurant or a failed delete.
/// Returns 401 if the token is missing or invalid.
/// Returns 403 if the caller does not own the restaurant.
pub async fn delete_restaurant_handler(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    token: BearerToken,
) -> Result<Json<Envelope<Vec<Value>>>, AppError> {
    let user = state
        .user_service
        .resolve_identity(token.require()?)
        .await?;

    let service = &state.restaurant_service;
    let restaurant = service.get_by_id(restaurant_id(id)?).await?;

    if !service.user_can_edit(&user, &restaurant) {
        tracing::warn!(
            user_id = user.id,
            restaurant_id = restaurant.id,
            "delete by non-owner refused"
        );
        return Err(AppError::UnauthorizedAction);
    }

    service.delete(&restaurant).await?;

    Ok(Json(Envelope::empty()))
}
