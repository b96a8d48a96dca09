//! Restaurant creation, lookup, listing, search and owner-guarded mutations.

use std::sync::Arc;

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantPatch, User};
use crate::domain::repositories::{Ordering, Page, RestaurantRepository, RestaurantSearch};
use crate::error::AppError;

/// Service for restaurant data.
///
/// Ownership is not enforced here; handlers ask [`Self::user_can_edit`]
/// before calling the mutating operations.
pub struct RestaurantService {
    repository: Arc<dyn RestaurantRepository>,
}

impl RestaurantService {
    /// Creates a new restaurant service.
    pub fn new(repository: Arc<dyn RestaurantRepository>) -> Self {
        Self { repository }
    }

    /// Creates a restaurant owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn create(
        &self,
        new_restaurant: NewRestaurant,
        owner: &User,
    ) -> Result<Restaurant, AppError> {
        let restaurant = self.repository.create(new_restaurant, owner.id).await?;

        tracing::info!(
            restaurant_id = restaurant.id,
            owner_id = owner.id,
            "restaurant created"
        );
        Ok(restaurant)
    }

    /// Retrieves a restaurant by ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RestaurantNotFound`] if it does not exist.
    pub async fn get_by_id(&self, id: i64) -> Result<Restaurant, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::RestaurantNotFound)
    }

    /// Applies the non-empty fields of `patch` to `restaurant`.
    ///
    /// An empty patch returns the restaurant as given, without a storage round trip.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RestaurantNotFound`] if the row vanished meanwhile.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn update(
        &self,
        restaurant: &Restaurant,
        patch: RestaurantPatch,
    ) -> Result<Restaurant, AppError> {
        let patch = patch.without_empty();
        if patch.is_empty() {
            return Ok(restaurant.clone());
        }

        let updated = self
            .repository
            .update(restaurant.id, patch)
            .await?
            .ok_or(AppError::RestaurantNotFound)?;

        tracing::info!(restaurant_id = updated.id, "restaurant updated");
        Ok(updated)
    }

    /// Deletes `restaurant`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DeleteFailed`] if storage rejects the delete or no
    /// row was removed.
    pub async fn delete(&self, restaurant: &Restaurant) -> Result<(), AppError> {
        match self.repository.delete(restaurant.id).await {
            Ok(true) => {
                tracing::info!(restaurant_id = restaurant.id, "restaurant deleted");
                Ok(())
            }
            Ok(false) => {
                tracing::warn!(restaurant_id = restaurant.id, "restaurant already gone");
                Err(AppError::DeleteFailed)
            }
            Err(e) => {
                tracing::error!(restaurant_id = restaurant.id, error = ?e, "delete failed");
                Err(AppError::DeleteFailed)
            }
        }
    }

    /// Lists all restaurants.
    pub async fn list_all(&self, ordering: Ordering) -> Result<Vec<Restaurant>, AppError> {
        self.repository.list(ordering).await
    }

    /// Lists one page of restaurants.
    pub async fn paginate(
        &self,
        page: Page,
        ordering: Ordering,
    ) -> Result<Vec<Restaurant>, AppError> {
        self.repository.list_page(page, ordering).await
    }

    /// Searches restaurants by name fragment and vegetarian option.
    pub async fn search(&self, search: RestaurantSearch) -> Result<Vec<Restaurant>, AppError> {
        self.repository.search(search).await
    }

    /// Total number of restaurants, regardless of any page window.
    pub async fn count_all(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Returns true when `user` owns `restaurant`.
    pub fn user_can_edit(&self, user: &User, restaurant: &Restaurant) -> bool {
        user.id == restaurant.owner_id
    }
}
