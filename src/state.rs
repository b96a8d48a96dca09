//! Shared application state.

use std::sync::Arc;

use crate::application::services::{RestaurantService, TokenService, UserService};
use crate::domain::repositories::{RestaurantRepository, UserRepository};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub restaurant_service: Arc<RestaurantService>,
}

impl AppState {
    /// Builds the services over the given repositories.
    pub fn new(
        users: Arc<dyn UserRepository>,
        restaurants: Arc<dyn RestaurantRepository>,
        tokens: TokenService,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(users, tokens)),
            restaurant_service: Arc::new(RestaurantService::new(restaurants)),
        }
    }
}
