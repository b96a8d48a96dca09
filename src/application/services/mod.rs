//! Business logic services for the application layer.

pub mod restaurant_service;
pub mod token_service;
pub mod user_service;

pub use restaurant_service::RestaurantService;
pub use token_service::{Claims, TokenService, TokenSettings};
pub use user_service::UserService;
