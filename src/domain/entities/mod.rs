//! Core domain entities.
//!
//! Entities are plain data structures. They carry no persistence logic: all
//! storage access goes through the traits in [`crate::domain::repositories`].
//!
//! # Entity Types
//!
//! - [`User`] - An account that authenticates and owns restaurants
//! - [`Restaurant`] - A listed restaurant with a derived rating
//!
//! Separate input structs (`NewUser`, `NewRestaurant`, `RestaurantPatch`)
//! describe inserts and partial updates.

pub mod restaurant;
pub mod user;

pub use restaurant::{NewRestaurant, Restaurant, RestaurantPatch};
pub use user::{NewUser, User, UserRegistration};
