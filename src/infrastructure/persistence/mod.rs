//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx with
//! bound parameters.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - User accounts
//! - [`PgRestaurantRepository`] - Restaurants with aggregated ratings

pub mod pg_restaurant_repository;
pub mod pg_user_repository;

pub use pg_restaurant_repository::PgRestaurantRepository;
pub use pg_user_repository::PgUserRepository;
