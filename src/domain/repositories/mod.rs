//! Repository trait definitions for the domain layer.
//!
//! These traits abstract data access following the Repository pattern and are
//! implemented by concrete repositories in the infrastructure layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User accounts
//! - [`RestaurantRepository`] - Restaurant CRUD, listing and search

pub mod restaurant_repository;
pub mod user_repository;

pub use restaurant_repository::{
    OrderBy, Ordering, Page, RestaurantRepository, RestaurantSearch, SortDirection,
};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
