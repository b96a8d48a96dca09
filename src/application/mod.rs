//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and business rules and give the HTTP
//! handlers a storage-agnostic API.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Registration, login and identity resolution
//! - [`services::restaurant_service::RestaurantService`] - Restaurant CRUD, listing and search
//! - [`services::token_service::TokenService`] - Bearer token signing and verification

pub mod services;
