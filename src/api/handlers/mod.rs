//! HTTP request handlers for API endpoints.
//!
//! Each handler runs the same pipeline: validate input against its rule set,
//! resolve the caller's identity when the endpoint is protected, check
//! ownership, call the service, and wrap the outcome in an
//! [`crate::api::dto::envelope::Envelope`].

pub mod fallback;
pub mod restaurants;
pub mod users;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use restaurants::{
    create_restaurant_handler, delete_restaurant_handler, get_restaurant_handler,
    list_restaurants_handler, search_restaurants_handler, update_restaurant_handler,
};
pub use users::{auth_handler, create_user_handler};
