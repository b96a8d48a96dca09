//! Repository trait for restaurants, plus the query descriptors it accepts.

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Sort key accepted by listing and search queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderBy {
    #[default]
    Id,
    Name,
    Difficulty,
    PrepTime,
}

impl OrderBy {
    /// Keys accepted in the `orderBy` query parameter.
    pub const KEYS: &'static [&'static str] = &["id", "name", "difficulty", "prepTime"];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "id" => Some(Self::Id),
            "name" => Some(Self::Name),
            "difficulty" => Some(Self::Difficulty),
            "prepTime" => Some(Self::PrepTime),
            _ => None,
        }
    }

    /// Column to sort on.
    ///
    /// The restaurants table has no difficulty or preparation time, so those
    /// keys sort by id.
    pub fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id | Self::Difficulty | Self::PrepTime => "id",
        }
    }
}

/// Sort direction accepted in the `order` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub const KEYS: &'static [&'static str] = &["asc", "desc"];

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Sort order for restaurant listings. Defaults to `id ASC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ordering {
    pub order_by: OrderBy,
    pub direction: SortDirection,
}

impl Ordering {
    pub fn new(order_by: OrderBy, direction: SortDirection) -> Self {
        Self {
            order_by,
            direction,
        }
    }

    /// Builds an ordering from raw query values, applying defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for unknown keys.
    pub fn from_params(order_by: Option<&str>, order: Option<&str>) -> Result<Self, AppError> {
        let order_by = match order_by {
            Some(key) => OrderBy::from_key(key)
                .ok_or_else(|| AppError::validation("Invalid orderBy value"))?,
            None => OrderBy::default(),
        };
        let direction = match order {
            Some(key) => SortDirection::from_key(key)
                .ok_or_else(|| AppError::validation("Invalid order value"))?,
            None => SortDirection::default(),
        };

        Ok(Self::new(order_by, direction))
    }

    /// `ORDER BY` clause body. Ties on non-unique columns fall back to id.
    pub fn to_sql(self) -> String {
        let column = self.order_by.column();
        let direction = self.direction.sql();
        if column == "id" {
            format!("id {direction}")
        } else {
            format!("{column} {direction}, id {direction}")
        }
    }
}

/// Offset-based page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub size: i64,
    pub offset: i64,
}

impl Page {
    pub fn new(size: i64, offset: i64) -> Self {
        Self { size, offset }
    }
}

/// Criteria for restaurant search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RestaurantSearch {
    /// Case-insensitive substring of the name. Empty matches everything.
    pub name: String,
    pub has_vegetarian: Option<bool>,
    pub ordering: Ordering,
}

/// Repository interface for restaurants.
///
/// Every returned [`Restaurant`] carries its aggregated rating.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRestaurantRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_restaurant.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Inserts a restaurant owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors, including a dangling owner.
    async fn create(&self, new_restaurant: NewRestaurant, owner_id: i64)
    -> Result<Restaurant, AppError>;

    /// Finds a restaurant by database ID.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError>;

    /// Applies a partial update and returns the stored row.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(restaurant))` with the updated values
    /// - `Ok(None)` if the restaurant no longer exists
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update(
        &self,
        id: i64,
        patch: RestaurantPatch,
    ) -> Result<Option<Restaurant>, AppError>;

    /// Deletes a restaurant. Its ratings go with it.
    ///
    /// # Returns
    ///
    /// `Ok(true)` if a row was removed, `Ok(false)` if none matched.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Lists every restaurant in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list(&self, ordering: Ordering) -> Result<Vec<Restaurant>, AppError>;

    /// Lists one page of restaurants in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_page(&self, page: Page, ordering: Ordering)
    -> Result<Vec<Restaurant>, AppError>;

    /// Searches restaurants by name and vegetarian option.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn search(&self, search: RestaurantSearch) -> Result<Vec<Restaurant>, AppError>;

    /// Counts all restaurants.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
