//! DTOs for restaurant endpoints.

use serde::Serialize;

use crate::api::extract::Fields;
use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::domain::repositories::{Ordering, Page, RestaurantSearch};
use crate::error::AppError;

/// Restaurant as returned to clients. The owner stays hidden.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantItem {
    pub id: i64,
    pub name: String,
    pub has_vegetarian: bool,
    /// Mean rating with two decimals.
    pub rating: String,
}

impl From<Restaurant> for RestaurantItem {
    fn from(r: Restaurant) -> Self {
        let rating = r.formatted_rating();
        Self {
            id: r.id,
            name: r.name,
            has_vegetarian: r.has_vegetarian,
            rating,
        }
    }
}

/// Parameters of `GET /restaurants`, read after validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListParams {
    /// Set only when both `from` and `size` were supplied.
    pub page: Option<Page>,
    pub ordering: Ordering,
}

impl TryFrom<&Fields> for ListParams {
    type Error = AppError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        let page = match (fields.integer("from"), fields.integer("size")) {
            (Some(offset), Some(size)) => Some(Page::new(size, offset)),
            _ => None,
        };

        Ok(Self {
            page,
            ordering: ordering_of(fields)?,
        })
    }
}

impl TryFrom<&Fields> for RestaurantSearch {
    type Error = AppError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        Ok(Self {
            name: fields.text("name").unwrap_or_default(),
            has_vegetarian: fields.text("hasVegetarian").map(|v| is_truthy(&v)),
            ordering: ordering_of(fields)?,
        })
    }
}

impl TryFrom<&Fields> for NewRestaurant {
    type Error = AppError;

    fn try_from(fields: &Fields) -> Result<Self, Self::Error> {
        let name = fields
            .text("name")
            .ok_or_else(|| AppError::validation("Invalid name"))?;
        let has_vegetarian = fields
            .flag("hasVegetarian")
            .ok_or_else(|| AppError::validation("Invalid vegetarian value"))?;

        Ok(Self {
            name,
            has_vegetarian,
        })
    }
}

impl From<&Fields> for RestaurantPatch {
    fn from(fields: &Fields) -> Self {
        Self {
            name: fields.text("name"),
            has_vegetarian: fields.flag("hasVegetarian"),
        }
    }
}

fn ordering_of(fields: &Fields) -> Result<Ordering, AppError> {
    Ordering::from_params(
        fields.text("orderBy").as_deref(),
        fields.text("order").as_deref(),
    )
}

/// Lenient boolean used by the search filter.
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
