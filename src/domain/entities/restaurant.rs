//! Restaurant entity and its creation/update inputs.

/// A restaurant listed by its owner.
///
/// `rating` is the mean of the restaurant's ratings, `0.0` when it has none.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i64,
    pub name: String,
    pub has_vegetarian: bool,
    pub owner_id: i64,
    pub rating: f64,
}

impl Restaurant {
    /// Creates a new Restaurant instance.
    pub fn new(id: i64, name: String, has_vegetarian: bool, owner_id: i64, rating: f64) -> Self {
        Self {
            id,
            name,
            has_vegetarian,
            owner_id,
            rating,
        }
    }

    /// Rating with exactly two decimals, e.g. `"4.50"`.
    pub fn formatted_rating(&self) -> String {
        format!("{:.2}", self.rating)
    }
}

/// Input data for creating a restaurant. The owner is supplied separately.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRestaurant {
    pub name: String,
    pub has_vegetarian: bool,
}

/// Partial update for an existing restaurant.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestaurantPatch {
    pub name: Option<String>,
    pub has_vegetarian: Option<bool>,
}

impl RestaurantPatch {
    /// Drops empty values so they never overwrite stored data.
    pub fn without_empty(self) -> Self {
        Self {
            name: self.name.filter(|n| !n.trim().is_empty()),
            has_vegetarian: self.has_vegetarian,
        }
    }

    /// Returns true when the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.has_vegetarian.is_none()
    }
}
