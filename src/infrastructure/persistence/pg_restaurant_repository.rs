//! PostgreSQL implementation of restaurant repository.
//!
//! Every read joins `ratings` and averages them, so callers always receive a
//! restaurant with its current rating. Sort clauses come from
//! [`Ordering::to_sql`], which only produces whitelisted column names.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewRestaurant, Restaurant, RestaurantPatch};
use crate::domain::repositories::{Ordering, Page, RestaurantRepository, RestaurantSearch};
use crate::error::AppError;

/// Restaurant columns plus the aggregated rating.
const SELECT_WITH_RATING: &str = r#"
    SELECT r.id, r.name, r.has_vegetarian, r.user_id,
           COALESCE(AVG(rt.rating)::float8, 0) AS rating
    FROM restaurants r
    LEFT JOIN ratings rt ON rt.restaurant_id = r.id
"#;

/// PostgreSQL repository for restaurants.
pub struct PgRestaurantRepository {
    pool: Arc<PgPool>,
}

impl PgRestaurantRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct RestaurantRow {
    id: i64,
    name: String,
    has_vegetarian: bool,
    user_id: i64,
    rating: f64,
}

impl From<RestaurantRow> for Restaurant {
    fn from(row: RestaurantRow) -> Self {
        Restaurant::new(
            row.id,
            row.name,
            row.has_vegetarian,
            row.user_id,
            row.rating,
        )
    }
}

/// Escapes `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl RestaurantRepository for PgRestaurantRepository {
    async fn create(
        &self,
        new_restaurant: NewRestaurant,
        owner_id: i64,
    ) -> Result<Restaurant, AppError> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"
            INSERT INTO restaurants (name, has_vegetarian, user_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, has_vegetarian, user_id, 0::float8 AS rating
            "#,
        )
        .bind(&new_restaurant.name)
        .bind(new_restaurant.has_vegetarian)
        .bind(owner_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Restaurant>, AppError> {
        let sql = format!("{SELECT_WITH_RATING} WHERE r.id = $1 GROUP BY r.id");

        let row = sqlx::query_as::<_, RestaurantRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Restaurant::from))
    }

    async fn update(
        &self,
        id: i64,
        patch: RestaurantPatch,
    ) -> Result<Option<Restaurant>, AppError> {
        let row = sqlx::query_as::<_, RestaurantRow>(
            r#"
            WITH updated AS (
                UPDATE restaurants
                SET name = COALESCE($2, name),
                    has_vegetarian = COALESCE($3, has_vegetarian)
                WHERE id = $1
                RETURNING id, name, has_vegetarian, user_id
            )
            SELECT u.id, u.name, u.has_vegetarian, u.user_id,
                   COALESCE(AVG(rt.rating)::float8, 0) AS rating
            FROM updated u
            LEFT JOIN ratings rt ON rt.restaurant_id = u.id
            GROUP BY u.id, u.name, u.has_vegetarian, u.user_id
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.has_vegetarian)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Restaurant::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, ordering: Ordering) -> Result<Vec<Restaurant>, AppError> {
        let sql = format!(
            "{SELECT_WITH_RATING} GROUP BY r.id ORDER BY {}",
            ordering.to_sql()
        );

        let rows = sqlx::query_as::<_, RestaurantRow>(&sql)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn list_page(
        &self,
        page: Page,
        ordering: Ordering,
    ) -> Result<Vec<Restaurant>, AppError> {
        let sql = format!(
            "{SELECT_WITH_RATING} GROUP BY r.id ORDER BY {} LIMIT $1 OFFSET $2",
            ordering.to_sql()
        );

        let rows = sqlx::query_as::<_, RestaurantRow>(&sql)
            .bind(page.size)
            .bind(page.offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn search(&self, search: RestaurantSearch) -> Result<Vec<Restaurant>, AppError> {
        let sql = format!(
            r#"{SELECT_WITH_RATING}
            WHERE r.name ILIKE '%' || $1 || '%' ESCAPE '\'
              AND ($2::boolean IS NULL OR r.has_vegetarian = $2)
            GROUP BY r.id
            ORDER BY {}"#,
            search.ordering.to_sql()
        );

        let rows = sqlx::query_as::<_, RestaurantRow>(&sql)
            .bind(escape_like(&search.name))
            .bind(search.has_vegetarian)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Restaurant::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM restaurants")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("plain"), "plain");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
    }
}
