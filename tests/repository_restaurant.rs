mod common;

use restaurant_api::domain::entities::{NewRestaurant, RestaurantPatch};
use restaurant_api::domain::repositories::{
    OrderBy, Ordering, Page, RestaurantRepository, RestaurantSearch, SortDirection,
};
use restaurant_api::infrastructure::persistence::PgRestaurantRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn names(restaurants: &[restaurant_api::domain::entities::Restaurant]) -> Vec<&str> {
    restaurants.iter().map(|r| r.name.as_str()).collect()
}

#[sqlx::test]
async fn test_create_restaurant(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", "pw").await;
    let repo = PgRestaurantRepository::new(Arc::new(pool));

    let restaurant = repo
        .create(
            NewRestaurant {
                name: "Nepalico".to_string(),
                has_vegetarian: true,
            },
            owner,
        )
        .await
        .unwrap();

    assert_eq!(restaurant.name, "Nepalico");
    assert_eq!(restaurant.owner_id, owner);
    assert_eq!(restaurant.rating, 0.0);
}

#[sqlx::test]
async fn test_rating_is_mean_of_ratings(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", "pw").await;
    let id = common::create_test_restaurant(&pool, "Nepalico", true, owner).await;
    common::rate(&pool, id, 4).await;
    common::rate(&pool, id, 5).await;

    let repo = PgRestaurantRepository::new(Arc::new(pool));
    let restaurant = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(restaurant.formatted_rating(), "4.50");
}

#[sqlx::test]
async fn test_update_applies_only_given_fields(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", "pw").await;
    let id = common::create_test_restaurant(&pool, "Nepalico", true, owner).await;
    common::rate(&pool, id, 3).await;

    let repo = PgRestaurantRepository::new(Arc::new(pool));
    let updated = repo
        .update(
            id,
            RestaurantPatch {
                name: None,
                has_vegetarian: Some(false),
            },
        )
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Nepalico");
    assert!(!updated.has_vegetarian);
    assert_eq!(updated.formatted_rating(), "3.00");
}

#[sqlx::test]
async fn test_update_missing_restaurant(pool: PgPool) {
    let repo = PgRestaurantRepository::new(Arc::new(pool));

    let result = repo
        .update(
            999,
            RestaurantPatch {
                name: Some("x".to_string()),
                has_vegetarian: None,
            },
        )
        .await
        .unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_delete_cascades_ratings(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", "pw").await;
    let id = common::create_test_restaurant(&pool, "Nepalico", true, owner).await;
    common::rate(&pool, id, 5).await;

    let repo = PgRestaurantRepository::new(Arc::new(pool.clone()));

    assert!(repo.delete(id).await.unwrap());
    assert!(!repo.delete(id).await.unwrap());

    let ratings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(ratings, 0);
}

#[sqlx::test]
async fn test_list_ordering_and_pages(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", "pw").await;
    common::create_test_restaurant(&pool, "Bravo", true, owner).await;
    common::create_test_restaurant(&pool, "Alpha", false, owner).await;
    common::create_test_restaurant(&pool, "Charlie", true, owner).await;

    let repo = PgRestaurantRepository::new(Arc::new(pool));

    let by_id = repo.list(Ordering::default()).await.unwrap();
    assert_eq!(names(&by_id), ["Bravo", "Alpha", "Charlie"]);

    let by_name_desc = repo
        .list(Ordering::new(OrderBy::Name, SortDirection::Desc))
        .await
        .unwrap();
    assert_eq!(names(&by_name_desc), ["Charlie", "Bravo", "Alpha"]);

    let page = repo
        .list_page(Page::new(2, 1), Ordering::new(OrderBy::Name, SortDirection::Asc))
        .await
        .unwrap();
    assert_eq!(names(&page), ["Bravo", "Charlie"]);

    assert_eq!(repo.count().await.unwrap(), 3);
}

#[sqlx::test]
async fn test_search_by_name_and_vegetarian(pool: PgPool) {
    let owner = common::create_test_user(&pool, "owner", "pw").await;
    common::create_test_restaurant(&pool, "Green Garden", true, owner).await;
    common::create_test_restaurant(&pool, "Grill House", false, owner).await;
    common::create_test_restaurant(&pool, "100% Vegan", true, owner).await;

    let repo = PgRestaurantRepository::new(Arc::new(pool));

    let found = repo
        .search(RestaurantSearch {
            name: "gr".to_string(),
            ..RestaurantSearch::default()
        })
        .await
        .unwrap();
    assert_eq!(names(&found), ["Green Garden", "Grill House"]);

    let vegetarian = repo
        .search(RestaurantSearch {
            name: "gr".to_string(),
            has_vegetarian: Some(true),
            ordering: Ordering::default(),
        })
        .await
        .unwrap();
    assert_eq!(names(&vegetarian), ["Green Garden"]);

    let literal_percent = repo
        .search(RestaurantSearch {
            name: "%".to_string(),
            ..RestaurantSearch::default()
        })
        .await
        .unwrap();
    assert_eq!(names(&literal_percent), ["100% Vegan"]);
}
