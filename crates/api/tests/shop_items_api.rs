//! HTTP-level integration tests for the `/api/shop-items` endpoints.

mod common;

use axum::http::StatusCode;
use common::{assert_error, body_json, delete, get, patch_json, post_json};
use serde_json::{json, Value};

fn item_body(name: &str, price: &str, category: &str) -> Value {
    json!({
        "name": name,
        "description": "Shiny",
        "imageUrl": "https://example.com/item.png",
        "price": price,
        "category": category,
    })
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_shop_item_preserves_price_and_defaults_rating() {
    let app = common::build_test_app(common::empty_store());
    let response = post_json(
        app,
        "/api/shop-items",
        item_body("Diamond Sword", "12.99", "Weapons"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["price"], "12.99");
    assert_eq!(json["rating"], "0.0");
    assert_eq!(json["category"], "Weapons");
    assert!(!json["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_shop_item_does_not_reformat_price() {
    let app = common::build_test_app(common::empty_store());
    let json = body_json(
        post_json(app, "/api/shop-items", item_body("Stick", "3", "Tools")).await,
    )
    .await;

    assert_eq!(json["price"], "3");
}

#[tokio::test]
async fn create_shop_item_ignores_client_rating() {
    let app = common::build_test_app(common::empty_store());
    let mut body = item_body("Crown", "99.00", "Premium");
    body["rating"] = json!("5.0");

    let json = body_json(post_json(app, "/api/shop-items", body).await).await;
    assert_eq!(json["rating"], "0.0");
}

#[tokio::test]
async fn create_shop_item_with_invalid_price_returns_400() {
    let store = common::empty_store();
    let app = common::build_test_app(store.clone());
    let response = post_json(
        app,
        "/api/shop-items",
        item_body("Bad", "twelve dollars", "Tools"),
    )
    .await;

    let json = assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
    assert!(json["error"].as_str().unwrap().contains("price"));
    assert_eq!(store.shop_items().count().await, 0);
}

#[tokio::test]
async fn create_shop_item_without_price_is_rejected() {
    let app = common::build_test_app(common::empty_store());
    let mut body = item_body("Free", "0", "Tools");
    body.as_object_mut().unwrap().remove("price");

    let response = post_json(app, "/api/shop-items", body).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// ---------------------------------------------------------------------------
// Read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn list_filter_and_search_shop_items() {
    let store = common::seeded_store();

    let all = body_json(get(common::build_test_app(store.clone()), "/api/shop-items").await).await;
    assert_eq!(all.as_array().unwrap().len(), 6);

    let weapons = body_json(
        get(
            common::build_test_app(store.clone()),
            "/api/shop-items?category=Weapons",
        )
        .await,
    )
    .await;
    assert_eq!(weapons.as_array().unwrap().len(), 3);

    let potions = body_json(
        get(
            common::build_test_app(store),
            "/api/shop-items?search=POTION",
        )
        .await,
    )
    .await;
    let potions = potions.as_array().unwrap();
    assert_eq!(potions.len(), 1);
    assert_eq!(potions[0]["name"], "Mega Potion Set");
}

#[tokio::test]
async fn get_shop_item_by_id() {
    let store = common::seeded_store();
    let item = store.shop_items().list().await.remove(0);

    let response = get(
        common::build_test_app(store),
        &format!("/api/shop-items/{}", item.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], item.name.as_str());
    assert_eq!(json["price"], item.price.as_str());
}

#[tokio::test]
async fn get_nonexistent_shop_item_returns_404() {
    let app = common::build_test_app(common::seeded_store());
    let response = get(app, "/api/shop-items/nope").await;

    let json = assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert_eq!(json["error"], "ShopItem with id nope not found");
}

#[tokio::test]
async fn shop_item_categories_in_first_seen_order() {
    let app = common::build_test_app(common::seeded_store());
    let json = body_json(get(app, "/api/shop-items/categories").await).await;

    assert_eq!(
        json,
        json!([
            {"value": "Weapons", "count": 3},
            {"value": "Tools", "count": 1},
            {"value": "Resources", "count": 2},
        ])
    );
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn patch_shop_item_price() {
    let store = common::seeded_store();
    let item = store.shop_items().list().await.remove(0);

    let response = patch_json(
        common::build_test_app(store),
        &format!("/api/shop-items/{}", item.id),
        json!({"price": "10.00"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["price"], "10.00");
    assert_eq!(json["name"], item.name.as_str());
    assert_eq!(json["rating"], item.rating.as_str());
}

#[tokio::test]
async fn patch_shop_item_with_invalid_price_returns_400() {
    let store = common::seeded_store();
    let item = store.shop_items().list().await.remove(0);

    let response = patch_json(
        common::build_test_app(store.clone()),
        &format!("/api/shop-items/{}", item.id),
        json!({"price": "-4"}),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;

    assert_eq!(store.shop_items().get(&item.id).await, Some(item));
}

#[tokio::test]
async fn delete_shop_item_then_404() {
    let store = common::seeded_store();
    let item = store.shop_items().list().await.remove(0);
    let uri = format!("/api/shop-items/{}", item.id);

    let response = delete(common::build_test_app(store.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = delete(common::build_test_app(store.clone()), &uri).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;

    assert_eq!(store.shop_items().count().await, 5);
}
