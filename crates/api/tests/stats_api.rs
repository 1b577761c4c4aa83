//! HTTP-level integration tests for the `/api/stats` endpoint.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get};
use serde_json::json;

#[tokio::test]
async fn stats_counts_seed_data() {
    let app = common::build_test_app(common::seeded_store());
    let response = get(app, "/api/stats").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"scriptCount": 6, "itemCount": 6})
    );
}

#[tokio::test]
async fn stats_track_deletes() {
    let store = common::seeded_store();
    let script = store.scripts().list().await.remove(0);

    let response = delete(
        common::build_test_app(store.clone()),
        &format!("/api/scripts/{}", script.id),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let json = body_json(get(common::build_test_app(store), "/api/stats").await).await;
    assert_eq!(json["scriptCount"], 5);
    assert_eq!(json["itemCount"], 6);
}

#[tokio::test]
async fn stats_on_empty_store_are_zero() {
    let app = common::build_test_app(common::empty_store());
    let json = body_json(get(app, "/api/stats").await).await;

    assert_eq!(json, json!({"scriptCount": 0, "itemCount": 0}));
}
