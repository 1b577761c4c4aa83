pub mod catalog;
pub mod health;

use axum::routing::get;
use axum::Router;
use storefront_db::models::script::Script;
use storefront_db::models::shop_item::ShopItem;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /scripts                      list (?search, ?category), create
/// /scripts/categories           category facets
/// /scripts/{id}                 get, update (PATCH), delete
///
/// /shop-items                   list (?search, ?category), create
/// /shop-items/categories        category facets
/// /shop-items/{id}              get, update (PATCH), delete
///
/// /stats                        script and shop item counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/scripts", catalog::router::<Script>())
        .nest("/shop-items", catalog::router::<ShopItem>())
        .route("/stats", get(handlers::stats::get_stats))
}
