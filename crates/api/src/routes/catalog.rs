//! Route definitions shared by every catalog collection.

use axum::routing::get;
use axum::Router;
use storefront_db::models::entity::CatalogEntity;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes for one catalog entity kind, mounted at `/scripts` or `/shop-items`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /categories   -> categories
/// GET    /{id}         -> get_by_id
/// PATCH  /{id}         -> update
/// DELETE /{id}         -> delete
/// ```
pub fn router<E: CatalogEntity>() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list::<E>).post(catalog::create::<E>))
        .route("/categories", get(catalog::categories::<E>))
        .route(
            "/{id}",
            get(catalog::get_by_id::<E>)
                .patch(catalog::update::<E>)
                .delete(catalog::delete::<E>),
        )
}
