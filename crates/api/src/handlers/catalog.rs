//! Handlers for the catalog collections (`/scripts`, `/shop-items`).
//!
//! Every handler is generic over the entity kind and is instantiated once per
//! kind by [`crate::routes::catalog::router`]. Handlers delegate to the
//! kind's [`Collection`] and map absent results to 404.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storefront_core::error::CoreError;
use storefront_core::search;
use storefront_core::types::EntityId;
use storefront_db::models::entity::CatalogEntity;
use storefront_db::models::stats::FacetValue;
use storefront_db::Collection;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Query parameters
// ---------------------------------------------------------------------------

/// Query parameters for listing a collection.
///
/// A non-blank `search` takes precedence over `category`; blank values are
/// treated as absent.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn collection<E: CatalogEntity>(state: &AppState) -> &Collection<E> {
    E::collection(&state.store)
}

fn not_found<E: CatalogEntity>(id: EntityId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: E::ENTITY,
        id,
    })
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/{kind}?search=&category=
pub async fn list<E: CatalogEntity>(
    State(state): State<AppState>,
    Query(params): Query<CatalogQuery>,
) -> AppResult<Json<Vec<E>>> {
    let items = collection::<E>(&state);

    let query = params.search.as_deref().filter(|q| !search::is_blank(q));
    let category = params.category.as_deref().filter(|c| !c.is_empty());

    let results = match (query, category) {
        (Some(query), _) => items.search(query).await,
        (None, Some(category)) => items.by_category(category).await,
        (None, None) => items.list().await,
    };

    tracing::debug!(
        entity = E::ENTITY,
        search = ?query,
        category = ?category,
        count = results.len(),
        "Listed catalog entities",
    );

    Ok(Json(results))
}

/// GET /api/{kind}/categories
pub async fn categories<E: CatalogEntity>(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<FacetValue>>> {
    let facets = collection::<E>(&state).categories().await;
    Ok(Json(facets))
}

/// GET /api/{kind}/{id}
pub async fn get_by_id<E: CatalogEntity>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<Json<E>> {
    let entity = collection::<E>(&state)
        .get(&id)
        .await
        .ok_or_else(|| not_found::<E>(id))?;
    Ok(Json(entity))
}

/// POST /api/{kind}
///
/// Server-owned fields (`id`, `downloads`, `rating`) in the body are ignored.
pub async fn create<E: CatalogEntity>(
    State(state): State<AppState>,
    Json(input): Json<E::Create>,
) -> AppResult<(StatusCode, Json<E>)> {
    input.validate()?;

    let entity = collection::<E>(&state).create(input).await;

    tracing::info!(entity = E::ENTITY, id = %entity.id(), "Catalog entity created");

    Ok((StatusCode::CREATED, Json(entity)))
}

/// PATCH /api/{kind}/{id}
///
/// Shallow merge: fields present in the body overwrite, absent fields are
/// kept.
pub async fn update<E: CatalogEntity>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
    Json(patch): Json<E::Update>,
) -> AppResult<Json<E>> {
    patch.validate()?;

    let entity = collection::<E>(&state)
        .update(&id, patch)
        .await
        .ok_or_else(|| not_found::<E>(id.clone()))?;

    tracing::info!(entity = E::ENTITY, id = %id, "Catalog entity updated");

    Ok(Json(entity))
}

/// DELETE /api/{kind}/{id}
pub async fn delete<E: CatalogEntity>(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<StatusCode> {
    let deleted = collection::<E>(&state).delete(&id).await;
    if !deleted {
        return Err(not_found::<E>(id));
    }

    tracing::info!(entity = E::ENTITY, id = %id, "Catalog entity deleted");

    Ok(StatusCode::NO_CONTENT)
}
