//! Handler for catalog summary counts.

use axum::extract::State;
use axum::Json;
use storefront_db::models::stats::CatalogStats;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<CatalogStats>> {
    let stats = state.store.stats().await;
    Ok(Json(stats))
}
