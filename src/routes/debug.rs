use crate::cache::CacheStats;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /debug/health
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /debug/cache
pub async fn cache_stats(State(state): State<Arc<AppState>>) -> Json<CacheStats> {
    Json(state.directions_cache.stats())
}
