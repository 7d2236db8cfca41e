pub mod debug;
pub mod walks;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/walks/loop", post(walks::create_loop_walk))
        .route("/walks/compose", post(walks::compose_walk))
        .route("/debug/health", get(debug::health_check))
        .route("/debug/cache", get(debug::cache_stats))
        .with_state(state)
}
