// Library exports for testing and reusability

pub mod cache;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};

// App state for sharing across the application
use cache::CachedDirections;
use services::walk_generator::{LoopWalkGenerator, WalkComposer};
use std::sync::Arc;

pub struct AppState {
    pub loop_generator: LoopWalkGenerator,
    pub composer: WalkComposer,
    pub directions_cache: Arc<CachedDirections>,
}
