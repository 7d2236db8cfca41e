use std::sync::Arc;
use stride::cache::CachedDirections;
use stride::config::Config;
use stride::constants::DEFAULT_DIRECTIONS_CACHE_MAX_ENTRIES;
use stride::services::directions::{DirectionsProvider, MapboxDirections};
use stride::services::walk_generator::{LoopWalkGenerator, WalkComposer};
use stride::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stride=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting Stride walk server");

    // Directions provider: Mapbox, wrapped in the in-memory leg cache
    let mapbox: Arc<dyn DirectionsProvider> = if let Some(ref base_url) = config.mapbox_base_url {
        Arc::new(MapboxDirections::with_base_url(
            config.mapbox_api_key.clone(),
            base_url.clone(),
        ))
    } else {
        Arc::new(MapboxDirections::new(config.mapbox_api_key.clone()))
    };
    let directions_cache = Arc::new(CachedDirections::new(
        mapbox,
        config.directions_cache_ttl,
        DEFAULT_DIRECTIONS_CACHE_MAX_ENTRIES,
    ));

    // Create application state
    let state = Arc::new(AppState {
        loop_generator: LoopWalkGenerator::new(),
        composer: WalkComposer::new(directions_cache.clone()),
        directions_cache,
    });

    // Build router with CORS and tracing
    let app = axum::Router::new()
        .nest("/api/v1", stride::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
