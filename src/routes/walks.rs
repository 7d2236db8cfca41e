use crate::error::{AppError, Result};
use crate::models::{ComposeWalkRequest, LoopWalkRequest, LoopWalkResponse, MultiStopWalk};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /walks/loop
/// Generate a random closed loop from a single start coordinate
pub async fn create_loop_walk(
    State(state): State<Arc<AppState>>,
    Json(request): Json<LoopWalkRequest>,
) -> Result<Json<LoopWalkResponse>> {
    request.validate().map_err(AppError::InvalidRequest)?;

    tracing::info!(
        lat = request.start.lat,
        lng = request.start.lng,
        duration_min = request.duration_minutes,
        speed_mps = request.walking_speed_mps,
        "Loop walk request: ({:.4}, {:.4}), {:.0}min",
        request.start.lat,
        request.start.lng,
        request.duration_minutes
    );

    let route = state.loop_generator.generate(&request.to_parameters())?;
    Ok(Json(route.into()))
}

/// POST /walks/compose
/// Join an ordered (or optimized) set of locations into a multi-stop walk
pub async fn compose_walk(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ComposeWalkRequest>,
) -> Result<Json<MultiStopWalk>> {
    tracing::info!(
        name = %request.name,
        locations = request.locations.len(),
        style = %request.options.style,
        "Compose walk request: '{}', {} locations, style={}",
        request.name,
        request.locations.len(),
        request.options.style
    );

    let walk = state.composer.compose(request).await?;
    Ok(Json(walk))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CachedDirections;
    use crate::error::AppError;
    use crate::models::Coordinates;
    use crate::routes::create_router;
    use crate::services::directions::{DirectionsLeg, DirectionsProvider};
    use crate::services::walk_generator::{LoopWalkGenerator, WalkComposer};
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::json;
    use tower::util::ServiceExt;

    struct FailingProvider;

    #[async_trait]
    impl DirectionsProvider for FailingProvider {
        async fn walking_directions(
            &self,
            _from: Coordinates,
            _to: Coordinates,
        ) -> Result<DirectionsLeg> {
            Err(AppError::Directions("offline".to_string()))
        }
    }

    fn test_state() -> Arc<AppState> {
        let cache = Arc::new(CachedDirections::new(Arc::new(FailingProvider), 60, 10));
        Arc::new(AppState {
            loop_generator: LoopWalkGenerator::new(),
            composer: WalkComposer::new(cache.clone()),
            directions_cache: cache,
        })
    }

    fn post(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_loop_walk_endpoint_returns_route() {
        let app = create_router(test_state());
        let response = app
            .oneshot(post(
                "/walks/loop",
                json!({
                    "start": {"lat": 48.8566, "lng": 2.3522},
                    "duration_minutes": 15.0
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_loop_walk_endpoint_rejects_short_duration() {
        let app = create_router(test_state());
        let response = app
            .oneshot(post(
                "/walks/loop",
                json!({
                    "start": {"lat": 48.8566, "lng": 2.3522},
                    "duration_minutes": 1.0
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compose_endpoint_rejects_single_location() {
        let app = create_router(test_state());
        let response = app
            .oneshot(post(
                "/walks/compose",
                json!({
                    "name": "Lonely walk",
                    "locations": [
                        {"name": "A", "coordinate": {"lat": 0.0, "lng": 0.0}}
                    ],
                    "created_by": "tester"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_compose_endpoint_survives_provider_outage() {
        // FailingProvider forces every segment onto the straight-line
        // fallback; the request must still succeed.
        let app = create_router(test_state());
        let response = app
            .oneshot(post(
                "/walks/compose",
                json!({
                    "name": "Morning round",
                    "locations": [
                        {"name": "A", "coordinate": {"lat": 0.0, "lng": 0.0}},
                        {"name": "B", "coordinate": {"lat": 0.0, "lng": 0.01}}
                    ],
                    "created_by": "tester"
                }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
