pub mod geometry;
pub mod loop_walk;
pub mod ordering;

pub use loop_walk::LoopWalkGenerator;

use crate::constants::{
    AVERAGE_WALKING_SPEED_MPS, EXPLORATION_MAX_OFFSET_M, EXPLORATION_MAX_POINTS,
    EXPLORATION_MIN_OFFSET_M, EXPLORATION_MIN_POINTS, MAX_WALK_LOCATIONS, MIN_WALK_LOCATIONS,
};
use crate::error::{AppError, Result};
use crate::models::{
    ComposeWalkRequest, Coordinates, MultiStopWalk, PathStyle, WalkRoute,
};
use crate::services::directions::DirectionsProvider;
use geometry::{midpoint, path_length_m};
use ordering::nearest_neighbor_order;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use time::OffsetDateTime;
use uuid::Uuid;

/// Composes multi-stop walks by joining an ordered set of locations with
/// per-pair segments.
///
/// The composer fails only on the cardinality checks, before any geometry
/// work. Provider failures never abort a composition: each one is absorbed
/// into a straight-line fallback segment.
pub struct WalkComposer {
    provider: Arc<dyn DirectionsProvider>,
}

impl WalkComposer {
    pub fn new(provider: Arc<dyn DirectionsProvider>) -> Self {
        WalkComposer { provider }
    }

    /// Compose a walk with an OS-seeded random source for exploring-style
    /// segments.
    pub async fn compose(&self, request: ComposeWalkRequest) -> Result<MultiStopWalk> {
        self.compose_with_rng(request, &mut StdRng::from_os_rng())
            .await
    }

    /// Compose a walk, drawing exploring-segment randomness from `rng`.
    ///
    /// Validates 2..=10 locations, optionally reorders them with the
    /// nearest-neighbor heuristic, then generates segments sequentially per
    /// consecutive pair. Loop style appends one closing direct segment back
    /// to the first location when there are more than 2 locations.
    pub async fn compose_with_rng<R: Rng + Send>(
        &self,
        request: ComposeWalkRequest,
        rng: &mut R,
    ) -> Result<MultiStopWalk> {
        if request.locations.len() < MIN_WALK_LOCATIONS {
            return Err(AppError::InvalidLocations(format!(
                "please provide at least {} locations",
                MIN_WALK_LOCATIONS
            )));
        }
        if request.locations.len() > MAX_WALK_LOCATIONS {
            return Err(AppError::TooManyLocations(format!(
                "maximum {} locations allowed",
                MAX_WALK_LOCATIONS
            )));
        }

        let options = request.options;
        let ordered = if options.optimize_order {
            nearest_neighbor_order(request.locations)
        } else {
            request.locations
        };

        tracing::info!(
            name = %request.name,
            locations = ordered.len(),
            style = %options.style,
            optimized = options.optimize_order,
            "Composing multi-stop walk"
        );

        let mut segments: Vec<WalkRoute> = Vec::with_capacity(ordered.len());
        let mut total_distance_m = 0.0;
        let mut total_duration_s = 0.0;

        for pair in ordered.windows(2) {
            let segment = self
                .segment(pair[0].coordinate, pair[1].coordinate, options.style, rng)
                .await;
            total_distance_m += segment.total_distance_m;
            total_duration_s += segment.estimated_duration_s;
            segments.push(segment);
        }

        // Loop style: close the tour with a direct segment, but only when
        // there are enough stops for the closing leg to add anything.
        if options.style == PathStyle::Loop && ordered.len() > 2 {
            let last = ordered[ordered.len() - 1].coordinate;
            let first = ordered[0].coordinate;
            let closing = self.direct_segment(last, first).await;
            total_distance_m += closing.total_distance_m;
            total_duration_s += closing.estimated_duration_s;
            segments.push(closing);
        }

        Ok(MultiStopWalk {
            id: Uuid::new_v4(),
            name: request.name,
            locations: ordered,
            segments,
            total_distance_m,
            estimated_duration_s: total_duration_s,
            created_at: OffsetDateTime::now_utc(),
            created_by: request.created_by,
            is_public: request.is_public,
        })
    }

    async fn segment<R: Rng>(
        &self,
        from: Coordinates,
        to: Coordinates,
        style: PathStyle,
        rng: &mut R,
    ) -> WalkRoute {
        match style {
            // Loop segments between consecutive locations route directly;
            // the closing leg is handled by the caller.
            PathStyle::Direct | PathStyle::Loop => self.direct_segment(from, to).await,
            PathStyle::Exploring => exploring_segment(from, to, rng),
        }
    }

    /// Provider-routed segment. Falls back to a straight line on any
    /// provider failure, so this always produces a segment.
    async fn direct_segment(&self, from: Coordinates, to: Coordinates) -> WalkRoute {
        match self.provider.walking_directions(from, to).await {
            Ok(leg) => WalkRoute::new(leg.waypoints, leg.duration_s, leg.distance_m, from),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    from_lat = from.lat,
                    from_lng = from.lng,
                    to_lat = to.lat,
                    to_lng = to.lng,
                    "Directions provider failed, using straight-line fallback"
                );
                straight_segment(from, to)
            }
        }
    }
}

/// Two-point fallback segment: haversine distance, duration at average
/// walking speed.
fn straight_segment(from: Coordinates, to: Coordinates) -> WalkRoute {
    let distance_m = from.distance_to(&to);
    WalkRoute::new(
        vec![from, to],
        distance_m / AVERAGE_WALKING_SPEED_MPS,
        distance_m,
        from,
    )
}

/// Segment that wanders through 2-3 random points around the pair's
/// midpoint before reaching the destination. Distance and duration are
/// computed from the actual waypoint chain.
fn exploring_segment<R: Rng>(from: Coordinates, to: Coordinates, rng: &mut R) -> WalkRoute {
    let mid = midpoint(&from, &to);

    let mut waypoints = vec![from];
    let point_count = rng.random_range(EXPLORATION_MIN_POINTS..=EXPLORATION_MAX_POINTS);
    for _ in 0..point_count {
        let bearing = rng.random_range(0.0..360.0);
        let offset = rng.random_range(EXPLORATION_MIN_OFFSET_M..=EXPLORATION_MAX_OFFSET_M);
        waypoints.push(mid.destination(offset, bearing));
    }
    waypoints.push(to);

    let distance_m = path_length_m(&waypoints);
    WalkRoute::new(
        waypoints,
        distance_m / AVERAGE_WALKING_SPEED_MPS,
        distance_m,
        from,
    )
}
