use crate::constants::{LOOP_MIN_SEGMENTS, LOOP_SEGMENT_DISTANCE_M};
use crate::error::{AppError, Result};
use crate::models::{Coordinates, WalkParameters, WalkRoute};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates closed random-walk loops from a single start coordinate.
#[derive(Debug, Clone, Default)]
pub struct LoopWalkGenerator;

impl LoopWalkGenerator {
    pub fn new() -> Self {
        LoopWalkGenerator
    }

    /// Generate a loop with an OS-seeded random source. Non-deterministic
    /// across calls; use [`generate_with_rng`](Self::generate_with_rng) with
    /// a seeded generator for reproducible output.
    pub fn generate(&self, params: &WalkParameters) -> Result<WalkRoute> {
        self.generate_with_rng(params, &mut StdRng::from_os_rng())
    }

    /// Generate a closed loop of roughly the requested distance.
    ///
    /// Walks `max(4, floor(target / 100m))` legs of 100 m each, picking a
    /// uniformly random bearing for every leg, then appends the start again
    /// to close the loop. The returned duration and distance are the
    /// *requested* values, not a recomputation from the synthesized
    /// waypoints; the random path is a suggestion of where to wander, the
    /// totals are the plan the caller asked for.
    pub fn generate_with_rng<R: Rng>(
        &self,
        params: &WalkParameters,
        rng: &mut R,
    ) -> Result<WalkRoute> {
        let target_distance_m = params.target_distance_m();
        if params.duration_s <= 0.0 || target_distance_m <= 0.0 {
            return Err(AppError::InvalidParameters(format!(
                "duration ({:.0}s) and derived distance ({:.0}m) must be positive",
                params.duration_s, target_distance_m
            )));
        }

        let segments = ((target_distance_m / LOOP_SEGMENT_DISTANCE_M) as usize)
            .max(LOOP_MIN_SEGMENTS);

        let mut waypoints = Vec::with_capacity(segments + 2);
        waypoints.push(params.start);
        let mut current = params.start;

        for _ in 0..segments {
            let bearing = rng.random_range(0.0..360.0);
            current = current.destination(LOOP_SEGMENT_DISTANCE_M, bearing);
            waypoints.push(current);
        }

        // Close the loop
        waypoints.push(params.start);

        tracing::debug!(
            segments = segments,
            target_m = %format!("{:.0}", target_distance_m),
            "Generated random loop walk"
        );

        Ok(WalkRoute::new(
            waypoints,
            params.duration_s,
            target_distance_m,
            params.start,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jakarta() -> Coordinates {
        Coordinates::new(-6.2088, 106.8456)
    }

    #[test]
    fn test_valid_loop_generation() {
        let generator = LoopWalkGenerator::new();
        let params = WalkParameters {
            start: jakarta(),
            duration_s: 900.0,
            walking_speed_mps: 1.4,
        };

        let route = generator
            .generate_with_rng(&params, &mut StdRng::seed_from_u64(42))
            .unwrap();

        assert_eq!(route.estimated_duration_s, 900.0);
        assert!((route.total_distance_m - 1260.0).abs() < 0.1);
        assert!(route.waypoints.len() > 4);
        assert!((route.start.lat - params.start.lat).abs() < 1e-4);
        assert!((route.start.lng - params.start.lng).abs() < 1e-4);

        // Loop closes on the start point
        let first = route.waypoints.first().unwrap();
        let last = route.waypoints.last().unwrap();
        assert!((first.lat - last.lat).abs() < 1e-4);
        assert!((first.lng - last.lng).abs() < 1e-4);
    }

    #[test]
    fn test_segment_count_follows_target_distance() {
        let generator = LoopWalkGenerator::new();
        let params = WalkParameters {
            start: jakarta(),
            duration_s: 900.0,
            walking_speed_mps: 1.4,
        };

        let route = generator
            .generate_with_rng(&params, &mut StdRng::seed_from_u64(7))
            .unwrap();

        // 1260m target / 100m legs = 12 legs, plus start and closing point
        assert_eq!(route.waypoints.len(), 14);
    }

    #[test]
    fn test_short_walk_gets_minimum_segments() {
        let generator = LoopWalkGenerator::new();
        let params = WalkParameters {
            start: jakarta(),
            duration_s: 60.0, // 84m target, below 4 x 100m
            walking_speed_mps: 1.4,
        };

        let route = generator
            .generate_with_rng(&params, &mut StdRng::seed_from_u64(7))
            .unwrap();

        assert_eq!(route.waypoints.len(), LOOP_MIN_SEGMENTS + 2);
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let generator = LoopWalkGenerator::new();
        let params = WalkParameters::new(jakarta(), 900.0);

        let a = generator
            .generate_with_rng(&params, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = generator
            .generate_with_rng(&params, &mut StdRng::seed_from_u64(99))
            .unwrap();

        assert_eq!(a.waypoints, b.waypoints);
    }

    #[test]
    fn test_negative_duration_is_rejected() {
        let generator = LoopWalkGenerator::new();
        let params = WalkParameters::new(jakarta(), -100.0);

        let err = generator.generate(&params).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameters(_)));
    }

    #[test]
    fn test_zero_speed_is_rejected() {
        let generator = LoopWalkGenerator::new();
        let params = WalkParameters {
            start: jakarta(),
            duration_s: 900.0,
            walking_speed_mps: 0.0,
        };

        let err = generator.generate(&params).unwrap_err();
        assert!(matches!(err, AppError::InvalidParameters(_)));
    }
}
