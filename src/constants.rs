//! Stable application-wide constants.
//!
//! Values here are structural invariants and algorithm coefficients that
//! should rarely change. Deployment-specific settings (bind address, API
//! keys, cache TTL) live in [`Config`](crate::config::Config) instead.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: &str = "3000";

// --- Geodesy ---

/// Mean Earth radius (meters) for the spherical model used by the
/// destination-point and haversine formulas.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

// --- Walking parameters ---

/// Average walking speed (m/s). Used to derive durations for synthesized
/// segments and as the fallback speed when a request omits one.
pub const AVERAGE_WALKING_SPEED_MPS: f64 = 1.4;
/// Rough energy expenditure while walking, kcal per minute.
pub const WALKING_CALORIES_PER_MINUTE: f64 = 4.0;

// --- Single-origin loop generation ---

/// Length of each randomly-directed leg of a generated loop (meters).
pub const LOOP_SEGMENT_DISTANCE_M: f64 = 100.0;
/// Minimum number of legs in a generated loop, regardless of target distance.
pub const LOOP_MIN_SEGMENTS: usize = 4;

// --- Exploring-style segments ---

/// Minimum offset of an exploration point from the segment midpoint (meters).
pub const EXPLORATION_MIN_OFFSET_M: f64 = 50.0;
/// Maximum offset of an exploration point from the segment midpoint (meters).
pub const EXPLORATION_MAX_OFFSET_M: f64 = 200.0;
/// Minimum number of exploration points inserted per segment.
pub const EXPLORATION_MIN_POINTS: usize = 2;
/// Maximum number of exploration points inserted per segment.
pub const EXPLORATION_MAX_POINTS: usize = 3;

// --- Multi-stop composition limits ---

/// A walk must connect at least this many locations.
pub const MIN_WALK_LOCATIONS: usize = 2;
/// Hard upper bound on locations per walk.
pub const MAX_WALK_LOCATIONS: usize = 10;

// --- Request validation bounds ---

/// Shortest accepted loop-walk duration (minutes).
pub const MIN_WALK_DURATION_MINUTES: f64 = 5.0;
/// Longest accepted loop-walk duration (minutes).
pub const MAX_WALK_DURATION_MINUTES: f64 = 120.0;

// --- In-memory cache defaults ---

/// Default directions cache TTL: 24 hours. Overridden by `DIRECTIONS_CACHE_TTL`.
pub const DEFAULT_DIRECTIONS_CACHE_TTL_SECONDS: u64 = 86_400;
/// Maximum entries for the in-memory directions cache (LRU eviction).
pub const DEFAULT_DIRECTIONS_CACHE_MAX_ENTRIES: u64 = 1_000;
