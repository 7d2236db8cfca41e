use crate::constants::{
    AVERAGE_WALKING_SPEED_MPS, MAX_WALK_DURATION_MINUTES, MIN_WALK_DURATION_MINUTES,
    WALKING_CALORIES_PER_MINUTE,
};
use crate::models::{Coordinates, WalkLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// Transport mode for a walk. Walking is the only supported mode in this
/// domain; the enum exists so the directions profile stays explicit at the
/// provider boundary.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    #[default]
    Walk,
}

impl TransportMode {
    /// Returns the directions-API profile name for this transport mode
    pub fn directions_profile(&self) -> &str {
        match self {
            TransportMode::Walk => "walking",
        }
    }
}

/// How consecutive locations are joined into segments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathStyle {
    /// Provider-routed segments between consecutive locations.
    #[default]
    Direct,
    /// Direct segments plus a closing segment back to the first location.
    Loop,
    /// Synthesized segments that wander through random points near each
    /// pair's midpoint.
    Exploring,
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathStyle::Direct => write!(f, "direct"),
            PathStyle::Loop => write!(f, "loop"),
            PathStyle::Exploring => write!(f, "exploring"),
        }
    }
}

impl FromStr for PathStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "direct" => Ok(PathStyle::Direct),
            "loop" => Ok(PathStyle::Loop),
            "exploring" => Ok(PathStyle::Exploring),
            _ => Err(format!("Invalid path style: '{}'", s)),
        }
    }
}

/// Configuration for a multi-stop composition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct WalkOptions {
    #[serde(default)]
    pub mode: TransportMode,
    #[serde(default)]
    pub style: PathStyle,
    #[serde(default)]
    pub optimize_order: bool,
}

/// Input to single-origin loop generation.
#[derive(Debug, Clone, Copy)]
pub struct WalkParameters {
    pub start: Coordinates,
    pub duration_s: f64,
    pub walking_speed_mps: f64,
}

impl WalkParameters {
    pub fn new(start: Coordinates, duration_s: f64) -> Self {
        WalkParameters {
            start,
            duration_s,
            walking_speed_mps: AVERAGE_WALKING_SPEED_MPS,
        }
    }

    /// Distance the walker covers in the requested duration (meters).
    pub fn target_distance_m(&self) -> f64 {
        self.duration_s * self.walking_speed_mps
    }
}

/// A generated path between two points, or a full loop when the first and
/// last waypoints coincide. Immutable return value; the declared distance
/// and duration are whatever the generator promised, not necessarily a
/// recomputation from the waypoints.
#[derive(Debug, Clone, Serialize)]
pub struct WalkRoute {
    pub id: Uuid,
    pub waypoints: Vec<Coordinates>,
    pub estimated_duration_s: f64,
    pub total_distance_m: f64,
    pub start: Coordinates,
}

impl WalkRoute {
    pub fn new(
        waypoints: Vec<Coordinates>,
        estimated_duration_s: f64,
        total_distance_m: f64,
        start: Coordinates,
    ) -> Self {
        WalkRoute {
            id: Uuid::new_v4(),
            waypoints,
            estimated_duration_s,
            total_distance_m,
            start,
        }
    }

    /// Rough calorie estimate: ~4 kcal per walking minute.
    pub fn estimated_calories(&self) -> u32 {
        (self.estimated_duration_s / 60.0 * WALKING_CALORIES_PER_MINUTE).round() as u32
    }
}

/// A composed multi-stop walk: ordered locations, the segments connecting
/// them, and summed totals. Never mutated after construction.
#[derive(Debug, Clone, Serialize)]
pub struct MultiStopWalk {
    pub id: Uuid,
    pub name: String,
    pub locations: Vec<WalkLocation>,
    pub segments: Vec<WalkRoute>,
    pub total_distance_m: f64,
    pub estimated_duration_s: f64,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub created_at: OffsetDateTime,
    pub created_by: String,
    pub is_public: bool,
}

fn serialize_rfc3339<S>(dt: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let formatted = dt
        .format(&time::format_description::well_known::Rfc3339)
        .map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&formatted)
}

impl MultiStopWalk {
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Fresh working set of this walk's locations for editing into a new
    /// walk. The walk itself stays untouched.
    pub fn edit_copy(&self) -> crate::models::PendingLocations {
        self.locations.clone().into()
    }
}

// Request/Response types for API endpoints

#[derive(Debug, Deserialize)]
pub struct LoopWalkRequest {
    pub start: Coordinates,
    pub duration_minutes: f64,
    #[serde(default = "default_walking_speed")]
    pub walking_speed_mps: f64,
}

fn default_walking_speed() -> f64 {
    AVERAGE_WALKING_SPEED_MPS
}

impl LoopWalkRequest {
    pub fn validate(&self) -> Result<(), String> {
        if !(MIN_WALK_DURATION_MINUTES..=MAX_WALK_DURATION_MINUTES)
            .contains(&self.duration_minutes)
        {
            return Err(format!(
                "duration_minutes must be between {} and {}",
                MIN_WALK_DURATION_MINUTES, MAX_WALK_DURATION_MINUTES
            ));
        }
        if self.walking_speed_mps <= 0.0 {
            return Err("walking_speed_mps must be positive".to_string());
        }
        Ok(())
    }

    pub fn to_parameters(&self) -> WalkParameters {
        WalkParameters {
            start: self.start,
            duration_s: self.duration_minutes * 60.0,
            walking_speed_mps: self.walking_speed_mps,
        }
    }
}

/// Everything the composer needs for one multi-stop walk.
#[derive(Debug, Deserialize)]
pub struct ComposeWalkRequest {
    pub name: String,
    pub locations: Vec<WalkLocation>,
    #[serde(default)]
    pub options: WalkOptions,
    pub created_by: String,
    #[serde(default)]
    pub is_public: bool,
}

#[derive(Debug, Serialize)]
pub struct LoopWalkResponse {
    pub route: WalkRoute,
    pub estimated_calories: u32,
}

impl From<WalkRoute> for LoopWalkResponse {
    fn from(route: WalkRoute) -> Self {
        let estimated_calories = route.estimated_calories();
        LoopWalkResponse {
            route,
            estimated_calories,
        }
    }
}
