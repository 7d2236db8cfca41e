use crate::error::{AppError, Result};
use crate::models::{Coordinates, TransportMode};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const MAPBOX_DIRECTIONS_BASE_URL: &str = "https://api.mapbox.com/directions/v5/mapbox";

/// One routed leg between two points, as returned by a directions provider.
#[derive(Debug, Clone)]
pub struct DirectionsLeg {
    pub waypoints: Vec<Coordinates>,
    pub distance_m: f64,
    pub duration_s: f64,
}

/// External walking-directions source. Any failure (network, no route
/// found, provider error) is reported uniformly as [`AppError::Directions`];
/// the composer absorbs it into a straight-line fallback.
#[async_trait]
pub trait DirectionsProvider: Send + Sync {
    async fn walking_directions(&self, from: Coordinates, to: Coordinates)
        -> Result<DirectionsLeg>;
}

/// Mapbox Directions API client, walking profile.
#[derive(Clone)]
pub struct MapboxDirections {
    client: Client,
    api_key: String,
    base_url: String,
}

impl MapboxDirections {
    pub fn new(api_key: String) -> Self {
        MapboxDirections {
            client: Client::new(),
            api_key,
            base_url: MAPBOX_DIRECTIONS_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        MapboxDirections {
            client: Client::new(),
            api_key,
            base_url,
        }
    }
}

#[async_trait]
impl DirectionsProvider for MapboxDirections {
    async fn walking_directions(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<DirectionsLeg> {
        // Mapbox expects "lng,lat;lng,lat"
        let url = format!(
            "{}/{}/{},{};{},{}",
            self.base_url,
            TransportMode::Walk.directions_profile(),
            from.lng,
            from.lat,
            to.lng,
            to.lat
        );

        tracing::debug!(
            from_lat = from.lat,
            from_lng = from.lng,
            to_lat = to.lat,
            to_lng = to.lng,
            "Mapbox directions request"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("geometries", "geojson"),
                ("overview", "full"),
                ("steps", "false"),
            ])
            .query(&[("access_token", &self.api_key)])
            .send()
            .await
            .map_err(|e| AppError::Directions(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            tracing::warn!(status = %status, "Mapbox HTTP error {}: {}", status, error_text);
            return Err(AppError::Directions(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let directions: MapboxDirectionsApiResponse = response
            .json()
            .await
            .map_err(|e| AppError::Directions(format!("Failed to parse response: {}", e)))?;

        let route = directions
            .routes
            .first()
            .ok_or_else(|| AppError::Directions("No routes found".to_string()))?;

        tracing::debug!(
            distance_m = %format!("{:.0}", route.distance),
            duration_s = %format!("{:.0}", route.duration),
            points = route.geometry.coordinates.len(),
            "Mapbox directions response"
        );

        Ok(DirectionsLeg {
            waypoints: route
                .geometry
                .coordinates
                .iter()
                .map(|c| Coordinates::new(c[1], c[0]))
                .collect(),
            distance_m: route.distance,
            duration_s: route.duration,
        })
    }
}

// Mapbox API response types

#[derive(Debug, Deserialize)]
struct MapboxDirectionsApiResponse {
    routes: Vec<MapboxRoute>,
}

#[derive(Debug, Deserialize)]
struct MapboxRoute {
    distance: f64, // meters
    duration: f64, // seconds
    geometry: MapboxGeometry,
}

#[derive(Debug, Deserialize)]
struct MapboxGeometry {
    /// [lng, lat] pairs
    coordinates: Vec<[f64; 2]>,
}
