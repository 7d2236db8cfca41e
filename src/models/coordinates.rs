use crate::constants::EARTH_RADIUS_M;
use serde::{Deserialize, Serialize};

/// A WGS84-ish position in decimal degrees.
///
/// The core performs no range validation: callers are expected to supply
/// lat in [-90, 90] and lng in [-180, 180]. The spherical formulas still
/// compute outside that range, but the result is meaningless.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    /// Point reached by travelling `distance_m` meters from here along the
    /// initial compass bearing `bearing_deg` (0° = north, clockwise), using
    /// the direct geodesic formula on a spherical Earth.
    ///
    /// A distance of zero returns this coordinate (to floating-point
    /// tolerance). Bearings outside [0, 360) wrap via trig periodicity.
    pub fn destination(&self, distance_m: f64, bearing_deg: f64) -> Coordinates {
        let angular = distance_m / EARTH_RADIUS_M;
        let lat1 = self.lat.to_radians();
        let lng1 = self.lng.to_radians();
        let bearing = bearing_deg.to_radians();

        let lat2 =
            (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
        let lng2 = lng1
            + (bearing.sin() * angular.sin() * lat1.cos())
                .atan2(angular.cos() - lat1.sin() * lat2.sin());

        Coordinates {
            lat: lat2.to_degrees(),
            lng: lng2.to_degrees(),
        }
    }

    /// Great-circle distance to `other` in meters, via the haversine formula.
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_M * c
    }

    /// Round coordinates to the given number of decimal places.
    /// Used to build stable cache keys for nearby requests.
    pub fn round(&self, decimal_places: u32) -> Self {
        let multiplier = 10_f64.powi(decimal_places as i32);
        Coordinates {
            lat: (self.lat * multiplier).round() / multiplier,
            lng: (self.lng * multiplier).round() / multiplier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_zero_distance_is_identity() {
        let points = [
            Coordinates::new(0.0, 0.0),
            Coordinates::new(48.8566, 2.3522),
            Coordinates::new(-33.8688, 151.2093),
        ];
        for p in points {
            for bearing in [0.0, 45.0, 137.2, 359.9] {
                let dest = p.destination(0.0, bearing);
                assert!((dest.lat - p.lat).abs() < 1e-6);
                assert!((dest.lng - p.lng).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_destination_cardinal_bearings() {
        let origin = Coordinates::new(0.0, 0.0);

        let north = origin.destination(1000.0, 0.0);
        assert!(north.lat > 0.0);
        assert!(north.lng.abs() < 0.001);

        let east = origin.destination(1000.0, 90.0);
        assert!(east.lng > 0.0);
        assert!(east.lat.abs() < 0.001);

        let south = origin.destination(1000.0, 180.0);
        assert!(south.lat < 0.0);
        assert!(south.lng.abs() < 0.001);

        let west = origin.destination(1000.0, 270.0);
        assert!(west.lng < 0.0);
        assert!(west.lat.abs() < 0.001);
    }

    #[test]
    fn test_destination_round_trip_distance() {
        let origin = Coordinates::new(48.8566, 2.3522);
        let dest = origin.destination(500.0, 60.0);
        let measured = origin.distance_to(&dest);
        assert!((measured - 500.0).abs() < 1.0);
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        let p = Coordinates::new(-6.2088, 106.8456);
        assert!(p.distance_to(&p) < 0.1);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let paris = Coordinates::new(48.8566, 2.3522);
        let london = Coordinates::new(51.5074, -0.1278);
        let there = paris.distance_to(&london);
        let back = london.distance_to(&paris);
        assert!((there - back).abs() < 1e-6);
        // Paris to London is roughly 344 km
        assert!((there - 344_000.0).abs() < 10_000.0);
    }

    #[test]
    fn test_one_kilometer_of_latitude() {
        let a = Coordinates::new(0.0, 0.0);
        let b = Coordinates::new(0.009, 0.0);
        let d = a.distance_to(&b);
        assert!((900.0..=1100.0).contains(&d));
    }

    #[test]
    fn test_rounding() {
        let coords = Coordinates::new(48.856614, 2.352222);
        let rounded = coords.round(3);
        assert_eq!(rounded.lat, 48.857);
        assert_eq!(rounded.lng, 2.352);
    }
}
