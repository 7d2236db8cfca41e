use crate::models::Coordinates;

/// Total length of a waypoint chain in meters: sum of haversine distances
/// over consecutive pairs. Empty and single-point chains have length zero.
pub fn path_length_m(path: &[Coordinates]) -> f64 {
    path.windows(2).map(|w| w[0].distance_to(&w[1])).sum()
}

/// Arithmetic midpoint of two coordinates in degree space. Good enough for
/// the sub-kilometer segments this crate works with; not a great-circle
/// midpoint.
pub fn midpoint(a: &Coordinates, b: &Coordinates) -> Coordinates {
    Coordinates::new((a.lat + b.lat) / 2.0, (a.lng + b.lng) / 2.0)
}
