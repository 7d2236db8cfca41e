use crate::models::WalkLocation;

/// Reorder locations with a greedy nearest-neighbor tour starting at the
/// first location: repeatedly visit the closest unvisited location.
///
/// O(n²) heuristic, not an exact TSP solve; for the location counts this
/// crate allows (≤ 10) it is more than adequate. Lists of 2 or fewer are
/// returned unchanged.
pub fn nearest_neighbor_order(locations: Vec<WalkLocation>) -> Vec<WalkLocation> {
    if locations.len() <= 2 {
        return locations;
    }

    let mut remaining = locations;
    let mut ordered = vec![remaining.remove(0)];

    while !remaining.is_empty() {
        let current = ordered[ordered.len() - 1].coordinate;
        // remaining is non-empty, so a minimum always exists
        let nearest_idx = remaining
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                current
                    .distance_to(&a.coordinate)
                    .partial_cmp(&current.distance_to(&b.coordinate))
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|(i, _)| i)
            .unwrap_or(0);

        ordered.push(remaining.remove(nearest_idx));
    }

    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Coordinates, LocationKind};

    fn location(name: &str, lat: f64, lng: f64) -> WalkLocation {
        WalkLocation::new(name, Coordinates::new(lat, lng), LocationKind::Search)
    }

    fn names(locations: &[WalkLocation]) -> Vec<&str> {
        locations.iter().map(|l| l.name.as_str()).collect()
    }

    #[test]
    fn test_orders_by_proximity_from_first() {
        // B is 100m from A, C is ~1100km away: the tour must be A, B, C
        let ordered = nearest_neighbor_order(vec![
            location("A", 0.0, 0.0),
            location("C", 0.0, 10.0),
            location("B", 0.0, 0.001),
        ]);
        assert_eq!(names(&ordered), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_two_locations_unchanged() {
        let ordered = nearest_neighbor_order(vec![
            location("far", 0.0, 10.0),
            location("near", 0.0, 0.0),
        ]);
        assert_eq!(names(&ordered), vec!["far", "near"]);
    }

    #[test]
    fn test_chain_of_stops() {
        let ordered = nearest_neighbor_order(vec![
            location("A", 0.0, 0.0),
            location("D", 0.0, 0.3),
            location("B", 0.0, 0.1),
            location("C", 0.0, 0.2),
        ]);
        assert_eq!(names(&ordered), vec!["A", "B", "C", "D"]);
    }
}
