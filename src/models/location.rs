use crate::models::Coordinates;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How a location entered the walk being planned.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LocationKind {
    #[default]
    UserInput,
    Search,
    CurrentPosition,
    Saved,
}

/// A named point of interest supplied by the caller. Immutable once created;
/// identity is the opaque `id`, not the name or coordinates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalkLocation {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    pub coordinate: Coordinates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default)]
    pub kind: LocationKind,
}

impl WalkLocation {
    pub fn new(name: impl Into<String>, coordinate: Coordinates, kind: LocationKind) -> Self {
        WalkLocation {
            id: Uuid::new_v4(),
            name: name.into(),
            coordinate,
            address: None,
            kind,
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    /// Location built from the device's current GPS fix.
    pub fn current_position(coordinate: Coordinates) -> Self {
        WalkLocation::new("Current location", coordinate, LocationKind::CurrentPosition)
    }
}

/// Working set of locations being assembled into a walk.
///
/// Locations are immutable records; the set itself supports removal and
/// reordering by id or index, so no interior mutability or object identity
/// is required.
#[derive(Debug, Clone, Default)]
pub struct PendingLocations {
    locations: Vec<WalkLocation>,
}

impl PendingLocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, location: WalkLocation) {
        self.locations.push(location);
    }

    /// Remove the location with the given id. Returns false if absent.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.locations.len();
        self.locations.retain(|l| l.id != id);
        self.locations.len() != before
    }

    /// Move the location at `from` to position `to`. Out-of-range indices
    /// leave the set unchanged.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from < self.locations.len() && to < self.locations.len() {
            let location = self.locations.remove(from);
            self.locations.insert(to, location);
        }
    }

    pub fn clear(&mut self) {
        self.locations.clear();
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn as_slice(&self) -> &[WalkLocation] {
        &self.locations
    }

    pub fn into_vec(self) -> Vec<WalkLocation> {
        self.locations
    }
}

impl From<Vec<WalkLocation>> for PendingLocations {
    fn from(locations: Vec<WalkLocation>) -> Self {
        PendingLocations { locations }
    }
}
