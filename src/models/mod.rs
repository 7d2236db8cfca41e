pub mod coordinates;
pub mod location;
pub mod walk;

pub use coordinates::Coordinates;
pub use location::{LocationKind, PendingLocations, WalkLocation};
pub use walk::{
    ComposeWalkRequest, LoopWalkRequest, LoopWalkResponse, MultiStopWalk, PathStyle,
    TransportMode, WalkOptions, WalkParameters, WalkRoute,
};
