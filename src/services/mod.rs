pub mod directions;
pub mod walk_generator;
