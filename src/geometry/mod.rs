pub mod facing;
pub mod floorplan;
pub mod wall;

pub use facing::{Facing, ViewType};
pub use floorplan::Floorplan;
pub use wall::{LabeledWall, ReferenceEdge, Wall, WALL_CORNERS};
