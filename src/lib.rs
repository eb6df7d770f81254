pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

#[cfg(test)]
mod test_support;

pub use error::{OrientisError, Result};
pub use geometry::{Facing, Floorplan, LabeledWall, Wall};
pub use operations::{ClassifyWalls, RenderProjection, WallProjection};
