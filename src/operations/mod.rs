pub mod classify;
mod project;
pub mod render;

pub use classify::{ClassifyParams, ClassifyWalls, RayReach};
pub use project::{Projection, WallProjection};
pub use render::{Drawing, HighlightSet, ProjectionStyle, RenderProjection, Viewport};
