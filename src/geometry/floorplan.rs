use serde::Deserialize;

use super::Wall;
use crate::error::{GeometryError, Result};
use crate::math::bounds_2d::Aabb2;
use crate::math::Point2;

/// An immutable set of walls stored contiguously and addressed by index.
///
/// Wall order only matters for identifying a wall during ray casting; no
/// other ordering is implied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Floorplan {
    walls: Vec<Wall>,
}

/// The wall document exchanged with the surrounding application.
///
/// Fields other than `walls` are ignored.
#[derive(Debug, Deserialize)]
struct WallDocument {
    walls: Vec<Vec<[f64; 2]>>,
}

impl Floorplan {
    /// Creates a floorplan from already validated walls.
    #[must_use]
    pub fn new(walls: Vec<Wall>) -> Self {
        Self { walls }
    }

    /// Builds a floorplan from raw corner lists, validating every wall.
    ///
    /// # Errors
    ///
    /// Returns `InvalidGeometry` naming the first malformed wall. No partial
    /// floorplan is produced.
    pub fn from_corners<C>(walls: &[C]) -> Result<Self>
    where
        C: AsRef<[Point2]>,
    {
        let walls = walls
            .iter()
            .enumerate()
            .map(|(i, corners)| Wall::checked(corners.as_ref(), i))
            .collect::<std::result::Result<Vec<_>, GeometryError>>()?;
        Ok(Self { walls })
    }

    /// Parses a `{"walls": [[[x, y], ...], ...]}` document.
    ///
    /// # Errors
    ///
    /// Returns `Document` if the JSON is malformed and `InvalidGeometry` if
    /// a wall does not have four finite corners.
    pub fn from_json(document: &str) -> Result<Self> {
        let doc: WallDocument = serde_json::from_str(document)?;
        let corners: Vec<Vec<Point2>> = doc
            .walls
            .iter()
            .map(|wall| wall.iter().map(|&[x, y]| Point2::new(x, y)).collect())
            .collect();
        Self::from_corners(&corners)
    }

    /// Returns the walls in their original order.
    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Bounding box of every wall corner, or `None` for an empty floorplan.
    #[must_use]
    pub fn bounds(&self) -> Option<Aabb2> {
        Aabb2::from_points(self.walls.iter().flat_map(|w| w.corners().iter()))
    }
}

impl From<Vec<Wall>> for Floorplan {
    fn from(walls: Vec<Wall>) -> Self {
        Self::new(walls)
    }
}
