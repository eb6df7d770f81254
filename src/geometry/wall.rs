use serde::{Deserialize, Serialize};

use super::Facing;
use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{left_normal, longest_edge, midpoint, right_normal, segment_direction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Number of corners every wall polygon carries.
pub const WALL_CORNERS: usize = 4;

/// A straight wall segment drawn as a closed quadrilateral.
///
/// Corners are kept in the order supplied; consecutive corners form the
/// edges and the last corner connects back to the first. A `Wall` is only
/// constructed through validation, so every value has four finite corners
/// and a longest edge of non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "Vec<[f64; 2]>", try_from = "Vec<[f64; 2]>")]
pub struct Wall {
    corners: [Point2; WALL_CORNERS],
}

impl Wall {
    /// Creates a wall from its corner points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::CornerCount` unless exactly four corners are
    /// given, `GeometryError::NonFinite` for NaN or infinite coordinates, and
    /// `GeometryError::Degenerate` if all corners coincide.
    pub fn new(corners: &[Point2]) -> Result<Self> {
        Ok(Self::checked(corners, 0)?)
    }

    /// Validates `corners` as the wall at position `index` of a floorplan.
    pub(crate) fn checked(corners: &[Point2], index: usize) -> std::result::Result<Self, GeometryError> {
        let corners: [Point2; WALL_CORNERS] =
            corners.try_into().map_err(|_| GeometryError::CornerCount {
                wall: index,
                found: corners.len(),
            })?;

        if let Some(corner) = corners
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(GeometryError::NonFinite {
                wall: index,
                corner,
            });
        }

        match longest_edge(&corners) {
            Some((_, len)) if len >= TOLERANCE => Ok(Self { corners }),
            _ => Err(GeometryError::Degenerate {
                wall: index,
                reason: "zero-length reference edge".to_owned(),
            }),
        }
    }

    /// Returns the corner points in their original order.
    #[must_use]
    pub fn corners(&self) -> &[Point2; WALL_CORNERS] {
        &self.corners
    }

    /// Iterates over the perimeter edges as `(start, end)` pairs, closing
    /// the loop from the last corner back to the first.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        (0..WALL_CORNERS).map(move |k| (&self.corners[k], &self.corners[(k + 1) % WALL_CORNERS]))
    }

    /// Computes the wall's reference edge: its longest perimeter edge.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::Degenerate` if the longest edge has zero
    /// length.
    pub fn reference_edge(&self) -> Result<ReferenceEdge> {
        let Some((index, length)) = longest_edge(&self.corners) else {
            return Err(GeometryError::Degenerate {
                wall: 0,
                reason: "wall has no edges".to_owned(),
            }
            .into());
        };
        let start = &self.corners[index];
        let end = &self.corners[(index + 1) % WALL_CORNERS];
        Ok(ReferenceEdge {
            index,
            midpoint: midpoint(start, end),
            direction: segment_direction(start, end)?,
            length,
        })
    }
}

impl TryFrom<Vec<[f64; 2]>> for Wall {
    type Error = GeometryError;

    fn try_from(raw: Vec<[f64; 2]>) -> std::result::Result<Self, Self::Error> {
        let corners: Vec<Point2> = raw.iter().map(|&[x, y]| Point2::new(x, y)).collect();
        Self::checked(&corners, 0)
    }
}

impl From<Wall> for Vec<[f64; 2]> {
    fn from(wall: Wall) -> Self {
        wall.corners.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// The longest edge of a wall, from which its facing is derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceEdge {
    /// Index of the edge's starting corner.
    pub index: usize,
    /// Midpoint of the edge; the origin of both test rays.
    pub midpoint: Point2,
    /// Unit direction from the edge's start corner to its end corner.
    pub direction: Vector2,
    /// Euclidean length of the edge.
    pub length: f64,
}

impl ReferenceEdge {
    /// Returns the two candidate unit normals `(n1, n2)`, where
    /// `n1 = (-dy, dx)` and `n2 = (dy, -dx)`.
    #[must_use]
    pub fn normals(&self) -> (Vector2, Vector2) {
        (left_normal(self.direction), right_normal(self.direction))
    }
}

/// A wall together with its classified facing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledWall {
    /// The wall polygon.
    pub corners: Wall,
    /// Direction the wall's exterior side faces, or [`Facing::Inner`].
    pub facing: Facing,
}

impl LabeledWall {
    #[must_use]
    pub fn new(wall: Wall, facing: Facing) -> Self {
        Self {
            corners: wall,
            facing,
        }
    }

    /// Returns the labeled wall polygon.
    #[must_use]
    pub fn wall(&self) -> &Wall {
        &self.corners
    }
}
