pub mod ray;

use tracing::{debug, trace};

use crate::error::{ParameterError, Result};
use crate::geometry::{Facing, Floorplan, LabeledWall};
use crate::math::TOLERANCE;

/// How far the test rays extend from a wall's reference edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayReach {
    /// A fixed length in drawing units.
    Fixed(f64),
    /// The floorplan's bounding diagonal times `factor` (at least 1).
    Scaled { factor: f64 },
}

impl RayReach {
    /// Length used by the original floorplan tooling.
    pub const DEFAULT_LENGTH: f64 = 10_000.0;

    /// Resolves the ray length for `floorplan`.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::OutOfRange` for a non-finite or non-positive
    /// length, or a scale factor below 1.
    pub fn resolve(self, floorplan: &Floorplan) -> Result<f64> {
        match self {
            Self::Fixed(length) => {
                if !length.is_finite() || length <= 0.0 {
                    return Err(ParameterError::OutOfRange {
                        parameter: "reach",
                        value: length,
                        expected: "finite and positive",
                    }
                    .into());
                }
                Ok(length)
            }
            Self::Scaled { factor } => {
                if !factor.is_finite() || factor < 1.0 {
                    return Err(ParameterError::OutOfRange {
                        parameter: "reach factor",
                        value: factor,
                        expected: "finite and at least 1",
                    }
                    .into());
                }
                let diagonal = floorplan.bounds().map_or(0.0, |b| b.diagonal());
                Ok(diagonal.max(TOLERANCE) * factor)
            }
        }
    }
}

impl Default for RayReach {
    fn default() -> Self {
        Self::Fixed(Self::DEFAULT_LENGTH)
    }
}

/// Parameters controlling wall classification.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassifyParams {
    /// Length of the exterior test rays.
    pub reach: RayReach,
}

/// Classifies the facing of every wall in a floorplan.
///
/// For each wall the longest edge is taken as the reference edge. A ray is
/// cast from its midpoint along each candidate normal, `n1 = (-dy, dx)`
/// first and then `n2 = (dy, -dx)`, against the perimeters of all other
/// walls. The first unobstructed normal is the exterior normal and is
/// labeled with [`Facing::from_normal`]; a wall obstructed on both sides is
/// [`Facing::Inner`]. When both sides are free, `n1` wins.
#[derive(Debug)]
pub struct ClassifyWalls<'a> {
    floorplan: &'a Floorplan,
    params: ClassifyParams,
}

impl<'a> ClassifyWalls<'a> {
    /// Creates a new classification with default parameters.
    #[must_use]
    pub fn new(floorplan: &'a Floorplan) -> Self {
        Self {
            floorplan,
            params: ClassifyParams::default(),
        }
    }

    #[must_use]
    pub fn with_params(mut self, params: ClassifyParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the classification.
    ///
    /// Returns one [`LabeledWall`] per input wall, in input order.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the ray reach is invalid, or
    /// `InvalidGeometry` if a wall's reference edge is degenerate.
    pub fn execute(&self) -> Result<Vec<LabeledWall>> {
        let reach = self.params.reach.resolve(self.floorplan)?;
        let walls = self.floorplan.walls();
        debug!(walls = walls.len(), reach, "classifying wall facings");

        walls
            .iter()
            .enumerate()
            .map(|(i, wall)| -> Result<LabeledWall> {
                let edge = wall.reference_edge()?;
                let (n1, n2) = edge.normals();
                let facing = if !ray::ray_blocked(&edge.midpoint, &n1, reach, walls, i) {
                    Facing::from_normal(n1)
                } else if !ray::ray_blocked(&edge.midpoint, &n2, reach, walls, i) {
                    Facing::from_normal(n2)
                } else {
                    Facing::Inner
                };
                trace!(wall = i, edge = edge.index, %facing, "classified wall");
                Ok(LabeledWall::new(*wall, facing))
            })
            .collect()
    }
}
