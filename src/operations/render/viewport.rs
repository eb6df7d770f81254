use crate::error::{OrientisError, Result};
use crate::geometry::Wall;
use crate::math::bounds_2d::Aabb2;
use crate::math::Point2;

/// The padded coordinate window of a projection drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    bounds: Aabb2,
    padding: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(bounds: Aabb2, padding: f64) -> Self {
        Self { bounds, padding }
    }

    /// Computes the viewport around every corner of `walls`.
    ///
    /// # Errors
    ///
    /// Returns `EmptyFloorplan` if there are no walls.
    pub fn of_walls<'a, I>(walls: I, padding: f64) -> Result<Self>
    where
        I: IntoIterator<Item = &'a Wall>,
    {
        let bounds = Aabb2::from_points(walls.into_iter().flat_map(|w| w.corners().iter()))
            .ok_or(OrientisError::EmptyFloorplan)?;
        Ok(Self::new(bounds, padding))
    }

    /// Unpadded bounds of the wall corners.
    #[must_use]
    pub fn bounds(&self) -> &Aabb2 {
        &self.bounds
    }

    #[must_use]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.bounds.min.x - self.padding
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.bounds.min.y - self.padding
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bounds.width() + 2.0 * self.padding
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bounds.height() + 2.0 * self.padding
    }

    /// Center of the unpadded bounds.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.bounds.center()
    }

    /// The SVG `viewBox` value: `"min-x min-y width height"`.
    #[must_use]
    pub fn view_box(&self) -> String {
        format!(
            "{} {} {} {}",
            self.min_x(),
            self.min_y(),
            self.width(),
            self.height()
        )
    }
}
