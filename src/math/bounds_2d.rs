use super::Point2;

/// An axis-aligned bounding box in the drawing plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Builds the tightest box around `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point2>,
    {
        let mut iter = points.into_iter();
        let first = *iter.next()?;
        let mut aabb = Self {
            min: first,
            max: first,
        };
        for pt in iter {
            aabb.include(pt);
        }
        Some(aabb)
    }

    /// Grows the box to contain `pt`.
    pub fn include(&mut self, pt: &Point2) {
        self.min.x = self.min.x.min(pt.x);
        self.min.y = self.min.y.min(pt.y);
        self.max.x = self.max.x.max(pt.x);
        self.max.y = self.max.y.max(pt.y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Center of the box.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Length of the box diagonal.
    #[must_use]
    pub fn diagonal(&self) -> f64 {
        (self.max - self.min).norm()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_points_spans_all() {
        let pts = [
            Point2::new(3.0, -1.0),
            Point2::new(-2.0, 4.0),
            Point2::new(1.0, 1.0),
        ];
        let aabb = Aabb2::from_points(&pts).unwrap();
        assert_relative_eq!(aabb.min.x, -2.0);
        assert_relative_eq!(aabb.min.y, -1.0);
        assert_relative_eq!(aabb.max.x, 3.0);
        assert_relative_eq!(aabb.max.y, 4.0);
        assert_relative_eq!(aabb.width(), 5.0);
        assert_relative_eq!(aabb.height(), 5.0);
    }

    #[test]
    fn from_points_empty() {
        assert!(Aabb2::from_points(std::iter::empty::<&Point2>()).is_none());
    }

    #[test]
    fn center_and_diagonal() {
        let aabb = Aabb2::from_points(&[Point2::new(0.0, 0.0), Point2::new(6.0, 8.0)]).unwrap();
        assert_relative_eq!(aabb.center().x, 3.0);
        assert_relative_eq!(aabb.center().y, 4.0);
        assert_relative_eq!(aabb.diagonal(), 10.0);
    }
}
