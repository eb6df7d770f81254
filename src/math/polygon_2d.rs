use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Returns the edge vectors of a closed polygon.
///
/// Edge `k` runs from `points[k]` to `points[(k + 1) % n]`.
#[must_use]
pub fn edge_vectors(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len();
    (0..n).map(|k| points[(k + 1) % n] - points[k]).collect()
}

/// Finds the longest edge of a closed polygon as `(index, length)`.
///
/// Ties keep the first maximum in vertex order. Returns `None` for an
/// empty polygon.
#[must_use]
pub fn longest_edge(points: &[Point2]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (k, edge) in edge_vectors(points).iter().enumerate() {
        let len = edge.norm();
        match best {
            Some((_, best_len)) if len <= best_len => {}
            _ => best = Some((k, len)),
        }
    }
    best
}

/// Midpoint of the segment `a`–`b`.
#[must_use]
pub fn midpoint(a: &Point2, b: &Point2) -> Point2 {
    nalgebra::center(a, b)
}

/// Computes the normalized direction from point `a` to point `b`.
///
/// # Errors
///
/// Returns `GeometryError::Degenerate` if the segment has zero length.
pub fn segment_direction(a: &Point2, b: &Point2) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::Degenerate {
            wall: 0,
            reason: format!(
                "zero-length segment between ({}, {}) and ({}, {})",
                a.x, a.y, b.x, b.y
            ),
        }
        .into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal `(-dy, dx)` of a direction vector.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

/// Returns the right-pointing normal `(dy, -dx)` of a direction vector.
#[must_use]
pub fn right_normal(dir: Vector2) -> Vector2 {
    Vector2::new(dir.y, -dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn rect(w: f64, h: f64) -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(w, 0.0),
            Point2::new(w, h),
            Point2::new(0.0, h),
        ]
    }

    #[test]
    fn edge_vectors_wrap_around() {
        let edges = edge_vectors(&rect(4.0, 1.0));
        assert_eq!(edges.len(), 4);
        assert!((edges[3] - Vector2::new(0.0, -1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn longest_edge_basic() {
        let (idx, len) = longest_edge(&rect(1.0, 3.0)).unwrap();
        assert_eq!(idx, 1);
        assert!((len - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn longest_edge_tie_keeps_first() {
        // Edges 0 and 2 are both 4 long.
        let (idx, _) = longest_edge(&rect(4.0, 1.0)).unwrap();
        assert_eq!(idx, 0);

        // All four edges equal.
        let (idx, _) = longest_edge(&rect(2.0, 2.0)).unwrap();
        assert_eq!(idx, 0);
    }

    #[test]
    fn longest_edge_empty() {
        assert!(longest_edge(&[]).is_none());
    }

    #[test]
    fn midpoint_basic() {
        let m = midpoint(&Point2::new(0.0, 0.0), &Point2::new(4.0, 2.0));
        assert!((m - Point2::new(2.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn segment_direction_basic() {
        let dir = segment_direction(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0)).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        let a = Point2::new(1.0, 1.0);
        assert!(segment_direction(&a, &a).is_err());
    }

    #[test]
    fn normals_are_opposite_rotations() {
        let dir = Vector2::new(1.0, 0.0);
        let l = left_normal(dir);
        let r = right_normal(dir);
        assert!((l - Vector2::new(0.0, 1.0)).norm() < TOLERANCE);
        assert!((r - Vector2::new(0.0, -1.0)).norm() < TOLERANCE);
    }
}
