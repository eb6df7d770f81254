use crate::geometry::Wall;
use crate::math::intersect_2d::{segment_segment_intersect_2d, SegmentIntersection};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Tests a ray segment against a wall's perimeter.
///
/// The ray runs from `origin` to `origin + dir * reach`. A single contact
/// point at the origin itself does not count; any other contact point, or
/// any stretch of perimeter lying along the ray, does.
#[must_use]
pub fn ray_hits_wall(origin: &Point2, dir: &Vector2, reach: f64, wall: &Wall) -> bool {
    let end = origin + dir * reach;
    let slack = TOLERANCE * reach.max(1.0);
    wall.edges()
        .any(|(a, b)| match segment_segment_intersect_2d(origin, &end, a, b) {
            Some(SegmentIntersection::Point(p)) => (p - origin).norm() > slack,
            Some(SegmentIntersection::Overlap(..)) => true,
            None => false,
        })
}

/// Returns `true` if the ray hits any wall other than `walls[skip]`.
#[must_use]
pub fn ray_blocked(origin: &Point2, dir: &Vector2, reach: f64, walls: &[Wall], skip: usize) -> bool {
    walls
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != skip)
        .any(|(_, wall)| ray_hits_wall(origin, dir, reach, wall))
}
