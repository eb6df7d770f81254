use super::{Point2, TOLERANCE};

/// Result of intersecting two bounded segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentIntersection {
    /// The segments meet in a single point.
    Point(Point2),
    /// The segments are collinear and share a stretch of positive length.
    Overlap(Point2, Point2),
}

/// Bounded segment-segment intersection in 2D.
///
/// Endpoints are inclusive. Collinear segments report the shared stretch
/// as [`SegmentIntersection::Overlap`], or as a single point when they only
/// touch end to end.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<SegmentIntersection> {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();
    if len_a < TOLERANCE {
        // A degenerate first segment only matters if it lies on the second.
        return point_on_segment(a0, b0, b1).then_some(SegmentIntersection::Point(*a0));
    }

    let cross = da.perp(&db);
    if cross.abs() <= TOLERANCE * len_a * len_b {
        return collinear_overlap(a0, a1, b0, b1);
    }

    let w = b0 - a0;
    let t = w.perp(&db) / cross;
    let u = w.perp(&da) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some(SegmentIntersection::Point(a0 + da * t_clamped))
    } else {
        None
    }
}

/// Returns `true` if `p` lies on the segment `s0`–`s1` (endpoints included).
#[must_use]
pub fn point_on_segment(p: &Point2, s0: &Point2, s1: &Point2) -> bool {
    let d = s1 - s0;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return (p - s0).norm() < TOLERANCE;
    }
    let t = (p - s0).dot(&d) / len_sq;
    if !(-TOLERANCE..=1.0 + TOLERANCE).contains(&t) {
        return false;
    }
    let foot = s0 + d * t.clamp(0.0, 1.0);
    (p - foot).norm() < TOLERANCE * len_sq.sqrt().max(1.0)
}

/// Overlap of two parallel segments, `None` unless they share a line.
fn collinear_overlap(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<SegmentIntersection> {
    let da = a1 - a0;
    let len_sq = da.norm_squared();
    let len = len_sq.sqrt();

    // Distance of b0 from the supporting line of a.
    let offset = (b0 - a0).perp(&da).abs() / len;
    if offset > TOLERANCE * len.max(1.0) {
        return None;
    }

    // Project b onto a's parameter space.
    let s0 = (b0 - a0).dot(&da) / len_sq;
    let s1 = (b1 - a0).dot(&da) / len_sq;
    let lo = s0.min(s1).max(0.0);
    let hi = s0.max(s1).min(1.0);

    let eps = TOLERANCE;
    if lo > hi + eps {
        return None;
    }
    if (hi - lo) * len <= eps * len.max(1.0) {
        return Some(SegmentIntersection::Point(a0 + da * lo.min(hi)));
    }
    Some(SegmentIntersection::Overlap(a0 + da * lo, a0 + da * hi))
}
