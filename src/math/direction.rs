//! Segment-direction helpers for stroke extrusion.
//!
//! All directions live in the XY plane (z = 0); the stroke normal is the
//! left-hand perpendicular of the segment tangent.

use super::{Point3, Vector3, UP};

/// Rotates `dir` by +90° about the Z axis (`UP × dir`) — the left-hand
/// perpendicular in the XY plane.
#[must_use]
pub fn left_perpendicular(dir: Vector3) -> Vector3 {
    UP.cross(&dir)
}

/// Returns the left-hand unit normal of the segment `a → b`.
///
/// A zero-length segment normalizes a zero vector, yielding NaN components.
/// This hot path does not guard against it; see the validating entry points.
#[must_use]
pub fn segment_normal(a: Point3, b: Point3) -> Vector3 {
    left_perpendicular((b - a).normalize())
}

/// Miter-compensated join of the current and previous segment normals.
///
/// The two unit normals are summed and scaled by `1 − 0.5·(dir·prev)`. For
/// colinear segments (dot → 1) the factor is 0.5 and the result is the plain
/// unit average; as the bend sharpens (dot → −1) the factor grows toward 1.5,
/// lengthening the bisector so the outer stroke edge stays continuous.
#[must_use]
pub fn join_direction(dir: Vector3, prev: Vector3) -> Vector3 {
    (dir + prev) * (1.0 - 0.5 * dir.dot(&prev))
}

/// Angle of the vector `a → b` relative to the positive X axis, in radians.
#[must_use]
pub fn incline_angle(a: Point3, b: Point3) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}
