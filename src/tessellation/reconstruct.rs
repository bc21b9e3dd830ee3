//! Inverse of stroke extrusion: recovering the centerline and width from a
//! previously extruded vertex buffer.
//!
//! Extrusion emits each polyline point as a `−width`/`+width` vertex pair, so
//! the midpoint of a pair is the original point and the pair spread is twice
//! the width. Pair indices count two vertices (six components); one round cap
//! occupies 10 vertices, i.e. 5 pairs.

/// Recovers centerline points from an extruded vertex buffer.
///
/// The output is a flat `[x0,y0,x1,y1,...]` buffer sized to half the input
/// component count, regardless of `start_offset`. For every vertex-pair index
/// `k` from `start_offset` on, slots `2k`/`2k+1` hold the x/y midpoint of
/// vertices `2k` and `2k+1`. Slots before `2*start_offset` stay 0.0, as does
/// the tail past the last full pair.
///
/// Pairs covering cap geometry reconstruct to fan midpoints, not centerline
/// points; pass a `start_offset` of 5 per leading cap to skip them, and
/// ignore the trailing-cap region on the other end.
#[must_use]
pub fn reconstruct_line(vertices: &[f64], start_offset: usize) -> Vec<f64> {
    let mut points = vec![0.0; vertices.len() / 2];
    let pair_count = vertices.len() / 6;

    for k in start_offset..pair_count {
        let a = 6 * k;
        let b = a + 3;
        points[2 * k] = f64::midpoint(vertices[a], vertices[b]);
        points[2 * k + 1] = f64::midpoint(vertices[a + 1], vertices[b + 1]);
    }

    points
}

/// Recovers the stroke width from the vertex pair at `start_index`.
///
/// Half the Euclidean distance between the pair's two vertices. At endpoint
/// and colinear-run pairs this is exactly the extrusion width; at bent joins
/// the pair is spread along the lengthened miter bisector and measures wider.
///
/// # Panics
///
/// Panics if `start_index` does not address a full vertex pair within the
/// buffer — an out-of-range index is a caller contract violation.
#[must_use]
pub fn reconstruct_line_width(vertices: &[f64], start_index: usize) -> f64 {
    let a = 6 * start_index;
    let b = a + 3;
    let dx = vertices[b] - vertices[a];
    let dy = vertices[b + 1] - vertices[a + 1];
    let dz = vertices[b + 2] - vertices[a + 2];
    (dx * dx + dy * dy + dz * dz).sqrt() / 2.0
}
