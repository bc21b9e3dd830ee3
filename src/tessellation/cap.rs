//! Round end-cap generation: a triangle fan approximating a half-disc.

use std::f64::consts::{FRAC_PI_2, PI};

/// Number of angular steps used to approximate the half-disc cap.
pub const SECTORS_IN_CIRCLE: usize = 8;

/// Angular step between consecutive rim vertices.
#[allow(clippy::cast_precision_loss)]
const SECTOR_STEP: f64 = PI / SECTORS_IN_CIRCLE as f64;

/// Number of rim vertices a cap contributes, independent of the width.
///
/// The argument is unused; it is kept in the signature so that callers sizing
/// buffers per-stroke can pass the stroke width they already have on hand.
#[must_use]
pub fn num_circle_points(_width: f64) -> usize {
    SECTORS_IN_CIRCLE + 1
}

/// Appends a half-disc triangle fan to the vertex and index buffers.
///
/// One center vertex at `(x, y, 0)` is emitted first, then
/// [`SECTORS_IN_CIRCLE`]` + 1` rim vertices at distance `radius`, starting 90°
/// past `incline_angle` and sweeping exactly π across the non-degenerate
/// steps, so the flat edge of the half-disc aligns with the stroke end.
///
/// The last fan triangle wraps back to rim vertex 0, overlapping the first
/// sector; this is kept as-is so the buffer layout stays reproducible for
/// consumers that depend on the exact emission order.
///
/// A non-positive `radius` collapses the rim onto the center; not rejected.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn add_circle(
    x: f64,
    y: f64,
    incline_angle: f64,
    radius: f64,
    vertices: &mut Vec<f64>,
    indices: &mut Vec<u32>,
) {
    let center = (vertices.len() / 3) as u32;
    vertices.extend_from_slice(&[x, y, 0.0]);

    for i in 0..=SECTORS_IN_CIRCLE {
        let angle = SECTOR_STEP * i as f64 + FRAC_PI_2 + incline_angle;
        vertices.extend_from_slice(&[x + radius * angle.cos(), y + radius * angle.sin(), 0.0]);
    }

    let rim_count = SECTORS_IN_CIRCLE as u32 + 1;
    for i in 0..rim_count {
        indices.extend_from_slice(&[center, center + 1 + i, center + 1 + (i + 1) % rim_count]);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn appends_fan_counts() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        add_circle(0.0, 0.0, 0.0, 1.0, &mut vertices, &mut indices);

        // 1 center + 9 rim vertices, 9 triangles.
        assert_eq!(vertices.len(), (SECTORS_IN_CIRCLE + 2) * 3);
        assert_eq!(indices.len(), (SECTORS_IN_CIRCLE + 1) * 3);
    }

    #[test]
    fn rim_vertices_lie_on_radius() {
        let (cx, cy, r) = (3.0, -2.0, 2.5);
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        add_circle(cx, cy, 0.7, r, &mut vertices, &mut indices);

        for rim in vertices[3..].chunks_exact(3) {
            let dist = (rim[0] - cx).hypot(rim[1] - cy);
            assert_relative_eq!(dist, r, epsilon = 1e-12);
            assert_relative_eq!(rim[2], 0.0);
        }
    }

    #[test]
    fn sweep_spans_half_circle() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        add_circle(1.0, 1.0, 0.3, 2.0, &mut vertices, &mut indices);

        // First and last rim vertices are diametrically opposite.
        let first = &vertices[3..6];
        let last = &vertices[vertices.len() - 3..];
        assert_relative_eq!(first[0] + last[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(first[1] + last[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn final_triangle_wraps_to_first_rim_vertex() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        add_circle(0.0, 0.0, 0.0, 1.0, &mut vertices, &mut indices);

        let last = &indices[indices.len() - 3..];
        assert_eq!(last, &[0, 9, 1]);
    }

    #[test]
    fn indices_offset_by_existing_vertices() {
        let mut vertices = vec![0.0; 12]; // 4 pre-existing vertices
        let mut indices = vec![0, 1, 2];
        add_circle(5.0, 5.0, 0.0, 1.0, &mut vertices, &mut indices);

        let vertex_count = u32::try_from(vertices.len() / 3).unwrap();
        assert_eq!(indices[3], 4); // center index
        assert!(indices.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn num_circle_points_ignores_width() {
        assert_eq!(num_circle_points(0.0), 9);
        assert_eq!(num_circle_points(5.0), 9);
        assert_eq!(num_circle_points(-3.0), 9);
    }

    #[test]
    fn zero_radius_degenerates_silently() {
        let mut vertices = Vec::new();
        let mut indices = Vec::new();
        add_circle(1.0, 2.0, 0.0, 0.0, &mut vertices, &mut indices);

        for v in vertices.chunks_exact(3) {
            assert_relative_eq!(v[0], 1.0);
            assert_relative_eq!(v[1], 2.0);
        }
    }
}
