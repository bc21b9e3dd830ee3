//! Polyline stroke extrusion: offset-pair vertices, segment quads, end caps.

use std::f64::consts::PI;

use crate::error::{Result, StrokeError};
use crate::math::direction::{incline_angle, join_direction, segment_normal};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::cap::add_circle;

/// Local corner pattern of the two triangles forming one segment quad,
/// relative to the segment's first offset vertex.
const SEGMENT_TRIANGLES: [u32; 6] = [0, 1, 2, 1, 3, 2];

/// Which ends of a stroke receive a round cap.
///
/// The default is a cap on both ends. [`CapEnds::round`] models the
/// one-flag rule where the end cap mirrors the start flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapEnds {
    pub start: bool,
    pub end: bool,
}

impl CapEnds {
    /// No caps on either end.
    pub const NONE: Self = Self {
        start: false,
        end: false,
    };

    /// Round caps on both ends.
    pub const BOTH: Self = Self {
        start: true,
        end: true,
    };

    /// Applies a single flag to both ends.
    #[must_use]
    pub const fn round(flag: bool) -> Self {
        Self {
            start: flag,
            end: flag,
        }
    }
}

impl Default for CapEnds {
    fn default() -> Self {
        Self::BOTH
    }
}

/// Extrudes a flat `[x0,y0,x1,y1,...]` polyline into a thick planar stroke
/// mesh, appending to the caller's vertex and index buffers.
///
/// Every polyline point produces two vertices offset by ±`width` along the
/// point's join direction (left/right stroke edges), and every segment
/// produces one quad split into two triangles. Round caps are half-disc fans
/// appended before the stroke vertices (start) and after them (end).
///
/// Existing buffer contents are never touched; all emitted indices account
/// for vertices already present. Fewer than 2 points is a silent no-op.
///
/// A negative `width` flips the left/right offset sides. Consecutive
/// coincident points propagate NaN into the emitted vertices; use
/// [`triangulate_line_checked`] to reject such input up front.
#[allow(clippy::cast_possible_truncation)]
pub fn triangulate_line(
    points: &[f64],
    width: f64,
    vertices: &mut Vec<f64>,
    indices: &mut Vec<u32>,
    caps: CapEnds,
) {
    let n = points.len() / 2;
    if n < 2 {
        return;
    }

    let point = |i: usize| Point3::new(points[2 * i], points[2 * i + 1], 0.0);

    if caps.start {
        // With a single segment the cap incline defaults to 0.
        let angle = if n == 2 {
            0.0
        } else {
            incline_angle(point(0), point(1))
        };
        add_circle(points[0], points[1], angle, width, vertices, indices);
    }

    let base = (vertices.len() / 3) as u32;
    let mut prev_normal = Vector3::zeros();

    for i in 0..n {
        let p = point(i);
        let offset_dir = if i + 1 < n {
            let normal = segment_normal(p, point(i + 1));
            let joined = if i > 0 {
                join_direction(normal, prev_normal)
            } else {
                normal
            };
            prev_normal = normal;
            joined
        } else {
            // Last point: flat end, perpendicular to the final segment.
            prev_normal
        };

        let off = offset_dir * width;
        vertices.extend_from_slice(&[
            p.x - off.x,
            p.y - off.y,
            0.0,
            p.x + off.x,
            p.y + off.y,
            0.0,
        ]);
    }

    for i in 0..n - 1 {
        let first = base + (2 * i) as u32;
        indices.extend(SEGMENT_TRIANGLES.iter().map(|corner| first + corner));
    }

    if caps.end {
        let angle = if n == 2 {
            PI
        } else {
            incline_angle(point(n - 1), point(n - 2))
        };
        add_circle(
            points[2 * (n - 1)],
            points[2 * (n - 1) + 1],
            angle,
            width,
            vertices,
            indices,
        );
    }
}

/// Validating wrapper around [`triangulate_line`].
///
/// # Errors
///
/// Returns [`StrokeError::InvalidInput`] for an odd-length point buffer or a
/// non-finite coordinate or width, and [`StrokeError::DegenerateSegment`] for
/// consecutive coincident points. Fewer than 2 points remains a success no-op.
pub fn triangulate_line_checked(
    points: &[f64],
    width: f64,
    vertices: &mut Vec<f64>,
    indices: &mut Vec<u32>,
    caps: CapEnds,
) -> Result<()> {
    if points.len() % 2 != 0 {
        return Err(StrokeError::InvalidInput(format!(
            "point buffer has odd length {}",
            points.len()
        )));
    }
    if let Some(pos) = points.iter().position(|c| !c.is_finite()) {
        return Err(StrokeError::InvalidInput(format!(
            "non-finite coordinate at component {pos}"
        )));
    }
    if !width.is_finite() {
        return Err(StrokeError::InvalidInput(format!(
            "non-finite width {width}"
        )));
    }

    let n = points.len() / 2;
    for i in 1..n {
        let dx = points[2 * i] - points[2 * i - 2];
        let dy = points[2 * i + 1] - points[2 * i - 1];
        if dx.hypot(dy) < TOLERANCE {
            return Err(StrokeError::DegenerateSegment(i - 1, i));
        }
    }

    triangulate_line(points, width, vertices, indices, caps);
    Ok(())
}
