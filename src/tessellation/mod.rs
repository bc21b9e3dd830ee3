//! Stroke tessellation over caller-owned flat mesh buffers.
//!
//! Buffer format contract:
//! - vertex buffer: flat `[x, y, z, x, y, z, ...]`, always a multiple of 3
//!   components; all geometry produced here is planar (z = 0)
//! - index buffer: each consecutive triple names one triangle's corners as
//!   vertex indices (one index per 3-component vertex)
//!
//! All operations append; existing buffer contents are never truncated,
//! reordered, or rewritten. Nothing here holds state across calls, so
//! independent buffer pairs may be filled from different threads without
//! coordination; a single buffer pair requires exclusive access for the
//! duration of one call.

mod cap;
mod extrude;
mod reconstruct;

pub use cap::{add_circle, num_circle_points, SECTORS_IN_CIRCLE};
pub use extrude::{triangulate_line, triangulate_line_checked, CapEnds};
pub use reconstruct::{reconstruct_line, reconstruct_line_width};
