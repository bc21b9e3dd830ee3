//! Polyline stroke tessellation: extrudes 2D polylines into thick, capped
//! planar triangle meshes, and recovers the centerline and width back from
//! an extruded vertex buffer.

pub mod error;
pub mod math;
pub mod tessellation;

pub use error::{Result, StrokeError};
pub use tessellation::{
    add_circle, num_circle_points, reconstruct_line, reconstruct_line_width, triangulate_line,
    triangulate_line_checked, CapEnds, SECTORS_IN_CIRCLE,
};
