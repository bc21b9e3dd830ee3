pub mod direction;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Up direction for the planar stroke mesh (Z+).
pub const UP: Vector3 = Vector3::new(0.0, 0.0, 1.0);

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
