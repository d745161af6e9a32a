pub mod orbit;

pub use orbit::{normalize_angle, OrbitCamera, ViewBounds, ANGLE_UNITS_PER_DEGREE};
