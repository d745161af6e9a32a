//! Orbit camera: eye and up derived from a zoom distance and two angles.

use sculpt_math::{DMat4, DQuat, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Stored angles use sixteenths of a degree for sub-degree mouse
/// sensitivity.
pub const ANGLE_UNITS_PER_DEGREE: f64 = 16.0;

const FULL_TURN: f64 = 360.0 * ANGLE_UNITS_PER_DEGREE;

/// Wrap an angle (in sixteenth-degree units) into `[0, 360 * 16)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(FULL_TURN)
}

/// Orthographic view-volume bounds, symmetric around the reference point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub near: f64,
    pub far: f64,
}

/// A camera orbiting the origin, parameterized by a zoom offset from a
/// baseline distance and two accumulated rotation angles.
///
/// The eye and up vectors are recomputed from the stored scalars on every
/// matrix request rather than accumulated through incremental matrix
/// multiplication, so repeated rotation cannot drift.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Baseline viewing distance, fixed at construction from scene size.
    d0: f64,
    /// Signed offset from the baseline distance, kept in `[-d0, 3 * d0]`.
    zoom: f64,
    /// Yaw angle in sixteenth-degree units, wrapped into `[0, 360 * 16)`.
    angle_x: f64,
    /// Pitch angle in sixteenth-degree units, wrapped into `[0, 360 * 16)`.
    angle_y: f64,
}

impl OrbitCamera {
    /// Create a camera at the rest pose: eye at `(0, 0, d0)` looking at the
    /// origin with up `(0, 1, 0)`.
    pub fn new(d0: f64) -> Self {
        Self {
            d0,
            zoom: 0.0,
            angle_x: 0.0,
            angle_y: 0.0,
        }
    }

    pub fn baseline_distance(&self) -> f64 {
        self.d0
    }

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current `(yaw, pitch)` angles in sixteenth-degree units.
    pub fn angles(&self) -> (f64, f64) {
        (self.angle_x, self.angle_y)
    }

    /// Current eye-to-reference distance.
    pub fn distance(&self) -> f64 {
        self.d0 + self.zoom
    }

    /// Apply a signed zoom increment scaled by `d0 / 1000`, clamping the
    /// result into `[-d0, 3 * d0]`. Never fails; NaN input propagates.
    pub fn set_zoom(&mut self, delta: f64) {
        let next = self.zoom + self.d0 * delta / 1000.0;
        self.zoom = next.clamp(-self.d0, 3.0 * self.d0);
    }

    /// Accumulate rotation deltas in sixteenth-degree units. `dx` turns
    /// about the up axis (yaw), `dy` about the camera's right axis (pitch).
    /// Never fails; NaN input propagates.
    pub fn rotate(&mut self, dx: f64, dy: f64) {
        self.angle_x = normalize_angle(self.angle_x + dx);
        self.angle_y = normalize_angle(self.angle_y + dy);
    }

    /// Zero both rotation angles without touching zoom.
    pub fn reset_orientation(&mut self) {
        self.angle_x = 0.0;
        self.angle_y = 0.0;
    }

    /// Derive eye and up from the stored scalars.
    ///
    /// Pitch is applied first, rotating eye and up together about the axis
    /// perpendicular to both (which keeps them from ever becoming
    /// parallel), then yaw rotates the eye about the pitched up vector.
    fn orientation(&self) -> (Point3, Vector3) {
        let mut eye = Point3::new(0.0, 0.0, self.distance());
        let mut up = Vector3::Y;

        let pitch = (self.angle_y / ANGLE_UNITS_PER_DEGREE).to_radians();
        let yaw = (self.angle_x / ANGLE_UNITS_PER_DEGREE).to_radians();

        // The reference point is the origin, so eye - ref = eye
        let axis = eye.cross(up);
        if axis.length_squared() > 0.0 {
            let rotation = DQuat::from_axis_angle(axis.normalize(), pitch);
            eye = rotation * eye;
            up = rotation * up;
        }

        let rotation = DQuat::from_axis_angle(up, yaw);
        (rotation * eye, up)
    }

    pub fn eye(&self) -> Point3 {
        self.orientation().0
    }

    pub fn up(&self) -> Vector3 {
        self.orientation().1
    }

    /// Right-handed look-at matrix toward the origin.
    pub fn view_matrix(&self) -> DMat4 {
        let (eye, up) = self.orientation();
        DMat4::look_at_rh(eye, Point3::ZERO, up)
    }

    /// Orthographic projection over the current view bounds, OpenGL clip
    /// convention (Z in `[-1, 1]`).
    pub fn projection_matrix(&self) -> DMat4 {
        let b = self.view_bounds();
        DMat4::orthographic_rh_gl(b.x_min, b.x_max, b.y_min, b.y_max, b.near, b.far)
    }

    pub fn view_projection(&self) -> DMat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// View volume sized to the current distance: `[-D, D]` in X/Y, near 0,
    /// far `2 * D`.
    pub fn view_bounds(&self) -> ViewBounds {
        let d = self.distance();
        ViewBounds {
            x_min: -d,
            x_max: d,
            y_min: -d,
            y_max: d,
            near: 0.0,
            far: 2.0 * d,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rest_pose() {
        let cam = OrbitCamera::new(10.0);
        assert!((cam.eye() - Point3::new(0.0, 0.0, 10.0)).length() < 1e-12);
        assert!((cam.up() - Vector3::Y).length() < 1e-12);
    }

    #[test]
    fn test_yaw_quarter_turn() {
        let mut cam = OrbitCamera::new(10.0);
        cam.rotate(16.0 * 90.0, 0.0);
        // 90 degrees about +Y maps (0, 0, 10) to (10, 0, 0)
        assert!((cam.eye() - Point3::new(10.0, 0.0, 0.0)).length() < 1e-9);
    }

    #[test]
    fn test_pitch_quarter_turn() {
        let mut cam = OrbitCamera::new(10.0);
        cam.rotate(0.0, 16.0 * 90.0);
        assert!((cam.eye() - Point3::new(0.0, 10.0, 0.0)).length() < 1e-9);
        // Up rotates with the eye
        assert!((cam.up() - Point3::new(0.0, 0.0, -1.0)).length() < 1e-9);
    }

    #[test]
    fn test_eye_up_stay_perpendicular() {
        let mut cam = OrbitCamera::new(10.0);
        for (dx, dy) in [(123.0, 45.0), (-789.0, 1500.0), (4000.0, -250.0)] {
            cam.rotate(dx, dy);
            let dot = cam.eye().dot(cam.up());
            assert!(dot.abs() < 1e-9, "eye/up skewed after rotate: dot={dot}");
        }
    }

    #[test]
    fn test_repeated_rotation_does_not_drift() {
        let mut cam = OrbitCamera::new(10.0);
        // One full turn in single-unit steps lands exactly back on the
        // rest pose because orientation is recomputed from the angles
        for _ in 0..(360 * 16) {
            cam.rotate(1.0, 0.0);
        }
        assert_relative_eq!(cam.angles().0, 0.0, epsilon = 1e-12);
        assert!((cam.eye() - Point3::new(0.0, 0.0, 10.0)).length() < 1e-9);
    }

    #[test]
    fn test_normalize_angle_range() {
        for a in [-10_000.0, -1.0, 0.0, 1.0, 5759.0, 5760.0, 123_456.0] {
            let n = normalize_angle(a);
            assert!((0.0..360.0 * 16.0).contains(&n), "{a} wrapped to {n}");
        }
        assert_relative_eq!(normalize_angle(5760.0), 0.0);
        assert_relative_eq!(normalize_angle(-1.0), 5759.0);
    }

    #[test]
    fn test_normalize_angle_idempotent() {
        for a in [-98_765.4, -0.5, 0.0, 720.25, 5760.0, 1e9] {
            assert_relative_eq!(normalize_angle(normalize_angle(a)), normalize_angle(a));
        }
    }

    #[test]
    fn test_zoom_scaling() {
        let mut cam = OrbitCamera::new(10.0);
        cam.set_zoom(100.0);
        assert_relative_eq!(cam.zoom(), 1.0);
        assert_relative_eq!(cam.distance(), 11.0);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let mut cam = OrbitCamera::new(10.0);
        cam.set_zoom(1e12);
        assert_eq!(cam.zoom(), 30.0); // 3 * d0

        let mut cam = OrbitCamera::new(10.0);
        cam.set_zoom(-1e12);
        assert_eq!(cam.zoom(), -10.0); // -d0
    }

    #[test]
    fn test_reset_orientation_keeps_zoom() {
        let mut cam = OrbitCamera::new(10.0);
        cam.rotate(300.0, -200.0);
        cam.set_zoom(500.0);
        cam.reset_orientation();
        assert_eq!(cam.angles(), (0.0, 0.0));
        assert_relative_eq!(cam.zoom(), 5.0);
    }

    #[test]
    fn test_view_bounds_track_distance() {
        let mut cam = OrbitCamera::new(10.0);
        cam.set_zoom(200.0); // zoom = 2
        let b = cam.view_bounds();
        assert_relative_eq!(b.x_min, -12.0);
        assert_relative_eq!(b.x_max, 12.0);
        assert_relative_eq!(b.near, 0.0);
        assert_relative_eq!(b.far, 24.0);
    }

    #[test]
    fn test_view_matrix_at_rest() {
        let cam = OrbitCamera::new(10.0);
        let view = cam.view_matrix();
        let origin = view.transform_point3(Point3::ZERO);
        // The origin sits 10 units in front of the camera (-Z in view space)
        assert!((origin - Point3::new(0.0, 0.0, -10.0)).length() < 1e-12);
    }

    #[test]
    fn test_camera_state_serde_round_trip() {
        let mut cam = OrbitCamera::new(10.0);
        cam.rotate(120.0, -48.0);
        cam.set_zoom(250.0);

        let json = serde_json::to_string(&cam).unwrap();
        let back: OrbitCamera = serde_json::from_str(&json).unwrap();
        assert_eq!(back.angles(), cam.angles());
        assert_relative_eq!(back.zoom(), cam.zoom());
        assert_relative_eq!(back.baseline_distance(), cam.baseline_distance());
    }
}
