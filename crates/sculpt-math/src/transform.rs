use crate::{DMat4, DQuat, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Rigid body transform (rotation + translation, no shear/scale).
///
/// Used to place directional marker meshes at tangent-handle tips: the
/// rotation aligns the marker's canonical +Z axis with the tangent
/// direction and the translation moves it to the handle position.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: [f64; 16],
}

impl Transform {
    pub fn identity() -> Self {
        Self::from_mat4(DMat4::IDENTITY)
    }

    pub fn from_translation(t: Vector3) -> Self {
        Self::from_mat4(DMat4::from_translation(t))
    }

    /// Rotation aligning `from` onto `to` (both unit vectors), followed by
    /// a translation to `position`.
    pub fn aligning(from: Vector3, to: Vector3, position: Point3) -> Self {
        let rotation = DQuat::from_rotation_arc(from, to);
        Self::from_mat4(DMat4::from_rotation_translation(rotation, position))
    }

    pub fn from_mat4(m: DMat4) -> Self {
        Self {
            matrix: m.to_cols_array(),
        }
    }

    pub fn to_mat4(&self) -> DMat4 {
        DMat4::from_cols_array(&self.matrix)
    }

    pub fn transform_point(&self, p: Point3) -> Point3 {
        self.to_mat4().transform_point3(p)
    }

    pub fn transform_vector(&self, v: Vector3) -> Vector3 {
        self.to_mat4().transform_vector3(v)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec3;

    #[test]
    fn test_identity() {
        let t = Transform::identity();
        let p = dvec3(1.0, 2.0, 3.0);
        let result = t.transform_point(p);
        assert!((result - p).length() < 1e-10);
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_translation(dvec3(10.0, 20.0, 30.0));
        let p = dvec3(1.0, 2.0, 3.0);
        let result = t.transform_point(p);
        assert!((result - dvec3(11.0, 22.0, 33.0)).length() < 1e-10);
    }

    #[test]
    fn test_aligning_maps_axis_to_direction() {
        let dir = dvec3(1.0, 1.0, 0.0).normalize();
        let tip = dvec3(4.0, 5.0, 6.0);
        let t = Transform::aligning(Vector3::Z, dir, tip);

        // The canonical axis rotates onto the direction, lengths preserved
        let rotated = t.transform_vector(Vector3::Z);
        assert!((rotated - dir).length() < 1e-10);

        // The marker origin lands on the tip
        let origin = t.transform_point(Point3::ZERO);
        assert!((origin - tip).length() < 1e-10);
    }

    #[test]
    fn test_aligning_opposite_direction() {
        // Antiparallel case must still produce a valid rotation
        let t = Transform::aligning(Vector3::Z, -Vector3::Z, Point3::ZERO);
        let rotated = t.transform_vector(Vector3::Z);
        assert!((rotated + Vector3::Z).length() < 1e-8);
    }
}
