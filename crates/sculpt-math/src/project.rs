//! World/screen projection inverse pair.
//!
//! `project` and `unproject` are exact algebraic inverses of each other for
//! any point whose homogeneous `w` survives the pipeline, which is what
//! makes hit-testing and drag-tracking agree: a control point projected to
//! the cursor and unprojected at its cached pseudo-depth lands back on
//! itself.

use crate::{DMat4, DVec3, DVec4, Point3, Viewport};
use sculpt_core::{Result, SculptError};

/// Project a homogeneous world point into window coordinates.
///
/// Returns `(sx, sy, depth)` where `sx`/`sy` lie in the viewport rectangle
/// and `depth` is the post-projection Z remapped to `[0, 1]`, the
/// pseudo-depth cached for later unprojection.
pub fn project(world: DVec4, view_proj: &DMat4, viewport: &Viewport) -> Result<DVec3> {
    let clip = *view_proj * world;
    if clip.w == 0.0 {
        return Err(SculptError::DegenerateProjection);
    }
    let ndc = clip.truncate() / clip.w;

    // Clip space [-1, 1] -> [0, 1], then into the viewport rectangle
    let x = ndc.x * 0.5 + 0.5;
    let y = ndc.y * 0.5 + 0.5;
    let depth = ndc.z * 0.5 + 0.5;

    Ok(DVec3::new(
        viewport.x + x * viewport.width,
        viewport.y + y * viewport.height,
        depth,
    ))
}

/// Map window coordinates (with a pseudo-depth in `[0, 1]`) back to world
/// space through the inverse of `projection * view`.
///
/// During a drag the caller passes the pseudo-depth cached when the gesture
/// started, so the point moves on the constant-depth plane parallel to the
/// screen instead of drifting toward or away from the camera.
pub fn unproject(win: DVec3, view: &DMat4, projection: &DMat4, viewport: &Viewport) -> Result<Point3> {
    let inverse = (*projection * *view).inverse();

    let x = (win.x - viewport.x) / viewport.width * 2.0 - 1.0;
    let y = (win.y - viewport.y) / viewport.height * 2.0 - 1.0;
    let z = win.z * 2.0 - 1.0;

    let obj = inverse * DVec4::new(x, y, z, 1.0);
    if obj.w == 0.0 {
        return Err(SculptError::DegenerateProjection);
    }
    Ok(obj.truncate() / obj.w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::dvec3;

    fn test_matrices() -> (DMat4, DMat4) {
        let view = DMat4::look_at_rh(dvec3(3.0, 4.0, 10.0), DVec3::ZERO, DVec3::Y);
        let proj = DMat4::orthographic_rh_gl(-10.0, 10.0, -10.0, 10.0, 0.0, 20.0);
        (view, proj)
    }

    #[test]
    fn test_round_trip() {
        let (view, proj) = test_matrices();
        let viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);
        let view_proj = proj * view;

        for p in [
            dvec3(0.0, 0.0, 0.0),
            dvec3(1.0, 2.0, 3.0),
            dvec3(-4.5, 0.25, -7.0),
            dvec3(8.0, -8.0, 1.0),
        ] {
            let win = project(p.extend(1.0), &view_proj, &viewport).unwrap();
            let back = unproject(win, &view, &proj, &viewport).unwrap();
            assert!(
                (back - p).length() < 1e-4,
                "round trip drifted: {p} -> {win} -> {back}"
            );
        }
    }

    #[test]
    fn test_round_trip_offset_viewport() {
        let (view, proj) = test_matrices();
        let viewport = Viewport::new(50.0, 30.0, 640.0, 480.0);
        let view_proj = proj * view;

        let p = dvec3(2.0, -1.0, 4.0);
        let win = project(p.extend(1.0), &view_proj, &viewport).unwrap();
        let back = unproject(win, &view, &proj, &viewport).unwrap();
        assert!((back - p).length() < 1e-4);
    }

    #[test]
    fn test_project_center_of_view() {
        // Camera on +Z looking at the origin: the origin projects to the
        // viewport center at mid-volume depth.
        let view = DMat4::look_at_rh(dvec3(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y);
        let proj = DMat4::orthographic_rh_gl(-10.0, 10.0, -10.0, 10.0, 0.0, 20.0);
        let viewport = Viewport::new(0.0, 0.0, 800.0, 800.0);

        let win = project(DVec4::new(0.0, 0.0, 0.0, 1.0), &(proj * view), &viewport).unwrap();
        assert_relative_eq!(win.x, 400.0, epsilon = 1e-9);
        assert_relative_eq!(win.y, 400.0, epsilon = 1e-9);
        assert_relative_eq!(win.z, 0.5, epsilon = 1e-9);
    }

    #[test]
    fn test_project_zero_w_is_degenerate() {
        let (view, proj) = test_matrices();
        let viewport = Viewport::new(0.0, 0.0, 800.0, 600.0);

        // A direction (w = 0) stays at w = 0 under an orthographic
        // view-projection and must signal instead of dividing
        let result = project(DVec4::new(0.0, 0.0, 1.0, 0.0), &(proj * view), &viewport);
        assert!(matches!(result, Err(SculptError::DegenerateProjection)));
    }
}
