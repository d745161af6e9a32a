use sculpt_math::{Aabb2, Point2, Point3, Transform, Vector3};
use serde::{Deserialize, Serialize};

/// Half-extent of the screen-space hit rectangle around every point, in
/// pixels.
pub const PICK_RADIUS: f64 = 10.0;

/// An editable control point.
///
/// The cached window coordinates (and the hit rectangle derived from them)
/// are only valid until the camera or the position changes; the owning net
/// refreshes them during each hover pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlPoint {
    pub position: Point3,
    pub selected: bool,
    screen: Point3,
    handle: Option<usize>,
}

impl ControlPoint {
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            selected: false,
            screen: Point3::ZERO,
            handle: None,
        }
    }

    /// Cached window coordinates; `z` is the pseudo-depth in `[0, 1]`.
    pub fn screen(&self) -> Point3 {
        self.screen
    }

    pub(crate) fn set_screen(&mut self, screen: Point3) {
        self.screen = screen;
    }

    /// Index of the linked tangent handle, if any.
    pub fn handle(&self) -> Option<usize> {
        self.handle
    }

    pub(crate) fn set_handle(&mut self, handle: usize) {
        self.handle = Some(handle);
    }

    /// Screen-space hit rectangle around the cached window position.
    pub fn hit_rect(&self) -> Aabb2 {
        Aabb2::from_center_half(self.screen.truncate(), PICK_RADIUS)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.hit_rect().contains_point(Point2::new(x, y))
    }
}

/// A draggable tangent handle owned by exactly one control point.
///
/// The marker transform aligns a canonical +Z marker mesh with the
/// point-to-handle direction and moves it to the handle tip. It is
/// recomputed immediately whenever the owner or the handle moves, so it is
/// never stale when read for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TangentHandle {
    pub position: Point3,
    pub selected: bool,
    screen: Point3,
    owner: usize,
    marker: Transform,
}

impl TangentHandle {
    pub(crate) fn new(owner: usize, position: Point3, owner_position: Point3) -> Self {
        let mut handle = Self {
            position,
            selected: false,
            screen: Point3::ZERO,
            owner,
            marker: Transform::identity(),
        };
        handle.update_marker(owner_position);
        handle
    }

    /// Index of the owning control point.
    pub fn owner(&self) -> usize {
        self.owner
    }

    pub fn screen(&self) -> Point3 {
        self.screen
    }

    pub(crate) fn set_screen(&mut self, screen: Point3) {
        self.screen = screen;
    }

    /// Rigid transform placing a directional marker mesh at the handle tip.
    pub fn marker_transform(&self) -> &Transform {
        &self.marker
    }

    pub(crate) fn update_marker(&mut self, owner_position: Point3) {
        self.marker = match (self.position - owner_position).try_normalize() {
            Some(direction) => Transform::aligning(Vector3::Z, direction, self.position),
            // Handle sitting on its owner: no direction to align to
            None => Transform::from_translation(self.position),
        };
    }

    pub fn hit_rect(&self) -> Aabb2 {
        Aabb2::from_center_half(self.screen.truncate(), PICK_RADIUS)
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.hit_rect().contains_point(Point2::new(x, y))
    }
}
