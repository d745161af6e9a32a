use sculpt_core::{Result, SculptError, Validate};
use sculpt_math::{project, DMat4, Point3, Vector3, Viewport};

use crate::point::{ControlPoint, TangentHandle};

/// What a hit-test resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    Point(usize),
    Handle(usize),
}

/// Move-in-progress bookkeeping, captured once at `begin_drag`.
#[derive(Debug, Clone, Copy)]
struct DragCapture {
    target: PickTarget,
    /// Pseudo-depth at gesture start, reused for every unprojection of the
    /// gesture so the dragged element stays on a constant-depth plane.
    depth: f64,
    /// World position of the dragged element at gesture start.
    anchor: Point3,
    /// World position of the linked handle at gesture start, when dragging
    /// a point that owns one.
    handle_anchor: Option<Point3>,
}

/// The editable collection of control points and tangent handles.
///
/// Points and handles live in insertion order; hit-testing scans linearly
/// and the last hit wins, so overlapping rectangles resolve to the later
/// entry. Elements are never removed within a session.
#[derive(Debug, Clone, Default)]
pub struct ControlNet {
    points: Vec<ControlPoint>,
    handles: Vec<TangentHandle>,
    drag: Option<DragCapture>,
}

impl ControlNet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a control point, returning its index.
    pub fn add_point(&mut self, position: Point3) -> usize {
        self.points.push(ControlPoint::new(position));
        self.points.len() - 1
    }

    /// Append a tangent handle linked to `point`, returning the handle
    /// index. Panics if `point` is out of range or already has a handle.
    pub fn add_handle(&mut self, point: usize, position: Point3) -> usize {
        assert!(
            self.points[point].handle().is_none(),
            "control point {point} already has a tangent handle"
        );
        let index = self.handles.len();
        let owner_position = self.points[point].position;
        self.handles
            .push(TangentHandle::new(point, position, owner_position));
        self.points[point].set_handle(index);
        index
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn handles(&self) -> &[TangentHandle] {
        &self.handles
    }

    /// Control-point positions in index order, for the curve/surface
    /// evaluator.
    pub fn positions(&self) -> impl Iterator<Item = Point3> + '_ {
        self.points.iter().map(|p| p.position)
    }

    /// Boundary-condition tangent vector at `point` (handle minus point),
    /// if the point has a linked handle.
    pub fn tangent(&self, point: usize) -> Option<Vector3> {
        let handle = self.points[point].handle()?;
        Some(self.handles[handle].position - self.points[point].position)
    }

    /// Reproject every point and handle into window coordinates.
    ///
    /// Elements whose projection is degenerate keep their previous cache
    /// and are skipped for the frame.
    pub fn update_screen_coordinates(&mut self, view_proj: &DMat4, viewport: &Viewport) {
        for point in &mut self.points {
            if let Ok(win) = project(point.position.extend(1.0), view_proj, viewport) {
                point.set_screen(win);
            }
        }
        for handle in &mut self.handles {
            if let Ok(win) = project(handle.position.extend(1.0), view_proj, viewport) {
                handle.set_screen(win);
            }
        }
    }

    /// Recompute every selection flag against the cursor position. A point
    /// or handle is selected iff the cursor lies inside its hit rectangle.
    pub fn update_hover(&mut self, x: f64, y: f64) {
        for point in &mut self.points {
            point.selected = point.contains(x, y);
        }
        for handle in &mut self.handles {
            handle.selected = handle.contains(x, y);
        }
    }

    /// Target a primary press captures: the last selected element from the
    /// most recent hover pass. Points are scanned after handles, so a point
    /// overlapping a handle takes the drag.
    pub fn selected_target(&self) -> Option<PickTarget> {
        let mut target = None;
        for (i, handle) in self.handles.iter().enumerate() {
            if handle.selected {
                target = Some(PickTarget::Handle(i));
            }
        }
        for (i, point) in self.points.iter().enumerate() {
            if point.selected {
                target = Some(PickTarget::Point(i));
            }
        }
        target
    }

    /// Linear scan against the cached hit rectangles; the last hit wins.
    /// Handles are scanned before points, so a point overlapping a handle
    /// takes the drag.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PickTarget> {
        let mut hit = None;
        for (i, handle) in self.handles.iter().enumerate() {
            if handle.contains(x, y) {
                hit = Some(PickTarget::Handle(i));
            }
        }
        for (i, point) in self.points.iter().enumerate() {
            if point.contains(x, y) {
                hit = Some(PickTarget::Point(i));
            }
        }
        hit
    }

    /// Capture a drag target together with its anchor position and
    /// pseudo-depth. Panics if the index is out of range.
    pub fn begin_drag(&mut self, target: PickTarget) {
        let capture = match target {
            PickTarget::Point(i) => {
                let point = &self.points[i];
                DragCapture {
                    target,
                    depth: point.screen().z,
                    anchor: point.position,
                    handle_anchor: point.handle().map(|h| self.handles[h].position),
                }
            }
            PickTarget::Handle(i) => {
                let handle = &self.handles[i];
                DragCapture {
                    target,
                    depth: handle.screen().z,
                    anchor: handle.position,
                    handle_anchor: None,
                }
            }
        };
        self.drag = Some(capture);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_target(&self) -> Option<PickTarget> {
        self.drag.map(|d| d.target)
    }

    /// Pseudo-depth cached when the current drag started.
    pub fn drag_depth(&self) -> Option<f64> {
        self.drag.map(|d| d.depth)
    }

    /// Move the captured element to `world`.
    ///
    /// A dragged point translates its linked handle by the same delta the
    /// point moved, preserving the tangent vector; a dragged handle moves
    /// alone and its marker transform is recomputed from the owner.
    ///
    /// Calling this without a prior `begin_drag` is a caller bug.
    pub fn update_drag(&mut self, world: Point3) {
        let Some(capture) = self.drag else {
            debug_assert!(false, "update_drag called without begin_drag");
            return;
        };
        match capture.target {
            PickTarget::Point(i) => {
                self.points[i].position = world;
                if let (Some(h), Some(handle_anchor)) =
                    (self.points[i].handle(), capture.handle_anchor)
                {
                    let delta = world - capture.anchor;
                    self.handles[h].position = handle_anchor + delta;
                    self.handles[h].update_marker(world);
                }
            }
            PickTarget::Handle(i) => {
                self.handles[i].position = world;
                let owner_position = self.points[self.handles[i].owner()].position;
                self.handles[i].update_marker(owner_position);
            }
        }
    }

    /// Release the captured element. Selection flags are left as they are.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

impl Validate for ControlNet {
    fn validate(&self) -> Result<()> {
        for (i, point) in self.points.iter().enumerate() {
            if let Some(h) = point.handle() {
                let handle = self.handles.get(h).ok_or_else(|| {
                    SculptError::Net(format!("point {i} links to missing handle {h}"))
                })?;
                if handle.owner() != i {
                    return Err(SculptError::Net(format!(
                        "handle {h} is owned by point {} but linked from point {i}",
                        handle.owner()
                    )));
                }
            }
        }
        for (h, handle) in self.handles.iter().enumerate() {
            let owner = self.points.get(handle.owner()).ok_or_else(|| {
                SculptError::Net(format!(
                    "handle {h} owned by missing point {}",
                    handle.owner()
                ))
            })?;
            if owner.handle() != Some(h) {
                return Err(SculptError::Net(format!(
                    "point {} does not link back to handle {h}",
                    handle.owner()
                )));
            }
        }
        Ok(())
    }
}

/// Seam for the curve/surface evaluation code driven by net edits.
///
/// Evaluation math is a swappable plugin outside this kernel: the
/// interaction layer calls `net_changed` after every drag mutation and the
/// plugin reads `positions()` and `tangent()` from the updated net.
pub trait Evaluator {
    fn net_changed(&mut self, net: &ControlNet);
}
