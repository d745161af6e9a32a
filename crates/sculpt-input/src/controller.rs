use log::debug;
use sculpt_camera::OrbitCamera;
use sculpt_math::{unproject, DVec3, Viewport};
use sculpt_net::{ControlNet, Evaluator};

use crate::event::PointerButton;

/// Rotation sensitivity: sixteenth-degree angle units per pixel of pointer
/// travel (half a degree per pixel).
pub const ROTATE_UNITS_PER_PIXEL: f64 = 8.0;

/// Owns the camera, control net, and viewport, and dispatches raw pointer
/// events onto them.
///
/// All state lives here and is passed explicitly; event callbacks run
/// synchronously on the caller's thread, so reads (projection for
/// rendering) and writes (drag updates) never interleave within a frame.
pub struct InteractionController {
    camera: OrbitCamera,
    net: ControlNet,
    viewport: Viewport,
    evaluator: Option<Box<dyn Evaluator>>,
    primary_down: bool,
    /// Anchor of an in-progress camera rotation, advanced every move.
    last_pos: (f64, f64),
}

impl InteractionController {
    pub fn new(camera: OrbitCamera, net: ControlNet, viewport: Viewport) -> Self {
        Self {
            camera,
            net,
            viewport,
            evaluator: None,
            primary_down: false,
            last_pos: (0.0, 0.0),
        }
    }

    /// Attach the curve/surface evaluation plugin notified after every drag
    /// mutation.
    pub fn with_evaluator(mut self, evaluator: Box<dyn Evaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn net(&self) -> &ControlNet {
        &self.net
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the viewport on window resize.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Primary press starts a drag when the last hover pass left a point or
    /// handle selected, otherwise anchors a camera rotation. Secondary
    /// press resets the camera orientation.
    pub fn pointer_down(&mut self, button: PointerButton, x: f64, y: f64) {
        match button {
            PointerButton::Primary => {
                // Selection was settled by the last hover pass; a press
                // with no element under the cursor anchors a rotation
                if let Some(target) = self.net.selected_target() {
                    debug!("begin drag on {target:?}");
                    self.net.begin_drag(target);
                } else {
                    self.last_pos = (x, y);
                }
                self.primary_down = true;
            }
            PointerButton::Secondary => {
                debug!("reset camera orientation");
                self.camera.reset_orientation();
            }
            PointerButton::Auxiliary => {}
        }
    }

    /// With the primary button held this either advances the active drag at
    /// its cached depth or rotates the camera; without it, runs the hover
    /// pass that refreshes screen caches and selection flags.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.primary_down {
            if self.net.is_dragging() {
                self.drag_to(x, y);
            } else {
                let dx = x - self.last_pos.0;
                let dy = y - self.last_pos.1;
                self.camera
                    .rotate(-ROTATE_UNITS_PER_PIXEL * dx, -ROTATE_UNITS_PER_PIXEL * dy);
                self.last_pos = (x, y);
            }
        } else {
            self.net
                .update_screen_coordinates(&self.camera.view_projection(), &self.viewport);
            self.net.update_hover(x, y);
        }
    }

    pub fn pointer_up(&mut self, button: PointerButton, _x: f64, _y: f64) {
        if button == PointerButton::Primary {
            if self.net.is_dragging() {
                debug!("end drag");
                self.net.end_drag();
            }
            self.primary_down = false;
        }
    }

    /// Wheel scroll zooms; scrolling toward the user backs the camera away,
    /// hence the sign flip.
    pub fn wheel(&mut self, delta: f64) {
        self.camera.set_zoom(-delta);
    }

    fn drag_to(&mut self, x: f64, y: f64) {
        let Some(depth) = self.net.drag_depth() else {
            return;
        };
        let win = DVec3::new(x, y, depth);
        match unproject(
            win,
            &self.camera.view_matrix(),
            &self.camera.projection_matrix(),
            &self.viewport,
        ) {
            Ok(world) => {
                self.net.update_drag(world);
                if let Some(evaluator) = self.evaluator.as_mut() {
                    evaluator.net_changed(&self.net);
                }
            }
            // Degenerate view this frame: skip the update, keep the gesture
            Err(_) => {}
        }
    }
}
