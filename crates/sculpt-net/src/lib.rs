//! Pickable control net: the editable set of control points and tangent
//! handles, their screen-space hit rectangles, and the hover/drag state
//! machine driven by the interaction layer.

pub mod net;
pub mod point;
pub mod seed;

pub use net::{ControlNet, Evaluator, PickTarget};
pub use point::{ControlPoint, TangentHandle, PICK_RADIUS};
pub use seed::{seed_grid, GridParams, HANDLE_LENGTH};
