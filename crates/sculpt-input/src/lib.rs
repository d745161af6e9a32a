//! Interaction controller: translates pointer and wheel events into camera
//! updates or control-point drags.

pub mod controller;
pub mod event;

pub use controller::{InteractionController, ROTATE_UNITS_PER_PIXEL};
pub use event::PointerButton;
