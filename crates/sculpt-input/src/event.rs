use serde::{Deserialize, Serialize};

/// Pointer buttons as delivered by the host input layer.
///
/// Coordinates accompanying pointer events are viewport-local pixels with Y
/// growing upward from the viewport bottom (the projection convention);
/// hosts with window-space Y growing downward flip once at this boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}
