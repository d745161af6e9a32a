use serde::{Deserialize, Serialize};

/// Viewport rectangle in screen pixels.
///
/// Screen Y grows upward from the viewport bottom, matching the projection
/// math; hosts whose window coordinates grow downward flip Y once before
/// calling in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
