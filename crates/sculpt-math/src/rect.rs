use crate::Point2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in screen space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb2 {
    pub min: Point2,
    pub max: Point2,
}

impl Aabb2 {
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Square rectangle centered on `center` with the given half-extent,
    /// the shape used for control-point hit rectangles.
    pub fn from_center_half(center: Point2, half: f64) -> Self {
        let offset = Point2::splat(half);
        Self {
            min: center - offset,
            max: center + offset,
        }
    }

    pub fn contains_point(&self, p: Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}
