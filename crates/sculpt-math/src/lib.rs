pub mod project;
pub mod rect;
pub mod transform;
pub mod viewport;

pub use glam::{DMat3, DMat4, DQuat, DVec2, DVec3, DVec4};
pub use project::{project, unproject};
pub use rect::Aabb2;
pub use transform::Transform;
pub use viewport::Viewport;

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector2 = DVec2;
pub type Vector3 = DVec3;
