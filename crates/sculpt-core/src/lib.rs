pub mod error;
pub mod traits;

pub use error::{Result, SculptError};
pub use traits::Validate;
