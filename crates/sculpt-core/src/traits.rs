use crate::error::Result;

/// Validate structural integrity of an editable collection.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}
