use thiserror::Error;

#[derive(Debug, Error)]
pub enum SculptError {
    #[error("Degenerate projection: homogeneous w is zero")]
    DegenerateProjection,

    #[error("Control net error: {0}")]
    Net(String),

    #[error("Grid error: {0}")]
    Grid(String),
}

pub type Result<T> = std::result::Result<T, SculptError>;
