use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorldMathError {
    #[error("Invalid side {0} given to get_opposite_side")]
    InvalidSide(i32),
    #[error("Invalid vector {0:?}, expected a value like x,y,z")]
    InvalidVector(String),
}

pub type Result<T> = std::result::Result<T, WorldMathError>;
