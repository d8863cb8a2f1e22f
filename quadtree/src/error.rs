use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadtreeError {
    #[error("quadtree missing area bounds")]
    MissingArea,
    #[error(
        "rectangle width/height must be finite and non-negative (width: {width}, height: {height})"
    )]
    InvalidRectangleDims { width: f32, height: f32 },
    #[error("quadtree node at level {level} is already split")]
    AlreadySplit { level: usize },
}

pub type QuadtreeResult<T> = Result<T, QuadtreeError>;
