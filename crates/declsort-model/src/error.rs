//! Error types for declsort-model

/// Result type for declsort-model operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing the declaration model
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("barrier position {position} is out of bounds for {len} declarations")]
    BarrierOutOfBounds { position: usize, len: usize },

    #[error("barrier positions must be strictly increasing, got {position} after {previous}")]
    BarrierNotIncreasing { position: usize, previous: usize },
}
