//! Errors raised while setting up a maze

use thiserror::Error;

/// Reason a maze could not be built
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Either dimension is zero
    #[error("maze must be at least 1x1, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Cell count does not fit in memory addressing
    #[error("maze of {width}x{height} cells is too large")]
    TooLarge { width: usize, height: usize },
}
