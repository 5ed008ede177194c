use thiserror::Error;

/// Validation failures when building or resizing a stream.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StreamError {
    #[error("stream width must be at least one column")]
    ZeroWidth,

    #[error("stream height must be at least one row")]
    ZeroHeight,

    #[error("invalid value range [{min}, {max}]: min must be below max and both finite")]
    InvalidBounds { min: f64, max: f64 },
}

/// Reject empty or inverted ranges before they can reach the quantizer.
pub(crate) fn check_bounds(min: f64, max: f64) -> Result<(), StreamError> {
    if min.is_finite() && max.is_finite() && min < max {
        Ok(())
    } else {
        Err(StreamError::InvalidBounds { min, max })
    }
}
