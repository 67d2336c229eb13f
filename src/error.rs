//! Errors raised while constructing distance fields.
//!
//! Evaluation never fails; only constructors that validate geometry return
//! [`SdfError`].

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SdfError {
    #[error("radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("rounding radius must be zero or positive, got {0}")]
    InvalidRounding(f64),

    #[error("rounding radius {round} exceeds radius {radius}")]
    RoundExceedsRadius { round: f64, radius: f64 },

    #[error("voxel size must be finite and positive, got {0}")]
    InvalidVoxelSize(f64),

    #[error("height {height} is less than twice the rounding radius {round}")]
    HeightTooSmall { height: f64, round: f64 },
}
