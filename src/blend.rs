// Max-like blend operators for intersection and subtraction.
//
// A blend combines two signed distances the way `max` does. The hard variant
// is the exact maximum and leaves a sharp crease where the two surfaces meet;
// the rounded variant replaces that crease with a fillet of the given radius.
// Subtraction is expressed by negating the second operand.

use crate::csg;
use crate::error::SdfError;

/// How two distances are combined by a max-like operator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MaxBlend {
    /// Exact maximum: a sharp edge.
    #[default]
    Hard,
    /// Polynomial smooth maximum with fillet `radius` (> 0).
    Rounded { radius: f64 },
}

// ---------------------------------------------------------------------------
// Shorthand constructors
// ---------------------------------------------------------------------------

/// Sharp maximum.
pub fn hard() -> MaxBlend {
    MaxBlend::Hard
}

/// Rounded maximum with the given fillet radius.
pub fn rounded(radius: f64) -> Result<MaxBlend, SdfError> {
    MaxBlend::rounded(radius)
}

impl MaxBlend {
    /// Rounded maximum. The radius must be finite and strictly positive.
    pub fn rounded(radius: f64) -> Result<Self, SdfError> {
        if radius > 0.0 && radius.is_finite() {
            Ok(MaxBlend::Rounded { radius })
        } else {
            Err(SdfError::InvalidRounding(radius))
        }
    }

    /// Pick the blend for a rounding radius: zero selects [`MaxBlend::Hard`],
    /// a positive radius selects [`MaxBlend::Rounded`]. Negative, infinite or
    /// NaN radii are rejected.
    pub fn from_radius(radius: f64) -> Result<Self, SdfError> {
        if radius == 0.0 {
            Ok(MaxBlend::Hard)
        } else {
            MaxBlend::rounded(radius)
        }
    }

    /// Re-check a blend that may have been built by hand.
    pub fn validate(self) -> Result<Self, SdfError> {
        match self {
            MaxBlend::Hard => Ok(self),
            MaxBlend::Rounded { radius } => MaxBlend::rounded(radius),
        }
    }

    /// Fillet radius, zero for the hard maximum.
    pub fn radius(&self) -> f64 {
        match self {
            MaxBlend::Hard => 0.0,
            MaxBlend::Rounded { radius } => *radius,
        }
    }

    /// Largest amount by which the result can exceed `max(a, b)`.
    pub fn max_deviation(&self) -> f64 {
        self.radius() / 4.0
    }

    /// Combine two signed distances.
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            MaxBlend::Hard => csg::intersection(a, b),
            MaxBlend::Rounded { radius } => csg::smooth_intersection(a, b, *radius),
        }
    }
}
