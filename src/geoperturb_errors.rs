use thiserror::Error;

/// Errors raised at the exterior boundary of the crate.
///
/// The numeric core never fails for in-range input: degenerate denominators are
/// epsilon-substituted, out-of-range harmonic degrees are clamped, and a
/// non-converged Kepler iteration returns its best estimate. These variants only
/// reject malformed *requests* before they reach the core.
#[derive(Error, Debug, PartialEq)]
pub enum GeoperturbError {
    #[error("Semi-major axis must be strictly positive, got {0} km")]
    InvalidSemiMajorAxis(f64),

    #[error("Eccentricity must lie in [0, 0.999999], got {0}")]
    InvalidEccentricity(f64),

    #[error("Points count must lie in [3, 5000], got {0}")]
    InvalidPointsCount(usize),

    #[error("Harmonic degree must lie in [2, 21], got {0}")]
    InvalidMaxDegree(u32),

    #[error("Harmonic order must lie in [0, 21], got {0}")]
    InvalidMaxOrder(u32),

    #[error("Epoch offset must lie in [0, 315360000] seconds, got {0}")]
    InvalidEpochOffset(f64),

    #[error("No preset orbit with id {0}")]
    UnknownPreset(usize),
}
