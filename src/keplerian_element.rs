use serde::{Deserialize, Serialize};

use crate::constants::{Degree, Kilometer, Radian, MAX_ECCENTRICITY, RADEG};
use crate::geoperturb_errors::GeoperturbError;

/// Keplerian orbital elements of one sampling request.
/// Units:
/// * `semi_major_axis`: km, strictly positive
/// * `eccentricity`: unitless, elliptical only (< 1)
/// * `inclination`: degrees
/// * `ascending_node_longitude`: degrees
/// * `periapsis_argument`: degrees
/// * `mean_anomaly`: degrees, unnormalized
///
/// Angles are carried in degrees at the exterior boundary and converted to
/// radians exactly once per request via [`in_radians`](KeplerianElements::in_radians).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeplerianElements {
    pub semi_major_axis: Kilometer,
    pub eccentricity: f64,
    pub inclination: Degree,
    pub ascending_node_longitude: Degree,
    pub periapsis_argument: Degree,
    pub mean_anomaly: Degree,
}

/// Angular subset of the elements after the one-time degree → radian conversion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AnglesRad {
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub mean_anomaly: Radian,
}

impl KeplerianElements {
    /// Check the documented exterior ranges: a > 0 km, e ∈ [0, 0.999999].
    ///
    /// The angular elements are unrestricted (unnormalized angles are valid
    /// input). The core assumes validity; embedding services call this before
    /// handing the record to the sampler.
    pub fn validate(&self) -> Result<(), GeoperturbError> {
        if !(self.semi_major_axis > 0.0) {
            return Err(GeoperturbError::InvalidSemiMajorAxis(self.semi_major_axis));
        }
        if !(0.0..=MAX_ECCENTRICITY).contains(&self.eccentricity) {
            return Err(GeoperturbError::InvalidEccentricity(self.eccentricity));
        }
        Ok(())
    }

    pub(crate) fn in_radians(&self) -> AnglesRad {
        AnglesRad {
            inclination: self.inclination * RADEG,
            ascending_node_longitude: self.ascending_node_longitude * RADEG,
            periapsis_argument: self.periapsis_argument * RADEG,
            mean_anomaly: self.mean_anomaly * RADEG,
        }
    }
}
