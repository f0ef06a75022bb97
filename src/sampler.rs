//! # Orbit sampler
//!
//! This module defines [`OrbitSampler`], the façade that wires together the
//! Kepler solver, the frame transforms, and the geopotential model:
//!
//! 1. Sample mean anomalies uniformly around the ellipse (deliberately *not*
//!    uniform in time or true anomaly).
//! 2. Solve each sample for eccentric and true anomaly, build the inertial and
//!    rotating-frame positions, and convert the caller-selected frame to
//!    spherical coordinates.
//! 3. Evaluate the harmonic expansion (plus the optional J₂-only variant) and
//!    rotate the spherical output into radial/transversal/normal components.
//! 4. Aggregate summary statistics and snapshot the constants applied.
//!
//! The km → m conversion of acceleration values happens exactly once, at the
//! RTN packaging boundary in this module; the geopotential model stays in
//! km/s². The whole calculation is purely functional over its inputs and the
//! immutable coefficient table, and the output sequence is index-ordered.

use std::time::Instant;

use itertools::{Itertools, MinMaxResult};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{
    Kilometer, MeterPerSec2, Radian, Second, DPI, EARTH_RADIUS, KEPLER_TOLERANCE,
    KMS2_TO_MS2, MAX_EPOCH_OFFSET, MAX_HARMONIC_DEGREE, MIN_HARMONIC_DEGREE, MU, POINTS_COUNT_RANGE,
    POLE_EPSILON,
};
use crate::geoperturb_errors::GeoperturbError;
use crate::geopotential::{GeopotentialModel, SphericalAcceleration};
use crate::harmonics::{HarmonicCoefficients, HarmonicTerm, STANDARD_FIELD};
use crate::kepler;
use crate::keplerian_element::KeplerianElements;
use crate::ref_frame;

/// Frame whose spherical coordinates feed the harmonic expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReferenceFrame {
    Inertial,
    #[default]
    RotatingEarth,
}

/// Options of one sampling request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleOptions {
    /// Number of points along the orbit, ∈ [3, 5000]
    pub points_count: usize,
    /// Expansion degree ceiling n, ∈ [2, 21]
    pub max_degree: u32,
    /// Expansion order ceiling k, ∈ [0, 21]
    pub max_order: u32,
    pub frame: ReferenceFrame,
    /// Additionally evaluate the J₂-only variant for comparison
    pub include_j2_only: bool,
    /// Seconds past epoch, drives the rotation angle S(t) = ωE·t
    pub time_since_epoch: Second,
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            points_count: 100,
            max_degree: 4,
            max_order: 3,
            frame: ReferenceFrame::default(),
            include_j2_only: false,
            time_since_epoch: 0.0,
        }
    }
}

impl SampleOptions {
    /// Check the documented exterior ranges.
    ///
    /// The sampler itself clamps the expansion bounds rather than failing; this
    /// is the stricter request-boundary check embedding services apply first.
    pub fn validate(&self) -> Result<(), GeoperturbError> {
        if !POINTS_COUNT_RANGE.contains(&self.points_count) {
            return Err(GeoperturbError::InvalidPointsCount(self.points_count));
        }
        if !(MIN_HARMONIC_DEGREE..=MAX_HARMONIC_DEGREE).contains(&self.max_degree) {
            return Err(GeoperturbError::InvalidMaxDegree(self.max_degree));
        }
        if self.max_order > MAX_HARMONIC_DEGREE {
            return Err(GeoperturbError::InvalidMaxOrder(self.max_order));
        }
        if !(0.0..=MAX_EPOCH_OFFSET).contains(&self.time_since_epoch) {
            return Err(GeoperturbError::InvalidEpochOffset(self.time_since_epoch));
        }
        Ok(())
    }
}

/// Acceleration triple in the radial/transversal/normal frame, m/s².
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RtnAcceleration {
    pub s: MeterPerSec2,
    pub t: MeterPerSec2,
    pub w: MeterPerSec2,
    pub total: MeterPerSec2,
}

/// One sampled point along the orbit. Produced once, immutable, index-ordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitPoint {
    pub index: usize,
    pub mean_anomaly: Radian,
    pub eccentric_anomaly: Radian,
    pub true_anomaly: Radian,
    pub argument_of_latitude: Radian,
    pub radius: Kilometer,
    /// Height above the equatorial reference radius r₀
    pub height: Kilometer,
    pub latitude: Radian,
    pub longitude: Radian,
    pub position_inertial: Vector3<f64>,
    pub position_rotating: Vector3<f64>,
    pub acceleration: RtnAcceleration,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceleration_j2_only: Option<RtnAcceleration>,
    /// Reference Newtonian magnitude μ/r², m/s²
    pub newton_acceleration: MeterPerSec2,
}

/// Aggregate statistics over the full-model acceleration magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrbitSummary {
    pub min_acceleration: MeterPerSec2,
    pub max_acceleration: MeterPerSec2,
    pub avg_acceleration: MeterPerSec2,
    /// Two-body orbital period 2π√(a³/μ), seconds
    pub period: Second,
}

/// Snapshot of the constants a calculation actually used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConstantsSnapshot {
    pub mu: f64,
    pub r0: Kilometer,
    pub harmonics: Vec<HarmonicTerm>,
}

/// Complete result of one sampling request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitSampling {
    pub points: Vec<OrbitPoint>,
    pub summary: OrbitSummary,
    pub constants: ConstantsSnapshot,
    pub execution_time_ms: f64,
}

/// Orchestrates the sampling pipeline over a borrowed coefficient table.
#[derive(Debug, Clone, Copy)]
pub struct OrbitSampler<'a> {
    model: GeopotentialModel<'a>,
}

impl<'a> OrbitSampler<'a> {
    pub fn new(field: &'a HarmonicCoefficients) -> Self {
        OrbitSampler {
            model: GeopotentialModel::new(field),
        }
    }

    /// Sample the orbit and evaluate the perturbing acceleration at each point.
    ///
    /// Mean anomalies are spaced uniformly: Mᵢ = M₀ + 2π·i/`points_count`. The
    /// calculation never fails for in-range input; expansion bounds outside the
    /// table are clamped by the geopotential model.
    ///
    /// Arguments
    /// ---------
    /// * `elements`: orbital elements of the request (degrees/km exterior)
    /// * `options`: sampling options, see [`SampleOptions`]
    ///
    /// Return
    /// ------
    /// * [`OrbitSampling`] with the index-ordered points, the summary
    ///   statistics, and the constants snapshot
    pub fn calculate(&self, elements: &KeplerianElements, options: &SampleOptions) -> OrbitSampling {
        let started = Instant::now();

        let angles = elements.in_radians();
        let a = elements.semi_major_axis;
        let ecc = elements.eccentricity;
        let (sin_i, cos_i) = angles.inclination.sin_cos();

        let mut points = Vec::with_capacity(options.points_count);
        for index in 0..options.points_count {
            let mean_anomaly =
                angles.mean_anomaly + DPI * index as f64 / options.points_count as f64;
            let eccentric_anomaly =
                kepler::solve_eccentric_anomaly(mean_anomaly, ecc, KEPLER_TOLERANCE);
            let true_anomaly = kepler::eccentric_to_true_anomaly(eccentric_anomaly, ecc);
            let radius = a * (1.0 - ecc * eccentric_anomaly.cos());
            let arg_latitude = true_anomaly + angles.periapsis_argument;

            let position_inertial = ref_frame::position_inertial(
                radius,
                arg_latitude,
                angles.inclination,
                angles.ascending_node_longitude,
            );
            let position_rotating =
                ref_frame::to_rotating_frame(&position_inertial, options.time_since_epoch);

            let spherical = match options.frame {
                ReferenceFrame::Inertial => ref_frame::to_spherical(&position_inertial),
                ReferenceFrame::RotatingEarth => ref_frame::to_spherical(&position_rotating),
            };

            let cos_phi = spherical.latitude.cos();
            let safe_cos_phi = if cos_phi.abs() < POLE_EPSILON {
                if cos_phi >= 0.0 {
                    POLE_EPSILON
                } else {
                    -POLE_EPSILON
                }
            } else {
                cos_phi
            };
            let sin_az = cos_i / safe_cos_phi;
            let cos_az = arg_latitude.cos() * sin_i / safe_cos_phi;

            let full = self.model.acceleration(
                spherical.radius,
                spherical.latitude,
                spherical.longitude,
                options.max_degree,
                options.max_order,
                false,
            );
            let acceleration = package_rtn(&full, sin_az, cos_az);

            let acceleration_j2_only = options.include_j2_only.then(|| {
                let j2 = self.model.acceleration(
                    spherical.radius,
                    spherical.latitude,
                    spherical.longitude,
                    2,
                    0,
                    true,
                );
                package_rtn(&j2, sin_az, cos_az)
            });

            let newton_acceleration =
                MU / (spherical.radius * spherical.radius) * KMS2_TO_MS2;

            points.push(OrbitPoint {
                index,
                mean_anomaly,
                eccentric_anomaly,
                true_anomaly,
                argument_of_latitude: arg_latitude,
                radius,
                height: radius - EARTH_RADIUS,
                latitude: spherical.latitude,
                longitude: spherical.longitude,
                position_inertial,
                position_rotating,
                acceleration,
                acceleration_j2_only,
                newton_acceleration,
            });
        }

        let summary = summarize(&points, a);
        let constants = ConstantsSnapshot {
            mu: MU,
            r0: EARTH_RADIUS,
            harmonics: self
                .model
                .field()
                .terms_in_range(options.max_degree, options.max_order),
        };

        OrbitSampling {
            points,
            summary,
            constants,
            execution_time_ms: started.elapsed().as_secs_f64() * 1e3,
        }
    }
}

/// Rotate a spherical-frame acceleration into RTN components.
///
/// The km/s² → m/s² conversion lives here and nowhere else.
fn package_rtn(spherical: &SphericalAcceleration, sin_az: f64, cos_az: f64) -> RtnAcceleration {
    let radial = spherical.radial * KMS2_TO_MS2;
    let latitudinal = spherical.latitudinal * KMS2_TO_MS2;
    let longitudinal = spherical.longitudinal * KMS2_TO_MS2;

    let s = radial;
    let t = latitudinal * cos_az + longitudinal * sin_az;
    let w = latitudinal * sin_az - longitudinal * cos_az;
    RtnAcceleration {
        s,
        t,
        w,
        total: s.hypot(t).hypot(w),
    }
}

fn summarize(points: &[OrbitPoint], semi_major_axis: Kilometer) -> OrbitSummary {
    let (min_acceleration, max_acceleration) = match points
        .iter()
        .map(|p| p.acceleration.total)
        .minmax_by(|x, y| x.total_cmp(y))
    {
        MinMaxResult::NoElements => (f64::NAN, f64::NAN),
        MinMaxResult::OneElement(only) => (only, only),
        MinMaxResult::MinMax(lo, hi) => (lo, hi),
    };
    let avg_acceleration =
        points.iter().map(|p| p.acceleration.total).sum::<f64>() / points.len() as f64;

    OrbitSummary {
        min_acceleration,
        max_acceleration,
        avg_acceleration,
        period: DPI * (semi_major_axis.powi(3) / MU).sqrt(),
    }
}

/// Sampler over the process-wide standard coefficient table.
pub fn standard_sampler() -> OrbitSampler<'static> {
    OrbitSampler::new(&STANDARD_FIELD)
}

#[cfg(test)]
mod sampler_test {
    use super::*;

    fn reference_elements() -> KeplerianElements {
        KeplerianElements {
            semi_major_axis: 10000.0,
            eccentricity: 0.1,
            inclination: 10.0,
            ascending_node_longitude: 5.0,
            periapsis_argument: 0.0,
            mean_anomaly: 0.0,
        }
    }

    #[test]
    fn test_options_default_and_validate() {
        let options = SampleOptions::default();
        assert_eq!(options.points_count, 100);
        assert_eq!(options.max_degree, 4);
        assert_eq!(options.max_order, 3);
        assert_eq!(options.frame, ReferenceFrame::RotatingEarth);
        assert!(!options.include_j2_only);
        assert_eq!(options.time_since_epoch, 0.0);
        assert_eq!(options.validate(), Ok(()));

        let mut bad = options;
        bad.points_count = 2;
        assert_eq!(bad.validate(), Err(GeoperturbError::InvalidPointsCount(2)));
        bad = options;
        bad.max_degree = 1;
        assert_eq!(bad.validate(), Err(GeoperturbError::InvalidMaxDegree(1)));
        bad = options;
        bad.max_order = 22;
        assert_eq!(bad.validate(), Err(GeoperturbError::InvalidMaxOrder(22)));
        bad = options;
        bad.time_since_epoch = -1.0;
        assert_eq!(
            bad.validate(),
            Err(GeoperturbError::InvalidEpochOffset(-1.0))
        );
    }

    #[test]
    fn test_points_are_index_ordered_and_uniform_in_mean_anomaly() {
        let sampling = standard_sampler().calculate(
            &reference_elements(),
            &SampleOptions {
                points_count: 8,
                ..SampleOptions::default()
            },
        );
        assert_eq!(sampling.points.len(), 8);
        for (index, point) in sampling.points.iter().enumerate() {
            assert_eq!(point.index, index);
            let expected = DPI * index as f64 / 8.0;
            assert!((point.mean_anomaly - expected).abs() < 1e-15);
        }
    }

    #[test]
    fn test_j2_only_variant_presence() {
        let sampler = standard_sampler();
        let without = sampler.calculate(&reference_elements(), &SampleOptions::default());
        assert!(without.points[0].acceleration_j2_only.is_none());

        let with = sampler.calculate(
            &reference_elements(),
            &SampleOptions {
                include_j2_only: true,
                ..SampleOptions::default()
            },
        );
        let j2 = with.points[0].acceleration_j2_only.as_ref();
        assert!(j2.is_some());
        assert!(j2.is_some_and(|rtn| rtn.total > 0.0));
    }

    #[test]
    fn test_frame_selection_changes_longitude_only() {
        // at t > 0 the rotating frame is turned about the pole, so the
        // expansion sees a shifted longitude but the same radius and latitude
        let options_rotating = SampleOptions {
            time_since_epoch: 3600.0,
            ..SampleOptions::default()
        };
        let options_inertial = SampleOptions {
            frame: ReferenceFrame::Inertial,
            ..options_rotating
        };
        let sampler = standard_sampler();
        let rotating = sampler.calculate(&reference_elements(), &options_rotating);
        let inertial = sampler.calculate(&reference_elements(), &options_inertial);
        for (pr, pi) in rotating.points.iter().zip(&inertial.points) {
            assert!((pr.radius - pi.radius).abs() < 1e-9);
            assert!((pr.latitude - pi.latitude).abs() < 1e-12);
            // both carry the same two positions regardless of selected frame
            assert_eq!(pr.position_inertial, pi.position_inertial);
            assert_eq!(pr.position_rotating, pi.position_rotating);
        }
        assert!(
            (rotating.points[3].longitude - inertial.points[3].longitude).abs() > 1e-6,
            "rotation angle should shift the sampled longitude"
        );
    }

    #[test]
    fn test_constants_snapshot() {
        let sampling =
            standard_sampler().calculate(&reference_elements(), &SampleOptions::default());
        assert_eq!(sampling.constants.mu, MU);
        assert_eq!(sampling.constants.r0, EARTH_RADIUS);
        // degrees 2..4, orders up to 3: 3 zonal rows + 7 nonzero pairs
        assert_eq!(sampling.constants.harmonics.len(), 10);
    }
}
