//! # Constants and type definitions for geoperturb
//!
//! This module centralizes the **physical constants**, **conversion factors**, and **common type
//! definitions** used throughout the `geoperturb` library.
//!
//! ## Overview
//!
//! - Geophysical constants of the harmonic gravity model (μ, r₀, ωE)
//! - Unit conversions (degrees ↔ radians, km·s⁻² ↔ m·s⁻²)
//! - Core type aliases used across the crate
//! - Documented exterior ranges and defaults of a sampling request
//!
//! These definitions are used by all main modules, including the Kepler solver, the
//! geopotential model, and the orbit sampler.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Geocentric gravitational parameter μ in km³/s²
pub const MU: f64 = 398600.4418;

/// Earth equatorial reference radius r₀ in km
pub const EARTH_RADIUS: f64 = 6378.137;

/// Earth rotation rate ωE in rad/s (simplified linear rotation angle S(t) = ωE·t)
pub const EARTH_ROTATION_RATE: f64 = 7.292115e-5;

/// Default convergence tolerance of the Kepler solver, 0.001° in radians
pub const KEPLER_TOLERANCE: f64 = 0.001 * RADEG;

/// km·s⁻² → m·s⁻², applied exactly once at the RTN packaging boundary
pub const KMS2_TO_MS2: f64 = 1000.0;

/// Signed epsilon substituted for degenerate denominators (cos φ ≈ 0, x² − 1 ≈ 0)
pub const POLE_EPSILON: f64 = 1e-12;

// -------------------------------------------------------------------------------------------------
// Harmonic expansion and sampling bounds
// -------------------------------------------------------------------------------------------------

/// Lowest harmonic degree carried by the coefficient table
pub const MIN_HARMONIC_DEGREE: u32 = 2;

/// Highest harmonic degree carried by the coefficient table
pub const MAX_HARMONIC_DEGREE: u32 = 21;

/// Documented bounds of the number of sampled points along one orbit
pub const POINTS_COUNT_RANGE: std::ops::RangeInclusive<usize> = 3..=5000;

/// Upper bound of the epoch offset in seconds (ten years)
pub const MAX_EPOCH_OFFSET: f64 = 86_400.0 * 365.0 * 10.0;

/// Eccentricity ceiling of the elliptical-only element record
pub const MAX_ECCENTRICITY: f64 = 0.999999;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Acceleration in km/s²
pub type KmPerSec2 = f64;
/// Acceleration in m/s²
pub type MeterPerSec2 = f64;
/// Duration in seconds
pub type Second = f64;
