//! # Geopotential acceleration model
//!
//! Harmonic summation of the perturbing acceleration in geocentric spherical
//! coordinates. The per-term multipliers and sign conventions below follow the
//! source formulation literally (including the bare `k` multiplier of the
//! longitudinal sum) and form a fixed external contract: consumers expect
//! parity within floating tolerance, term by term.

use crate::constants::{
    Kilometer, KmPerSec2, Radian, EARTH_RADIUS, MAX_HARMONIC_DEGREE, MIN_HARMONIC_DEGREE, MU,
    POLE_EPSILON,
};
use crate::harmonics::HarmonicCoefficients;
use crate::legendre::{dplm_dx, plm};

/// Perturbing acceleration in the spherical frame, km/s².
///
/// `used_harmonics` lists the (n, k) terms whose coefficients actually
/// contributed; sparse zero pairs are skipped, not reported.
#[derive(Debug, Clone, PartialEq)]
pub struct SphericalAcceleration {
    pub radial: KmPerSec2,
    pub latitudinal: KmPerSec2,
    pub longitudinal: KmPerSec2,
    pub used_harmonics: Vec<(u32, u32)>,
}

/// Harmonic gravity model over a borrowed read-only coefficient table.
#[derive(Debug, Clone, Copy)]
pub struct GeopotentialModel<'a> {
    field: &'a HarmonicCoefficients,
}

impl<'a> GeopotentialModel<'a> {
    pub fn new(field: &'a HarmonicCoefficients) -> Self {
        GeopotentialModel { field }
    }

    pub fn field(&self) -> &'a HarmonicCoefficients {
        self.field
    }

    /// Perturbing acceleration at a geocentric spherical position.
    ///
    /// Out-of-range expansion bounds are clamped, never rejected: the degree
    /// into [2, 21] and the order into [0, min(`max_order`, n)] per degree. In
    /// `j2_only` mode every order > 0 term is skipped regardless of
    /// `max_order`, and only the n = 2 zonal term survives the degree loop.
    ///
    /// Arguments
    /// ---------
    /// * `radius`: geocentric distance in km
    /// * `latitude`: geocentric latitude φ in radians
    /// * `longitude`: geocentric longitude λ in radians
    /// * `max_degree`: requested expansion degree ceiling
    /// * `max_order`: requested expansion order ceiling
    /// * `j2_only`: restrict the expansion to the J₂ zonal term
    ///
    /// Return
    /// ------
    /// * [`SphericalAcceleration`] in km/s²; unit conversion to m/s² belongs to
    ///   the RTN packaging boundary, not here
    pub fn acceleration(
        &self,
        radius: Kilometer,
        latitude: Radian,
        longitude: Radian,
        max_degree: u32,
        max_order: u32,
        j2_only: bool,
    ) -> SphericalAcceleration {
        let q = latitude.sin();
        let cos_phi = latitude.cos();

        let max_n = max_degree.clamp(MIN_HARMONIC_DEGREE, MAX_HARMONIC_DEGREE);
        let max_k = max_order.min(max_n);

        let mut radial = 0.0;
        let mut latitudinal = 0.0;
        let mut longitudinal = 0.0;
        let mut used_harmonics = Vec::new();

        let base = MU / (EARTH_RADIUS * EARTH_RADIUS);

        for n in MIN_HARMONIC_DEGREE..=max_n {
            let rn = (EARTH_RADIUS / radius).powi(n as i32 + 2);

            if !j2_only || n == 2 {
                let jn = self.field.zonal(n).unwrap_or(0.0);
                if jn != 0.0 {
                    let p_n = plm(n as i32, 0, q);
                    let dp_n = dplm_dx(n as i32, 0, q);

                    radial += (n + 1) as f64 * jn * rn * p_n;
                    latitudinal += jn * rn * dp_n;
                    used_harmonics.push((n, 0));
                }
            }

            if j2_only {
                continue;
            }

            for k in 1..=max_k.min(n) {
                let (cnk, snk) = self.field.tesseral(n, k).unwrap_or((0.0, 0.0));
                if cnk == 0.0 && snk == 0.0 {
                    continue;
                }

                let (sin_k, cos_k) = (k as f64 * longitude).sin_cos();
                let a = cnk * cos_k + snk * sin_k;
                let b = -cnk * sin_k + snk * cos_k;

                let p_nk = plm(n as i32, k as i32, q);
                let dp_nk = dplm_dx(n as i32, k as i32, q);

                radial -= (n + 1) as f64 * rn * p_nk * a;
                latitudinal -= rn * dp_nk * a;
                longitudinal += k as f64 * rn * p_nk * b;
                used_harmonics.push((n, k));
            }
        }

        let safe_cos_phi = if cos_phi.abs() < POLE_EPSILON {
            if cos_phi >= 0.0 {
                POLE_EPSILON
            } else {
                -POLE_EPSILON
            }
        } else {
            cos_phi
        };

        SphericalAcceleration {
            radial: base * radial,
            latitudinal: base * cos_phi * latitudinal,
            longitudinal: -base / safe_cos_phi * longitudinal,
            used_harmonics,
        }
    }
}
