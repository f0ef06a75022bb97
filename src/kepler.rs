use crate::constants::Radian;

/// Iteration cap of the fixed-point solver. On cap the last estimate is
/// returned unchanged: bounded latency is preferred over strict convergence.
const MAX_ITERATIONS: usize = 1000;

/// Solve Kepler's equation E = M + e·sin(E) for the eccentric anomaly.
///
/// Fixed-point iteration Eᵢ₊₁ = M + e·sin(Eᵢ), seeded with E₀ = M, stopping when
/// |Eᵢ₊₁ − Eᵢ| ≤ `tolerance`. Circular orbits converge in one step (E = M);
/// eccentricities near 1 converge slowly but are bounded by the iteration cap.
///
/// Arguments
/// ---------
/// * `mean_anomaly`: mean anomaly M in radians, unnormalized
/// * `eccentricity`: orbit eccentricity e, elliptical only (e < 1)
/// * `tolerance`: convergence threshold in radians
///   (see [`KEPLER_TOLERANCE`](crate::constants::KEPLER_TOLERANCE))
///
/// Return
/// ------
/// * The eccentric anomaly E in radians. Never fails; a non-converged
///   iteration yields the best estimate reached at the cap.
pub fn solve_eccentric_anomaly(mean_anomaly: Radian, eccentricity: f64, tolerance: f64) -> Radian {
    let mut e_i = mean_anomaly;
    for _ in 0..MAX_ITERATIONS {
        let e_next = mean_anomaly + eccentricity * e_i.sin();
        if (e_next - e_i).abs() <= tolerance {
            return e_next;
        }
        e_i = e_next;
    }
    e_i
}

/// True anomaly θ from the eccentric anomaly via the half-angle identity
/// θ = 2·atan2(√(1+e)·sin(E/2), √(1−e)·cos(E/2)).
pub fn eccentric_to_true_anomaly(eccentric_anomaly: Radian, eccentricity: f64) -> Radian {
    2.0 * f64::atan2(
        (1.0 + eccentricity).sqrt() * (eccentric_anomaly / 2.0).sin(),
        (1.0 - eccentricity).sqrt() * (eccentric_anomaly / 2.0).cos(),
    )
}
