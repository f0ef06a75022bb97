//! Unnormalized associated Legendre functions.
//!
//! This is the *unnormalized* convention matching the scaling of the tabulated
//! harmonic coefficients in [`harmonics`](crate::harmonics). Substituting a
//! normalized convention requires a consistent rescaling of the whole table.

use crate::constants::POLE_EPSILON;

/// Odd double factorial (2m−1)!!, with the (−1)!! = 1 convention.
fn double_factorial(n: i32) -> f64 {
    if n <= 0 {
        return 1.0;
    }
    let mut res = 1.0;
    let mut k = n;
    while k >= 1 {
        res *= k as f64;
        k -= 2;
    }
    res
}

/// Associated Legendre function P_l^m(x), unnormalized.
///
/// Seeded with P_m^m(x) = (−1)^m·(2m−1)!!·(1−x²)^{m/2}, then raised in degree at
/// fixed order with (l−m)·P_l^m = (2l−1)·x·P_{l−1}^m − (l+m−1)·P_{l−2}^m.
///
/// Arguments
/// ---------
/// * `l`: degree
/// * `m`: order; out-of-range orders (m < 0 or m > l) yield 0
/// * `x`: evaluation point, x = sin(φ) in the harmonic expansion
///
/// Return
/// ------
/// * P_l^m(x), or 0 for out-of-range orders
pub fn plm(l: i32, m: i32, x: f64) -> f64 {
    if m < 0 || m > l {
        return 0.0;
    }

    let one_minus = (1.0 - x * x).max(0.0);
    let phase = if m % 2 == 0 { 1.0 } else { -1.0 };
    let p_mm = phase * double_factorial(2 * m - 1) * one_minus.powf(m as f64 / 2.0);
    if l == m {
        return p_mm;
    }

    let p_mm1 = x * (2 * m + 1) as f64 * p_mm;
    if l == m + 1 {
        return p_mm1;
    }

    let mut p_prev2 = p_mm;
    let mut p_prev1 = p_mm1;
    for ll in (m + 2)..=l {
        let p_ll = ((2 * ll - 1) as f64 * x * p_prev1 - (ll + m - 1) as f64 * p_prev2)
            / (ll - m) as f64;
        p_prev2 = p_prev1;
        p_prev1 = p_ll;
    }
    p_prev1
}

/// Derivative dP_l^m/dx via the identity
/// dP_l^m/dx = (l·x·P_l^m(x) − (l+m)·P_{l−1}^m(x)) / (x² − 1).
///
/// Near the poles (x = ±1) the denominator is clamped to a signed epsilon
/// instead of dividing by exact zero.
pub fn dplm_dx(l: i32, m: i32, x: f64) -> f64 {
    let denom = x * x - 1.0;
    let safe_denom = if denom.abs() < POLE_EPSILON {
        if denom >= 0.0 {
            POLE_EPSILON
        } else {
            -POLE_EPSILON
        }
    } else {
        denom
    };
    let p_lm = plm(l, m, x);
    let p_lm1 = if l - 1 >= m { plm(l - 1, m, x) } else { 0.0 };
    ((l as f64) * x * p_lm - (l + m) as f64 * p_lm1) / safe_denom
}
