//! # Harmonic coefficient table
//!
//! Tabulated coefficients of the Earth gravity field expansion: zonal `Jₙ` for
//! degrees 2..21 and tesseral/sectoral `(Cₙₖ, Sₙₖ)` pairs where measured values
//! are carried. The table is **sparse**: an absent entry means a zero
//! coefficient, not an error.
//!
//! The table is built once at first use into the process-wide
//! [`STANDARD_FIELD`] and never mutated afterwards, so it is safe for
//! unsynchronized concurrent reads; components borrow it by reference.

use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Serialize;

use crate::constants::{MAX_HARMONIC_DEGREE, MIN_HARMONIC_DEGREE};

/// Zonal rows of the standard field: (n, Jₙ).
const ZONAL: [(u32, f64); 20] = [
    (2, 1082628e-9),
    (3, -2538e-9),
    (4, -1593e-9),
    (5, -23e-8),
    (6, 502e-9),
    (7, -361e-9),
    (8, -118e-9),
    (9, -1e-7),
    (10, -354e-9),
    (11, 202e-9),
    (12, -42e-9),
    (13, -123e-9),
    (14, -73e-9),
    (15, -174e-9),
    (16, 187e-9),
    (17, 85e-9),
    (18, -231e-9),
    (19, -216e-9),
    (20, -5e-9),
    (21, 145e-9),
];

/// Tesseral/sectoral rows of the standard field: (n, k, Cₙₖ, Sₙₖ).
/// The (2,1) pair is tabulated as zero: it never contributes to the
/// acceleration sum and stays out of coefficient snapshots.
const TESSERAL: [(u32, u32, f64, f64); 21] = [
    (2, 1, 0.0, 0.0),
    (2, 2, 24129e-10, -13641e-10),
    (3, 1, 19698e-10, 26015e-11),
    (3, 2, 89204e-11, -63468e-11),
    (3, 3, 6863e-10, 14304e-10),
    (4, 1, -52989e-11, -48765e-11),
    (4, 2, 33024e-11, 70633e-11),
    (4, 3, 98943e-11, -15467e-11),
    (4, 4, -79692e-12, 33928e-11),
    (5, 1, -53816e-12, -97905e-12),
    (5, 2, 61286e-11, -35087e-11),
    (5, 3, -43083e-11, -86663e-12),
    (5, 4, -26693e-11, 8301e-11),
    (5, 5, 12593e-11, -5991e-10),
    (6, 1, -98984e-12, 37652e-12),
    (6, 2, 54825e-12, -35175e-11),
    (6, 3, 27873e-12, 44626e-12),
    (6, 4, -40342e-14, -40388e-11),
    (6, 5, -21143e-11, -52264e-11),
    (6, 6, 88693e-12, -74756e-12),
    (7, 1, 24142e-11, 11567e-11),
];

/// One tabulated term of the expansion, as reported in output snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HarmonicTerm {
    pub n: u32,
    pub k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jn: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cnk: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snk: Option<f64>,
}

/// Read-only lookup structure over the tabulated coefficients.
#[derive(Debug)]
pub struct HarmonicCoefficients {
    zonal: HashMap<u32, f64>,
    tesseral: HashMap<(u32, u32), (f64, f64)>,
}

/// The standard field, built once on first access.
pub static STANDARD_FIELD: LazyLock<HarmonicCoefficients> =
    LazyLock::new(HarmonicCoefficients::standard);

impl HarmonicCoefficients {
    /// Build the standard coefficient table.
    pub fn standard() -> Self {
        HarmonicCoefficients {
            zonal: ZONAL.iter().copied().collect(),
            tesseral: TESSERAL
                .iter()
                .map(|&(n, k, c, s)| ((n, k), (c, s)))
                .collect(),
        }
    }

    /// Zonal coefficient Jₙ, or `None` if the degree is not tabulated.
    pub fn zonal(&self, n: u32) -> Option<f64> {
        self.zonal.get(&n).copied()
    }

    /// Tesseral/sectoral pair (Cₙₖ, Sₙₖ), or `None` if not tabulated.
    pub fn tesseral(&self, n: u32, k: u32) -> Option<(f64, f64)> {
        self.tesseral.get(&(n, k)).copied()
    }

    /// Enumerate every nonzero tabulated term with n ≤ `max_degree` and
    /// k ≤ `max_order`, ordered by degree then order, for the output constants
    /// snapshot. Stored-as-zero pairs are omitted, matching what the
    /// acceleration sum actually applies.
    pub fn terms_in_range(&self, max_degree: u32, max_order: u32) -> Vec<HarmonicTerm> {
        let mut terms = Vec::new();
        let top = max_degree.min(MAX_HARMONIC_DEGREE);
        for n in MIN_HARMONIC_DEGREE..=top {
            if let Some(jn) = self.zonal(n).filter(|&jn| jn != 0.0) {
                terms.push(HarmonicTerm {
                    n,
                    k: 0,
                    jn: Some(jn),
                    cnk: None,
                    snk: None,
                });
            }
            for k in 1..=max_order.min(n) {
                if let Some((cnk, snk)) = self
                    .tesseral(n, k)
                    .filter(|&(cnk, snk)| cnk != 0.0 || snk != 0.0)
                {
                    terms.push(HarmonicTerm {
                        n,
                        k,
                        jn: None,
                        cnk: Some(cnk),
                        snk: Some(snk),
                    });
                }
            }
        }
        terms
    }
}

#[cfg(test)]
mod harmonics_test {
    use super::*;

    #[test]
    fn test_table_shape() {
        let field = HarmonicCoefficients::standard();
        for n in 2..=21 {
            assert!(field.zonal(n).is_some());
        }
        assert_eq!(field.zonal(1), None);
        assert_eq!(field.zonal(22), None);

        assert_eq!(field.tesseral(2, 2), Some((24129e-10, -13641e-10)));
        assert_eq!(field.tesseral(2, 1), Some((0.0, 0.0)));
        assert_eq!(field.tesseral(8, 1), None);
        assert_eq!(field.tesseral(7, 2), None);
    }

    #[test]
    fn test_standard_values() {
        let field = &*STANDARD_FIELD;
        assert_eq!(field.zonal(2), Some(1.082628e-3));
        assert_eq!(field.zonal(21), Some(145e-9));
        assert_eq!(field.tesseral(6, 4), Some((-40342e-14, -40388e-11)));
    }

    #[test]
    fn test_terms_in_range() {
        let field = HarmonicCoefficients::standard();
        // degrees 2..4 with orders up to 3: three zonal rows plus the nonzero
        // pairs (2,2) (3,1) (3,2) (3,3) (4,1) (4,2) (4,3); the zero (2,1) pair
        // stays out
        let terms = field.terms_in_range(4, 3);
        assert_eq!(terms.len(), 10);
        assert_eq!(terms[0].n, 2);
        assert_eq!(terms[0].k, 0);
        assert_eq!(terms[0].jn, Some(1.082628e-3));
        assert!(!terms.iter().any(|t| t.n == 2 && t.k == 1));
        assert!(terms.iter().all(|t| t.n <= 4 && t.k <= 3));

        // order 0 keeps only the zonal rows
        let zonal_only = field.terms_in_range(21, 0);
        assert_eq!(zonal_only.len(), 20);
        assert!(zonal_only.iter().all(|t| t.k == 0));

        // degree clamp at the table ceiling
        let clamped = field.terms_in_range(40, 0);
        assert_eq!(clamped.len(), 20);
    }
}
