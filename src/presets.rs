//! Canned orbit element sets for quick studies and demos. Ids are stable and
//! 1-based; the catalogue is static and read-only.

use crate::geoperturb_errors::GeoperturbError;
use crate::keplerian_element::KeplerianElements;

/// One catalogued orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Preset {
    pub id: usize,
    pub orbit: KeplerianElements,
}

macro_rules! preset {
    ($id:expr, $a:expr, $e:expr, $i:expr, $node:expr, $argp:expr, $m:expr) => {
        Preset {
            id: $id,
            orbit: KeplerianElements {
                semi_major_axis: $a,
                eccentricity: $e,
                inclination: $i,
                ascending_node_longitude: $node,
                periapsis_argument: $argp,
                mean_anomaly: $m,
            },
        }
    };
}

/// The preset catalogue: (a km, e, i°, Ω°, ω°, M°).
pub const PRESETS: [Preset; 27] = [
    preset!(1, 10000.0, 0.1, 10.0, 5.0, 0.0, 0.0),
    preset!(2, 12000.0, 0.1, 20.0, 10.0, 0.0, 15.0),
    preset!(3, 15000.0, 0.2, 30.0, 15.0, 0.0, 30.0),
    preset!(4, 17500.0, 0.3, 45.0, 20.0, 0.0, 45.0),
    preset!(5, 20000.0, 0.4, 60.0, 25.0, 0.0, 60.0),
    preset!(6, 22000.0, 0.4, 32.4, 60.0, 0.0, 0.0),
    preset!(7, 25000.0, 0.5, 82.1, 60.0, 0.0, 15.0),
    preset!(8, 30000.0, 0.5, 81.2, 40.0, 0.0, 30.0),
    preset!(9, 10000.0, 0.6, 40.5, 40.0, 0.0, 45.0),
    preset!(10, 12000.0, 0.6, 74.3, 60.0, 0.0, 60.0),
    preset!(11, 15000.0, 0.7, 56.7, 40.0, 0.0, 0.0),
    preset!(12, 17500.0, 0.7, 82.1, 20.0, 0.0, 15.0),
    preset!(13, 20000.0, 0.8, 81.2, 40.0, 0.0, 30.0),
    preset!(14, 22000.0, 0.8, 40.5, 60.0, 0.0, 45.0),
    preset!(15, 25000.0, 0.9, 74.3, 20.0, 0.0, 60.0),
    preset!(16, 30000.0, 0.9, 20.8, 60.0, 0.0, 0.0),
    preset!(17, 10000.0, 0.1, 37.1, 40.0, 0.0, 15.0),
    preset!(18, 12000.0, 0.1, 77.6, 60.0, 0.0, 30.0),
    preset!(19, 15000.0, 0.2, 56.7, 60.0, 0.0, 45.0),
    preset!(20, 17500.0, 0.3, 58.0, 40.0, 0.0, 60.0),
    preset!(21, 20000.0, 0.4, 74.3, 20.0, 0.0, 0.0),
    preset!(22, 22000.0, 0.4, 20.8, 10.0, 0.0, 15.0),
    preset!(23, 25000.0, 0.5, 32.4, 40.0, 0.0, 30.0),
    preset!(24, 30000.0, 0.5, 58.0, 60.0, 0.0, 45.0),
    preset!(25, 10000.0, 0.6, 32.4, 50.0, 0.0, 60.0),
    preset!(26, 12000.0, 0.6, 58.0, 40.0, 0.0, 0.0),
    preset!(27, 15000.0, 0.7, 58.0, 40.0, 0.0, 15.0),
];

/// Look up a preset orbit by id.
pub fn preset(id: usize) -> Result<&'static Preset, GeoperturbError> {
    PRESETS
        .iter()
        .find(|p| p.id == id)
        .ok_or(GeoperturbError::UnknownPreset(id))
}
