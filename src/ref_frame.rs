//! Reference-frame transforms of the sampling pipeline: orbital plane →
//! inertial equatorial Cartesian → rotating-Earth Cartesian → spherical.
//!
//! The rotating frame uses the simplified linear rotation angle
//! S(t) = ωE·t about the polar axis, not a true sidereal-time model.

use nalgebra::Vector3;

use crate::constants::{Kilometer, Radian, Second, EARTH_ROTATION_RATE};

/// Geocentric spherical coordinates of a Cartesian position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalPosition {
    pub radius: Kilometer,
    pub latitude: Radian,
    pub longitude: Radian,
}

/// Position in the inertial equatorial frame from in-plane polar coordinates.
///
/// Arguments
/// ---------
/// * `radius`: geocentric distance r in km
/// * `arg_latitude`: argument of latitude u = θ + ω in radians
/// * `inclination`: orbit inclination i in radians
/// * `node`: right ascension of the ascending node Ω in radians
///
/// Return
/// ------
/// * The Cartesian position in km, x toward the equinox, z along the pole
pub fn position_inertial(
    radius: Kilometer,
    arg_latitude: Radian,
    inclination: Radian,
    node: Radian,
) -> Vector3<f64> {
    let (su, cu) = arg_latitude.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = inclination.sin_cos();

    Vector3::new(
        radius * (cu * cn - su * sn * ci),
        radius * (cu * sn + su * cn * ci),
        radius * su * si,
    )
}

/// Rotation angle of the Earth-fixed frame at `t` seconds past epoch.
pub fn earth_rotation_angle(t: Second) -> Radian {
    EARTH_ROTATION_RATE * t
}

/// Rotate an inertial position into the rotating-Earth frame about the polar
/// axis by S(t) = ωE·t. Identity at t = 0.
pub fn to_rotating_frame(p_inertial: &Vector3<f64>, t: Second) -> Vector3<f64> {
    let (s, c) = earth_rotation_angle(t).sin_cos();
    Vector3::new(
        c * p_inertial.x + s * p_inertial.y,
        -s * p_inertial.x + c * p_inertial.y,
        p_inertial.z,
    )
}

/// Spherical coordinates of a Cartesian position: radius = ‖p‖,
/// latitude = asin(z/radius), longitude = atan2(y, x).
///
/// The radius is nonzero for any valid elliptical input (r = a(1 − e·cos E) > 0),
/// so no guard is applied here.
pub fn to_spherical(p: &Vector3<f64>) -> SphericalPosition {
    let radius = p.norm();
    SphericalPosition {
        radius,
        latitude: (p.z / radius).asin(),
        longitude: p.y.atan2(p.x),
    }
}

#[cfg(test)]
mod ref_frame_test {
    use super::*;
    use crate::constants::RADEG;

    #[test]
    fn test_position_inertial_equatorial() {
        // i = 0, Ω = 0: the orbit plane is the equator and u is a plain polar angle
        let p = position_inertial(7000.0, 0.5, 0.0, 0.0);
        assert!((p.x - 7000.0 * 0.5_f64.cos()).abs() < 1e-9);
        assert!((p.y - 7000.0 * 0.5_f64.sin()).abs() < 1e-9);
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_position_inertial_polar_orbit() {
        // i = 90°, u = 90°: the position sits on the pole
        let p = position_inertial(7000.0, 90.0 * RADEG, 90.0 * RADEG, 0.3);
        assert!(p.x.abs() < 1e-9);
        assert!(p.y.abs() < 1e-9);
        assert!((p.z - 7000.0).abs() < 1e-9);
    }

    #[test]
    fn test_rotating_frame_identity_at_epoch() {
        let p = Vector3::new(1234.5, -6789.0, 42.0);
        assert_eq!(to_rotating_frame(&p, 0.0), p);
    }

    #[test]
    fn test_rotating_frame_preserves_norm_and_z() {
        let p = Vector3::new(5000.0, 3000.0, -2000.0);
        let rotated = to_rotating_frame(&p, 86_400.0);
        assert!((rotated.norm() - p.norm()).abs() < 1e-8);
        assert_eq!(rotated.z, p.z);
        // a quarter rotation takes ~21 557 s; at that offset x picks up y
        let quarter = std::f64::consts::FRAC_PI_2 / EARTH_ROTATION_RATE;
        let rotated = to_rotating_frame(&Vector3::new(1.0, 0.0, 0.0), quarter);
        assert!(rotated.x.abs() < 1e-9);
        assert!((rotated.y - (-1.0)).abs() < 1e-9);
    }

    #[test]
    fn test_spherical_round_trip() {
        for (r, u, i, node) in [
            (9000.0, 0.0, 10.0 * RADEG, 5.0 * RADEG),
            (7000.0, 1.2, 45.0 * RADEG, 0.8),
            (26000.0, 4.0, 80.0 * RADEG, 3.1),
            (42164.0, 2.2, 0.1, 5.9),
        ] {
            let p = position_inertial(r, u, i, node);
            let sph = to_spherical(&p);
            assert!(
                (sph.radius - r).abs() < 1e-8,
                "radius not recovered for u={u}, i={i}"
            );
            assert!(sph.latitude.abs() <= i + 1e-12);
        }
    }

    #[test]
    fn test_spherical_axes() {
        let sph = to_spherical(&Vector3::new(0.0, 0.0, 6378.137));
        assert!((sph.latitude - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        let sph = to_spherical(&Vector3::new(0.0, -1000.0, 0.0));
        assert!((sph.longitude - (-std::f64::consts::FRAC_PI_2)).abs() < 1e-12);
        assert_eq!(sph.latitude, 0.0);
    }
}
