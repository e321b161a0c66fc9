use super::coordinate_errors::CoordinateErrors;
use crate::constants::{WGS84_A, WGS84_F};
use log::debug;
use nalgebra as na;
use serde::Serialize;

/// Equatorial distances below this are treated as lying on the polar axis.
const POLAR_AXIS_TOLERANCE: f64 = 1e-10; // m
const MAX_ITERATIONS: usize = 10;
const CONVERGENCE_TOLERANCE: f64 = 1e-12; // rad

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeodeticPosition {
    pub latitude: f64,  // degrees, positive north
    pub longitude: f64, // degrees, positive east
    pub altitude: f64,  // meters above the WGS84 ellipsoid
}

impl GeodeticPosition {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Result<Self, CoordinateErrors> {
        if !latitude.is_finite() {
            return Err(CoordinateErrors::NonFiniteComponent("latitude"));
        }
        if !longitude.is_finite() {
            return Err(CoordinateErrors::NonFiniteComponent("longitude"));
        }
        if !altitude.is_finite() {
            return Err(CoordinateErrors::NonFiniteComponent("altitude"));
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateErrors::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateErrors::LongitudeOutOfRange(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
            altitude,
        })
    }
}

fn first_eccentricity_squared() -> f64 {
    2.0 * WGS84_F - WGS84_F * WGS84_F
}

/// Prime vertical radius of curvature at geodetic latitude `lat` (radians).
fn prime_vertical_radius(lat: f64) -> f64 {
    let sin_lat = lat.sin();
    WGS84_A / (1.0 - first_eccentricity_squared() * sin_lat * sin_lat).sqrt()
}

/// Ellipsoidal height from the equatorial distance `p`, `z` and latitude.
/// Stays well conditioned near the poles, where `p / cos(lat)` does not.
fn height_above_ellipsoid(p: f64, z: f64, lat: f64) -> f64 {
    let (sin_lat, cos_lat) = lat.sin_cos();
    p * cos_lat + z * sin_lat - WGS84_A * WGS84_A / prime_vertical_radius(lat)
}

/// Convert WGS84 geodetic coordinates to Earth-Centered, Earth-Fixed Cartesian (m)
pub fn geodetic_to_ecef(position: &GeodeticPosition) -> na::Vector3<f64> {
    let lat = position.latitude.to_radians();
    let lon = position.longitude.to_radians();
    let h = position.altitude;

    let e2 = first_eccentricity_squared();
    let n = prime_vertical_radius(lat);

    na::Vector3::new(
        (n + h) * lat.cos() * lon.cos(),
        (n + h) * lat.cos() * lon.sin(),
        (n * (1.0 - e2) + h) * lat.sin(),
    )
}

/// Convert Earth-Centered, Earth-Fixed Cartesian (m) to WGS84 geodetic coordinates
pub fn ecef_to_geodetic(pos: &na::Vector3<f64>) -> Result<GeodeticPosition, CoordinateErrors> {
    if pos.iter().any(|c| !c.is_finite()) {
        return Err(CoordinateErrors::NonFiniteComponent("ECEF position"));
    }

    let (x, y, z) = (pos.x, pos.y, pos.z);
    let a = WGS84_A;
    let b = a * (1.0 - WGS84_F); // Semi-minor axis
    let e2 = first_eccentricity_squared();

    let p = (x * x + y * y).sqrt();

    // On the polar axis longitude is undefined and latitude is ±90°
    if p < POLAR_AXIS_TOLERANCE {
        return Ok(GeodeticPosition {
            latitude: if z < 0.0 { -90.0 } else { 90.0 },
            longitude: 0.0,
            altitude: z.abs() - b,
        });
    }

    let longitude = y.atan2(x);
    let mut latitude = z.atan2(p * (1.0 - e2));

    for iteration in 0..MAX_ITERATIONS {
        let n = prime_vertical_radius(latitude);
        let h = height_above_ellipsoid(p, z, latitude);

        let prev_lat = latitude;
        latitude = (z / p).atan2(1.0 - e2 * n / (n + h));

        if (latitude - prev_lat).abs() < CONVERGENCE_TOLERANCE {
            debug!("Geodetic latitude converged after {} iterations", iteration + 1);
            break;
        }
    }

    let altitude = height_above_ellipsoid(p, z, latitude);

    Ok(GeodeticPosition {
        latitude: latitude.to_degrees(),
        longitude: longitude.to_degrees(),
        altitude,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use nalgebra as na;
    use test_case::test_case;

    #[test_case(0.0, 0.0, 0.0, na::Vector3::new(WGS84_A, 0.0, 0.0); "equator prime meridian")]
    #[test_case(0.0, 90.0, 0.0, na::Vector3::new(0.0, WGS84_A, 0.0); "equator ninety east")]
    #[test_case(90.0, 0.0, 0.0, na::Vector3::new(0.0, 0.0, 6356752.314245); "north pole")]
    #[test_case(-90.0, 0.0, 1000.0, na::Vector3::new(0.0, 0.0, -6357752.314245); "south pole above ellipsoid")]
    fn geodetic_to_ecef_known_points(lat: f64, lon: f64, h: f64, expected: na::Vector3<f64>) {
        let position = GeodeticPosition::new(lat, lon, h).unwrap();
        assert_abs_diff_eq!(geodetic_to_ecef(&position), expected, epsilon = 1e-3);
    }

    #[test_case(45.0, 45.0, 1_000.0; "mid latitude")]
    #[test_case(-33.8688, 151.2093, 58.0; "southern hemisphere")]
    #[test_case(51.4779, -0.0015, 46.0; "western longitude")]
    #[test_case(89.9999, 10.0, 400_000.0; "near pole in orbit")]
    #[test_case(10.0, 179.9, -400.0; "below the ellipsoid")]
    fn round_trip(lat: f64, lon: f64, h: f64) {
        let position = GeodeticPosition::new(lat, lon, h).unwrap();
        let back = ecef_to_geodetic(&geodetic_to_ecef(&position)).unwrap();
        assert_abs_diff_eq!(back.latitude, lat, epsilon = 1e-8);
        assert_abs_diff_eq!(back.longitude, lon, epsilon = 1e-8);
        assert_abs_diff_eq!(back.altitude, h, epsilon = 1e-3);
    }

    #[test]
    fn polar_axis_is_handled_without_division_by_zero() {
        let north = ecef_to_geodetic(&na::Vector3::new(0.0, 0.0, 6_400_000.0)).unwrap();
        assert_eq!(north.latitude, 90.0);
        assert_eq!(north.longitude, 0.0);
        assert_abs_diff_eq!(north.altitude, 6_400_000.0 - 6356752.314245, epsilon = 1e-3);

        let south = ecef_to_geodetic(&na::Vector3::new(0.0, 0.0, -6_000_000.0)).unwrap();
        assert_eq!(south.latitude, -90.0);
        assert!(south.altitude < 0.0);
    }

    #[test]
    fn rejects_out_of_range_geodetic_input() {
        assert_eq!(
            GeodeticPosition::new(91.0, 0.0, 0.0).unwrap_err(),
            CoordinateErrors::LatitudeOutOfRange(91.0)
        );
        assert_eq!(
            GeodeticPosition::new(0.0, -181.0, 0.0).unwrap_err(),
            CoordinateErrors::LongitudeOutOfRange(-181.0)
        );
        assert!(GeodeticPosition::new(0.0, 0.0, f64::NAN).is_err());
        assert!(ecef_to_geodetic(&na::Vector3::new(f64::INFINITY, 0.0, 0.0)).is_err());
    }
}
