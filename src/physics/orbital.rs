use super::physics_errors::PhysicsErrors;
use crate::constants::{MU_EARTH, PI, R_EARTH};
use hifitime::Duration;
use nalgebra as na;

/// Angles in radians, distances in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeplerianElements {
    pub semi_major_axis: f64,
    pub eccentricity: f64,
    pub inclination: f64,
    pub raan: f64,
    pub argument_of_periapsis: f64,
    pub true_anomaly: f64,
}

impl KeplerianElements {
    pub fn periapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn apoapsis_radius(&self) -> f64 {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularOrbit {
    pub altitude: f64,        // m above mean Earth radius
    pub radius: f64,          // m
    pub velocity: f64,        // m/s
    pub escape_velocity: f64, // m/s
    pub period: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannTransfer {
    pub transfer_semi_major_axis: f64, // m
    pub departure_delta_v: f64,        // m/s
    pub arrival_delta_v: f64,          // m/s
    pub total_delta_v: f64,            // m/s
    pub transfer_time: Duration,
}

pub struct OrbitalMechanics;

fn wrap_two_pi(angle: f64) -> f64 {
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}

impl OrbitalMechanics {
    pub fn circular_velocity(r: f64) -> Result<f64, PhysicsErrors> {
        let r = PhysicsErrors::require_positive("orbit radius", r)?;
        Ok((MU_EARTH / r).sqrt())
    }

    pub fn escape_velocity(r: f64) -> Result<f64, PhysicsErrors> {
        let r = PhysicsErrors::require_positive("orbit radius", r)?;
        Ok((2.0 * MU_EARTH / r).sqrt())
    }

    /// Orbital speed at radius `r` on an orbit with semi-major axis `a`.
    pub fn vis_viva_speed(r: f64, a: f64) -> Result<f64, PhysicsErrors> {
        let r = PhysicsErrors::require_positive("orbit radius", r)?;
        let a = PhysicsErrors::require_positive("semi-major axis", a)?;
        let energy_term = 2.0 / r - 1.0 / a;
        if energy_term < 0.0 {
            // r lies beyond the apoapsis of any ellipse with this a
            return Err(PhysicsErrors::Negative {
                quantity: "vis-viva energy term",
                value: energy_term,
            });
        }
        Ok((MU_EARTH * energy_term).sqrt())
    }

    pub fn orbital_period(a: f64) -> Result<Duration, PhysicsErrors> {
        let a = PhysicsErrors::require_positive("semi-major axis", a)?;
        Ok(Duration::from_seconds(2.0 * PI * (a.powi(3) / MU_EARTH).sqrt()))
    }

    /// Circular orbit at `altitude` above the mean Earth radius.
    pub fn circular_orbit(altitude: f64) -> Result<CircularOrbit, PhysicsErrors> {
        let altitude = PhysicsErrors::require_non_negative("orbit altitude", altitude)?;
        let radius = R_EARTH + altitude;

        Ok(CircularOrbit {
            altitude,
            radius,
            velocity: Self::circular_velocity(radius)?,
            escape_velocity: Self::escape_velocity(radius)?,
            period: Self::orbital_period(radius)?,
        })
    }

    /// Two-impulse transfer between coplanar circular orbits of radius `r1` and `r2`.
    /// Burns are reported as magnitudes, so lowering and raising are symmetric.
    pub fn hohmann_transfer(r1: f64, r2: f64) -> Result<HohmannTransfer, PhysicsErrors> {
        let r1 = PhysicsErrors::require_positive("departure radius", r1)?;
        let r2 = PhysicsErrors::require_positive("arrival radius", r2)?;

        let a_transfer = (r1 + r2) / 2.0;
        let departure_delta_v =
            (Self::vis_viva_speed(r1, a_transfer)? - Self::circular_velocity(r1)?).abs();
        let arrival_delta_v =
            (Self::circular_velocity(r2)? - Self::vis_viva_speed(r2, a_transfer)?).abs();
        let transfer_time = Duration::from_seconds(PI * (a_transfer.powi(3) / MU_EARTH).sqrt());

        Ok(HohmannTransfer {
            transfer_semi_major_axis: a_transfer,
            departure_delta_v,
            arrival_delta_v,
            total_delta_v: departure_delta_v + arrival_delta_v,
            transfer_time,
        })
    }

    /// Converts a Cartesian state (position and velocity, ECI) to Keplerian elements
    pub fn cartesian_to_keplerian(
        r: &na::Vector3<f64>,
        v: &na::Vector3<f64>,
    ) -> Result<KeplerianElements, PhysicsErrors> {
        let mu = MU_EARTH;

        let r_mag = PhysicsErrors::require_positive("position magnitude", r.magnitude())?;
        let v_mag = v.magnitude();

        // Angular momentum vanishes for rectilinear motion
        let h = r.cross(v);
        let h_mag = PhysicsErrors::require_positive("angular momentum", h.magnitude())?;

        // Node vector
        let k = na::Vector3::new(0.0, 0.0, 1.0);
        let n = k.cross(&h);
        let n_mag = n.magnitude();

        let e_vec = ((v_mag * v_mag - mu / r_mag) * r - r.dot(v) * v) / mu;
        let e = e_vec.magnitude();

        let specific_energy = v_mag * v_mag / 2.0 - mu / r_mag;
        let semi_major_axis = -mu / (2.0 * specific_energy);

        let inclination = (h.z / h_mag).acos();

        let raan = if n_mag < 1e-11 {
            0.0
        } else {
            wrap_two_pi(n.y.atan2(n.x))
        };

        let argument_of_periapsis = if e < 1e-11 {
            0.0
        } else if n_mag < 1e-11 {
            wrap_two_pi(e_vec.y.atan2(e_vec.x))
        } else {
            wrap_two_pi((h.dot(&n.cross(&e_vec)) / h_mag).atan2(n.dot(&e_vec)))
        };

        let true_anomaly = if e < 1e-11 {
            if n_mag < 1e-11 {
                wrap_two_pi(r.y.atan2(r.x))
            } else {
                wrap_two_pi((h.dot(&n.cross(r)) / h_mag).atan2(n.dot(r)))
            }
        } else {
            wrap_two_pi((h.dot(&e_vec.cross(r)) / h_mag).atan2(e_vec.dot(r)))
        };

        Ok(KeplerianElements {
            semi_major_axis,
            eccentricity: e,
            inclination,
            raan,
            argument_of_periapsis,
            true_anomaly,
        })
    }

    /// Converts Keplerian elements to Cartesian state vectors in the ECI frame [m, m/s]
    pub fn keplerian_to_cartesian(
        elements: &KeplerianElements,
    ) -> (na::Vector3<f64>, na::Vector3<f64>) {
        let mu = MU_EARTH;
        let e = elements.eccentricity;
        let nu = elements.true_anomaly;

        // Position and velocity in the orbital plane
        let p = elements.semi_major_axis * (1.0 - e * e);
        let r_mag = p / (1.0 + e * nu.cos());
        let r_orbital = na::Vector3::new(r_mag * nu.cos(), r_mag * nu.sin(), 0.0);
        let v_orbital = na::Vector3::new(
            -(mu / p).sqrt() * nu.sin(),
            (mu / p).sqrt() * (e + nu.cos()),
            0.0,
        );

        let transform = na::Rotation3::from_axis_angle(&na::Vector3::z_axis(), elements.raan)
            * na::Rotation3::from_axis_angle(&na::Vector3::x_axis(), elements.inclination)
            * na::Rotation3::from_axis_angle(
                &na::Vector3::z_axis(),
                elements.argument_of_periapsis,
            );

        (transform * r_orbital, transform * v_orbital)
    }
}
