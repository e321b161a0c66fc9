use super::physics_errors::PhysicsErrors;
use crate::constants::{G0, MU_EARTH, R_EARTH};
use nalgebra as na;

/// Point-mass gravitational acceleration at an Earth-centred position.
pub fn gravity_acceleration(position: &na::Vector3<f64>) -> Result<na::Vector3<f64>, PhysicsErrors> {
    let r: f64 = PhysicsErrors::require_positive("position magnitude", position.magnitude())?;
    let acceleration_magnitude: f64 = -MU_EARTH / (r * r);
    Ok(position.normalize() * acceleration_magnitude)
}

/// Standard gravity scaled by the inverse square of the distance from Earth's center.
pub fn gravity_at_altitude(altitude: f64) -> Result<f64, PhysicsErrors> {
    if !altitude.is_finite() {
        return Err(PhysicsErrors::NonFinite("altitude"));
    }
    if altitude <= -R_EARTH {
        return Err(PhysicsErrors::BelowEarthCenter(altitude));
    }
    Ok(G0 * (R_EARTH / (R_EARTH + altitude)).powi(2))
}
