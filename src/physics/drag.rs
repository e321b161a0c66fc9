use super::physics_errors::PhysicsErrors;
use crate::atmosphere::AtmosphereModel;
use crate::models::vehicle::VehicleProperties;
use nalgebra as na;

pub fn dynamic_pressure(density: f64, speed: f64) -> Result<f64, PhysicsErrors> {
    let density = PhysicsErrors::require_non_negative("density", density)?;
    let speed = PhysicsErrors::require_non_negative("speed", speed)?;
    Ok(0.5 * density * speed * speed)
}

/// Drag magnitude (N) on `vehicle` moving at `speed` through the standard atmosphere.
pub fn drag_force<T: VehicleProperties>(
    vehicle: &T,
    altitude: f64,
    speed: f64,
) -> Result<f64, PhysicsErrors> {
    let rho = AtmosphereModel::from_altitude(altitude)?.density;
    let q = dynamic_pressure(rho, speed)?;
    Ok(q * vehicle.drag_coefficient() * vehicle.reference_area())
}

/// Drag force vector, directed against `velocity`.
pub fn drag_force_vector<T: VehicleProperties>(
    vehicle: &T,
    altitude: f64,
    velocity: &na::Vector3<f64>,
) -> Result<na::Vector3<f64>, PhysicsErrors> {
    let v_po: f64 = velocity.magnitude();
    let force_magnitude = drag_force(vehicle, altitude, v_po)?;

    match velocity.try_normalize(f64::EPSILON) {
        Some(direction) => Ok(-direction * force_magnitude),
        None => Ok(na::Vector3::zeros()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::vehicle::SoundingRocket;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use nalgebra as na;

    #[test]
    fn dynamic_pressure_at_sea_level() {
        assert_abs_diff_eq!(dynamic_pressure(1.225, 100.0).unwrap(), 6125.0, epsilon = 1e-9);
        assert!(dynamic_pressure(1.225, -1.0).is_err());
    }

    #[test]
    fn drag_on_reference_vehicle() {
        let area = SoundingRocket.reference_area();
        let expected = 0.5 * 1.2250123 * 200.0 * 200.0 * SoundingRocket::C_D * area;
        let drag = drag_force(&SoundingRocket, 0.0, 200.0).unwrap();
        assert_relative_eq!(drag, expected, max_relative = 1e-6);
    }

    #[test]
    fn drag_vector_opposes_velocity() {
        let velocity = na::Vector3::new(0.0, 300.0, 400.0);
        let drag = drag_force_vector(&SoundingRocket, 5_000.0, &velocity).unwrap();
        let magnitude = drag_force(&SoundingRocket, 5_000.0, 500.0).unwrap();

        assert_relative_eq!(drag.magnitude(), magnitude, max_relative = 1e-12);
        assert_relative_eq!(drag.normalize().dot(&velocity.normalize()), -1.0, max_relative = 1e-12);
    }

    #[test]
    fn no_drag_without_motion() {
        let drag = drag_force_vector(&SoundingRocket, 1_000.0, &na::Vector3::zeros()).unwrap();
        assert_eq!(drag, na::Vector3::zeros());
    }
}
