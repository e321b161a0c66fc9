use super::gravity::gravity_at_altitude;
use super::physics_errors::PhysicsErrors;
use crate::constants::G0;
use crate::models::vehicle::VehicleProperties;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThrustToWeight {
    pub ratio: f64,
    pub weight: f64,  // N
    pub gravity: f64, // m/s²
    pub can_lift_off: bool,
}

fn thrust_to_weight_with_gravity(
    thrust: f64,
    mass: f64,
    gravity: f64,
) -> Result<ThrustToWeight, PhysicsErrors> {
    let thrust = PhysicsErrors::require_non_negative("thrust", thrust)?;
    let mass = PhysicsErrors::require_positive("mass", mass)?;
    let weight = mass * gravity;
    let ratio = thrust / weight;

    Ok(ThrustToWeight {
        ratio,
        weight,
        gravity,
        can_lift_off: ratio > 1.0,
    })
}

/// Thrust-to-weight ratio under standard gravity.
pub fn thrust_to_weight(thrust: f64, mass: f64) -> Result<ThrustToWeight, PhysicsErrors> {
    thrust_to_weight_with_gravity(thrust, mass, G0)
}

/// Thrust-to-weight ratio with gravity reduced for `altitude`.
pub fn thrust_to_weight_at_altitude(
    thrust: f64,
    mass: f64,
    altitude: f64,
) -> Result<ThrustToWeight, PhysicsErrors> {
    thrust_to_weight_with_gravity(thrust, mass, gravity_at_altitude(altitude)?)
}

pub fn vehicle_thrust_to_weight<T: VehicleProperties>(
    vehicle: &T,
) -> Result<ThrustToWeight, PhysicsErrors> {
    thrust_to_weight(vehicle.thrust(), vehicle.mass())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::vehicle::SoundingRocket;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(9000.0, 1000.0, 0.9177, false; "too heavy")]
    #[test_case(15000.0, 1000.0, 1.5296, true; "lift off")]
    #[test_case(0.0, 1000.0, 0.0, false; "engine off")]
    fn sea_level_ratio(thrust: f64, mass: f64, expected: f64, lift_off: bool) {
        let result = thrust_to_weight(thrust, mass).unwrap();
        assert_abs_diff_eq!(result.ratio, expected, epsilon = 1e-4);
        assert_eq!(result.can_lift_off, lift_off);
    }

    #[test]
    fn ratio_grows_with_altitude() {
        let ground = thrust_to_weight(10_000.0, 1_000.0).unwrap();
        let high = thrust_to_weight_at_altitude(10_000.0, 1_000.0, 100_000.0).unwrap();
        assert!(high.ratio > ground.ratio);
        assert!(high.gravity < G0);
    }

    #[test]
    fn reference_vehicle_lifts_off() {
        let result = vehicle_thrust_to_weight(&SoundingRocket).unwrap();
        assert_abs_diff_eq!(result.ratio, 3.6710, epsilon = 1e-4);
        assert!(result.can_lift_off);
    }

    #[test]
    fn rejects_non_physical_inputs() {
        assert!(thrust_to_weight(-1.0, 10.0).is_err());
        assert!(thrust_to_weight(10.0, 0.0).is_err());
    }
}
