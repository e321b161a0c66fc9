use super::physics_errors::PhysicsErrors;
use crate::atmosphere::AtmosphereModel;
use crate::constants::{SUTHERLAND_MU_REF, SUTHERLAND_S, SUTHERLAND_T_REF};
use crate::models::vehicle::VehicleProperties;
use serde::Serialize;
use std::fmt;

// Flat-plate transition bounds
const LAMINAR_LIMIT: f64 = 5.0e5;
const TURBULENT_ONSET: f64 = 3.0e6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowRegime {
    Laminar,
    Transitional,
    Turbulent,
}

impl FlowRegime {
    pub fn from_reynolds(reynolds: f64) -> Self {
        if reynolds < LAMINAR_LIMIT {
            FlowRegime::Laminar
        } else if reynolds <= TURBULENT_ONSET {
            FlowRegime::Transitional
        } else {
            FlowRegime::Turbulent
        }
    }
}

impl fmt::Display for FlowRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlowRegime::Laminar => write!(f, "Laminar"),
            FlowRegime::Transitional => write!(f, "Transitional"),
            FlowRegime::Turbulent => write!(f, "Turbulent"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReynoldsResult {
    pub reynolds: f64,
    pub density: f64,           // kg/m³
    pub dynamic_viscosity: f64, // Pa·s
    pub regime: FlowRegime,
}

/// Dynamic viscosity of air from Sutherland's law.
pub fn dynamic_viscosity(temperature: f64) -> Result<f64, PhysicsErrors> {
    let t = PhysicsErrors::require_positive("temperature", temperature)?;
    Ok(SUTHERLAND_MU_REF * (t / SUTHERLAND_T_REF).powf(1.5) * (SUTHERLAND_T_REF + SUTHERLAND_S)
        / (t + SUTHERLAND_S))
}

pub fn reynolds_number(
    density: f64,
    speed: f64,
    length: f64,
    viscosity: f64,
) -> Result<f64, PhysicsErrors> {
    let density = PhysicsErrors::require_positive("density", density)?;
    let speed = PhysicsErrors::require_non_negative("speed", speed)?;
    let length = PhysicsErrors::require_positive("characteristic length", length)?;
    let viscosity = PhysicsErrors::require_positive("dynamic viscosity", viscosity)?;
    Ok(density * speed * length / viscosity)
}

/// Reynolds number with density and viscosity taken from the standard atmosphere.
pub fn reynolds_at_altitude(
    speed: f64,
    length: f64,
    altitude: f64,
) -> Result<ReynoldsResult, PhysicsErrors> {
    let state = AtmosphereModel::from_altitude(altitude)?;
    let mu = dynamic_viscosity(state.temperature)?;
    let reynolds = reynolds_number(state.density, speed, length, mu)?;

    Ok(ReynoldsResult {
        reynolds,
        density: state.density,
        dynamic_viscosity: mu,
        regime: FlowRegime::from_reynolds(reynolds),
    })
}

/// Reynolds number of a vehicle, using its reference length.
pub fn vehicle_reynolds_at_altitude<V: VehicleProperties>(
    vehicle: &V,
    speed: f64,
    altitude: f64,
) -> Result<ReynoldsResult, PhysicsErrors> {
    reynolds_at_altitude(speed, vehicle.reference_length(), altitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::vehicle::SoundingRocket;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    #[test_case(288.15, 1.7894e-5; "sea level")]
    #[test_case(216.65, 1.4216e-5; "tropopause")]
    fn sutherland_viscosity(temperature: f64, expected: f64) {
        assert_relative_eq!(dynamic_viscosity(temperature).unwrap(), expected, max_relative = 1e-3);
    }

    #[test_case(1.0e3 => FlowRegime::Laminar)]
    #[test_case(5.0e5 => FlowRegime::Transitional)]
    #[test_case(3.0e6 => FlowRegime::Transitional)]
    #[test_case(1.0e7 => FlowRegime::Turbulent)]
    fn regime_boundaries(reynolds: f64) -> FlowRegime {
        FlowRegime::from_reynolds(reynolds)
    }

    #[test]
    fn wing_chord_at_sea_level() {
        let result = reynolds_at_altitude(50.0, 1.5, 0.0).unwrap();
        assert_relative_eq!(result.reynolds, 5.1336e6, max_relative = 1e-3);
        assert_eq!(result.regime, FlowRegime::Turbulent);
    }

    #[test]
    fn still_air_has_zero_reynolds_number() {
        let result = reynolds_at_altitude(0.0, 1.0, 1_000.0).unwrap();
        assert_abs_diff_eq!(result.reynolds, 0.0);
        assert_eq!(result.regime, FlowRegime::Laminar);
    }

    #[test]
    fn sounding_rocket_uses_body_length() {
        let vehicle = vehicle_reynolds_at_altitude(&SoundingRocket, 300.0, 5_000.0).unwrap();
        let direct = reynolds_at_altitude(300.0, SoundingRocket::LENGTH, 5_000.0).unwrap();
        assert_eq!(vehicle, direct);
        assert_eq!(vehicle.regime, FlowRegime::Turbulent);
    }

    #[test]
    fn rejects_non_physical_inputs() {
        assert!(reynolds_number(1.2, 10.0, 0.0, 1.8e-5).is_err());
        assert!(reynolds_number(1.2, -10.0, 1.0, 1.8e-5).is_err());
        assert!(reynolds_at_altitude(10.0, 1.0, 90_000.0).is_err());
    }
}
