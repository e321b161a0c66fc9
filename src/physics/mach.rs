use super::physics_errors::PhysicsErrors;
use crate::atmosphere::AtmosphereModel;
use crate::constants::{GAMMA_AIR, R_AIR};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlightRegime {
    Subsonic,
    Transonic,
    Supersonic,
    Hypersonic,
}

impl FlightRegime {
    pub fn from_mach(mach: f64) -> Self {
        match mach {
            m if m < 0.8 => FlightRegime::Subsonic,
            m if m < 1.2 => FlightRegime::Transonic,
            m if m < 5.0 => FlightRegime::Supersonic,
            _ => FlightRegime::Hypersonic,
        }
    }
}

impl fmt::Display for FlightRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightRegime::Subsonic => write!(f, "Subsonic"),
            FlightRegime::Transonic => write!(f, "Transonic"),
            FlightRegime::Supersonic => write!(f, "Supersonic"),
            FlightRegime::Hypersonic => write!(f, "Hypersonic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MachResult {
    pub mach: f64,
    pub speed_of_sound: f64, // m/s
    pub temperature: f64,    // K
    pub regime: FlightRegime,
}

/// Speed of sound in dry air at `temperature` (K).
pub fn speed_of_sound(temperature: f64) -> Result<f64, PhysicsErrors> {
    let temperature = PhysicsErrors::require_positive("temperature", temperature)?;
    Ok((GAMMA_AIR * R_AIR * temperature).sqrt())
}

/// Mach number of `speed` (m/s) at a standard-atmosphere altitude.
pub fn mach_at_altitude(speed: f64, altitude: f64) -> Result<MachResult, PhysicsErrors> {
    let speed = PhysicsErrors::require_non_negative("speed", speed)?;
    let temperature = AtmosphereModel::from_altitude(altitude)?.temperature;
    let a = speed_of_sound(temperature)?;
    let mach = speed / a;

    Ok(MachResult {
        mach,
        speed_of_sound: a,
        temperature,
        regime: FlightRegime::from_mach(mach),
    })
}

/// True airspeed (m/s) for a Mach number at a standard-atmosphere altitude.
pub fn speed_from_mach(mach: f64, altitude: f64) -> Result<f64, PhysicsErrors> {
    let mach = PhysicsErrors::require_non_negative("Mach number", mach)?;
    let temperature = AtmosphereModel::from_altitude(altitude)?.temperature;
    Ok(mach * speed_of_sound(temperature)?)
}
