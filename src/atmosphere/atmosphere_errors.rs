use std::{error::Error, fmt};

/// Reasons an atmosphere evaluation is rejected.
///
/// Validation variants describe out-of-domain input. The remaining variants
/// are consistency faults: a derived value broke its postcondition, which
/// only happens on a modelling bug or a boundary value slipping past
/// validation.
#[derive(Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    NonFiniteInput(f64),
    NegativeAltitude(f64),
    AltitudeAboveCeiling(f64),
    NonPositivePressure(f64),
    PressureAboveSeaLevel(f64),
    NonPositiveTemperature(f64),
    TemperatureOutsideGradientLayers(f64),
    InvalidProfile(&'static str),
    NonPositiveDerivedPressure(f64),
    NonPositiveDerivedDensity(f64),
    DerivedAltitudeOutOfRange(f64),
}

impl AtmosphereError {
    pub fn is_validation(&self) -> bool {
        !self.is_consistency_fault()
    }

    pub fn is_consistency_fault(&self) -> bool {
        matches!(
            self,
            AtmosphereError::NonPositiveDerivedPressure(_)
                | AtmosphereError::NonPositiveDerivedDensity(_)
                | AtmosphereError::DerivedAltitudeOutOfRange(_)
        )
    }
}

impl fmt::Display for AtmosphereError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AtmosphereError::NonFiniteInput(v) => write!(f, "Input must be a finite number, got {}", v),
            AtmosphereError::NegativeAltitude(h) => write!(f, "Negative altitude: {} m", h),
            AtmosphereError::AltitudeAboveCeiling(h) => {
                write!(f, "Altitude {} m exceeds 86,000 m ceiling", h)
            }
            AtmosphereError::NonPositivePressure(p) => {
                write!(f, "Pressure must be positive, got {} Pa", p)
            }
            AtmosphereError::PressureAboveSeaLevel(p) => {
                write!(f, "Pressure {} Pa exceeds sea-level pressure of 101325 Pa", p)
            }
            AtmosphereError::NonPositiveTemperature(t) => {
                write!(f, "Temperature must be positive, got {} K", t)
            }
            AtmosphereError::TemperatureOutsideGradientLayers(t) => write!(
                f,
                "Temperature {} K is not in a variable-lapse-rate layer",
                t
            ),
            AtmosphereError::InvalidProfile(reason) => write!(f, "Invalid profile: {}", reason),
            AtmosphereError::NonPositiveDerivedPressure(p) => {
                write!(f, "Computed pressure is not positive: {} Pa", p)
            }
            AtmosphereError::NonPositiveDerivedDensity(rho) => {
                write!(f, "Computed density is not positive: {} kg/m³", rho)
            }
            AtmosphereError::DerivedAltitudeOutOfRange(h) => {
                write!(f, "Computed altitude is out of range: {} m", h)
            }
        }
    }
}

impl Error for AtmosphereError {}
