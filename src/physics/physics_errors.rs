use crate::atmosphere::AtmosphereError;
use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsErrors {
    NonFinite(&'static str),
    NonPositive { quantity: &'static str, value: f64 },
    Negative { quantity: &'static str, value: f64 },
    BelowEarthCenter(f64),
    Atmosphere(AtmosphereError),
}

impl PhysicsErrors {
    /// Rejects non-finite or non-positive values of `quantity`.
    pub fn require_positive(quantity: &'static str, value: f64) -> Result<f64, PhysicsErrors> {
        if !value.is_finite() {
            Err(PhysicsErrors::NonFinite(quantity))
        } else if value <= 0.0 {
            Err(PhysicsErrors::NonPositive { quantity, value })
        } else {
            Ok(value)
        }
    }

    /// Rejects non-finite or negative values of `quantity`.
    pub fn require_non_negative(quantity: &'static str, value: f64) -> Result<f64, PhysicsErrors> {
        if !value.is_finite() {
            Err(PhysicsErrors::NonFinite(quantity))
        } else if value < 0.0 {
            Err(PhysicsErrors::Negative { quantity, value })
        } else {
            Ok(value)
        }
    }
}

impl fmt::Display for PhysicsErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsErrors::NonFinite(quantity) => write!(f, "{} must be finite", quantity),
            PhysicsErrors::NonPositive { quantity, value } => {
                write!(f, "{} must be positive, got {}", quantity, value)
            }
            PhysicsErrors::Negative { quantity, value } => {
                write!(f, "{} must not be negative, got {}", quantity, value)
            }
            PhysicsErrors::BelowEarthCenter(h) => {
                write!(f, "Altitude {} m places the point at or below Earth's center", h)
            }
            PhysicsErrors::Atmosphere(e) => write!(f, "Atmosphere error: {}", e),
        }
    }
}

impl Error for PhysicsErrors {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PhysicsErrors::Atmosphere(e) => Some(e),
            _ => None,
        }
    }
}

// Implement `From<T>` conversions for automatic error mapping
impl From<AtmosphereError> for PhysicsErrors {
    fn from(err: AtmosphereError) -> Self {
        PhysicsErrors::Atmosphere(err)
    }
}
