use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum CoordinateErrors {
    LatitudeOutOfRange(f64),
    LongitudeOutOfRange(f64),
    NonFiniteComponent(&'static str),
}

impl fmt::Display for CoordinateErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateErrors::LatitudeOutOfRange(lat) => {
                write!(f, "Latitude {}° is outside [-90°, 90°]", lat)
            }
            CoordinateErrors::LongitudeOutOfRange(lon) => {
                write!(f, "Longitude {}° is outside [-180°, 180°]", lon)
            }
            CoordinateErrors::NonFiniteComponent(name) => write!(f, "{} must be finite", name),
        }
    }
}

impl Error for CoordinateErrors {}
