pub mod coordinate_errors;
pub mod geodetic;

pub use coordinate_errors::CoordinateErrors;
pub use geodetic::{ecef_to_geodetic, geodetic_to_ecef, GeodeticPosition};
