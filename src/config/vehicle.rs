use crate::models::vehicle::VehicleProperties;

/// Small single-stage sounding rocket used as the reference vehicle.
pub struct SoundingRocket;

impl SoundingRocket {
    pub const MASS: f64 = 250.0; // kg, fully fuelled
    pub const C_D: f64 = 0.45;
    pub const DIAMETER: f64 = 0.3; // meters
    pub const LENGTH: f64 = 5.0; // meters
    pub const THRUST: f64 = 9_000.0; // N, sea level
}

impl VehicleProperties for SoundingRocket {
    fn mass(&self) -> f64 {
        Self::MASS
    }

    fn drag_coefficient(&self) -> f64 {
        Self::C_D
    }

    fn reference_area(&self) -> f64 {
        std::f64::consts::PI * (Self::DIAMETER / 2.0).powi(2)
    }

    fn reference_length(&self) -> f64 {
        Self::LENGTH
    }

    fn thrust(&self) -> f64 {
        Self::THRUST
    }
}
