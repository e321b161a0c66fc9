pub mod vehicle;

pub use vehicle::VehicleProperties;
