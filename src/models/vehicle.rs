pub trait VehicleProperties {
    fn mass(&self) -> f64;
    fn drag_coefficient(&self) -> f64;
    fn reference_area(&self) -> f64;
    fn reference_length(&self) -> f64;
    fn thrust(&self) -> f64;
}
