//! Conversions between the units people type into a calculator and the SI
//! units the models work in.

const METERS_PER_FOOT: f64 = 0.3048;
const PASCALS_PER_HECTOPASCAL: f64 = 100.0;
const PASCALS_PER_INCH_OF_MERCURY: f64 = 3386.389;
const CELSIUS_OFFSET: f64 = 273.15;
const METERS_PER_SECOND_PER_KNOT: f64 = 1852.0 / 3600.0;
const METERS_PER_SECOND_PER_KMH: f64 = 1000.0 / 3600.0;

pub fn feet_to_meters(feet: f64) -> f64 {
    feet * METERS_PER_FOOT
}

pub fn meters_to_feet(meters: f64) -> f64 {
    meters / METERS_PER_FOOT
}

pub fn hectopascals_to_pascals(hpa: f64) -> f64 {
    hpa * PASCALS_PER_HECTOPASCAL
}

pub fn pascals_to_hectopascals(pa: f64) -> f64 {
    pa / PASCALS_PER_HECTOPASCAL
}

pub fn inches_of_mercury_to_pascals(inhg: f64) -> f64 {
    inhg * PASCALS_PER_INCH_OF_MERCURY
}

pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + CELSIUS_OFFSET
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_OFFSET
}

pub fn fahrenheit_to_kelvin(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0 + CELSIUS_OFFSET
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    (kelvin - CELSIUS_OFFSET) * 9.0 / 5.0 + 32.0
}

pub fn knots_to_meters_per_second(knots: f64) -> f64 {
    knots * METERS_PER_SECOND_PER_KNOT
}

pub fn meters_per_second_to_knots(mps: f64) -> f64 {
    mps / METERS_PER_SECOND_PER_KNOT
}

pub fn kmh_to_meters_per_second(kmh: f64) -> f64 {
    kmh * METERS_PER_SECOND_PER_KMH
}

pub fn meters_per_second_to_kmh(mps: f64) -> f64 {
    mps / METERS_PER_SECOND_PER_KMH
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(36_089.24, 11_000.0; "tropopause")]
    #[test_case(0.0, 0.0; "sea level")]
    fn feet_and_meters(feet: f64, meters: f64) {
        assert_abs_diff_eq!(feet_to_meters(feet), meters, epsilon = 1e-2);
        assert_abs_diff_eq!(meters_to_feet(meters), feet, epsilon = 1e-2);
    }

    #[test]
    fn standard_pressure_in_other_units() {
        assert_abs_diff_eq!(hectopascals_to_pascals(1013.25), 101_325.0, epsilon = 1e-9);
        assert_abs_diff_eq!(pascals_to_hectopascals(101_325.0), 1013.25, epsilon = 1e-9);
        assert_abs_diff_eq!(inches_of_mercury_to_pascals(29.92), 101_320.76, epsilon = 1e-2);
    }

    #[test_case(15.0, 288.15, 59.0; "standard day")]
    #[test_case(-56.5, 216.65, -69.7; "tropopause")]
    #[test_case(-40.0, 233.15, -40.0; "scales cross")]
    fn temperatures(celsius: f64, kelvin: f64, fahrenheit: f64) {
        assert_abs_diff_eq!(celsius_to_kelvin(celsius), kelvin, epsilon = 1e-9);
        assert_abs_diff_eq!(kelvin_to_celsius(kelvin), celsius, epsilon = 1e-9);
        assert_abs_diff_eq!(kelvin_to_fahrenheit(kelvin), fahrenheit, epsilon = 1e-9);
        assert_abs_diff_eq!(fahrenheit_to_kelvin(fahrenheit), kelvin, epsilon = 1e-9);
    }

    #[test]
    fn speeds() {
        assert_abs_diff_eq!(knots_to_meters_per_second(100.0), 51.4444, epsilon = 1e-4);
        assert_abs_diff_eq!(meters_per_second_to_knots(51.4444), 100.0, epsilon = 1e-3);
        assert_abs_diff_eq!(kmh_to_meters_per_second(36.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(meters_per_second_to_kmh(10.0), 36.0, epsilon = 1e-12);
    }
}
