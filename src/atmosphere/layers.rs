use crate::constants::{G0, R_AIR, SEA_LEVEL_PRESSURE, SEA_LEVEL_TEMPERATURE};
use lazy_static::lazy_static;

/// Lapse rates smaller than this are treated as isothermal.
pub const ISOTHERMAL_EPSILON: f64 = 1e-10;

// (name, base altitude [m], lapse rate [K/m], positive = cooling with height)
const LAYER_DEFINITIONS: [(&str, f64, f64); 8] = [
    ("Troposphere", 0.0, 0.0065),
    ("Tropopause", 11_000.0, 0.0),
    ("Stratosphere I", 20_000.0, -0.001),
    ("Stratosphere II", 32_000.0, -0.0028),
    ("Stratopause", 47_000.0, 0.0),
    ("Mesosphere I", 51_000.0, 0.0028),
    ("Mesosphere II", 71_000.0, 0.002),
    ("Mesopause", 84_852.0, 0.0),
];

lazy_static! {
    /// The ISA layer table, ordered by ascending base altitude.
    ///
    /// Only the sea-level state is given; every other base value is carried
    /// up from the layer below so the profile is continuous by construction.
    pub static ref LAYERS: [AtmosphericLayer; 8] = build_layers();
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphericLayer {
    pub name: &'static str,
    pub base_altitude: f64,    // m
    pub lapse_rate: f64,       // K/m
    pub base_temperature: f64, // K
    pub base_pressure: f64,    // Pa
    pub base_density: f64,     // kg/m³
}

impl AtmosphericLayer {
    pub fn is_isothermal(&self) -> bool {
        self.lapse_rate.abs() < ISOTHERMAL_EPSILON
    }

    pub fn temperature_at(&self, altitude: f64) -> f64 {
        self.base_temperature - self.lapse_rate * (altitude - self.base_altitude)
    }

    /// Barometric pressure at `altitude`, given the temperature there.
    pub fn pressure_at(&self, altitude: f64, temperature: f64) -> f64 {
        if self.is_isothermal() {
            let dh = altitude - self.base_altitude;
            self.base_pressure * (-G0 * dh / (R_AIR * self.base_temperature)).exp()
        } else {
            self.base_pressure
                * (temperature / self.base_temperature).powf(G0 / (R_AIR * self.lapse_rate))
        }
    }
}

fn build_layers() -> [AtmosphericLayer; 8] {
    let mut temperature = SEA_LEVEL_TEMPERATURE;
    let mut pressure = SEA_LEVEL_PRESSURE;
    let mut previous: Option<AtmosphericLayer> = None;

    LAYER_DEFINITIONS.map(|(name, base_altitude, lapse_rate)| {
        if let Some(below) = &previous {
            temperature = below.temperature_at(base_altitude);
            pressure = below.pressure_at(base_altitude, temperature);
        }
        let layer = AtmosphericLayer {
            name,
            base_altitude,
            lapse_rate,
            base_temperature: temperature,
            base_pressure: pressure,
            base_density: pressure / (R_AIR * temperature),
        };
        previous = Some(layer.clone());
        layer
    })
}

/// The layer containing `altitude`: the highest one whose base is at or below it.
/// Altitudes below zero resolve to the lowest layer.
pub fn layer_for_altitude(altitude: f64) -> &'static AtmosphericLayer {
    LAYERS
        .iter()
        .rev()
        .find(|layer| layer.base_altitude <= altitude)
        .unwrap_or(&LAYERS[0])
}

/// Altitude where `LAYERS[index]` ends, or `ceiling` for the topmost layer.
pub fn layer_ceiling(index: usize, ceiling: f64) -> f64 {
    LAYERS
        .get(index + 1)
        .map(|next| next.base_altitude)
        .unwrap_or(ceiling)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use test_case::test_case;

    #[test]
    fn table_is_ordered_by_base_altitude() {
        assert_eq!(LAYERS.len(), 8);
        assert_eq!(LAYERS[0].base_altitude, 0.0);
        for pair in LAYERS.windows(2) {
            assert!(pair[0].base_altitude < pair[1].base_altitude);
            assert!(pair[0].base_pressure > pair[1].base_pressure);
        }
    }

    #[test_case(0, 288.15, 101325.0, 1.225; "troposphere")]
    #[test_case(1, 216.65, 22632.1, 0.36392; "tropopause")]
    #[test_case(2, 216.65, 5474.89, 0.08803; "stratosphere one")]
    #[test_case(3, 228.65, 868.02, 0.01322; "stratosphere two")]
    #[test_case(4, 270.65, 110.906, 0.0014275; "stratopause")]
    #[test_case(5, 270.65, 66.9389, 0.0008616; "mesosphere one")]
    #[test_case(6, 214.65, 3.95642, 0.0000642; "mesosphere two")]
    #[test_case(7, 186.946, 0.37338, 0.00000696; "mesopause")]
    fn base_values_match_published_isa(index: usize, temperature: f64, pressure: f64, density: f64) {
        let layer = &LAYERS[index];
        assert_abs_diff_eq!(layer.base_temperature, temperature, epsilon = 1e-6);
        assert_relative_eq!(layer.base_pressure, pressure, max_relative = 2e-4);
        assert_relative_eq!(layer.base_density, density, max_relative = 2e-3);
    }

    #[test]
    fn base_values_are_continuous_with_layer_below() {
        for pair in LAYERS.windows(2) {
            let (below, above) = (&pair[0], &pair[1]);
            let t = below.temperature_at(above.base_altitude);
            assert_abs_diff_eq!(t, above.base_temperature, epsilon = 1e-9);
            assert_relative_eq!(
                below.pressure_at(above.base_altitude, t),
                above.base_pressure,
                max_relative = 1e-12
            );
        }
    }

    #[test_case(0.0, "Troposphere")]
    #[test_case(10_999.9, "Troposphere")]
    #[test_case(11_000.0, "Tropopause")]
    #[test_case(47_000.0, "Stratopause")]
    #[test_case(84_852.0, "Mesopause")]
    #[test_case(86_000.0, "Mesopause")]
    #[test_case(-10.0, "Troposphere"; "below sea level falls back to lowest layer")]
    fn finds_layer_by_altitude(altitude: f64, expected: &str) {
        assert_eq!(layer_for_altitude(altitude).name, expected);
    }

    #[test]
    fn isothermal_layers() {
        let names: Vec<_> = LAYERS
            .iter()
            .filter(|l| l.is_isothermal())
            .map(|l| l.name)
            .collect();
        assert_eq!(names, vec!["Tropopause", "Stratopause", "Mesopause"]);
    }

    #[test]
    fn ceiling_of_top_layer_is_supplied_value() {
        assert_eq!(layer_ceiling(0, 86_000.0), 11_000.0);
        assert_eq!(layer_ceiling(7, 86_000.0), 86_000.0);
    }
}
