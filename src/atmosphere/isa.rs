use super::atmosphere_errors::AtmosphereError;
use super::layers::{layer_ceiling, layer_for_altitude, AtmosphericLayer, LAYERS};
use crate::constants::{G0, ISA_CEILING, R_AIR, SEA_LEVEL_PRESSURE};
use log::{debug, error, warn};
use serde::Serialize;

/// Slack allowed when bracketing a temperature between a layer's edges.
const TEMPERATURE_TOLERANCE: f64 = 1e-9;

/// Atmospheric state at a single point of the standard atmosphere.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IsaResult {
    pub altitude: f64,    // m
    pub temperature: f64, // K
    pub pressure: f64,    // Pa
    pub density: f64,     // kg/m³
    pub layer: &'static str,
}

impl IsaResult {
    /// Builds a result, deriving density from the ideal gas law.
    fn derive(
        altitude: f64,
        temperature: f64,
        pressure: f64,
        layer: &AtmosphericLayer,
    ) -> Result<Self, AtmosphereError> {
        if !(pressure > 0.0) {
            error!("{} produced pressure {} Pa at {} m", layer.name, pressure, altitude);
            return Err(AtmosphereError::NonPositiveDerivedPressure(pressure));
        }

        let density = pressure / (R_AIR * temperature);
        if !(density > 0.0) || !density.is_finite() {
            error!("{} produced density {} kg/m³ at {} m", layer.name, density, altitude);
            return Err(AtmosphereError::NonPositiveDerivedDensity(density));
        }

        Ok(IsaResult {
            altitude,
            temperature,
            pressure,
            density,
            layer: layer.name,
        })
    }
}

/// International Standard Atmosphere evaluated from any one of altitude,
/// pressure or temperature.
pub struct AtmosphereModel;

impl AtmosphereModel {
    /// Atmospheric state at a geometric altitude in [0, 86000] m.
    pub fn from_altitude(altitude: f64) -> Result<IsaResult, AtmosphereError> {
        ensure_finite(altitude)?;
        if altitude < 0.0 {
            debug!("Rejected negative altitude {} m", altitude);
            return Err(AtmosphereError::NegativeAltitude(altitude));
        }
        if altitude > ISA_CEILING {
            debug!("Rejected altitude {} m above ceiling", altitude);
            return Err(AtmosphereError::AltitudeAboveCeiling(altitude));
        }

        let layer = layer_for_altitude(altitude);
        let temperature = layer.temperature_at(altitude);
        let pressure = layer.pressure_at(altitude, temperature);

        IsaResult::derive(altitude, temperature, pressure, layer)
    }

    /// Atmospheric state at the altitude where the static pressure equals
    /// `pressure` (Pa), for pressures in (0, 101325].
    ///
    /// Pressures below the Mesopause base fall back to Mesosphere II, so the
    /// returned altitude is an extrapolation there and may exceed the ceiling.
    pub fn from_pressure(pressure: f64) -> Result<IsaResult, AtmosphereError> {
        ensure_finite(pressure)?;
        if pressure <= 0.0 {
            debug!("Rejected non-positive pressure {} Pa", pressure);
            return Err(AtmosphereError::NonPositivePressure(pressure));
        }
        if pressure > SEA_LEVEL_PRESSURE {
            debug!("Rejected pressure {} Pa above sea level", pressure);
            return Err(AtmosphereError::PressureAboveSeaLevel(pressure));
        }

        let layer = layer_for_pressure(pressure);

        let (temperature, altitude) = if layer.is_isothermal() {
            let temperature = layer.base_temperature;
            let altitude = layer.base_altitude
                - (R_AIR * temperature / G0) * (pressure / layer.base_pressure).ln();
            (temperature, altitude)
        } else {
            let exponent = R_AIR * layer.lapse_rate / G0;
            let temperature = layer.base_temperature * (pressure / layer.base_pressure).powf(exponent);
            let altitude =
                layer.base_altitude + (layer.base_temperature - temperature) / layer.lapse_rate;
            (temperature, altitude)
        };

        if !(altitude >= 0.0) {
            error!("{} inverted {} Pa to altitude {} m", layer.name, pressure, altitude);
            return Err(AtmosphereError::DerivedAltitudeOutOfRange(altitude));
        }

        IsaResult::derive(altitude, temperature, pressure, layer)
    }

    /// Atmospheric state at the altitude where the standard temperature
    /// equals `temperature` (K).
    ///
    /// Isothermal layers cannot localise an altitude and are skipped. The
    /// temperature profile is not monotonic, so several layers can contain
    /// the same value; the lowest one is used. That choice is a modelling
    /// simplification, not a uniqueness guarantee.
    pub fn from_temperature(temperature: f64) -> Result<IsaResult, AtmosphereError> {
        ensure_finite(temperature)?;
        if temperature <= 0.0 {
            debug!("Rejected non-positive temperature {} K", temperature);
            return Err(AtmosphereError::NonPositiveTemperature(temperature));
        }

        let matches = gradient_layers_containing(temperature);
        let (index, layer) = match matches.first() {
            Some(&(index, layer)) => (index, layer),
            None => {
                debug!("No gradient layer spans {} K", temperature);
                return Err(AtmosphereError::TemperatureOutsideGradientLayers(temperature));
            }
        };
        if matches.len() > 1 {
            warn!(
                "{} K occurs in {} layers, using the lowest ({})",
                temperature,
                matches.len(),
                layer.name
            );
        }

        // Matches accepted through the edge tolerance land just outside the layer
        let altitude = (layer.base_altitude
            + (layer.base_temperature - temperature) / layer.lapse_rate)
            .clamp(layer.base_altitude, layer_ceiling(index, ISA_CEILING));
        if !(0.0..=ISA_CEILING).contains(&altitude) {
            error!("{} mapped {} K to altitude {} m", layer.name, temperature, altitude);
            return Err(AtmosphereError::DerivedAltitudeOutOfRange(altitude));
        }

        let pressure = layer.pressure_at(altitude, temperature);
        IsaResult::derive(altitude, temperature, pressure, layer)
    }
}

fn ensure_finite(value: f64) -> Result<(), AtmosphereError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AtmosphereError::NonFiniteInput(value))
    }
}

/// The last layer whose base pressure is at or above `pressure`.
fn layer_for_pressure(pressure: f64) -> &'static AtmosphericLayer {
    match (1..LAYERS.len()).find(|&i| LAYERS[i].base_pressure < pressure) {
        Some(above) => &LAYERS[above - 1],
        None => {
            let fallback = &LAYERS[LAYERS.len() - 2];
            warn!(
                "{} Pa is below every layer base, extrapolating {}",
                pressure, fallback.name
            );
            fallback
        }
    }
}

/// Non-isothermal layers whose temperature span contains `temperature`,
/// lowest first, with their table index.
fn gradient_layers_containing(temperature: f64) -> Vec<(usize, &'static AtmosphericLayer)> {
    LAYERS
        .iter()
        .enumerate()
        .filter(|(_, layer)| !layer.is_isothermal())
        .filter(|(index, layer)| {
            let top = layer.temperature_at(layer_ceiling(*index, ISA_CEILING));
            let low = layer.base_temperature.min(top) - TEMPERATURE_TOLERANCE;
            let high = layer.base_temperature.max(top) + TEMPERATURE_TOLERANCE;
            (low..=high).contains(&temperature)
        })
        .collect()
}
