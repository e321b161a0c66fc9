use super::atmosphere_errors::AtmosphereError;
use super::isa::{AtmosphereModel, IsaResult};
use crate::config::profile::ProfileConfig;
use crate::constants::ISA_CEILING;
use log::debug;

/// Tabulates the standard atmosphere from `config.start` to `config.end`.
///
/// Samples are spaced `config.step` apart and the end altitude is always the
/// last row, even when the range is not a whole number of steps.
pub fn standard_profile(config: &ProfileConfig) -> Result<Vec<IsaResult>, AtmosphereError> {
    validate(config)?;
    let altitudes = sample_altitudes(config);

    debug!(
        "Tabulating {} altitudes from {} m to {} m",
        altitudes.len(),
        config.start,
        config.end
    );

    altitudes
        .into_iter()
        .map(AtmosphereModel::from_altitude)
        .collect()
}

/// Grid points strictly below `config.end`, followed by `config.end` itself.
/// Accumulated rounding can carry `start + i * step` past the end, so those
/// points are dropped rather than evaluated.
fn sample_altitudes(config: &ProfileConfig) -> Vec<f64> {
    let steps = ((config.end - config.start) / config.step).floor() as usize;
    let mut altitudes: Vec<f64> = (0..=steps)
        .map(|i| config.start + i as f64 * config.step)
        .take_while(|&altitude| altitude < config.end)
        .collect();
    altitudes.push(config.end);
    altitudes
}

fn validate(config: &ProfileConfig) -> Result<(), AtmosphereError> {
    if !(config.step > 0.0) || !config.step.is_finite() {
        return Err(AtmosphereError::InvalidProfile("step must be positive"));
    }
    if !(config.start <= config.end) {
        return Err(AtmosphereError::InvalidProfile("start must not exceed end"));
    }
    if config.start < 0.0 || config.end > ISA_CEILING {
        return Err(AtmosphereError::InvalidProfile(
            "range must lie within 0 to 86,000 m",
        ));
    }
    if (config.end - config.start) / config.step + 2.0 > ProfileConfig::MAX_SAMPLES as f64 {
        return Err(AtmosphereError::InvalidProfile("step yields too many samples"));
    }
    Ok(())
}
