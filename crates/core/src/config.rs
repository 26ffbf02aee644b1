use uom::si::{
    f64::{Frequency, Length, Velocity},
    frequency::hertz,
    length::meter,
    velocity::meter_per_second,
};

use crate::{
    Error, Parameters, Pluck,
    params::{
        DEFAULT_DAMPING, DEFAULT_LENGTH, DEFAULT_RESOLUTION, DEFAULT_STEPS_PER_FRAME,
        DEFAULT_WAVE_SPEED,
    },
};

/// Startup configuration for a simulation.
///
/// Every field has a default, so a partial document deserializes into a
/// complete configuration. Quantities are expressed in SI base units when
/// serialized: meters, meters per second, and inverse seconds for damping.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Config {
    pub resolution: usize,
    pub length: Length,
    pub wave_speed: Velocity,
    pub damping: Frequency,
    pub steps_per_frame: usize,
    pub pluck: Pluck,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolution: DEFAULT_RESOLUTION,
            length: Length::new::<meter>(DEFAULT_LENGTH),
            wave_speed: Velocity::new::<meter_per_second>(DEFAULT_WAVE_SPEED),
            damping: Frequency::new::<hertz>(DEFAULT_DAMPING),
            steps_per_frame: DEFAULT_STEPS_PER_FRAME,
            pluck: Pluck::default(),
        }
    }
}

impl Config {
    /// Builds the validated parameter set described by this configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if any parameter is out of range.
    pub fn parameters(&self) -> Result<Parameters, Error> {
        Parameters::new(
            self.resolution,
            self.length,
            self.wave_speed,
            self.damping,
            self.steps_per_frame,
        )
    }

    /// Validates the parameters and the pluck against them.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error::InvalidParameter`] encountered.
    pub fn validate(&self) -> Result<(), Error> {
        let params = self.parameters()?;
        self.pluck.validate(&params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Parameter, constraint::ConstraintError};

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.parameters().unwrap(), Parameters::default());
    }

    #[test]
    fn validate_checks_pluck_against_length() {
        let config = Config {
            length: Length::new::<meter>(0.05),
            ..Config::default()
        };

        assert_eq!(
            config.validate(),
            Err(Error::InvalidParameter {
                parameter: Parameter::PluckPosition,
                source: ConstraintError::AboveMaximum,
            })
        );
    }

    #[test]
    fn validate_reports_bad_parameters_first() {
        let config = Config {
            resolution: 0,
            ..Config::default()
        };

        assert!(matches!(
            config.validate(),
            Err(Error::InvalidParameter {
                parameter: Parameter::Resolution,
                ..
            })
        ));
    }
}
