//! Simulation parameters and the constants derived from them.
//!
//! The spatial step follows from the string length and resolution, and the
//! time step is pinned to the stability bound of the explicit scheme:
//!
//! ```text
//! dx = length / (n - 1)
//! dt = dx / (c * sqrt(2))
//! fs = 1 / dt
//! ```

use std::f64::consts::SQRT_2;

use uom::si::{
    f64::{Frequency, Length, Time, Velocity},
    frequency::hertz,
    length::meter,
    time::second,
    velocity::meter_per_second,
};

use crate::{
    Error, Parameter,
    constraint::{AtLeast, Constraint, Finite, NonNegative, StrictlyPositive},
};

/// Default number of samples along the string.
pub const DEFAULT_RESOLUTION: usize = 100;

/// Default string length in meters.
pub const DEFAULT_LENGTH: f64 = 0.25;

/// Default wave speed in meters per second.
pub const DEFAULT_WAVE_SPEED: f64 = 200.0;

/// Default damping coefficient in inverse seconds.
pub const DEFAULT_DAMPING: f64 = 4.0;

/// Default number of integration steps per rendered frame.
pub const DEFAULT_STEPS_PER_FRAME: usize = 1;

/// Validated simulation parameters.
///
/// The string length is fixed at construction. Resolution, wave speed,
/// damping, and steps per frame can be replaced through the `with_*` methods,
/// each of which validates first and returns a new value, so a rejected
/// change never leaves a half-updated parameter set behind.
///
/// Damping is the coefficient `b` in `y_tt = c^2 y_xx - b y_t` and carries
/// units of inverse seconds, which `uom` represents as a [`Frequency`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    resolution: usize,
    length: Length,
    wave_speed: Velocity,
    damping: Frequency,
    steps_per_frame: usize,
    spatial_step: Length,
    time_step: Time,
}

impl Default for Parameters {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(
            DEFAULT_RESOLUTION,
            Length::new::<meter>(DEFAULT_LENGTH),
            Velocity::new::<meter_per_second>(DEFAULT_WAVE_SPEED),
            Frequency::new::<hertz>(DEFAULT_DAMPING),
            DEFAULT_STEPS_PER_FRAME,
        )
        .unwrap()
    }
}

impl Parameters {
    /// Creates a validated parameter set and computes its derived constants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the resolution is below 2, the
    /// length or wave speed is not strictly positive and finite, the damping
    /// is negative or infinite, or the steps per frame is zero.
    pub fn new(
        resolution: usize,
        length: Length,
        wave_speed: Velocity,
        damping: Frequency,
        steps_per_frame: usize,
    ) -> Result<Self, Error> {
        check_resolution(resolution)?;
        check_length(length)?;
        check_wave_speed(wave_speed)?;
        check_damping(damping)?;
        check_steps_per_frame(steps_per_frame)?;

        let mut params = Self {
            resolution,
            length,
            wave_speed,
            damping,
            steps_per_frame,
            spatial_step: Length::new::<meter>(0.0),
            time_step: Time::new::<second>(0.0),
        };
        params.derive();
        Ok(params)
    }

    /// Returns a copy with a new resolution and recomputed derived constants.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `resolution < 2`.
    pub fn with_resolution(self, resolution: usize) -> Result<Self, Error> {
        check_resolution(resolution)?;
        let mut params = Self { resolution, ..self };
        params.derive();
        Ok(params)
    }

    /// Returns a copy with a new wave speed and a recomputed time step.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the speed is not strictly
    /// positive and finite.
    pub fn with_wave_speed(self, wave_speed: Velocity) -> Result<Self, Error> {
        check_wave_speed(wave_speed)?;
        let mut params = Self { wave_speed, ..self };
        params.derive();
        Ok(params)
    }

    /// Returns a copy with a new damping coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the damping is negative,
    /// infinite, or NaN.
    pub fn with_damping(self, damping: Frequency) -> Result<Self, Error> {
        check_damping(damping)?;
        Ok(Self { damping, ..self })
    }

    /// Returns a copy with a new step multiplier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `steps_per_frame` is zero.
    pub fn with_steps_per_frame(self, steps_per_frame: usize) -> Result<Self, Error> {
        check_steps_per_frame(steps_per_frame)?;
        Ok(Self {
            steps_per_frame,
            ..self
        })
    }

    /// Number of samples along the string.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    #[must_use]
    pub fn length(&self) -> Length {
        self.length
    }

    #[must_use]
    pub fn wave_speed(&self) -> Velocity {
        self.wave_speed
    }

    #[must_use]
    pub fn damping(&self) -> Frequency {
        self.damping
    }

    #[must_use]
    pub fn steps_per_frame(&self) -> usize {
        self.steps_per_frame
    }

    /// Distance between adjacent samples.
    #[must_use]
    pub fn spatial_step(&self) -> Length {
        self.spatial_step
    }

    /// Integration time step at the stability bound.
    #[must_use]
    pub fn time_step(&self) -> Time {
        self.time_step
    }

    /// Rate at which the integrator samples time, the inverse of the time step.
    #[must_use]
    pub fn sample_frequency(&self) -> Frequency {
        Frequency::new::<hertz>(1.0 / self.time_step.get::<second>())
    }

    /// Position along the string of the sample at `index`.
    #[must_use]
    pub fn position_of(&self, index: usize) -> Length {
        self.spatial_step * index as f64
    }

    // The spatial step must be current before the time step is derived from it.
    fn derive(&mut self) {
        let dx = self.length.get::<meter>() / (self.resolution - 1) as f64;
        let c = self.wave_speed.get::<meter_per_second>();
        self.spatial_step = Length::new::<meter>(dx);
        self.time_step = Time::new::<second>(dx / (c * SQRT_2));
    }
}

fn check_resolution(resolution: usize) -> Result<(), Error> {
    AtLeast::<2>::check(&resolution).map_err(Error::invalid(Parameter::Resolution))
}

fn check_length(length: Length) -> Result<(), Error> {
    StrictlyPositive::check(&length)
        .and_then(|()| Finite::check(&length.value))
        .map_err(Error::invalid(Parameter::Length))
}

fn check_wave_speed(wave_speed: Velocity) -> Result<(), Error> {
    StrictlyPositive::check(&wave_speed)
        .and_then(|()| Finite::check(&wave_speed.value))
        .map_err(Error::invalid(Parameter::WaveSpeed))
}

fn check_damping(damping: Frequency) -> Result<(), Error> {
    NonNegative::check(&damping)
        .and_then(|()| Finite::check(&damping.value))
        .map_err(Error::invalid(Parameter::Damping))
}

fn check_steps_per_frame(steps_per_frame: usize) -> Result<(), Error> {
    AtLeast::<1>::check(&steps_per_frame).map_err(Error::invalid(Parameter::StepsPerFrame))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::constraint::ConstraintError;

    #[test]
    fn defaults_match_startup_values() {
        let params = Parameters::default();

        assert_eq!(params.resolution(), 100);
        assert_eq!(params.steps_per_frame(), 1);
        assert_relative_eq!(params.length().get::<meter>(), 0.25);
        assert_relative_eq!(params.wave_speed().get::<meter_per_second>(), 200.0);
        assert_relative_eq!(params.damping().get::<hertz>(), 4.0);
    }

    #[test]
    fn derived_constants_follow_stability_bound() {
        let params = Parameters::default();

        let dx = 0.25 / 99.0;
        let dt = dx / (200.0 * 2.0_f64.sqrt());

        assert_relative_eq!(params.spatial_step().get::<meter>(), dx);
        assert_relative_eq!(params.time_step().get::<second>(), dt);
        assert_relative_eq!(params.sample_frequency().get::<hertz>(), 1.0 / dt);
    }

    #[test]
    fn resolution_change_recomputes_spatial_step_before_time_step() {
        let params = Parameters::default().with_resolution(51).unwrap();

        let dx = 0.25 / 50.0;
        assert_relative_eq!(params.spatial_step().get::<meter>(), dx);
        assert_relative_eq!(
            params.time_step().get::<second>(),
            dx / (200.0 * 2.0_f64.sqrt())
        );
    }

    #[test]
    fn wave_speed_change_keeps_spatial_step() {
        let before = Parameters::default();
        let after = before
            .with_wave_speed(Velocity::new::<meter_per_second>(100.0))
            .unwrap();

        assert_eq!(after.spatial_step(), before.spatial_step());
        assert_relative_eq!(
            after.time_step().get::<second>(),
            2.0 * before.time_step().get::<second>()
        );
    }

    #[test]
    fn damping_change_leaves_derived_constants_alone() {
        let before = Parameters::default();
        let after = before.with_damping(Frequency::new::<hertz>(0.0)).unwrap();

        assert_eq!(after.time_step(), before.time_step());
        assert_eq!(after.spatial_step(), before.spatial_step());
        assert_relative_eq!(after.damping().get::<hertz>(), 0.0);
    }

    #[test]
    fn rejects_invalid_values() {
        let params = Parameters::default();

        assert_eq!(
            params.with_resolution(1),
            Err(Error::InvalidParameter {
                parameter: Parameter::Resolution,
                source: ConstraintError::BelowMinimum,
            })
        );
        assert_eq!(
            params.with_wave_speed(Velocity::new::<meter_per_second>(0.0)),
            Err(Error::InvalidParameter {
                parameter: Parameter::WaveSpeed,
                source: ConstraintError::Zero,
            })
        );
        assert_eq!(
            params.with_wave_speed(Velocity::new::<meter_per_second>(-5.0)),
            Err(Error::InvalidParameter {
                parameter: Parameter::WaveSpeed,
                source: ConstraintError::Negative,
            })
        );
        assert_eq!(
            params.with_damping(Frequency::new::<hertz>(f64::NAN)),
            Err(Error::InvalidParameter {
                parameter: Parameter::Damping,
                source: ConstraintError::NotANumber,
            })
        );
        assert_eq!(
            params.with_wave_speed(Velocity::new::<meter_per_second>(f64::INFINITY)),
            Err(Error::InvalidParameter {
                parameter: Parameter::WaveSpeed,
                source: ConstraintError::Infinite,
            })
        );
        assert_eq!(
            params.with_damping(Frequency::new::<hertz>(f64::INFINITY)),
            Err(Error::InvalidParameter {
                parameter: Parameter::Damping,
                source: ConstraintError::Infinite,
            })
        );
        assert_eq!(
            params.with_steps_per_frame(0),
            Err(Error::InvalidParameter {
                parameter: Parameter::StepsPerFrame,
                source: ConstraintError::BelowMinimum,
            })
        );
    }

    #[test]
    fn rejects_non_positive_length() {
        let result = Parameters::new(
            10,
            Length::new::<meter>(0.0),
            Velocity::new::<meter_per_second>(1.0),
            Frequency::new::<hertz>(0.0),
            1,
        );
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                parameter: Parameter::Length,
                ..
            })
        ));
    }

    #[test]
    fn rejects_infinite_length() {
        let result = Parameters::new(
            10,
            Length::new::<meter>(f64::INFINITY),
            Velocity::new::<meter_per_second>(1.0),
            Frequency::new::<hertz>(0.0),
            1,
        );
        assert_eq!(
            result,
            Err(Error::InvalidParameter {
                parameter: Parameter::Length,
                source: ConstraintError::Infinite,
            })
        );
    }

    #[test]
    fn positions_span_the_string() {
        let params = Parameters::default();

        assert_relative_eq!(params.position_of(0).get::<meter>(), 0.0);
        assert_relative_eq!(params.position_of(99).get::<meter>(), 0.25);
    }
}
