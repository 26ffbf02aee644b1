//! Plucked initial conditions.

use uom::si::{f64::Length, length::meter};

use crate::{
    Error, Parameter, Parameters, StringState,
    constraint::{Constraint, ConstraintError, Finite, StrictlyPositive},
};

/// Default pluck position in meters from the first end.
pub const DEFAULT_POSITION: f64 = 0.1;

/// Default peak displacement in meters.
pub const DEFAULT_AMPLITUDE: f64 = 0.007;

/// A string held at one point and released from rest.
///
/// The profile is two straight ramps: up from the first end to `amplitude`
/// at the pluck position, then back down to the far end. An optional Gaussian
/// `smoothing` width, measured in samples, rounds off the corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Pluck {
    pub position: Length,
    pub amplitude: Length,
    pub smoothing: Option<f64>,
}

impl Default for Pluck {
    fn default() -> Self {
        Self::new(
            Length::new::<meter>(DEFAULT_POSITION),
            Length::new::<meter>(DEFAULT_AMPLITUDE),
        )
    }
}

impl Pluck {
    #[must_use]
    pub fn new(position: Length, amplitude: Length) -> Self {
        Self {
            position,
            amplitude,
            smoothing: None,
        }
    }

    /// Returns this pluck with Gaussian smoothing of width `sigma` samples.
    #[must_use]
    pub fn smoothed(self, sigma: f64) -> Self {
        Self {
            smoothing: Some(sigma),
            ..self
        }
    }

    /// Checks the pluck against the string it will be applied to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the position is not strictly
    /// inside the string, the amplitude is not finite, or the smoothing width
    /// is not strictly positive and finite.
    pub fn validate(&self, params: &Parameters) -> Result<(), Error> {
        StrictlyPositive::check(&self.position).map_err(Error::invalid(Parameter::PluckPosition))?;
        if self.position >= params.length() {
            return Err(Error::InvalidParameter {
                parameter: Parameter::PluckPosition,
                source: ConstraintError::AboveMaximum,
            });
        }
        Finite::check(&self.amplitude.value).map_err(Error::invalid(Parameter::PluckAmplitude))?;
        if let Some(sigma) = self.smoothing {
            StrictlyPositive::check(&sigma)
                .and_then(|()| Finite::check(&sigma))
                .map_err(Error::invalid(Parameter::Smoothing))?;
        }
        Ok(())
    }

    /// Index of the displaced sample, `n * position / length` truncated.
    ///
    /// A result of 0 or `n` collapses one ramp to nothing. That is accepted
    /// boundary behavior, not an error.
    #[must_use]
    pub fn displaced_index(&self, params: &Parameters) -> usize {
        let fraction = self.position.get::<meter>() / params.length().get::<meter>();
        (params.resolution() as f64 * fraction) as usize
    }

    /// Builds the plucked state for the given parameters.
    ///
    /// Velocity starts at zero everywhere and both end samples are zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the pluck fails [`validate`](Self::validate).
    pub fn profile(&self, params: &Parameters) -> Result<StringState, Error> {
        self.validate(params)?;

        let n = params.resolution();
        let peak = self.displaced_index(params);
        let amplitude = self.amplitude.get::<meter>();

        let rise = |i: usize| {
            if peak == 0 {
                0.0
            } else {
                i as f64 / peak as f64
            }
        };
        let fall = |i: usize| (n - 1 - i) as f64 / (n - 1 - peak) as f64;

        let mut displacement: Vec<f64> = (0..n)
            .map(|i| amplitude * if i <= peak { rise(i) } else { fall(i) })
            .collect();

        if let Some(sigma) = self.smoothing {
            displacement = gaussian_smooth(&displacement, sigma);
        }

        let mut state = StringState::from_displacement(displacement);
        state.pin_ends();
        Ok(state)
    }
}

/// Convolves `values` with a normalized Gaussian of width `sigma` samples.
///
/// The kernel extends three widths each side, but never further than the
/// length of `values`, and reads zeros past either end, so the result has the
/// same length as the input.
#[must_use]
pub fn gaussian_smooth(values: &[f64], sigma: f64) -> Vec<f64> {
    let radius = (3.0 * sigma).ceil().clamp(0.0, values.len() as f64) as isize;
    let kernel: Vec<f64> = (-radius..=radius)
        .map(|k| (-(k * k) as f64 / (2.0 * sigma * sigma)).exp())
        .collect();
    let total: f64 = kernel.iter().sum();

    (0..values.len() as isize)
        .map(|i| {
            kernel
                .iter()
                .zip(-radius..=radius)
                .filter_map(|(w, k)| {
                    usize::try_from(i + k)
                        .ok()
                        .and_then(|j| values.get(j))
                        .map(|y| w * y)
                })
                .sum::<f64>()
                / total
        })
        .collect()
}
