//! The simulation engine: string state, parameters, and the controls over them.

use uom::si::{
    f64::{Frequency, Time, Velocity},
    frequency::hertz,
    time::second,
    velocity::meter_per_second,
};

use crate::{Config, Error, Parameters, Pluck, StringState, integrator};

/// A vibrating string simulation.
///
/// Owns the [`StringState`] and the [`Parameters`] that govern it and keeps
/// the two consistent: the state always has exactly
/// [`resolution`](Parameters::resolution) samples. Every setter validates its
/// argument before changing anything, so a rejected call leaves the engine
/// untouched.
///
/// Changing the resolution resamples the current displacement and velocity
/// onto the new grid instead of restarting from the initial condition.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationEngine {
    params: Parameters,
    state: StringState,
    paused: bool,
    elapsed: Time,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::from_config(&Config::default()).unwrap()
    }
}

impl SimulationEngine {
    /// Creates an engine from parameters and a matching initial state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the state does not have exactly
    /// `params.resolution()` samples.
    pub fn new(params: Parameters, state: StringState) -> Result<Self, Error> {
        if state.len() != params.resolution() {
            return Err(Error::LengthMismatch {
                expected: params.resolution(),
                found: state.len(),
            });
        }
        Ok(Self {
            params,
            state,
            paused: false,
            elapsed: Time::new::<second>(0.0),
        })
    }

    /// Creates an engine from a configuration, starting from its pluck.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the configuration is invalid.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let params = config.parameters()?;
        let state = config.pluck.profile(&params)?;
        tracing::debug!(
            resolution = params.resolution(),
            sample_frequency_hz = params.sample_frequency().get::<hertz>(),
            "engine created"
        );
        Self::new(params, state)
    }

    #[must_use]
    pub fn displacement(&self) -> &[f64] {
        self.state.displacement()
    }

    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        self.state.velocity()
    }

    #[must_use]
    pub fn state(&self) -> &StringState {
        &self.state
    }

    /// Returns a snapshot of the current parameters.
    #[must_use]
    pub fn parameters(&self) -> Parameters {
        self.params
    }

    /// Simulated time accumulated over all steps taken.
    #[must_use]
    pub fn elapsed(&self) -> Time {
        self.elapsed
    }

    /// Advances the simulation by one integration step.
    ///
    /// Steps are taken even while paused; pausing only affects
    /// [`advance_frame`](Self::advance_frame).
    pub fn step(&mut self) {
        self.state = integrator::step(&self.state, &self.params);
        self.elapsed += self.params.time_step();
    }

    /// Advances by `steps_per_frame` steps unless paused.
    ///
    /// Returns the number of steps taken.
    pub fn advance_frame(&mut self) -> usize {
        if self.paused {
            return 0;
        }
        let steps = self.params.steps_per_frame();
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
        tracing::debug!("paused");
    }

    pub fn resume(&mut self) {
        self.paused = false;
        tracing::debug!("resumed");
    }

    /// Flips the pause flag and returns the new value.
    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    /// Changes the wave speed and the time step derived from it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the speed is not strictly
    /// positive and finite.
    pub fn set_wave_speed(&mut self, wave_speed: Velocity) -> Result<(), Error> {
        self.params = self.params.with_wave_speed(wave_speed)?;
        tracing::info!(
            wave_speed_m_per_s = wave_speed.get::<meter_per_second>(),
            sample_frequency_hz = self.params.sample_frequency().get::<hertz>(),
            "wave speed changed"
        );
        Ok(())
    }

    /// Changes the damping coefficient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the damping is negative,
    /// infinite, or NaN.
    pub fn set_damping(&mut self, damping: Frequency) -> Result<(), Error> {
        self.params = self.params.with_damping(damping)?;
        tracing::debug!(damping_per_s = damping.get::<hertz>(), "damping changed");
        Ok(())
    }

    /// Changes the number of samples along the string.
    ///
    /// The current displacement and velocity are resampled onto the new grid
    /// in the same call, so no step ever sees a state whose length disagrees
    /// with the parameters. Setting the current resolution does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `resolution < 2`.
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), Error> {
        let params = self.params.with_resolution(resolution)?;
        if resolution == self.params.resolution() {
            return Ok(());
        }

        let snapshot = std::mem::take(&mut self.state);
        self.state = snapshot.resampled(resolution);
        self.params = params;

        tracing::info!(
            resolution,
            sample_frequency_hz = self.params.sample_frequency().get::<hertz>(),
            "resolution changed"
        );
        Ok(())
    }

    /// Changes how many integration steps each frame performs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `steps_per_frame` is zero.
    pub fn set_steps_per_frame(&mut self, steps_per_frame: usize) -> Result<(), Error> {
        self.params = self.params.with_steps_per_frame(steps_per_frame)?;
        tracing::debug!(steps_per_frame, "steps per frame changed");
        Ok(())
    }

    /// Overwrites one displacement sample, as a drawing tool would.
    ///
    /// The value is not range checked and persists until the next step; only
    /// the end samples are pinned back to zero by the integrator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index` is not below the resolution.
    pub fn set_displacement_at(&mut self, index: usize, value: f64) -> Result<(), Error> {
        self.state.set_displacement_at(index, value)
    }

    /// Mutable access to the displacement samples for bulk drawing edits.
    pub fn displacement_mut(&mut self) -> &mut [f64] {
        self.state.displacement_mut()
    }

    /// Replaces the state with a fresh pluck at the current resolution.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the pluck does not fit the string.
    pub fn pluck(&mut self, pluck: &Pluck) -> Result<(), Error> {
        self.state = pluck.profile(&self.params)?;
        tracing::debug!(index = pluck.displaced_index(&self.params), "plucked");
        Ok(())
    }
}
