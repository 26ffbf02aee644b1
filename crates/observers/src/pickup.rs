//! A virtual microphone on the string.

use twang_core::{Observer, SimulationEngine};
use twang_drive::{Frame, Render, run};
use uom::si::{f64::Time, ratio::ratio};

use crate::traits::{HasDisplacement, HasSteps};

/// Default pickup position as a fraction of the string length.
pub const DEFAULT_POSITION: f64 = 0.1;

/// Records the displacement at one point on the string after every step.
///
/// The position is a fraction of the string length and is mapped to the
/// nearest sample, `round(position * (n - 1))`, each time a displacement is
/// seen, so recording survives resolution changes. Events that took no steps
/// (the initial event of a run, paused frames) are skipped. A driven frame
/// that took several steps contributes a single sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Pickup {
    position: f64,
    signal: Vec<f64>,
}

impl Default for Pickup {
    fn default() -> Self {
        Self::new(DEFAULT_POSITION)
    }
}

impl Pickup {
    /// Creates a pickup at `position`, clamped to `[0, 1]`.
    #[must_use]
    pub fn new(position: f64) -> Self {
        Self {
            position: position.clamp(0.0, 1.0),
            signal: Vec::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Sample index the pickup reads on a string of `len` samples.
    #[must_use]
    pub fn index(&self, len: usize) -> usize {
        let last = len.saturating_sub(1);
        ((self.position * last as f64).round() as usize).min(last)
    }

    /// The recorded signal, one value per step.
    #[must_use]
    pub fn signal(&self) -> &[f64] {
        &self.signal
    }

    #[must_use]
    pub fn into_signal(self) -> Vec<f64> {
        self.signal
    }

    /// Appends the value under the pickup.
    pub fn listen(&mut self, displacement: &[f64]) {
        if let Some(&y) = displacement.get(self.index(displacement.len())) {
            self.signal.push(y);
        }
    }

    /// Steps `engine` for `duration` of simulated time and records each step.
    ///
    /// Takes `floor(duration / time_step)` steps, so the signal is sampled at
    /// the engine's sample frequency. A duration that is not finite records
    /// nothing.
    pub fn record(&mut self, engine: &mut SimulationEngine, duration: Time) -> &[f64] {
        let steps = (duration / engine.parameters().time_step()).get::<ratio>();
        if !steps.is_finite() {
            tracing::warn!(seconds = duration.value, "duration is not finite, nothing recorded");
            return &self.signal;
        }
        let steps = steps.floor() as usize;
        tracing::debug!(steps, position = self.position, "recording");

        run(engine, steps, &mut *self);
        &self.signal
    }
}

impl<E, A> Observer<E, A> for Pickup
where
    E: HasDisplacement + HasSteps,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.steps_taken() > 0 {
            self.listen(event.displacement());
        }
        None
    }
}

/// Allows `&mut Pickup` to be passed to runs that take an observer by value,
/// so the signal can be read afterwards.
impl<E, A> Observer<E, A> for &mut Pickup
where
    E: HasDisplacement + HasSteps,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

impl Render for Pickup {
    fn render(&mut self, frame: &Frame<'_>) {
        let _: Option<()> = self.observe(frame);
    }
}

/// Maps a signal onto `[-1, 1]`.
///
/// The minimum maps to -1 and the maximum to 1. A constant signal has no
/// range to scale and maps to all zeros.
#[must_use]
pub fn normalize(signal: &[f64]) -> Vec<f64> {
    let min = signal.iter().copied().fold(f64::INFINITY, f64::min);
    let max = signal.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if range > 0.0 && range.is_finite() {
        signal.iter().map(|y| 2.0 * (y - min) / range - 1.0).collect()
    } else {
        vec![0.0; signal.len()]
    }
}
