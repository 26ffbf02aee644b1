//! Frame pacing for interactive display.
//!
//! A UI calls [`Driver::tick`] once per rendered frame. Each tick advances the
//! engine by its configured steps-per-frame (or not at all while paused) and
//! then hands a [`Frame`] to the render hook. Rendering happens on every tick
//! so a paused string, or one the user is drawing on, stays visible.

use twang_core::{Parameters, SimulationEngine};
use uom::si::f64::Time;

/// A snapshot of the simulation handed to the render hook.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Number of ticks before this one.
    pub tick: u64,

    /// Integration steps taken this tick; zero while paused.
    pub steps: usize,

    pub paused: bool,
    pub displacement: &'a [f64],
    pub parameters: Parameters,
    pub elapsed: Time,
}

/// Receives each frame after the engine has been advanced.
///
/// Implemented for `()` (draw nothing) and for any `FnMut(&Frame<'_>)`.
pub trait Render {
    fn render(&mut self, frame: &Frame<'_>);
}

impl Render for () {
    fn render(&mut self, _frame: &Frame<'_>) {}
}

impl<F> Render for F
where
    F: FnMut(&Frame<'_>),
{
    fn render(&mut self, frame: &Frame<'_>) {
        self(frame);
    }
}

/// Drives an engine one display frame at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Driver {
    ticks: u64,
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ticks completed.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Advances the engine by one frame and renders it.
    ///
    /// Returns the number of integration steps taken.
    pub fn tick(&mut self, engine: &mut SimulationEngine, renderer: &mut impl Render) -> usize {
        let steps = engine.advance_frame();
        tracing::trace!(tick = self.ticks, steps, paused = engine.is_paused(), "frame");

        renderer.render(&Frame {
            tick: self.ticks,
            steps,
            paused: engine.is_paused(),
            displacement: engine.displacement(),
            parameters: engine.parameters(),
            elapsed: engine.elapsed(),
        });

        self.ticks += 1;
        steps
    }
}
