//! Capability traits shared by batch runs and driven frames.
//!
//! Observers written against these traits work with both
//! [`twang_drive::run`] events and [`twang_drive::Driver`] frames.
//!
//! # Event traits
//!
//! - [`HasDisplacement`]: events that expose the string's displacement
//! - [`HasSteps`]: events that report how many integration steps led to them
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use twang_core::Observer;
//! use twang_observers::traits::{CanStopEarly, HasDisplacement};
//!
//! struct TooLoud {
//!     limit: f64,
//! }
//!
//! impl<E: HasDisplacement, A: CanStopEarly> Observer<E, A> for TooLoud {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         let loudest = event.displacement().iter().fold(0.0_f64, |m, y| m.max(y.abs()));
//!         (loudest > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use twang_drive::{Action, Event, Frame};

/// An event that carries the string's displacement.
pub trait HasDisplacement {
    fn displacement(&self) -> &[f64];
}

/// An event that reports how many integration steps preceded it.
pub trait HasSteps {
    /// Returns zero for events that did not advance the simulation, such as
    /// the initial event of a run or a paused frame.
    fn steps_taken(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

impl HasDisplacement for Event<'_> {
    fn displacement(&self) -> &[f64] {
        self.state.displacement()
    }
}

impl HasDisplacement for Frame<'_> {
    fn displacement(&self) -> &[f64] {
        self.displacement
    }
}

impl HasSteps for Event<'_> {
    fn steps_taken(&self) -> usize {
        usize::from(self.step > 0)
    }
}

impl HasSteps for Frame<'_> {
    fn steps_taken(&self) -> usize {
        self.steps
    }
}

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
