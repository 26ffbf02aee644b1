//! Driving a [`twang_core::SimulationEngine`] from an interactive front end.
//!
//! - [`Driver`] advances the engine once per display frame and calls a
//!   [`Render`] hook, paused or not.
//! - [`Command`] and [`apply`] turn slider, button, and pointer input into
//!   validated engine changes, returning a [`Notification`] when the UI has
//!   something new to show.
//! - [`run`] steps an engine a fixed number of times under an observer, the
//!   way a batch solver would.

mod command;
mod driver;
mod error;
mod run;

pub use command::{Command, Notification, apply};
pub use driver::{Driver, Frame, Render};
pub use error::Error;
pub use run::{Action, Event, Solution, Status, run};
