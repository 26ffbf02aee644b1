//! Reusable observers for twang simulations.
//!
//! This crate provides [`Observer`] and [`Render`] implementations that work
//! with both batch runs ([`twang_drive::run`]) and frame-driven display
//! ([`twang_drive::Driver`]).
//!
//! # Modules
//!
//! - [`traits`]: Capability traits shared by run events and driven frames
//!   ([`HasDisplacement`], [`HasSteps`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Pickup`]: records the displacement at one point, like a microphone,
//!   with [`normalize`] to scale the result for audio
//! - [`Settle`]: stops a run once the string has come to rest
//! - [`FrameRate`]: smoothed FPS readout for a display loop
//!
//! # Features
//!
//! - `plot`: Enables [`LiveView`], an interactive egui window that animates
//!   the string. This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`Observer`]: twang_core::Observer
//! [`Render`]: twang_drive::Render
//! [`HasDisplacement`]: traits::HasDisplacement
//! [`HasSteps`]: traits::HasSteps
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod fps;
mod pickup;
mod settle;

#[cfg(feature = "plot")]
mod plot;

pub use fps::FrameRate;
pub use pickup::{Pickup, normalize};
pub use settle::Settle;

#[cfg(feature = "plot")]
pub use plot::LiveView;
