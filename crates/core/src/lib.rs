//! Finite-difference model of a damped, tensioned vibrating string.
//!
//! The string is sampled at `n` evenly spaced points and advanced with an
//! explicit, fixed-step integration of
//!
//! ```text
//! y_tt = c^2 y_xx - b y_t
//! ```
//!
//! with both ends pinned at zero. The crate provides:
//!
//! - [`StringState`]: displacement and velocity at each sample
//! - [`Parameters`]: resolution, wave speed, damping, and stepping rate, plus
//!   the spatial step, time step, and sample frequency derived from them
//! - [`Pluck`]: a triangular initial condition
//! - [`derivative::second_derivative`], [`integrator::step`], and
//!   [`resample::resample`]: the numerical kernels
//! - [`SimulationEngine`]: owns state and parameters and applies validated
//!   changes to them without restarting the simulation
//! - [`Config`]: startup defaults, deserializable with the `serde` feature
//! - [`Observer`] and [`StepIntegrable`]: the seams drivers and observers build on

pub mod constraint;
pub mod derivative;
pub mod integrator;
pub mod resample;

mod config;
mod engine;
mod error;
mod observer;
mod params;
mod pluck;
mod state;
mod step;

pub use config::Config;
pub use engine::SimulationEngine;
pub use error::{Error, Parameter};
pub use observer::Observer;
pub use params::Parameters;
pub use pluck::{Pluck, gaussian_smooth};
pub use state::StringState;
pub use step::StepIntegrable;
