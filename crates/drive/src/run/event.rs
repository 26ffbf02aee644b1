use twang_core::{Parameters, StringState};
use uom::si::f64::Time;

/// Event emitted by [`run`](fn@crate::run) for each step.
///
/// Step 0 is the state before any integration.
/// Steps 1..N are emitted after each integration step.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The step number (0 for initial, 1..N for integration steps).
    pub step: usize,

    /// Total simulated time accumulated by the engine.
    pub elapsed: Time,

    /// The string after this step.
    pub state: &'a StringState,

    /// The parameters the step was taken with.
    pub parameters: Parameters,
}
