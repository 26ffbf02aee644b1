use uom::si::f64::Time;

/// Indicates how a run terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Completed all requested steps.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a [`run`](fn@crate::run).
///
/// The final state lives in the engine that was run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// How the run terminated.
    pub status: Status,

    /// Number of integration steps completed.
    pub steps: usize,

    /// Engine time at the end of the run.
    pub elapsed: Time,
}
