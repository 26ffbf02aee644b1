//! Batch stepping of an engine with an observer.
//!
//! Where [`Driver`](crate::Driver) paces the simulation one frame at a time,
//! [`run`] advances a fixed number of steps as fast as possible. It is the
//! loop behind offline recording and tests.

mod action;
mod event;
mod solution;

pub use action::Action;
pub use event::Event;
pub use solution::{Solution, Status};

use twang_core::{Observer, SimulationEngine};

/// Advances `engine` by up to `steps` integration steps.
///
/// The observer receives an [`Event`] before the first step (step 0) and after
/// every step. Returning [`Action::StopEarly`] ends the run immediately with
/// the engine left at the observed state.
///
/// The engine's pause flag is ignored; a run always steps.
pub fn run<Obs>(engine: &mut SimulationEngine, steps: usize, mut observer: Obs) -> Solution
where
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    tracing::debug!(steps, "run started");

    let event = Event {
        step: 0,
        elapsed: engine.elapsed(),
        state: engine.state(),
        parameters: engine.parameters(),
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return finish(engine, Status::StoppedByObserver, 0);
    }

    for step in 1..=steps {
        engine.step();

        let event = Event {
            step,
            elapsed: engine.elapsed(),
            state: engine.state(),
            parameters: engine.parameters(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return finish(engine, Status::StoppedByObserver, step);
        }
    }

    finish(engine, Status::Complete, steps)
}

fn finish(engine: &SimulationEngine, status: Status, steps: usize) -> Solution {
    tracing::debug!(?status, steps, "run finished");
    Solution {
        status,
        steps,
        elapsed: engine.elapsed(),
    }
}
