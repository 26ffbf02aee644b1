use twang_core::Observer;

use crate::traits::{CanStopEarly, HasDisplacement};

/// Stops a run once the string has come to rest.
///
/// The string counts as at rest when no sample's displacement exceeds
/// `threshold` in magnitude. Events before `min_events` are never stopped on,
/// so a string that starts flat can still be driven.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    threshold: f64,
    min_events: usize,
    seen: usize,
}

impl Settle {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.abs(),
            min_events: 0,
            seen: 0,
        }
    }

    /// Ignores the first `min_events` events.
    #[must_use]
    pub fn after(self, min_events: usize) -> Self {
        Self { min_events, ..self }
    }
}

impl<E, A> Observer<E, A> for Settle
where
    E: HasDisplacement,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self.seen += 1;
        if self.seen <= self.min_events {
            return None;
        }
        let settled = event
            .displacement()
            .iter()
            .all(|y| y.abs() <= self.threshold);
        if settled {
            tracing::debug!(events = self.seen, "string settled");
        }
        settled.then(A::stop_early)
    }
}
