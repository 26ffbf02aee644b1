//! Shared fixtures for the cross-crate tests.

pub mod session {
    use serde::{Deserialize, Serialize};
    use twang_core::{Config, SimulationEngine};
    use twang_observers::Pickup;
    use uom::si::{f64::Time, time::second};

    /// A simulation plus a recording to take from it, as read from a file.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Session {
        pub simulation: Config,
        pub recording: Recording,
    }

    /// Where to listen and for how long.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    pub struct Recording {
        /// Pickup position as a fraction of the string length.
        pub pickup: f64,
        pub duration: Time,
    }

    impl Default for Recording {
        fn default() -> Self {
            Self {
                pickup: 0.1,
                duration: Time::new::<second>(0.01),
            }
        }
    }

    impl Session {
        /// Builds the engine and records the requested signal.
        ///
        /// # Errors
        ///
        /// Returns an error if the simulation settings are invalid.
        pub fn record(&self) -> Result<(SimulationEngine, Vec<f64>), twang_core::Error> {
            let mut engine = SimulationEngine::from_config(&self.simulation)?;
            let mut pickup = Pickup::new(self.recording.pickup);
            pickup.record(&mut engine, self.recording.duration);
            Ok((engine, pickup.into_signal()))
        }
    }
}
