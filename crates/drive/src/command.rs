//! Translation of UI input into typed engine calls.
//!
//! Sliders, buttons, and pointer drags produce raw numbers. A [`Command`]
//! carries those numbers in SI units and [`apply`] converts them into the
//! engine's typed setters, so the engine never depends on a UI toolkit.

use twang_core::{Pluck, SimulationEngine};
use uom::si::{
    f64::{Frequency, Length, Velocity},
    frequency::hertz,
    length::meter,
    velocity::meter_per_second,
};

use crate::Error;

/// A user action to apply to a running simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Change the number of samples; the wave shape is resampled.
    SetResolution(usize),
    /// Change the wave speed, in meters per second.
    SetWaveSpeed(f64),
    /// Change the damping coefficient, in inverse seconds.
    SetDamping(f64),
    /// Change how many integration steps run per frame.
    SetStepsPerFrame(usize),
    Pause,
    Resume,
    TogglePause,
    /// Overwrite the displacement (meters) of one sample.
    Draw { index: usize, value: f64 },
    /// Restart from a pluck at `position` meters with peak `amplitude` meters.
    Pluck { position: f64, amplitude: f64 },
}

impl Command {
    /// Builds a [`Command::Draw`] from a pointer position along the string.
    ///
    /// `fraction` runs from 0 at the first end to 1 at the far end and is
    /// clamped to that range before picking the nearest sample.
    #[must_use]
    pub fn draw_at(fraction: f64, value: f64, resolution: usize) -> Self {
        let last = resolution.saturating_sub(1);
        let index = (fraction.clamp(0.0, 1.0) * last as f64).round() as usize;
        Self::Draw {
            index: index.min(last),
            value,
        }
    }
}

/// Something the UI should display in response to a command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Notification {
    /// The integrator's sample frequency changed.
    SampleFrequency(Frequency),
    /// The pause flag changed to the contained value.
    Paused(bool),
}

/// Applies a command to the engine.
///
/// Returns a [`Notification`] when the change is something the UI displays:
/// a new sample frequency after a resolution or wave speed change, or a new
/// pause state.
///
/// # Errors
///
/// Returns an error if a value is non-finite or the engine rejects it. The
/// engine is unchanged in that case.
pub fn apply(
    engine: &mut SimulationEngine,
    command: Command,
) -> Result<Option<Notification>, Error> {
    let frequency_before = engine.parameters().sample_frequency();
    let paused_before = engine.is_paused();

    match command {
        Command::SetResolution(resolution) => engine.set_resolution(resolution)?,
        Command::SetWaveSpeed(speed) => {
            let speed = Error::check_finite("wave speed", speed)?;
            engine.set_wave_speed(Velocity::new::<meter_per_second>(speed))?;
        }
        Command::SetDamping(damping) => {
            let damping = Error::check_finite("damping", damping)?;
            engine.set_damping(Frequency::new::<hertz>(damping))?;
        }
        Command::SetStepsPerFrame(steps) => engine.set_steps_per_frame(steps)?,
        Command::Pause => engine.pause(),
        Command::Resume => engine.resume(),
        Command::TogglePause => {
            engine.toggle_pause();
        }
        Command::Draw { index, value } => engine.set_displacement_at(index, value)?,
        Command::Pluck {
            position,
            amplitude,
        } => {
            let position = Error::check_finite("pluck position", position)?;
            let amplitude = Error::check_finite("pluck amplitude", amplitude)?;
            engine.pluck(&Pluck::new(
                Length::new::<meter>(position),
                Length::new::<meter>(amplitude),
            ))?;
        }
    }

    let frequency = engine.parameters().sample_frequency();
    if frequency != frequency_before {
        return Ok(Some(Notification::SampleFrequency(frequency)));
    }
    if engine.is_paused() != paused_before {
        return Ok(Some(Notification::Paused(engine.is_paused())));
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use twang_core::Parameter;

    #[test]
    fn resolution_change_notifies_new_sample_frequency() {
        let mut engine = SimulationEngine::default();

        let note = apply(&mut engine, Command::SetResolution(200)).unwrap();

        let Some(Notification::SampleFrequency(frequency)) = note else {
            panic!("expected a sample frequency notification, got {note:?}");
        };
        assert_eq!(engine.displacement().len(), 200);
        assert_relative_eq!(
            frequency.get::<hertz>(),
            engine.parameters().sample_frequency().get::<hertz>()
        );
    }

    #[test]
    fn unchanged_resolution_is_silent() {
        let mut engine = SimulationEngine::default();
        assert_eq!(apply(&mut engine, Command::SetResolution(100)), Ok(None));
    }

    #[test]
    fn wave_speed_change_notifies() {
        let mut engine = SimulationEngine::default();
        let note = apply(&mut engine, Command::SetWaveSpeed(150.0)).unwrap();
        assert!(matches!(note, Some(Notification::SampleFrequency(_))));
    }

    #[test]
    fn damping_and_steps_are_silent() {
        let mut engine = SimulationEngine::default();

        assert_eq!(apply(&mut engine, Command::SetDamping(0.5)), Ok(None));
        assert_eq!(apply(&mut engine, Command::SetStepsPerFrame(8)), Ok(None));
        assert_eq!(engine.parameters().steps_per_frame(), 8);
        assert_relative_eq!(engine.parameters().damping().get::<hertz>(), 0.5);
    }

    #[test]
    fn pause_commands_report_the_new_state() {
        let mut engine = SimulationEngine::default();

        assert_eq!(
            apply(&mut engine, Command::TogglePause),
            Ok(Some(Notification::Paused(true)))
        );
        assert_eq!(apply(&mut engine, Command::Pause), Ok(None));
        assert_eq!(
            apply(&mut engine, Command::Resume),
            Ok(Some(Notification::Paused(false)))
        );
    }

    #[test]
    fn invalid_values_are_rejected_without_changes() {
        let mut engine = SimulationEngine::default();
        let before = engine.clone();

        assert_eq!(
            apply(&mut engine, Command::SetWaveSpeed(f64::INFINITY)),
            Err(Error::NonFinite {
                name: "wave speed",
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            apply(&mut engine, Command::SetWaveSpeed(-1.0)),
            Err(Error::Engine(twang_core::Error::InvalidParameter {
                parameter: Parameter::WaveSpeed,
                ..
            }))
        ));
        assert!(apply(&mut engine, Command::SetResolution(1)).is_err());
        assert!(apply(&mut engine, Command::SetStepsPerFrame(0)).is_err());
        assert!(apply(&mut engine, Command::SetDamping(f64::NAN)).is_err());
        assert!(
            apply(
                &mut engine,
                Command::Draw {
                    index: 100,
                    value: 0.0
                }
            )
            .is_err()
        );

        assert_eq!(engine, before);
    }

    #[test]
    fn draw_at_maps_fraction_to_nearest_sample() {
        assert_eq!(
            Command::draw_at(0.5, 0.01, 101),
            Command::Draw {
                index: 50,
                value: 0.01
            }
        );
        assert_eq!(
            Command::draw_at(1.7, 0.0, 10),
            Command::Draw {
                index: 9,
                value: 0.0
            }
        );
        assert_eq!(
            Command::draw_at(-0.2, 0.0, 10),
            Command::Draw {
                index: 0,
                value: 0.0
            }
        );
    }

    #[test]
    fn draw_and_pluck_edit_the_string() {
        let mut engine = SimulationEngine::default();

        apply(&mut engine, Command::draw_at(0.25, 0.004, 100)).unwrap();
        assert_eq!(engine.displacement()[25], 0.004);

        apply(
            &mut engine,
            Command::Pluck {
                position: 0.2,
                amplitude: 0.003,
            },
        )
        .unwrap();
        assert_relative_eq!(engine.displacement()[80], 0.003);
    }
}
