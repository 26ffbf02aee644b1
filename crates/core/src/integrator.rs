//! Time integration of the damped wave equation.
//!
//! Each step evaluates
//!
//! ```text
//! a = c^2 * y_xx - b * v
//! v' = v + a * dt
//! y' = y + v' * dt
//! ```
//!
//! and then pins the displacement at both ends of the string to zero. The
//! displacement update uses the freshly stepped velocity (semi-implicit Euler).
//!
//! The scheme is only stable when `dt` respects the bound that [`Parameters`]
//! derives. Nothing here checks that; an unstable step size shows up as
//! diverging values, not as an error.

use uom::si::{frequency::hertz, length::meter, time::second, velocity::meter_per_second};

use crate::{Parameters, StepIntegrable, StringState, derivative::second_derivative};

/// Acceleration of every sample, the time derivative of velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct Acceleration(pub Vec<f64>);

impl StepIntegrable<f64> for StringState {
    type Derivative = Acceleration;

    fn step(&self, derivative: Acceleration, dt: f64) -> Self {
        let velocity: Vec<f64> = self
            .velocity()
            .iter()
            .zip(&derivative.0)
            .map(|(v, a)| v + a * dt)
            .collect();
        let displacement = self
            .displacement()
            .iter()
            .zip(&velocity)
            .map(|(y, v)| y + v * dt)
            .collect();

        Self {
            displacement,
            velocity,
        }
    }
}

/// Evaluates the right-hand side of the damped wave equation.
#[must_use]
pub fn acceleration(state: &StringState, params: &Parameters) -> Acceleration {
    let c = params.wave_speed().get::<meter_per_second>();
    let b = params.damping().get::<hertz>();
    let curvature = second_derivative(state.displacement(), params.spatial_step().get::<meter>());

    Acceleration(
        curvature
            .iter()
            .zip(state.velocity())
            .map(|(d2y, v)| c.powi(2) * d2y - b * v)
            .collect(),
    )
}

/// Advances the string by one time step.
#[must_use]
pub fn step(state: &StringState, params: &Parameters) -> StringState {
    let dt = params.time_step().get::<second>();
    let mut next = state.step(acceleration(state, params), dt);
    next.pin_ends();
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::f64::{Frequency, Length, Velocity};

    fn params(resolution: usize, damping: f64) -> Parameters {
        Parameters::new(
            resolution,
            Length::new::<meter>(0.25),
            Velocity::new::<meter_per_second>(200.0),
            Frequency::new::<hertz>(damping),
            1,
        )
        .unwrap()
    }

    fn triangle(n: usize, peak: usize, height: f64) -> StringState {
        let displacement = (0..n)
            .map(|i| {
                if i <= peak {
                    height * i as f64 / peak as f64
                } else {
                    height * (n - 1 - i) as f64 / (n - 1 - peak) as f64
                }
            })
            .collect();
        StringState::from_displacement(displacement)
    }

    #[test]
    fn single_step_matches_update_rule() {
        let params = params(5, 4.0);
        let state =
            StringState::new(vec![0.0, 0.01, 0.02, 0.01, 0.0], vec![0.0, 1.0, -1.0, 0.5, 0.0])
                .unwrap();

        let next = step(&state, &params);

        let dx = params.spatial_step().get::<meter>();
        let dt = params.time_step().get::<second>();
        let y = state.displacement();
        let v = state.velocity();
        for i in 1..4 {
            let d2y = (y[i + 1] - 2.0 * y[i] + y[i - 1]) / dx.powi(2);
            let a = 200.0_f64.powi(2) * d2y - 4.0 * v[i];
            let v_next = v[i] + a * dt;
            assert_relative_eq!(next.velocity()[i], v_next);
            assert_relative_eq!(next.displacement()[i], y[i] + v_next * dt);
        }
    }

    #[test]
    fn ends_are_pinned_but_end_velocity_is_free() {
        let params = params(4, 0.0);
        let state = StringState::new(vec![0.3, 0.0, 0.0, 0.3], vec![0.0; 4]).unwrap();

        let next = step(&state, &params);

        assert_eq!(next.displacement()[0], 0.0);
        assert_eq!(next.displacement()[3], 0.0);
        // The virtual zero neighbor pulls the raised end down.
        assert!(next.velocity()[0] < 0.0);
        assert!(next.velocity()[3] < 0.0);
    }

    #[test]
    fn string_at_rest_stays_at_rest() {
        let params = params(10, 4.0);
        let mut state = StringState::at_rest(10);
        for _ in 0..100 {
            state = step(&state, &params);
        }
        assert_eq!(state, StringState::at_rest(10));
    }

    #[test]
    fn damped_string_loses_energy() {
        let params = params(100, 200.0);
        let mut state = triangle(100, 40, 0.007);

        // A window spans about two fundamental periods.
        let window = 560;
        let mut window_peaks = Vec::new();
        for _ in 0..20 {
            let mut peak: f64 = 0.0;
            for _ in 0..window {
                state = step(&state, &params);
                peak = peak.max(state.kinetic_energy_density());
            }
            window_peaks.push(peak);
        }

        for pair in window_peaks.windows(2) {
            assert!(pair[1] < pair[0], "energy grew: {pair:?}");
        }
        assert!(window_peaks[19] < 1e-6 * window_peaks[0]);
    }

    #[test]
    fn undamped_string_stays_bounded() {
        let params = params(100, 0.0);
        let mut state = triangle(100, 40, 0.007);

        for _ in 0..5_000 {
            state = step(&state, &params);
        }

        let (_, peak) = state.peak().unwrap();
        assert!(peak.abs() < 0.02, "diverged to {peak}");
    }

    #[test]
    fn exceeding_the_stability_bound_diverges_without_error() {
        let params = params(50, 0.0);
        let dt = 3.0 * params.time_step().get::<second>();
        let mut state = triangle(50, 20, 0.007);

        for _ in 0..500 {
            let mut next = state.step(acceleration(&state, &params), dt);
            next.pin_ends();
            state = next;
        }

        assert!(
            state
                .displacement()
                .iter()
                .any(|y| !y.is_finite() || y.abs() > 1.0)
        );
    }
}
