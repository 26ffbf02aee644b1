/// A state that can be advanced by one explicit time step.
///
/// `Delta` is the step size, usually seconds as a bare `f64`. The implementor
/// owns the update order, so a state holding both position and velocity can
/// use the freshly updated velocity for its position (semi-implicit Euler)
/// rather than the old one.
pub trait StepIntegrable<Delta> {
    /// What the step is driven by, such as an acceleration per sample.
    type Derivative;

    /// Returns the state one step of size `delta` later.
    #[must_use]
    fn step(&self, derivative: Self::Derivative, delta: Delta) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// A single mass on a spring, stepped velocity first.
    #[derive(Debug, Clone, Copy)]
    struct Mass {
        position: f64,
        velocity: f64,
    }

    impl StepIntegrable<f64> for Mass {
        type Derivative = f64;

        fn step(&self, acceleration: f64, dt: f64) -> Self {
            let velocity = self.velocity + acceleration * dt;
            Mass {
                position: self.position + velocity * dt,
                velocity,
            }
        }
    }

    #[test]
    fn position_uses_the_updated_velocity() {
        let mass = Mass {
            position: 1.0,
            velocity: 0.0,
        };

        let next = mass.step(-mass.position, 0.1);

        assert_relative_eq!(next.velocity, -0.1);
        assert_relative_eq!(next.position, 0.99);
    }

    #[test]
    fn semi_implicit_oscillation_stays_bounded() {
        let mut mass = Mass {
            position: 1.0,
            velocity: 0.0,
        };

        for _ in 0..10_000 {
            mass = mass.step(-mass.position, 0.1);
        }

        assert!(mass.position.abs() <= 1.1);
    }
}
