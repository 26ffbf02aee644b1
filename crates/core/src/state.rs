use crate::{Error, resample::resample};

/// The discretized string: displacement and velocity at each sample.
///
/// Both sequences always have the same length. Values are in SI units
/// (meters and meters per second). Direct writes through
/// [`displacement_mut`](Self::displacement_mut) or
/// [`set_displacement_at`](Self::set_displacement_at) are not range checked
/// beyond the index, so drawing input may place any value on the string.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StringState {
    pub(crate) displacement: Vec<f64>,
    pub(crate) velocity: Vec<f64>,
}

impl StringState {
    /// Creates a state from displacement and velocity sequences.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the sequences differ in length.
    pub fn new(displacement: Vec<f64>, velocity: Vec<f64>) -> Result<Self, Error> {
        if displacement.len() != velocity.len() {
            return Err(Error::LengthMismatch {
                expected: displacement.len(),
                found: velocity.len(),
            });
        }
        Ok(Self {
            displacement,
            velocity,
        })
    }

    /// Creates a flat string with `len` samples, all at rest.
    #[must_use]
    pub fn at_rest(len: usize) -> Self {
        Self {
            displacement: vec![0.0; len],
            velocity: vec![0.0; len],
        }
    }

    /// Creates a state with the given displacement and zero velocity.
    #[must_use]
    pub fn from_displacement(displacement: Vec<f64>) -> Self {
        let velocity = vec![0.0; displacement.len()];
        Self {
            displacement,
            velocity,
        }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.displacement.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.displacement.is_empty()
    }

    #[must_use]
    pub fn displacement(&self) -> &[f64] {
        &self.displacement
    }

    #[must_use]
    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    /// Mutable access to the displacement samples for drawing input.
    ///
    /// The slice cannot change length, so the state invariant is preserved.
    pub fn displacement_mut(&mut self) -> &mut [f64] {
        &mut self.displacement
    }

    /// Overwrites a single displacement sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn set_displacement_at(&mut self, index: usize, value: f64) -> Result<(), Error> {
        let len = self.len();
        let sample = self
            .displacement
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })?;
        *sample = value;
        Ok(())
    }

    /// Forces the displacement at both ends of the string to zero.
    ///
    /// Velocity is left untouched.
    pub fn pin_ends(&mut self) {
        if let Some(first) = self.displacement.first_mut() {
            *first = 0.0;
        }
        if let Some(last) = self.displacement.last_mut() {
            *last = 0.0;
        }
    }

    /// Returns this state linearly resampled to `len` samples.
    ///
    /// Displacement and velocity are resampled independently with the same
    /// mapping, preserving the shape of the wave.
    #[must_use]
    pub fn resampled(&self, len: usize) -> Self {
        Self {
            displacement: resample(&self.displacement, len),
            velocity: resample(&self.velocity, len),
        }
    }

    /// Sum of squared velocities, proportional to the kinetic energy.
    #[must_use]
    pub fn kinetic_energy_density(&self) -> f64 {
        self.velocity.iter().map(|v| v * v).sum()
    }

    /// Index and value of the sample with the largest absolute displacement.
    ///
    /// Returns `None` for an empty state. Ties resolve to the lowest index.
    #[must_use]
    pub fn peak(&self) -> Option<(usize, f64)> {
        self.displacement
            .iter()
            .copied()
            .enumerate()
            .fold(None, |best, (i, y)| match best {
                Some((_, b)) if f64::abs(b) >= y.abs() => best,
                _ => Some((i, y)),
            })
    }
}
