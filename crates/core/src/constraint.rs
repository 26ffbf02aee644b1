//! Numeric constraints checked at construction time.
//!
//! Simulation parameters carry invariants such as "wave speed is strictly
//! positive" or "damping is non-negative". This module expresses those
//! invariants as zero-sized marker types so every parameter is validated the
//! same way before it reaches the integrator.
//!
//! # Provided Constraints
//!
//! - [`NonNegative`]: Zero or greater
//! - [`StrictlyPositive`]: Greater than zero
//! - [`Finite`]: Neither infinite nor NaN
//! - [`AtLeast<MIN>`]: An integer count no smaller than `MIN`
//!
//! Markers are applied through [`Constraint::check`]:
//!
//! ```
//! use twang_core::constraint::{Constraint, ConstraintError, StrictlyPositive};
//!
//! assert!(StrictlyPositive::check(&200.0).is_ok());
//! assert_eq!(StrictlyPositive::check(&0.0), Err(ConstraintError::Zero));
//! ```

use std::cmp::Ordering;

use num_traits::{Float, Zero};
use thiserror::Error;

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    Infinite,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// Marker type enforcing that a value is zero or greater.
///
/// Works with plain floats and with `uom` quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonNegative;

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a value is greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrictlyPositive;

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Marker type enforcing that a float is neither infinite nor NaN.
///
/// For `uom` quantities, check the raw `value` in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finite;

impl<T: Float> Constraint<T> for Finite {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.is_nan() {
            Err(ConstraintError::NotANumber)
        } else if value.is_infinite() {
            Err(ConstraintError::Infinite)
        } else {
            Ok(())
        }
    }
}

/// Marker type enforcing that a count is at least `MIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AtLeast<const MIN: usize>;

impl<const MIN: usize> Constraint<usize> for AtLeast<MIN> {
    fn check(value: &usize) -> Result<(), ConstraintError> {
        if *value >= MIN {
            Ok(())
        } else {
            Err(ConstraintError::BelowMinimum)
        }
    }
}
