use std::fmt;

use thiserror::Error;

use crate::constraint::ConstraintError;

/// Errors raised by the string model.
///
/// Every fallible operation validates its input before touching any state, so
/// an `Err` always leaves the simulation exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid {parameter}: {source}")]
    InvalidParameter {
        parameter: Parameter,
        #[source]
        source: ConstraintError,
    },

    #[error("index {index} is out of range for a string of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("sequence length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

impl Error {
    pub(crate) fn invalid(parameter: Parameter) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidParameter { parameter, source }
    }
}

/// Identifies which parameter failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Resolution,
    Length,
    WaveSpeed,
    Damping,
    StepsPerFrame,
    PluckPosition,
    PluckAmplitude,
    Smoothing,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Resolution => "resolution",
            Self::Length => "string length",
            Self::WaveSpeed => "wave speed",
            Self::Damping => "damping",
            Self::StepsPerFrame => "steps per frame",
            Self::PluckPosition => "pluck position",
            Self::PluckAmplitude => "pluck amplitude",
            Self::Smoothing => "smoothing width",
        };
        f.write_str(name)
    }
}
