use thiserror::Error;

/// Errors raised while applying a [`Command`](crate::Command).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Engine(#[from] twang_core::Error),

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },
}

impl Error {
    pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NonFinite { name, value })
        }
    }
}
