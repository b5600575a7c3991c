//! Error types for noise identification.
//!
//! Every failure here is local and deterministic: the caller decides whether
//! to skip the sweep point, widen the averaging factor, or abort. Nothing is
//! retried and nothing is turned into NaN behind the caller's back.

use thiserror::Error;

/// Failures of the analytic tables and the ratio statistics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NoiseIdError {
    /// Sequence or derived block count too short for the request.
    #[error("insufficient samples: need at least {needed}, got {got}")]
    InsufficientSamples { needed: usize, got: usize },

    /// Exponent outside the domain of the mapping or table.
    #[error("unsupported noise type: {exponent} = {value}")]
    UnsupportedNoiseType { exponent: &'static str, value: i32 },

    /// Non-positive averaging factor or sample rate.
    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A denominator evaluated to zero, or a mean is undefined over the reals.
    #[error("undefined ratio: {what}")]
    UndefinedRatio { what: String },
}

/// Failures of [`NoiseClassifier`](crate::NoiseClassifier) operations.
///
/// Estimator faults pass through untouched so callers keep the estimator's
/// own error taxonomy.
#[derive(Error, Debug)]
pub enum ClassifyError<E>
where
    E: std::error::Error + 'static,
{
    #[error(transparent)]
    Core(#[from] NoiseIdError),

    #[error(transparent)]
    Estimator(E),
}

impl<E> ClassifyError<E>
where
    E: std::error::Error + 'static,
{
    /// The core error, if this is not an estimator fault.
    pub fn as_core(&self) -> Option<&NoiseIdError> {
        match self {
            Self::Core(e) => Some(e),
            Self::Estimator(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, NoiseIdError>;
