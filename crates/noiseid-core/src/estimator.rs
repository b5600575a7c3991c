//! Variance estimation seam.
//!
//! The classifier treats deviation estimation as a black box behind
//! [`VarianceEstimator`]. [`OverlappingEstimator`] is the in-tree
//! implementation: fully overlapping Allan deviation and modified Allan
//! deviation over phase (or integrated frequency) data.

use log::trace;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether a series holds phase (time error) or fractional frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataType {
    #[default]
    Phase,
    Frequency,
}

/// Deviation estimator consumed by the classifier.
///
/// Both methods return one deviation per requested tau, in order. Taus are in
/// seconds and `rate` is in samples per second.
pub trait VarianceEstimator {
    type Error: std::error::Error + 'static;

    /// Overlapping Allan deviation.
    fn adev(
        &self,
        data: &[f64],
        taus: &[f64],
        data_type: DataType,
        rate: f64,
    ) -> Result<Vec<f64>, Self::Error>;

    /// Modified Allan deviation.
    fn mdev(
        &self,
        data: &[f64],
        taus: &[f64],
        data_type: DataType,
        rate: f64,
    ) -> Result<Vec<f64>, Self::Error>;
}

impl<T: VarianceEstimator + ?Sized> VarianceEstimator for &T {
    type Error = T::Error;

    fn adev(
        &self,
        data: &[f64],
        taus: &[f64],
        data_type: DataType,
        rate: f64,
    ) -> Result<Vec<f64>, Self::Error> {
        (**self).adev(data, taus, data_type, rate)
    }

    fn mdev(
        &self,
        data: &[f64],
        taus: &[f64],
        data_type: DataType,
        rate: f64,
    ) -> Result<Vec<f64>, Self::Error> {
        (**self).mdev(data, taus, data_type, rate)
    }
}

/// Failures of [`OverlappingEstimator`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidRate(f64),

    #[error("tau {tau} s is below one sample interval at rate {rate}")]
    InvalidTau { tau: f64, rate: f64 },

    #[error("series of {got} phase points too short for m={m}: need {needed}")]
    TooShort { m: usize, needed: usize, got: usize },
}

/// Fully overlapping ADEV and MDEV.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlappingEstimator;

impl OverlappingEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl VarianceEstimator for OverlappingEstimator {
    type Error = EstimatorError;

    fn adev(
        &self,
        data: &[f64],
        taus: &[f64],
        data_type: DataType,
        rate: f64,
    ) -> Result<Vec<f64>, EstimatorError> {
        let phase = to_phase(data, data_type, rate)?;
        taus.iter()
            .map(|&tau| {
                let m = averaging_factor(tau, rate)?;
                overlapping_adev(&phase, m, rate)
            })
            .collect()
    }

    fn mdev(
        &self,
        data: &[f64],
        taus: &[f64],
        data_type: DataType,
        rate: f64,
    ) -> Result<Vec<f64>, EstimatorError> {
        let phase = to_phase(data, data_type, rate)?;
        taus.iter()
            .map(|&tau| {
                let m = averaging_factor(tau, rate)?;
                modified_adev(&phase, m, rate)
            })
            .collect()
    }
}

/// Phase view of the input; frequency data is integrated with `x[0] = 0`.
fn to_phase(data: &[f64], data_type: DataType, rate: f64) -> Result<Vec<f64>, EstimatorError> {
    if !(rate.is_finite() && rate > 0.0) {
        return Err(EstimatorError::InvalidRate(rate));
    }
    match data_type {
        DataType::Phase => Ok(data.to_vec()),
        DataType::Frequency => {
            let tau0 = rate.recip();
            let mut phase = Vec::with_capacity(data.len() + 1);
            let mut x = 0.0;
            phase.push(x);
            for &y in data {
                x += y * tau0;
                phase.push(x);
            }
            Ok(phase)
        }
    }
}

fn averaging_factor(tau: f64, rate: f64) -> Result<usize, EstimatorError> {
    let m = (tau * rate).round();
    if !m.is_finite() || m < 1.0 {
        return Err(EstimatorError::InvalidTau { tau, rate });
    }
    Ok(m as usize)
}

/// Second difference `x[i+2m] - 2x[i+m] + x[i]`.
fn second_difference(x: &[f64], i: usize, m: usize) -> f64 {
    x[i + 2 * m] - 2.0 * x[i + m] + x[i]
}

fn overlapping_adev(x: &[f64], m: usize, rate: f64) -> Result<f64, EstimatorError> {
    let needed = m.saturating_mul(2).saturating_add(1);
    if x.len() < needed {
        return Err(EstimatorError::TooShort {
            m,
            needed,
            got: x.len(),
        });
    }
    let terms = x.len() - 2 * m;
    let sum: f64 = (0..terms).map(|i| second_difference(x, i, m).powi(2)).sum();
    let tau = m as f64 / rate;
    let avar = sum / (2.0 * tau * tau * terms as f64);
    trace!("adev m={m} terms={terms} avar={avar}");
    Ok(avar.sqrt())
}

fn modified_adev(x: &[f64], m: usize, rate: f64) -> Result<f64, EstimatorError> {
    let needed = m.saturating_mul(3).saturating_add(1);
    if x.len() < needed {
        return Err(EstimatorError::TooShort {
            m,
            needed,
            got: x.len(),
        });
    }
    let terms = x.len() - 3 * m + 1;

    // Running sum of m consecutive second differences, slid one step at a time.
    let mut window: f64 = (0..m).map(|i| second_difference(x, i, m)).sum();
    let mut sum = window * window;
    for j in 1..terms {
        window += second_difference(x, j + m - 1, m) - second_difference(x, j - 1, m);
        sum += window * window;
    }

    let mf = m as f64;
    let tau = mf / rate;
    let mvar = sum / (2.0 * mf * mf * tau * tau * terms as f64);
    trace!("mdev m={m} terms={terms} mvar={mvar}");
    Ok(mvar.sqrt())
}
