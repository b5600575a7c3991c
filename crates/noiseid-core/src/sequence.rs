//! Sample sequences handed to the classifier.

use crate::error::{NoiseIdError, Result};

/// An immutable phase or frequency series with its sample rate.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSequence {
    samples: Vec<f64>,
    rate: f64,
}

impl SampleSequence {
    /// Wrap `samples` taken at `rate` samples per second.
    ///
    /// Rejects an empty series and a rate that is not positive and finite.
    pub fn new(samples: Vec<f64>, rate: f64) -> Result<Self> {
        if samples.is_empty() {
            return Err(NoiseIdError::InsufficientSamples { needed: 1, got: 0 });
        }
        if !(rate.is_finite() && rate > 0.0) {
            return Err(NoiseIdError::InvalidParameter {
                name: "rate",
                value: rate,
            });
        }
        Ok(Self { samples, rate })
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for the `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Base sample interval in seconds.
    pub fn tau0(&self) -> f64 {
        self.rate.recip()
    }

    /// Averaging interval for factor `af`, in seconds.
    pub fn tau(&self, af: usize) -> f64 {
        af as f64 / self.rate
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }
}

impl AsRef<[f64]> for SampleSequence {
    fn as_ref(&self) -> &[f64] {
        &self.samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_series() {
        let seq = SampleSequence::new(vec![1.0, 2.0, 3.0], 4.0).unwrap();
        assert_eq!(seq.len(), 3);
        assert!(!seq.is_empty());
        assert_eq!(seq.tau0(), 0.25);
        assert_eq!(seq.tau(8), 2.0);
        assert_eq!(seq.samples(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_rejects_empty_series() {
        assert_eq!(
            SampleSequence::new(Vec::new(), 1.0),
            Err(NoiseIdError::InsufficientSamples { needed: 1, got: 0 })
        );
    }

    #[test]
    fn test_rejects_bad_rate() {
        for rate in [0.0, -1.0, f64::INFINITY] {
            assert!(matches!(
                SampleSequence::new(vec![0.0], rate),
                Err(NoiseIdError::InvalidParameter { name: "rate", .. })
            ));
        }
        assert!(SampleSequence::new(vec![0.0], f64::NAN).is_err());
    }
}
