//! Empirical B1 and R(n) ratio statistics.
//!
//! Both statistics compare a series against its own Allan deviation at
//! `tau = af / rate`:
//!
//! - **B1**: unbiased variance of the block-averaged first differences over
//!   ADEV².
//! - **R(n)**: (MDEV / ADEV)².
//!
//! Comparing the results against [`b1`](crate::b1), [`rn`](crate::rn) and the
//! boundaries in [`boundary`](crate::boundary) identifies the noise class.

use log::debug;
use statrs::statistics::Statistics;

use crate::error::{ClassifyError, NoiseIdError};
use crate::estimator::{DataType, VarianceEstimator};
use crate::sequence::SampleSequence;

type ClassifyResult<T, E> = std::result::Result<T, ClassifyError<<E as VarianceEstimator>::Error>>;

/// Computes ratio statistics using a caller-supplied deviation estimator.
#[derive(Debug, Clone, Default)]
pub struct NoiseClassifier<E> {
    estimator: E,
}

impl<E: VarianceEstimator> NoiseClassifier<E> {
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    pub fn estimator(&self) -> &E {
        &self.estimator
    }

    /// B1 ratio of `seq` at averaging factor `af`.
    ///
    /// First differences are truncated to a whole number of `af` blocks; the
    /// trailing remainder is dropped. At least two blocks are required.
    pub fn b1_ratio(&self, seq: &SampleSequence, af: usize) -> ClassifyResult<f64, E> {
        let x = seq.samples();
        let blocks = block_count(x.len(), af)?;

        let oadev = self.deviation(Deviation::Allan, seq, af)?;
        let oadev = nonzero(oadev, "ADEV is zero")?;

        let y: Vec<f64> = x.windows(2).map(|w| w[1] - w[0]).collect();
        let averaged: Vec<f64> = y[..blocks * af]
            .chunks_exact(af)
            .map(|block| block.iter().mean())
            .collect();
        let variance = averaged.iter().variance();

        let ratio = variance / oadev.powi(2);
        debug!(
            "B1 af={af} n={} blocks={blocks} var={variance} adev={oadev} ratio={ratio}",
            x.len()
        );
        Ok(ratio)
    }

    /// R(n) ratio of `seq` at averaging factor `af`.
    ///
    /// MDEV spans three `af` blocks, so `seq` needs at least `3 af + 1`
    /// samples.
    pub fn rn_ratio(&self, seq: &SampleSequence, af: usize) -> ClassifyResult<f64, E> {
        block_count(seq.len(), af)?;
        let needed = af.saturating_mul(3).saturating_add(1);
        if seq.len() < needed {
            return Err(NoiseIdError::InsufficientSamples {
                needed,
                got: seq.len(),
            }
            .into());
        }

        let oadev = self.deviation(Deviation::Allan, seq, af)?;
        let mdev = self.deviation(Deviation::Modified, seq, af)?;
        let oadev = nonzero(oadev, "ADEV is zero")?;

        let ratio = (mdev / oadev).powi(2);
        debug!("R(n) af={af} n={} adev={oadev} mdev={mdev} ratio={ratio}", seq.len());
        Ok(ratio)
    }

    fn deviation(&self, kind: Deviation, seq: &SampleSequence, af: usize) -> ClassifyResult<f64, E> {
        let taus = [seq.tau(af)];
        let reply = match kind {
            Deviation::Allan => self.estimator.adev(seq.samples(), &taus, DataType::Phase, seq.rate()),
            Deviation::Modified => self.estimator.mdev(seq.samples(), &taus, DataType::Phase, seq.rate()),
        }
        .map_err(ClassifyError::Estimator)?;

        match reply.as_slice() {
            [dev] => Ok(*dev),
            // The estimator could not evaluate this tau.
            other => Err(NoiseIdError::InsufficientSamples {
                needed: 1,
                got: other.len(),
            }
            .into()),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Deviation {
    Allan,
    Modified,
}

/// Number of whole `af` blocks in the first differences of `n` samples.
fn block_count(n: usize, af: usize) -> Result<usize, NoiseIdError> {
    if af == 0 {
        return Err(NoiseIdError::InvalidParameter {
            name: "af",
            value: 0.0,
        });
    }
    let blocks = n.saturating_sub(1) / af;
    if blocks < 2 {
        return Err(NoiseIdError::InsufficientSamples {
            needed: af.saturating_mul(2).saturating_add(1),
            got: n,
        });
    }
    Ok(blocks)
}

fn nonzero(dev: f64, what: &str) -> Result<f64, NoiseIdError> {
    if dev == 0.0 || !dev.is_finite() {
        return Err(NoiseIdError::UndefinedRatio {
            what: format!("{what} ({dev})"),
        });
    }
    Ok(dev)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::{EstimatorError, OverlappingEstimator};

    /// Returns fixed deviations regardless of input.
    struct FixedEstimator {
        adev: Vec<f64>,
        mdev: Vec<f64>,
    }

    impl VarianceEstimator for FixedEstimator {
        type Error = EstimatorError;

        fn adev(&self, _: &[f64], _: &[f64], _: DataType, _: f64) -> Result<Vec<f64>, Self::Error> {
            Ok(self.adev.clone())
        }

        fn mdev(&self, _: &[f64], _: &[f64], _: DataType, _: f64) -> Result<Vec<f64>, Self::Error> {
            Ok(self.mdev.clone())
        }
    }

    /// Records the tau and data type it was asked for, then fails.
    struct RefusingEstimator {
        seen: std::cell::RefCell<Vec<(f64, DataType)>>,
    }

    impl VarianceEstimator for RefusingEstimator {
        type Error = EstimatorError;

        fn adev(&self, _: &[f64], taus: &[f64], dt: DataType, rate: f64) -> Result<Vec<f64>, Self::Error> {
            self.seen.borrow_mut().extend(taus.iter().map(|&t| (t, dt)));
            Err(EstimatorError::InvalidTau { tau: taus[0], rate })
        }

        fn mdev(&self, data: &[f64], taus: &[f64], dt: DataType, rate: f64) -> Result<Vec<f64>, Self::Error> {
            self.adev(data, taus, dt, rate)
        }
    }

    fn seq(samples: &[f64]) -> SampleSequence {
        SampleSequence::new(samples.to_vec(), 1.0).unwrap()
    }

    fn fixed(adev: f64, mdev: f64) -> NoiseClassifier<FixedEstimator> {
        NoiseClassifier::new(FixedEstimator {
            adev: vec![adev],
            mdev: vec![mdev],
        })
    }

    #[test]
    fn test_b1_alternating_phase() {
        // y = [1, -1, 1, -1]: variance 4/3; ADEV² = 12 / 6 = 2.
        let classifier = NoiseClassifier::new(OverlappingEstimator);
        let ratio = classifier.b1_ratio(&seq(&[0.0, 1.0, 0.0, 1.0, 0.0]), 1).unwrap();
        assert!((ratio - 2.0 / 3.0).abs() < 1e-12, "{ratio}");
    }

    #[test]
    fn test_b1_truncates_and_averages_blocks() {
        // y = [1, 2, -1, 3, -1, -2] -> block means [1.5, 1, -1.5], var 31/12.
        // ADEV² at m = 2 is 27 / 24.
        let classifier = NoiseClassifier::new(OverlappingEstimator);
        let x = seq(&[0.0, 1.0, 3.0, 2.0, 5.0, 4.0, 2.0]);
        let ratio = classifier.b1_ratio(&x, 2).unwrap();
        assert!((ratio - 62.0 / 27.0).abs() < 1e-12, "{ratio}");

        // One extra sample leaves a remainder difference that is dropped.
        let padded = seq(&[0.0, 1.0, 3.0, 2.0, 5.0, 4.0, 2.0, 100.0]);
        let ratio = fixed(1.0, 1.0).b1_ratio(&padded, 2).unwrap();
        assert!((ratio - 31.0 / 12.0).abs() < 1e-12, "{ratio}");
    }

    #[test]
    fn test_rn_is_one_at_unit_factor() {
        let classifier = NoiseClassifier::new(OverlappingEstimator);
        let x = seq(&[0.0, 0.3, -1.2, 0.8, 2.0, -0.4, 0.1, 0.9]);
        let ratio = classifier.rn_ratio(&x, 1).unwrap();
        assert!((ratio - 1.0).abs() < 1e-12, "{ratio}");
    }

    #[test]
    fn test_rn_squares_deviation_ratio() {
        let ratio = fixed(2.0, 1.0).rn_ratio(&seq(&[0.0; 10]), 3).unwrap();
        assert_eq!(ratio, 0.25);
    }

    #[test]
    fn test_zero_adev_is_undefined() {
        let x = seq(&[0.0; 16]);
        assert!(matches!(
            fixed(0.0, 1.0).b1_ratio(&x, 2),
            Err(ClassifyError::Core(NoiseIdError::UndefinedRatio { .. }))
        ));
        assert!(matches!(
            fixed(0.0, 1.0).rn_ratio(&x, 2),
            Err(ClassifyError::Core(NoiseIdError::UndefinedRatio { .. }))
        ));
        // A constant series has zero ADEV with the real estimator too.
        let classifier = NoiseClassifier::new(OverlappingEstimator);
        assert!(matches!(
            classifier.b1_ratio(&x, 1),
            Err(ClassifyError::Core(NoiseIdError::UndefinedRatio { .. }))
        ));
    }

    #[test]
    fn test_short_series_is_insufficient() {
        // len(x) < 2 * af
        let classifier = fixed(1.0, 1.0);
        for (len, af) in [(1usize, 1usize), (3, 2), (7, 4), (9, 5)] {
            let x = seq(&vec![0.5; len]);
            assert!(
                matches!(
                    classifier.b1_ratio(&x, af),
                    Err(ClassifyError::Core(NoiseIdError::InsufficientSamples { .. }))
                ),
                "len={len} af={af}"
            );
            assert!(matches!(
                classifier.rn_ratio(&x, af),
                Err(ClassifyError::Core(NoiseIdError::InsufficientSamples { .. }))
            ));
        }
    }

    #[test]
    fn test_rn_needs_three_blocks() {
        // Enough for B1 and ADEV, one sample short of MDEV at af = 3.
        let x = seq(&[0.0, 1.0, 0.5, 2.0, 1.0, 0.0, 1.5, 0.5, 1.0]);
        let classifier = NoiseClassifier::new(OverlappingEstimator);
        assert!(classifier.b1_ratio(&x, 3).is_ok());
        assert_eq!(
            classifier.rn_ratio(&x, 3).unwrap_err().as_core(),
            Some(&NoiseIdError::InsufficientSamples { needed: 10, got: 9 })
        );
    }

    #[test]
    fn test_zero_af_is_invalid() {
        assert!(matches!(
            fixed(1.0, 1.0).b1_ratio(&seq(&[0.0; 8]), 0),
            Err(ClassifyError::Core(NoiseIdError::InvalidParameter { name: "af", .. }))
        ));
    }

    #[test]
    fn test_estimator_errors_pass_through() {
        let estimator = RefusingEstimator {
            seen: Default::default(),
        };
        let classifier = NoiseClassifier::new(&estimator);
        let x = SampleSequence::new(vec![0.0; 32], 4.0).unwrap();
        let err = classifier.rn_ratio(&x, 8).unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::Estimator(EstimatorError::InvalidTau { .. })
        ));
        // tau = af / rate, always phase data.
        assert_eq!(estimator.seen.borrow().as_slice(), &[(2.0, DataType::Phase)]);
    }

    #[test]
    fn test_malformed_estimator_reply_is_reported() {
        let classifier = NoiseClassifier::new(FixedEstimator {
            adev: Vec::new(),
            mdev: Vec::new(),
        });
        assert!(matches!(
            classifier.b1_ratio(&seq(&[0.0; 8]), 1),
            Err(ClassifyError::Core(NoiseIdError::InsufficientSamples { needed: 1, got: 0 }))
        ));
    }
}
