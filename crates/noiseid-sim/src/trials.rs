//! Trial-averaged ratio statistics over simulated series.

use log::{debug, info};
use noiseid_core::{ClassifyError, NoiseClassifier, SampleSequence, VarianceEstimator};
use serde::Serialize;
use statrs::statistics::Statistics;

use crate::config::SimulationConfig;
use crate::error::SimError;
use crate::generator::NoiseGenerator;

/// Mean and spread of one statistic over independent trials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrialSummary {
    pub mean: f64,
    /// Sample standard deviation; 0 for a single trial.
    pub std_dev: f64,
    pub trials: usize,
}

impl TrialSummary {
    pub fn from_values(values: &[f64]) -> Self {
        let std_dev = if values.len() > 1 {
            values.iter().std_dev()
        } else {
            0.0
        };
        Self {
            mean: values.iter().mean(),
            std_dev,
            trials: values.len(),
        }
    }

    /// Relative deviation of the mean from `expected`.
    pub fn relative_error(&self, expected: f64) -> f64 {
        ((self.mean - expected) / expected).abs()
    }
}

/// Runs repeated simulations of one configuration.
pub struct TrialRunner {
    config: SimulationConfig,
    generator: NoiseGenerator,
}

impl TrialRunner {
    pub fn new(config: SimulationConfig) -> Result<Self, SimError> {
        let generator = NoiseGenerator::new(&config)?;
        Ok(Self { config, generator })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Mean B1 ratio at averaging factor `af` over `config.trials` series.
    pub fn average_b1<E: VarianceEstimator>(
        &mut self,
        classifier: &NoiseClassifier<E>,
        af: usize,
    ) -> Result<TrialSummary, ClassifyError<E::Error>> {
        let summary = self.run(|seq| classifier.b1_ratio(seq, af))?;
        info!(
            "B1 b={} af={af}: mean {:.4} over {} trials",
            self.config.b, summary.mean, summary.trials
        );
        Ok(summary)
    }

    /// Mean R(n) ratio at averaging factor `af` over `config.trials` series.
    pub fn average_rn<E: VarianceEstimator>(
        &mut self,
        classifier: &NoiseClassifier<E>,
        af: usize,
    ) -> Result<TrialSummary, ClassifyError<E::Error>> {
        let summary = self.run(|seq| classifier.rn_ratio(seq, af))?;
        info!(
            "R(n) b={} af={af}: mean {:.4} over {} trials",
            self.config.b, summary.mean, summary.trials
        );
        Ok(summary)
    }

    fn run<F, X>(&mut self, mut statistic: F) -> Result<TrialSummary, ClassifyError<X>>
    where
        F: FnMut(&SampleSequence) -> Result<f64, ClassifyError<X>>,
        X: std::error::Error + 'static,
    {
        let mut values = Vec::with_capacity(self.config.trials);
        for trial in 0..self.config.trials {
            let seq = self.generator.generate()?;
            let value = statistic(&seq)?;
            debug!("trial {trial}: {value}");
            values.push(value);
        }
        Ok(TrialSummary::from_values(&values))
    }
}
