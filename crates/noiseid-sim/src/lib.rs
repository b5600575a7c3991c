//! Power-law noise simulation for exercising `noiseid-core`.
//!
//! Provides an explicitly constructed noise generator (Kasdin–Walter FFT
//! filter method) and a trial runner that averages the B1 and R(n) statistics
//! over independent simulated series. Nothing here keeps global state: every
//! generator is created from a caller-owned [`SimulationConfig`].
//!
//! ```no_run
//! use noiseid_core::{NoiseClassifier, OverlappingEstimator, b1, b_to_mu};
//! use noiseid_sim::{SimulationConfig, TrialRunner};
//!
//! let config = SimulationConfig { b: 2, ..Default::default() };
//! let mut runner = TrialRunner::new(config.clone()).unwrap();
//! let classifier = NoiseClassifier::new(OverlappingEstimator);
//!
//! let measured = runner.average_b1(&classifier, 1).unwrap();
//! let expected = b1(config.samples, b_to_mu(config.b).unwrap()).unwrap();
//! println!("B1 {:.3} vs theory {expected:.3}", measured.mean);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod trials;

pub use config::SimulationConfig;
pub use error::SimError;
pub use generator::{NoiseGenerator, impulse_response};
pub use trials::{TrialRunner, TrialSummary};
