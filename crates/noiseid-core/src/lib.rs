//! # noiseid-core
//!
//! **Identify the power-law noise behind a clock's phase record.**
//!
//! `noiseid-core` computes the B1 and R(n) ratio statistics of a phase series
//! and the analytic curves they are compared against: the B1 bias function,
//! the theoretical R(n) table, and the decision boundaries between adjacent
//! noise classes.
//!
//! ## Quick Start
//!
//! ```no_run
//! use noiseid_core::{NoiseClassifier, OverlappingEstimator, SampleSequence, b1, b1_boundary, b_to_mu};
//!
//! let phase: Vec<f64> = (0..4096).map(|i| ((i * 7919) % 104_729) as f64).collect();
//! let seq = SampleSequence::new(phase, 1.0).unwrap();
//!
//! let classifier = NoiseClassifier::new(OverlappingEstimator);
//! let af = 4;
//! let measured = classifier.b1_ratio(&seq, af).unwrap();
//!
//! let n = (seq.len() - 1) / af;
//! let white_fm = b1(n, b_to_mu(0).unwrap()).unwrap();
//! let boundary = b1_boundary(0, n).unwrap();
//! println!("B1 = {measured:.3} (white FM expects {white_fm:.3}, boundary {boundary:.3})");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! SampleSequence ─► NoiseClassifier ─► VarianceEstimator (ADEV / MDEV)
//!                          │
//!                          ▼
//!                   B1, R(n) ratios ─► compare with b1(), rn(), b1_boundary()
//! ```
//!
//! The analytic side (`b1`, `rn`, `b1_boundary`, `b_to_mu`) depends only on
//! sample count, averaging factor and exponent. Everything is a pure function
//! of its inputs and safe to call from any thread.

pub mod bias;
pub mod boundary;
pub mod classifier;
pub mod error;
pub mod estimator;
pub mod exponent;
pub mod ratio;
pub mod sequence;
pub mod sweep;

pub use bias::{BiasLaw, b1};
pub use boundary::{Boundary, BoundaryMean, b1_boundary, b1_boundary_detail, rn_boundary};
pub use classifier::NoiseClassifier;
pub use error::{ClassifyError, NoiseIdError, Result};
pub use estimator::{DataType, EstimatorError, OverlappingEstimator, VarianceEstimator};
pub use exponent::{NoiseClass, b_to_mu, mu_to_b};
pub use ratio::rn;
pub use sequence::SampleSequence;
pub use sweep::{SweepIter, SweepPlan, SweepPoint, log_spaced_factors};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
