//! Theoretical B1 bias function.
//!
//! B1(N, mu) is the expected ratio of the N-sample variance to the two-sample
//! (Allan) variance for a power-law process with bias exponent `mu`. The
//! general closed form is
//!
//! ```text
//! B1(N, mu) = N (1 - N^mu) / (2 (N - 1) (1 - 2^mu))
//! ```
//!
//! which is 0/0 at `mu = 0` and loses precision near the other integer
//! exponents, so those are evaluated from their own closed forms. Each form is
//! a [`BiasLaw`] variant and can be checked on its own.

use std::f64::consts::LN_2;

use crate::error::{NoiseIdError, Result};

/// Smallest bias exponent the table covers.
pub const MU_MIN: i32 = -2;
/// Largest bias exponent the table covers.
pub const MU_MAX: i32 = 3;

/// Closed-form B1 law selected by the bias exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiasLaw {
    /// `mu = 2`: `N(N+1)/6`.
    Quadratic,
    /// `mu = 1`: `N/2`.
    Linear,
    /// `mu = 0`: `N ln N / (2 (N-1) ln 2)`.
    Logarithmic,
    /// `mu = -1`: `1`.
    Unity,
    /// `mu = -2`: `(N^2 - 1) / (1.5 N (N-1))`.
    InverseQuadratic,
    /// Any other exponent: the general closed form.
    General(i32),
}

impl BiasLaw {
    pub fn from_mu(mu: i32) -> Result<Self> {
        if !(MU_MIN..=MU_MAX).contains(&mu) {
            return Err(NoiseIdError::UnsupportedNoiseType {
                exponent: "mu",
                value: mu,
            });
        }
        Ok(match mu {
            2 => Self::Quadratic,
            1 => Self::Linear,
            0 => Self::Logarithmic,
            -1 => Self::Unity,
            -2 => Self::InverseQuadratic,
            other => Self::General(other),
        })
    }

    pub fn mu(self) -> i32 {
        match self {
            Self::Quadratic => 2,
            Self::Linear => 1,
            Self::Logarithmic => 0,
            Self::Unity => -1,
            Self::InverseQuadratic => -2,
            Self::General(mu) => mu,
        }
    }

    /// Evaluate the law at sample count `n`. `n` must exceed 1.
    pub fn eval(self, n: usize) -> Result<f64> {
        if n <= 1 {
            return Err(NoiseIdError::InsufficientSamples { needed: 2, got: n });
        }
        let n = n as f64;
        let value = match self {
            Self::Quadratic => n * (n + 1.0) / 6.0,
            Self::Linear => n / 2.0,
            Self::Logarithmic => n * n.ln() / (2.0 * (n - 1.0) * LN_2),
            Self::Unity => 1.0,
            Self::InverseQuadratic => (n.powi(2) - 1.0) / (1.5 * n * (n - 1.0)),
            Self::General(mu) => general(n, mu),
        };
        Ok(value)
    }
}

fn general(n: f64, mu: i32) -> f64 {
    let up = n * (1.0 - n.powi(mu));
    let down = 2.0 * (n - 1.0) * (1.0 - 2f64.powi(mu));
    up / down
}

/// Theoretical B1 bias for `n` averaged samples and bias exponent `mu`.
pub fn b1(n: usize, mu: i32) -> Result<f64> {
    BiasLaw::from_mu(mu)?.eval(n)
}
