//! Theoretical R(n) = MVAR/AVAR ratios.
//!
//! Per IEEE 1139-2008 the AVAR and MVAR of a power-law process share the same
//! tau exponent except for the white-noise end of the table, so R(n) is flat
//! for most classes:
//!
//! ```text
//!   b    R(n) exponent
//!   0    -1
//!  -1    log-dependent on the high-frequency cutoff
//!  other  0
//! ```

use std::f64::consts::PI;

use crate::error::{NoiseIdError, Result};
use crate::exponent::b_to_mu;

/// Assumed high-frequency cutoff in units of the base sample interval
/// (`f_h * tau0`). With `tau = af * tau0` this makes `f_h * tau = 0.5 * af`.
pub const CUTOFF_TAU0: f64 = 0.5;

/// Theoretical R(n) for averaging factor `af` and spectral exponent `b`.
pub fn rn(af: usize, b: i32) -> Result<f64> {
    if af == 0 {
        return Err(NoiseIdError::InvalidParameter {
            name: "af",
            value: 0.0,
        });
    }
    b_to_mu(b)?;

    let af = af as f64;
    let value = match b {
        0 => af.recip(),
        -1 => flicker_mvar() / flicker_avar(af),
        _ => 1.0,
    };
    Ok(value)
}

fn flicker_mvar() -> f64 {
    3.0 * (256.0f64 / 27.0).ln() / (8.0 * PI.powi(2))
}

fn flicker_avar(af: f64) -> f64 {
    (1.038 + 3.0 * (2.0 * PI * CUTOFF_TAU0 * af).ln()) / (4.0 * PI.powi(2))
}
