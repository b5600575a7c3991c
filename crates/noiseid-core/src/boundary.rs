//! Decision boundaries between adjacent noise classes.
//!
//! An empirical B1 ratio above the boundary between `b_hi` and `b_hi - 1`
//! points at the lower-exponent class, below it at `b_hi`.

use log::{debug, warn};

use crate::bias::b1;
use crate::error::{NoiseIdError, Result};
use crate::exponent::b_to_mu;
use crate::ratio::rn;

/// Threshold on the lower operand that selects the geometric mean.
const GEOMETRIC_FLOOR: f64 = -4.0;

/// How a boundary was formed from its two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMean {
    Geometric,
    Arithmetic,
}

/// A boundary value together with the operands it was formed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub value: f64,
    pub lower: f64,
    pub upper: f64,
    pub mean: BoundaryMean,
}

/// B1 boundary between `b_hi` and `b_hi - 1` at `n` averaged samples.
///
/// Uses the geometric mean whenever the lower operand is at least -4, the
/// arithmetic mean otherwise. A geometric mean over a negative product has no
/// real value and is reported as [`NoiseIdError::UndefinedRatio`].
pub fn b1_boundary(b_hi: i32, n: usize) -> Result<f64> {
    b1_boundary_detail(b_hi, n).map(|b| b.value)
}

/// Like [`b1_boundary`], also returning the operands and the mean used.
pub fn b1_boundary_detail(b_hi: i32, n: usize) -> Result<Boundary> {
    let b_lo = b_hi - 1;
    let lower = b1(n, b_to_mu(b_lo)?)?;
    let upper = b1(n, b_to_mu(b_hi)?)?;

    if lower >= GEOMETRIC_FLOOR {
        let product = lower * upper;
        if product < 0.0 {
            warn!(
                "geometric B1 boundary undefined: b_hi={b_hi} n={n} b1_lo={lower} b1_hi={upper}"
            );
            return Err(NoiseIdError::UndefinedRatio {
                what: format!("geometric mean of B1({b_lo})={lower} and B1({b_hi})={upper}"),
            });
        }
        debug!("B1 boundary b_hi={b_hi} n={n}: geometric mean of {lower} and {upper}");
        Ok(Boundary {
            value: product.sqrt(),
            lower,
            upper,
            mean: BoundaryMean::Geometric,
        })
    } else {
        debug!("B1 boundary b_hi={b_hi} n={n}: arithmetic mean of {lower} and {upper}");
        Ok(Boundary {
            value: 0.5 * (lower + upper),
            lower,
            upper,
            mean: BoundaryMean::Arithmetic,
        })
    }
}

/// R(n) boundary between white FM (`b = 0`) and flicker FM (`b = -1`).
pub fn rn_boundary(af: usize) -> Result<f64> {
    Ok((rn(af, 0)? * rn(af, -1)?).sqrt())
}
