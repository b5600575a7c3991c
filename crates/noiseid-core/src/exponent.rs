//! Exponent parameterizations of power-law noise.
//!
//! A noise class is described either by its spectral exponent `b` or by the
//! bias-law exponent `mu` that governs how the B1 bias function scales with
//! sample count:
//!
//! | class           |  b | mu |
//! |-----------------|----|----|
//! | white PM        |  2 | -2 |
//! | flicker PM      |  1 | -2 |
//! | white FM        |  0 | -1 |
//! | flicker FM      | -1 |  0 |
//! | random-walk FM  | -2 |  1 |
//! | flicker-walk FM | -3 |  2 |
//! | random-run FM   | -4 |  3 |
//!
//! White PM and flicker PM share `mu = -2`, so B1 alone cannot tell them
//! apart; R(n) resolves that tie.

use serde::{Deserialize, Serialize};

use crate::error::{NoiseIdError, Result};

/// Largest supported spectral exponent.
pub const B_MAX: i32 = 2;
/// Smallest supported spectral exponent.
pub const B_MIN: i32 = -4;

/// Map the spectral exponent `b` to the bias-law exponent `mu`.
pub fn b_to_mu(b: i32) -> Result<i32> {
    match b {
        2 | 1 => Ok(-2),
        0 => Ok(-1),
        -1 => Ok(0),
        -2 => Ok(1),
        -3 => Ok(2),
        -4 => Ok(3),
        _ => Err(NoiseIdError::UnsupportedNoiseType {
            exponent: "b",
            value: b,
        }),
    }
}

/// All spectral exponents that map to `mu`, in descending order.
///
/// Returns two entries for `mu = -2`.
pub fn mu_to_b(mu: i32) -> Result<Vec<i32>> {
    let bs: Vec<i32> = (B_MIN..=B_MAX)
        .rev()
        .filter(|&b| b_to_mu(b).is_ok_and(|m| m == mu))
        .collect();
    if bs.is_empty() {
        return Err(NoiseIdError::UnsupportedNoiseType {
            exponent: "mu",
            value: mu,
        });
    }
    Ok(bs)
}

/// The seven canonical power-law noise classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NoiseClass {
    WhitePm,
    FlickerPm,
    WhiteFm,
    FlickerFm,
    RandomWalkFm,
    FlickerWalkFm,
    RandomRunFm,
}

impl NoiseClass {
    /// All classes, from the highest spectral exponent down.
    pub const ALL: [NoiseClass; 7] = [
        Self::WhitePm,
        Self::FlickerPm,
        Self::WhiteFm,
        Self::FlickerFm,
        Self::RandomWalkFm,
        Self::FlickerWalkFm,
        Self::RandomRunFm,
    ];

    pub fn b(self) -> i32 {
        match self {
            Self::WhitePm => 2,
            Self::FlickerPm => 1,
            Self::WhiteFm => 0,
            Self::FlickerFm => -1,
            Self::RandomWalkFm => -2,
            Self::FlickerWalkFm => -3,
            Self::RandomRunFm => -4,
        }
    }

    pub fn mu(self) -> i32 {
        match self {
            Self::WhitePm | Self::FlickerPm => -2,
            Self::WhiteFm => -1,
            Self::FlickerFm => 0,
            Self::RandomWalkFm => 1,
            Self::FlickerWalkFm => 2,
            Self::RandomRunFm => 3,
        }
    }

    pub fn from_b(b: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.b() == b)
            .ok_or(NoiseIdError::UnsupportedNoiseType {
                exponent: "b",
                value: b,
            })
    }
}

impl std::fmt::Display for NoiseClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Self::WhitePm => "white PM",
            Self::FlickerPm => "flicker PM",
            Self::WhiteFm => "white FM",
            Self::FlickerFm => "flicker FM",
            Self::RandomWalkFm => "random-walk FM",
            Self::FlickerWalkFm => "flicker-walk FM",
            Self::RandomRunFm => "random-run FM",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_fixed_mapping() {
        let expected = [(2, -2), (1, -2), (0, -1), (-1, 0), (-2, 1), (-3, 2), (-4, 3)];
        for (b, mu) in expected {
            assert_eq!(b_to_mu(b), Ok(mu), "b = {b}");
        }
    }

    #[test]
    fn test_white_and_flicker_pm_share_mu() {
        assert_eq!(b_to_mu(2), b_to_mu(1));
        assert_eq!(b_to_mu(2), Ok(-2));
        assert_eq!(mu_to_b(-2), Ok(vec![2, 1]));
    }

    #[test]
    fn test_out_of_domain_b_is_rejected() {
        for b in [3, -5, 100, i32::MIN] {
            assert_eq!(
                b_to_mu(b),
                Err(NoiseIdError::UnsupportedNoiseType {
                    exponent: "b",
                    value: b
                })
            );
        }
    }

    #[test]
    fn test_mu_to_b_inverts_single_valued_entries() {
        for mu in -1..=3 {
            let bs = mu_to_b(mu).unwrap();
            assert_eq!(bs.len(), 1);
            assert_eq!(b_to_mu(bs[0]), Ok(mu));
        }
        assert!(mu_to_b(4).is_err());
        assert!(mu_to_b(-3).is_err());
    }

    #[test]
    fn test_noise_class_agrees_with_mapping() {
        for class in NoiseClass::ALL {
            assert_eq!(b_to_mu(class.b()), Ok(class.mu()), "{class}");
            assert_eq!(NoiseClass::from_b(class.b()), Ok(class));
        }
        assert!(NoiseClass::from_b(5).is_err());
    }

    #[test]
    fn test_display_respects_width() {
        assert_eq!(format!("{:>10}", NoiseClass::WhiteFm), "  white FM");
        assert_eq!(NoiseClass::RandomWalkFm.to_string(), "random-walk FM");
    }
}
