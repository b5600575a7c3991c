//! Sweep plans over averaging factors and noise classes.
//!
//! A [`SweepPlan`] is a finite description of `(af, b)` points. Iterating it
//! is lazy and restartable: every call to [`SweepPlan::iter`] starts over.

use crate::error::{NoiseIdError, Result};
use crate::exponent::b_to_mu;

/// Cartesian product of averaging factors and spectral exponents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    factors: Vec<usize>,
    exponents: Vec<i32>,
}

/// One point of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    pub af: usize,
    pub b: i32,
}

impl SweepPlan {
    /// Validates every factor and exponent up front.
    pub fn new(factors: Vec<usize>, exponents: Vec<i32>) -> Result<Self> {
        if factors.contains(&0) {
            return Err(NoiseIdError::InvalidParameter {
                name: "af",
                value: 0.0,
            });
        }
        for &b in &exponents {
            b_to_mu(b)?;
        }
        Ok(Self { factors, exponents })
    }

    pub fn factors(&self) -> &[usize] {
        &self.factors
    }

    pub fn exponents(&self) -> &[i32] {
        &self.exponents
    }

    pub fn len(&self) -> usize {
        self.factors.len() * self.exponents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Points with `b` in the outer loop and `af` in the inner loop.
    pub fn iter(&self) -> SweepIter<'_> {
        SweepIter {
            plan: self,
            next: 0,
        }
    }
}

impl<'a> IntoIterator for &'a SweepPlan {
    type Item = SweepPoint;
    type IntoIter = SweepIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the points of a [`SweepPlan`].
#[derive(Debug, Clone)]
pub struct SweepIter<'a> {
    plan: &'a SweepPlan,
    next: usize,
}

impl Iterator for SweepIter<'_> {
    type Item = SweepPoint;

    fn next(&mut self) -> Option<SweepPoint> {
        if self.next >= self.plan.len() {
            return None;
        }
        let per_b = self.plan.factors.len();
        let point = SweepPoint {
            af: self.plan.factors[self.next % per_b],
            b: self.plan.exponents[self.next / per_b],
        };
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.len() - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SweepIter<'_> {}

/// Distinct integer averaging factors spaced logarithmically from 1 to
/// `max_af`, ascending. Rounding collapses neighbours at the low end, so the
/// result may hold fewer than `points` entries.
pub fn log_spaced_factors(max_af: usize, points: usize) -> Result<Vec<usize>> {
    if max_af == 0 {
        return Err(NoiseIdError::InvalidParameter {
            name: "max_af",
            value: 0.0,
        });
    }
    if points < 2 || max_af == 1 {
        return Ok(vec![1]);
    }
    let top = (max_af as f64).ln();
    let step = top / (points - 1) as f64;
    let mut factors: Vec<usize> = (0..points)
        .map(|i| ((i as f64 * step).exp().round() as usize).clamp(1, max_af))
        .collect();
    factors.dedup();
    Ok(factors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_b_outer_af_inner() {
        let plan = SweepPlan::new(vec![1, 2, 4], vec![0, -1]).unwrap();
        let points: Vec<(usize, i32)> = plan.iter().map(|p| (p.af, p.b)).collect();
        assert_eq!(
            points,
            vec![(1, 0), (2, 0), (4, 0), (1, -1), (2, -1), (4, -1)]
        );
        assert_eq!(plan.iter().len(), 6);
    }

    #[test]
    fn test_iteration_restarts() {
        let plan = SweepPlan::new(vec![3, 5], vec![2, 1, 0]).unwrap();
        let first: Vec<SweepPoint> = plan.iter().collect();
        let second: Vec<SweepPoint> = (&plan).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), plan.len());
    }

    #[test]
    fn test_empty_plan_yields_nothing() {
        let plan = SweepPlan::new(Vec::new(), vec![0]).unwrap();
        assert!(plan.is_empty());
        assert_eq!(plan.iter().next(), None);
    }

    #[test]
    fn test_rejects_bad_points() {
        assert!(SweepPlan::new(vec![1, 0], vec![0]).is_err());
        assert!(matches!(
            SweepPlan::new(vec![1], vec![0, 9]),
            Err(NoiseIdError::UnsupportedNoiseType { value: 9, .. })
        ));
    }

    #[test]
    fn test_log_spacing_is_distinct_and_bounded() {
        let factors = log_spaced_factors(32, 20).unwrap();
        assert_eq!(factors.first(), Some(&1));
        assert_eq!(factors.last(), Some(&32));
        assert!(factors.windows(2).all(|w| w[0] < w[1]), "{factors:?}");
        assert!(factors.len() <= 20);

        assert_eq!(log_spaced_factors(1000, 4).unwrap(), vec![1, 10, 100, 1000]);
        assert_eq!(log_spaced_factors(8, 1).unwrap(), vec![1]);
        assert!(log_spaced_factors(0, 5).is_err());
    }
}
