use crate::accelerator::PrefixEstimates;
use crate::core::CoefficientEstimate;
use crate::evaluation::{Estimator, MaxEstimator, MeanEstimator, Measurement, TrajectoryEvaluator};
use std::fmt::{Display, Formatter};
use std::io::{Error, ErrorKind};

const NAMES: [&str; 3] = ["intercept", "slope1", "slope2"];

/// Per-prefix agreement between two coefficient trajectories.
///
/// Absolute differences are only aggregated where both estimates are finite.
/// Prefixes where exactly one side is finite count as mismatches; prefixes
/// where both are non-finite agree on a degenerate fit and are skipped.
pub struct DivergenceEvaluator<E: Estimator + Default> {
    mean_abs: [E; 3],
    max_abs: [MaxEstimator; 3],
    tolerance: f64,
    seen: u64,
    compared: u64,
    non_finite_mismatches: u64,
    first_exceeding: Option<u64>,
}

impl<E: Estimator + Default> DivergenceEvaluator<E> {
    /// `tolerance` is the absolute difference above which a prefix counts as
    /// diverged. Must be finite and non-negative.
    pub fn new(tolerance: f64) -> Result<Self, Error> {
        if !(tolerance >= 0.0 && tolerance.is_finite()) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "tolerance must be finite and >= 0",
            ));
        }
        Ok(Self {
            mean_abs: Default::default(),
            max_abs: Default::default(),
            tolerance,
            seen: 0,
            compared: 0,
            non_finite_mismatches: 0,
            first_exceeding: None,
        })
    }

    pub fn summary(&self) -> Divergence {
        Divergence {
            prefixes: self.seen,
            compared: self.compared,
            non_finite_mismatches: self.non_finite_mismatches,
            first_exceeding: self.first_exceeding,
            tolerance: self.tolerance,
            mean_abs: [0, 1, 2].map(|i| self.mean_abs[i].estimation()),
            max_abs: [0, 1, 2].map(|i| self.max_abs[i].estimation()),
        }
    }
}

impl<E: Estimator + Default> TrajectoryEvaluator for DivergenceEvaluator<E> {
    fn reset(&mut self) {
        self.mean_abs = Default::default();
        self.max_abs = Default::default();
        self.seen = 0;
        self.compared = 0;
        self.non_finite_mismatches = 0;
        self.first_exceeding = None;
    }

    fn add_pair(&mut self, estimate: &CoefficientEstimate, reference: &CoefficientEstimate) {
        let index = self.seen;
        self.seen += 1;

        match (estimate.is_finite(), reference.is_finite()) {
            (true, true) => {
                self.compared += 1;
                let a = estimate.to_array();
                let b = reference.to_array();
                let mut exceeded = false;
                for i in 0..3 {
                    let diff = (a[i] - b[i]).abs();
                    self.mean_abs[i].add(diff);
                    self.max_abs[i].add(diff);
                    exceeded |= diff > self.tolerance;
                }
                if exceeded && self.first_exceeding.is_none() {
                    self.first_exceeding = Some(index);
                }
            }
            (false, false) => {}
            _ => self.non_finite_mismatches += 1,
        }
    }

    fn measurements(&self) -> Vec<Measurement> {
        let s = self.summary();
        let mut out = Vec::with_capacity(9);
        out.push(Measurement::new("compared", s.compared as f64));
        out.push(Measurement::new(
            "non_finite_mismatches",
            s.non_finite_mismatches as f64,
        ));
        out.push(Measurement::new(
            "first_exceeding",
            s.first_exceeding.map_or(f64::NAN, |i| i as f64),
        ));
        for (i, name) in NAMES.iter().enumerate() {
            out.push(Measurement::new(format!("mean_abs_{name}"), s.mean_abs[i]));
            out.push(Measurement::new(format!("max_abs_{name}"), s.max_abs[i]));
        }
        out
    }
}

/// Summary produced by a [`DivergenceEvaluator`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divergence {
    pub prefixes: u64,
    pub compared: u64,
    pub non_finite_mismatches: u64,
    /// First prefix index whose absolute difference exceeds the tolerance.
    pub first_exceeding: Option<u64>,
    pub tolerance: f64,
    /// `[intercept, slope1, slope2]`
    pub mean_abs: [f64; 3],
    /// `[intercept, slope1, slope2]`
    pub max_abs: [f64; 3],
}

impl Divergence {
    /// Diffs two prefix trajectories index by index, over their common length.
    pub fn between(
        estimates: &PrefixEstimates,
        reference: &PrefixEstimates,
        tolerance: f64,
    ) -> Result<Self, Error> {
        let mut evaluator = DivergenceEvaluator::<MeanEstimator>::new(tolerance)?;
        for (e, r) in estimates.iter().zip(reference.iter()) {
            evaluator.add_pair(&e, &r);
        }
        Ok(evaluator.summary())
    }
}

impl Display for Divergence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "prefixes compared: {}/{}, finiteness mismatches: {}",
            self.compared, self.prefixes, self.non_finite_mismatches
        )?;
        for (i, name) in NAMES.iter().enumerate() {
            writeln!(
                f,
                "  {name:<9} mean |diff| = {:.3e}\tmax |diff| = {:.3e}",
                self.mean_abs[i], self.max_abs[i]
            )?;
        }
        match self.first_exceeding {
            Some(i) => write!(f, "first prefix above {:e}: {}", self.tolerance, i),
            None => write!(f, "no prefix above {:e}", self.tolerance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn est(a: f64, b1: f64, b2: f64) -> CoefficientEstimate {
        CoefficientEstimate::new(a, b1, b2)
    }

    #[test]
    fn rejects_bad_tolerance() {
        assert!(DivergenceEvaluator::<MeanEstimator>::new(-1.0).is_err());
        assert!(DivergenceEvaluator::<MeanEstimator>::new(f64::NAN).is_err());
        assert!(DivergenceEvaluator::<MeanEstimator>::new(f64::INFINITY).is_err());
        assert!(DivergenceEvaluator::<MeanEstimator>::new(0.0).is_ok());
    }

    #[test]
    fn identical_trajectories_do_not_diverge() {
        let mut ev = DivergenceEvaluator::<MeanEstimator>::new(0.0).unwrap();
        for i in 0..10 {
            let e = est(i as f64, 1.0, 2.0);
            ev.add_pair(&e, &e);
        }
        let s = ev.summary();
        assert_eq!(s.prefixes, 10);
        assert_eq!(s.compared, 10);
        assert_eq!(s.first_exceeding, None);
        assert_eq!(s.mean_abs, [0.0, 0.0, 0.0]);
        assert_eq!(s.max_abs, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn aggregates_absolute_differences() {
        let mut ev = DivergenceEvaluator::<MeanEstimator>::new(0.5).unwrap();
        ev.add_pair(&est(1.0, 0.0, 0.0), &est(1.25, 0.0, 0.0));
        ev.add_pair(&est(1.0, 2.0, 0.0), &est(0.25, 2.0, 0.0));
        ev.add_pair(&est(0.0, 0.0, 0.0), &est(0.0, 0.0, 3.0));

        let s = ev.summary();
        assert_eq!(s.compared, 3);
        assert!((s.mean_abs[0] - (0.25 + 0.75) / 3.0).abs() < 1e-12);
        assert_eq!(s.max_abs[0], 0.75);
        assert_eq!(s.max_abs[2], 3.0);
        assert_eq!(s.first_exceeding, Some(1));
        assert_eq!(ev.metric("max_abs_slope2"), Some(3.0));
        assert_eq!(ev.metric("first_exceeding"), Some(1.0));
        assert_eq!(ev.metric("no_such_metric"), None);
    }

    #[test]
    fn finiteness_is_compared_separately() {
        let mut ev = DivergenceEvaluator::<MeanEstimator>::new(1e-3).unwrap();
        ev.add_pair(&CoefficientEstimate::nan(), &CoefficientEstimate::nan());
        ev.add_pair(&est(f64::INFINITY, 0.0, 0.0), &est(1.0, 0.0, 0.0));
        ev.add_pair(&est(1.0, 1.0, 1.0), &est(1.0, 1.0, 1.0));

        let s = ev.summary();
        assert_eq!(s.prefixes, 3);
        assert_eq!(s.compared, 1);
        assert_eq!(s.non_finite_mismatches, 1);
        assert_eq!(s.first_exceeding, None);
    }

    #[test]
    fn reset_clears_everything() {
        let mut ev = DivergenceEvaluator::<MeanEstimator>::new(0.0).unwrap();
        ev.add_pair(&est(1.0, 0.0, 0.0), &est(2.0, 0.0, 0.0));
        ev.reset();
        let s = ev.summary();
        assert_eq!(s.prefixes, 0);
        assert_eq!(s.first_exceeding, None);
        assert!(s.mean_abs[0].is_nan());
    }

    #[test]
    fn between_zips_prefix_trajectories() {
        let a: PrefixEstimates = (0..4).map(|i| est(i as f64, 0.0, 0.0)).collect();
        let b: PrefixEstimates = (0..3).map(|i| est(i as f64 + 1.0, 0.0, 0.0)).collect();
        let d = Divergence::between(&a, &b, 0.5).unwrap();
        assert_eq!(d.prefixes, 3);
        assert_eq!(d.mean_abs[0], 1.0);
        assert_eq!(d.first_exceeding, Some(0));
    }
}
