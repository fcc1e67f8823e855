use crate::core::CoefficientEstimate;
use crate::evaluation::Measurement;
use crate::utils::math::percent_error;
use std::fmt::{Display, Formatter, Result};

/// Difference of one coefficient against a reference value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delta {
    /// `reference - estimate`
    pub absolute: f64,
    /// `absolute / reference * 100`; non-finite when the reference is zero.
    pub percent: f64,
}

impl Delta {
    pub fn between(estimate: f64, reference: f64) -> Self {
        Self {
            absolute: reference - estimate,
            percent: percent_error(reference, estimate),
        }
    }
}

/// Absolute and percentage deltas of a final estimate against a reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoefficientDelta {
    pub intercept: Delta,
    pub slope1: Delta,
    pub slope2: Delta,
}

impl CoefficientDelta {
    pub fn between(estimate: &CoefficientEstimate, reference: &CoefficientEstimate) -> Self {
        Self {
            intercept: Delta::between(estimate.intercept, reference.intercept),
            slope1: Delta::between(estimate.slope1, reference.slope1),
            slope2: Delta::between(estimate.slope2, reference.slope2),
        }
    }

    /// Largest absolute delta; NaN if any delta is NaN.
    pub fn max_absolute(&self) -> f64 {
        let xs = [
            self.intercept.absolute,
            self.slope1.absolute,
            self.slope2.absolute,
        ];
        if xs.iter().any(|x| x.is_nan()) {
            return f64::NAN;
        }
        xs.iter().fold(0.0, |acc: f64, x| acc.max(x.abs()))
    }

    pub fn measurements(&self, prefix: &str) -> Vec<Measurement> {
        vec![
            Measurement::new(format!("{prefix}intercept_abs"), self.intercept.absolute),
            Measurement::new(format!("{prefix}slope1_abs"), self.slope1.absolute),
            Measurement::new(format!("{prefix}slope2_abs"), self.slope2.absolute),
            Measurement::new(format!("{prefix}intercept_percent"), self.intercept.percent),
            Measurement::new(format!("{prefix}slope1_percent"), self.slope1.percent),
            Measurement::new(format!("{prefix}slope2_percent"), self.slope2.percent),
        ]
    }
}

impl Display for CoefficientDelta {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "delta:  a = {:.6}\tb1 = {:.6}\tb2 = {:.6}",
            self.intercept.absolute, self.slope1.absolute, self.slope2.absolute
        )?;
        write!(
            f,
            "error:  a = {:.4}%\tb1 = {:.4}%\tb2 = {:.4}%",
            self.intercept.percent, self.slope1.percent, self.slope2.percent
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deltas_are_reference_minus_estimate() {
        let est = CoefficientEstimate::new(1.5, 0.9, -1.2);
        let truth = CoefficientEstimate::new(2.0, 1.0, -1.0);
        let d = CoefficientDelta::between(&est, &truth);

        assert!((d.intercept.absolute - 0.5).abs() < 1e-12);
        assert!((d.intercept.percent - 25.0).abs() < 1e-9);
        assert!((d.slope1.absolute - 0.1).abs() < 1e-12);
        assert!((d.slope1.percent - 10.0).abs() < 1e-9);
        assert!((d.slope2.absolute - 0.2).abs() < 1e-12);
        assert!((d.slope2.percent + 20.0).abs() < 1e-9);
        assert!((d.max_absolute() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zero_reference_gives_non_finite_percent() {
        let d = Delta::between(1.0, 0.0);
        assert_eq!(d.absolute, -1.0);
        assert!(!d.percent.is_finite());
    }

    #[test]
    fn nan_estimate_poisons_max() {
        let d = CoefficientDelta::between(
            &CoefficientEstimate::nan(),
            &CoefficientEstimate::new(1.0, 1.0, 1.0),
        );
        assert!(d.max_absolute().is_nan());
    }

    #[test]
    fn measurements_are_prefixed() {
        let d = CoefficientDelta::between(
            &CoefficientEstimate::new(1.0, 1.0, 1.0),
            &CoefficientEstimate::new(2.0, 2.0, 2.0),
        );
        let names: Vec<String> = d.measurements("vs_truth_").into_iter().map(|m| m.name).collect();
        assert_eq!(names[0], "vs_truth_intercept_abs");
        assert_eq!(names[5], "vs_truth_slope2_percent");
    }
}
