use std::fmt::{Display, Formatter, Result};

/// Coefficients of `y ≈ intercept + slope1·x1 + slope2·x2`.
///
/// Produced once per folded sample by an incremental regressor; also used to
/// describe the hidden parameters of a synthetic stream.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CoefficientEstimate {
    pub intercept: f64,
    pub slope1: f64,
    pub slope2: f64,
}

impl CoefficientEstimate {
    #[inline]
    pub fn new(intercept: f64, slope1: f64, slope2: f64) -> Self {
        Self {
            intercept,
            slope1,
            slope2,
        }
    }

    /// All-NaN estimate, used where no estimate exists yet.
    pub fn nan() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    #[inline]
    pub fn predict(&self, x1: f64, x2: f64) -> f64 {
        self.intercept + self.slope1 * x1 + self.slope2 * x2
    }

    pub fn is_finite(&self) -> bool {
        self.intercept.is_finite() && self.slope1.is_finite() && self.slope2.is_finite()
    }

    /// `[intercept, slope1, slope2]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.intercept, self.slope1, self.slope2]
    }
}

impl Display for CoefficientEstimate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "y = {:.6} + x1 * {:.6} + x2 * {:.6}",
            self.intercept, self.slope1, self.slope2
        )
    }
}
