use std::fmt::{Display, Formatter, Result};

/// One observation of the two-variable linear model.
///
/// Samples are immutable once produced and are consumed exactly once, in
/// arrival order, by an incremental regressor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

impl Sample {
    #[inline]
    pub fn new(x1: f64, x2: f64, y: f64) -> Self {
        Self { x1, x2, y }
    }

    /// `true` when none of the three components is NaN or infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x1.is_finite() && self.x2.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64, f64)> for Sample {
    fn from((x1, x2, y): (f64, f64, f64)) -> Self {
        Self { x1, x2, y }
    }
}

impl Display for Sample {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "x1 = {}\tx2 = {}\ty = {}", self.x1, self.x2, self.y)
    }
}
