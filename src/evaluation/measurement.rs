use std::fmt::{Display, Formatter, Result};

/// Named scalar produced by an evaluator or a comparison, e.g.
/// `mean_abs_slope1` or `core_vs_truth_intercept_percent`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// `name=value`, with integral values printed without a fraction.
impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if self.value.is_finite() && self.value.fract() == 0.0 && self.value.abs() < 1e15 {
            write!(f, "{}={}", self.name, self.value as i64)
        } else {
            write!(f, "{}={}", self.name, self.value)
        }
    }
}
