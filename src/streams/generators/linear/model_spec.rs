use crate::core::CoefficientEstimate;

/// Which generating coefficients are pinned; `None` means drawn at random.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelSpec {
    pub intercept: Option<f64>,
    pub slope1: Option<f64>,
    pub slope2: Option<f64>,
}

impl ModelSpec {
    pub fn fixed(model: CoefficientEstimate) -> Self {
        Self {
            intercept: Some(model.intercept),
            slope1: Some(model.slope1),
            slope2: Some(model.slope2),
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        [self.intercept, self.slope1, self.slope2]
            .iter()
            .flatten()
            .all(|v| v.is_finite())
    }
}

/// Distribution of the independent variables `x1, x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputDomain {
    /// Uniform reals in `[0, 10]`.
    #[default]
    Continuous,
    /// Uniform integers `0..=10`.
    Integer,
}
