use crate::core::{CoefficientEstimate, Sample};
use crate::regressors::running_state::solve;
use crate::regressors::{Covariances, IncrementalRegressor, Means, RegressionError, SampleValidation};

#[derive(Debug, Clone, Copy, Default)]
struct Comoments {
    count: u64,
    means: Means,
    sums: Covariances,
}

impl Comoments {
    fn add(&mut self, s: &Sample) {
        self.count += 1;
        let n = self.count as f64;

        let d1 = s.x1 - self.means.x1;
        let d2 = s.x2 - self.means.x2;
        let dy = s.y - self.means.y;

        self.means.x1 += d1 / n;
        self.means.x2 += d2 / n;
        self.means.y += dy / n;

        let e1 = s.x1 - self.means.x1;
        let e2 = s.x2 - self.means.x2;

        self.sums.x1x1 += d1 * e1;
        self.sums.x1x2 += d1 * e2;
        self.sums.x2x2 += d2 * e2;
        self.sums.yx1 += dy * e1;
        self.sums.yx2 += dy * e2;
    }

    fn covariances(&self) -> Covariances {
        if self.count == 0 {
            return Covariances::default();
        }
        self.sums.scaled(1.0 / self.count as f64)
    }
}

/// Incremental regressor with exact streaming covariances.
///
/// Uses Welford's co-moment update, so after `n` samples the covariances equal
/// the two-pass population covariances up to rounding, independent of arrival
/// order. This is an alternate algorithm: its intermediate estimates differ
/// from [`BivariateRegressor`](crate::regressors::BivariateRegressor) and do
/// not match the accelerator path.
#[derive(Debug, Clone, Default)]
pub struct WelfordRegressor {
    state: Option<Comoments>,
    validation: SampleValidation,
    latest: Option<CoefficientEstimate>,
}

impl WelfordRegressor {
    pub fn new(validation: SampleValidation) -> Self {
        Self {
            state: None,
            validation,
            latest: None,
        }
    }

    /// Population covariances of the samples seen so far.
    pub fn covariances(&self) -> Option<Covariances> {
        self.state.as_ref().map(Comoments::covariances)
    }

    pub fn means(&self) -> Option<Means> {
        self.state.as_ref().map(|s| s.means)
    }
}

impl IncrementalRegressor for WelfordRegressor {
    fn name(&self) -> &'static str {
        "welford"
    }

    fn reset(&mut self) {
        self.state = Some(Comoments::default());
        self.latest = None;
    }

    fn update(&mut self, sample: &Sample) -> Result<CoefficientEstimate, RegressionError> {
        let state = self.state.as_mut().ok_or(RegressionError::NotInitialized)?;
        self.validation.check(state.count, sample)?;

        state.add(sample);
        let estimate = solve(state.count, &state.means, &state.covariances());
        self.latest = Some(estimate);
        Ok(estimate)
    }

    fn samples_seen(&self) -> u64 {
        self.state.as_ref().map_or(0, |s| s.count)
    }

    fn latest(&self) -> Option<CoefficientEstimate> {
        self.latest
    }

    fn determinant(&self) -> Option<f64> {
        self.covariances().map(|c| c.determinant())
    }
}
