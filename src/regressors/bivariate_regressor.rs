use crate::core::{CoefficientEstimate, Sample};
use crate::regressors::{IncrementalRegressor, RegressionError, RunningState, SampleValidation};

/// Incremental regressor reproducing the reference accumulation policy.
///
/// Wraps a [`RunningState`] with the uninitialized/accumulating lifecycle and
/// optional input validation. Its output is meant to match the accelerator
/// path step for step, drift included.
#[derive(Debug, Clone, Default)]
pub struct BivariateRegressor {
    state: Option<RunningState>,
    validation: SampleValidation,
    latest: Option<CoefficientEstimate>,
}

impl BivariateRegressor {
    pub fn new(validation: SampleValidation) -> Self {
        Self {
            state: None,
            validation,
            latest: None,
        }
    }

    pub fn validation(&self) -> SampleValidation {
        self.validation
    }

    /// `None` until [`reset`](IncrementalRegressor::reset) has been called.
    pub fn state(&self) -> Option<&RunningState> {
        self.state.as_ref()
    }
}

impl IncrementalRegressor for BivariateRegressor {
    fn name(&self) -> &'static str {
        "reference"
    }

    fn reset(&mut self) {
        self.state = Some(RunningState::new());
        self.latest = None;
    }

    fn update(&mut self, sample: &Sample) -> Result<CoefficientEstimate, RegressionError> {
        let state = self.state.as_mut().ok_or(RegressionError::NotInitialized)?;
        self.validation.check(state.count(), sample)?;

        let estimate = state.fold(sample);
        self.latest = Some(estimate);
        Ok(estimate)
    }

    fn samples_seen(&self) -> u64 {
        self.state.as_ref().map_or(0, RunningState::count)
    }

    fn latest(&self) -> Option<CoefficientEstimate> {
        self.latest
    }

    fn determinant(&self) -> Option<f64> {
        self.state.as_ref().map(RunningState::determinant)
    }
}
