use crate::core::{CoefficientEstimate, Sample};
use crate::regressors::RegressionError;

/// Online estimator of a bivariate least-squares fit.
///
/// A regressor starts uninitialized; [`reset`] moves it into the accumulating
/// state, after which [`update`] may be called any number of times. Samples
/// must be fed in arrival order, since the fold is not commutative.
///
/// [`reset`]: IncrementalRegressor::reset
/// [`update`]: IncrementalRegressor::update
pub trait IncrementalRegressor: Send {
    /// Short identifier used in reports and logs.
    fn name(&self) -> &'static str;

    /// Starts a fresh run with zero samples.
    fn reset(&mut self);

    /// Folds one sample in and returns the estimate over all samples so far.
    ///
    /// Fails with [`RegressionError::NotInitialized`] before the first
    /// [`reset`](IncrementalRegressor::reset). Numerical degeneracy is never
    /// an error: it surfaces as non-finite coefficients.
    fn update(&mut self, sample: &Sample) -> Result<CoefficientEstimate, RegressionError>;

    /// Samples folded in since the last reset (0 when uninitialized).
    fn samples_seen(&self) -> u64;

    /// Most recent estimate, if any sample has been folded in.
    fn latest(&self) -> Option<CoefficientEstimate>;

    /// Current determinant of the independent variables' covariance matrix.
    fn determinant(&self) -> Option<f64>;
}

/// Input checking applied by a regressor before folding a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SampleValidation {
    /// Fold everything; NaN and infinities propagate into the accumulators.
    #[default]
    Unchecked,
    /// Refuse samples with a non-finite component and leave the state as is.
    RejectNonFinite,
}

impl SampleValidation {
    pub(crate) fn check(self, position: u64, sample: &Sample) -> Result<(), RegressionError> {
        match self {
            SampleValidation::RejectNonFinite if !sample.is_finite() => {
                Err(RegressionError::InvalidSample {
                    position,
                    sample: *sample,
                })
            }
            _ => Ok(()),
        }
    }
}
