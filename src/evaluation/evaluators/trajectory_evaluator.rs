use crate::core::CoefficientEstimate;
use crate::evaluation::Measurement;

/// Online comparison of a coefficient trajectory against a reference one,
/// fed one prefix at a time.
pub trait TrajectoryEvaluator {
    fn reset(&mut self);

    /// Feeds the estimate and the reference after the same prefix.
    fn add_pair(&mut self, estimate: &CoefficientEstimate, reference: &CoefficientEstimate);

    fn measurements(&self) -> Vec<Measurement>;

    /// Value of a single named measurement, if this evaluator reports it.
    fn metric(&self, name: &str) -> Option<f64> {
        self.measurements()
            .into_iter()
            .find(|m| m.name == name)
            .map(|m| m.value)
    }
}
