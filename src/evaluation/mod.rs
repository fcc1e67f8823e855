mod comparison;
mod estimators;
mod evaluators;
mod measurement;
mod preview;

pub use comparison::{CoefficientDelta, Delta};
pub use estimators::{Estimator, MaxEstimator, MeanEstimator};
pub use evaluators::{Divergence, DivergenceEvaluator, TrajectoryEvaluator};
pub use measurement::Measurement;
pub use preview::{CurveFormat, EstimateCurve, Snapshot};
