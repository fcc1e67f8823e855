mod divergence_evaluator;
mod trajectory_evaluator;

pub use divergence_evaluator::{Divergence, DivergenceEvaluator};
pub use trajectory_evaluator::TrajectoryEvaluator;
