mod estimator;
mod max_estimator;
mod mean_estimator;

pub use estimator::Estimator;
pub use max_estimator::MaxEstimator;
pub use mean_estimator::MeanEstimator;
