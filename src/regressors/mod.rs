mod bivariate_regressor;
mod error;
mod regressor;
mod running_state;
mod welford_regressor;

pub use bivariate_regressor::BivariateRegressor;
pub use error::RegressionError;
pub use regressor::{IncrementalRegressor, SampleValidation};
pub use running_state::{Covariances, Means, RunningState};
pub use welford_regressor::WelfordRegressor;
