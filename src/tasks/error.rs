use crate::accelerator::AcceleratorError;
use crate::regressors::RegressionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error("stream produced no samples")]
    EmptyStream,

    #[error(transparent)]
    Regression(#[from] RegressionError),

    #[error(transparent)]
    Accelerator(#[from] AcceleratorError),

    #[error("accelerator `{0}` panicked")]
    AcceleratorPanicked(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
