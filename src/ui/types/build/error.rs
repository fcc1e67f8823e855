use crate::accelerator::AcceleratorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(transparent)]
    Accelerator(#[from] AcceleratorError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
