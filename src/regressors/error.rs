use crate::core::Sample;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegressionError {
    #[error("regressor used before reset()")]
    NotInitialized,

    #[error("non-finite sample at position {position}: {sample}")]
    InvalidSample { position: u64, sample: Sample },
}
