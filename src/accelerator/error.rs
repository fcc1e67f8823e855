use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AcceleratorError {
    #[error("no samples to process")]
    Empty,

    #[error("input columns differ in length")]
    LengthMismatch,

    #[error("{len} samples is not a multiple of the lane width {lane_width}")]
    UnalignedLength { len: usize, lane_width: usize },

    #[error("lane width must be at least 1")]
    InvalidLaneWidth,
}
