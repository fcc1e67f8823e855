use crate::accelerator::{AcceleratorError, PrefixEstimates};
use crate::core::SampleColumns;

/// Batch path that the incremental regressor is diffed and timed against.
///
/// Receives the whole sample sequence at once, as three parallel arrays, and
/// returns one estimate per prefix, in sample order. Implementations own
/// whatever buffers they need; they never see the regressor's state.
pub trait ReferenceAccelerator: Send {
    fn name(&self) -> &str;

    /// Samples consumed per burst. Inputs must be a multiple of it.
    fn lane_width(&self) -> usize;

    fn run(&mut self, columns: &SampleColumns) -> Result<PrefixEstimates, AcceleratorError>;
}
