use crate::accelerator::{AcceleratorError, PrefixEstimates, ReferenceAccelerator};
use crate::core::SampleColumns;

/// Always fails with the given error.
pub struct FailingAccelerator(pub AcceleratorError);

impl ReferenceAccelerator for FailingAccelerator {
    fn name(&self) -> &str {
        "failing"
    }

    fn lane_width(&self) -> usize {
        1
    }

    fn run(&mut self, _columns: &SampleColumns) -> Result<PrefixEstimates, AcceleratorError> {
        Err(self.0.clone())
    }
}

/// Panics inside `run`, standing in for a crashed device driver.
pub struct PanickingAccelerator;

impl ReferenceAccelerator for PanickingAccelerator {
    fn name(&self) -> &str {
        "panicking"
    }

    fn lane_width(&self) -> usize {
        1
    }

    fn run(&mut self, _columns: &SampleColumns) -> Result<PrefixEstimates, AcceleratorError> {
        panic!("device lost")
    }
}
