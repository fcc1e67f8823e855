mod accelerator;
mod error;
mod prefix_estimates;
mod software_accelerator;

pub use accelerator::ReferenceAccelerator;
pub use error::AcceleratorError;
pub use prefix_estimates::PrefixEstimates;
pub use software_accelerator::{Precision, SoftwareAccelerator};
