pub mod coefficients;
pub mod samples;

pub use coefficients::CoefficientEstimate;
pub use samples::{Sample, SampleColumns};
