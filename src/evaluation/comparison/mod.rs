mod coefficient_delta;

pub use coefficient_delta::{CoefficientDelta, Delta};
