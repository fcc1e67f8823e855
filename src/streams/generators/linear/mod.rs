mod linear_generator;
mod model_spec;

pub use linear_generator::LinearGenerator;
pub use model_spec::{InputDomain, ModelSpec};
