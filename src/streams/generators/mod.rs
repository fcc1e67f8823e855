mod linear;

pub use linear::{InputDomain, LinearGenerator, ModelSpec};
