mod accelerators;
mod error;
mod regressors;
mod streams;
mod tasks;

pub use error::BuildError;

pub use accelerators::build_accelerator;
pub use regressors::build_regressor;
pub use streams::build_stream;
pub use tasks::build_task;
