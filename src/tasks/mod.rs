mod benchmark_report;
mod error;
mod execution_mode;
mod regression_benchmark;

pub use benchmark_report::{BenchmarkReport, PathOutcome};
pub use error::TaskError;
pub use execution_mode::ExecutionMode;
pub use regression_benchmark::RegressionBenchmark;
