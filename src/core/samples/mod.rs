mod sample;
mod sample_columns;

pub use sample::Sample;
pub use sample_columns::SampleColumns;
