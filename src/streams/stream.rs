use crate::core::{CoefficientEstimate, Sample};
use std::io::Error;

/// Pull-based source of [`Sample`]s feeding an incremental regressor.
///
/// Implementations may be finite (a recorded sequence) or bounded generators.
/// Samples are yielded in the order the regressor must consume them.
pub trait SampleStream: Send {
    /// Indicates whether the stream *may* produce more samples.
    ///
    /// If this returns `false`, a subsequent call to [`next_sample`] must
    /// return `None`.
    ///
    /// [`next_sample`]: SampleStream::next_sample
    fn has_more_samples(&self) -> bool;

    /// Produces the next sample, or `None` once the stream is exhausted.
    fn next_sample(&mut self) -> Option<Sample>;

    /// Rewinds the stream so it replays the same sequence from the start.
    ///
    /// Generators re-seed their RNG and clear counters.
    fn restart(&mut self) -> Result<(), Error>;

    /// Hidden parameters the samples were generated from, when known.
    fn model(&self) -> Option<CoefficientEstimate> {
        None
    }

    /// Number of samples left, when known.
    fn size_hint(&self) -> Option<usize> {
        None
    }
}
