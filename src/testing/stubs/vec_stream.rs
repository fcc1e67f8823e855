use crate::core::{CoefficientEstimate, Sample};
use crate::streams::SampleStream;
use std::io::Error;

/// Replays a fixed list of samples.
pub struct VecStream {
    pub samples: Vec<Sample>,
    pub model: Option<CoefficientEstimate>,
    idx: usize,
}

impl VecStream {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self {
            samples,
            model: None,
            idx: 0,
        }
    }

    pub fn with_model(mut self, model: CoefficientEstimate) -> Self {
        self.model = Some(model);
        self
    }
}

impl SampleStream for VecStream {
    fn has_more_samples(&self) -> bool {
        self.idx < self.samples.len()
    }

    fn next_sample(&mut self) -> Option<Sample> {
        let s = *self.samples.get(self.idx)?;
        self.idx += 1;
        Some(s)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }

    fn model(&self) -> Option<CoefficientEstimate> {
        self.model
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.samples.len() - self.idx)
    }
}
