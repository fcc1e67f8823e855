use crate::core::CoefficientEstimate;

/// Per-prefix estimates as three parallel arrays.
///
/// Entry `i` is the fit over samples `0..=i`. Both the accelerator output and
/// the incremental regressor's trajectory use this layout so they can be
/// compared index by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrefixEstimates {
    pub intercept: Vec<f64>,
    pub slope1: Vec<f64>,
    pub slope2: Vec<f64>,
}

impl PrefixEstimates {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intercept: Vec::with_capacity(capacity),
            slope1: Vec::with_capacity(capacity),
            slope2: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, estimate: CoefficientEstimate) {
        self.intercept.push(estimate.intercept);
        self.slope1.push(estimate.slope1);
        self.slope2.push(estimate.slope2);
    }

    pub fn len(&self) -> usize {
        self.intercept.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intercept.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<CoefficientEstimate> {
        Some(CoefficientEstimate::new(
            *self.intercept.get(index)?,
            *self.slope1.get(index)?,
            *self.slope2.get(index)?,
        ))
    }

    /// Estimate over the whole sequence.
    pub fn last(&self) -> Option<CoefficientEstimate> {
        self.len().checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = CoefficientEstimate> + '_ {
        (0..self.len()).filter_map(|i| self.get(i))
    }
}

impl FromIterator<CoefficientEstimate> for PrefixEstimates {
    fn from_iter<I: IntoIterator<Item = CoefficientEstimate>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut out = Self::with_capacity(iter.size_hint().0);
        for estimate in iter {
            out.push(estimate);
        }
        out
    }
}
