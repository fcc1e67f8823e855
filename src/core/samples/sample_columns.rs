use crate::core::Sample;

/// A full sample sequence stored as three parallel arrays.
///
/// This is the batch layout handed to a reference accelerator. Cloning it
/// gives the accelerator an independent copy of the data, so it never shares
/// mutable state with the incremental fold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleColumns {
    pub x1: Vec<f64>,
    pub x2: Vec<f64>,
    pub y: Vec<f64>,
}

impl SampleColumns {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            x1: Vec::with_capacity(capacity),
            x2: Vec::with_capacity(capacity),
            y: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, sample: Sample) {
        self.x1.push(sample.x1);
        self.x2.push(sample.x2);
        self.y.push(sample.y);
    }

    /// Number of samples, or `None` if the three columns disagree in length.
    pub fn checked_len(&self) -> Option<usize> {
        let n = self.x1.len();
        (self.x2.len() == n && self.y.len() == n).then_some(n)
    }

    pub fn len(&self) -> usize {
        self.x1.len().min(self.x2.len()).min(self.y.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, index: usize) -> Option<Sample> {
        Some(Sample::new(
            *self.x1.get(index)?,
            *self.x2.get(index)?,
            *self.y.get(index)?,
        ))
    }

    pub fn iter(&self) -> impl Iterator<Item = Sample> + '_ {
        self.x1
            .iter()
            .zip(&self.x2)
            .zip(&self.y)
            .map(|((&x1, &x2), &y)| Sample::new(x1, x2, y))
    }
}

impl FromIterator<Sample> for SampleColumns {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut columns = Self::with_capacity(iter.size_hint().0);
        for sample in iter {
            columns.push(sample);
        }
        columns
    }
}
