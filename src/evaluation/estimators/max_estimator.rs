use crate::evaluation::estimators::Estimator;

/// Running maximum.
#[derive(Debug, Clone, Copy)]
pub struct MaxEstimator {
    len: u64,
    max: f64,
}

impl Default for MaxEstimator {
    fn default() -> Self {
        Self {
            len: 0,
            max: f64::NEG_INFINITY,
        }
    }
}

impl Estimator for MaxEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1;
        self.max = self.max.max(v);
    }

    fn estimation(&self) -> f64 {
        if self.len > 0 { self.max } else { f64::NAN }
    }

    fn observations(&self) -> u64 {
        self.len
    }
}
