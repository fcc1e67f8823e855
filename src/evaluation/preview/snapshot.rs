use serde::Serialize;
use std::fmt::{Display, Formatter, Result};

/// Running core estimate at one point of the fold.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub samples_seen: u64,
    pub intercept: f64,
    pub slope1: f64,
    pub slope2: f64,
    /// Covariance determinant `k` behind the estimate.
    pub determinant: f64,
    /// Wall-clock seconds spent folding up to this point.
    pub seconds: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, a={:.6}, b1={:.6}, b2={:.6}, k={:.3e}, t={:.3}s",
            self.samples_seen,
            self.intercept,
            self.slope1,
            self.slope2,
            self.determinant,
            self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_compact() {
        let s = Snapshot {
            samples_seen: 3,
            intercept: 1.0,
            slope1: 0.5,
            slope2: -0.25,
            determinant: 2.0,
            seconds: 0.5,
        };
        assert_eq!(
            s.to_string(),
            "seen=3, a=1.000000, b1=0.500000, b2=-0.250000, k=2.000e0, t=0.500s"
        );
    }
}
