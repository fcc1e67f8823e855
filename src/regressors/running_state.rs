use crate::core::{CoefficientEstimate, Sample};

/// Running arithmetic means of the three sample fields.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Means {
    pub x1: f64,
    pub x2: f64,
    pub y: f64,
}

/// Population-style covariance accumulators of a bivariate regression.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Covariances {
    pub x1x1: f64,
    pub x1x2: f64,
    pub x2x2: f64,
    pub yx1: f64,
    pub yx2: f64,
}

impl Covariances {
    /// Determinant of the 2×2 covariance matrix of the independent variables.
    ///
    /// Zero when `x1` and `x2` are collinear over the samples seen so far.
    #[inline]
    pub fn determinant(&self) -> f64 {
        self.x1x1 * self.x2x2 - self.x1x2 * self.x1x2
    }

    pub(crate) fn scaled(&self, factor: f64) -> Self {
        Self {
            x1x1: self.x1x1 * factor,
            x1x2: self.x1x2 * factor,
            x2x2: self.x2x2 * factor,
            yx1: self.yx1 * factor,
            yx2: self.yx2 * factor,
        }
    }
}

/// Sufficient statistics of the incremental least-squares fit.
///
/// Each call to [`fold`](RunningState::fold) makes the means exact for the
/// prefix seen so far, then adds the new sample's centered cross-products,
/// divided by the current count, to the accumulators. Earlier contributions
/// are never re-centered, so the accumulators drift away from a true
/// population covariance as the means move. The fold is therefore
/// order-dependent: permuting the same samples changes the intermediate
/// estimates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunningState {
    count: u64,
    means: Means,
    covariances: Covariances,
}

impl RunningState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to zero samples, zero means and zero accumulators.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn means(&self) -> Means {
        self.means
    }

    pub fn covariances(&self) -> Covariances {
        self.covariances
    }

    pub fn determinant(&self) -> f64 {
        self.covariances.determinant()
    }

    /// Folds one sample in and returns the estimate for the new prefix.
    pub fn fold(&mut self, sample: &Sample) -> CoefficientEstimate {
        self.count += 1;
        let n = self.count as f64;

        self.means.x1 += (sample.x1 - self.means.x1) / n;
        self.means.x2 += (sample.x2 - self.means.x2) / n;
        self.means.y += (sample.y - self.means.y) / n;

        let dx1 = sample.x1 - self.means.x1;
        let dx2 = sample.x2 - self.means.x2;
        let dy = sample.y - self.means.y;

        let cov = &mut self.covariances;
        cov.yx1 += dx1 * dy / n;
        cov.yx2 += dx2 * dy / n;
        cov.x1x2 += dx2 * dx1 / n;
        cov.x1x1 += dx1 * dx1 / n;
        cov.x2x2 += dx2 * dx2 / n;

        self.estimate()
    }

    /// Solves for the coefficients of the current prefix without mutating.
    pub fn estimate(&self) -> CoefficientEstimate {
        solve(self.count, &self.means, &self.covariances)
    }
}

/// Least-squares coefficients from means and covariances.
///
/// With at most one sample the slopes are undefined and reported as `0`. A
/// zero determinant is not guarded: the division yields `±inf` or `NaN`,
/// which then also flows into the intercept.
pub(crate) fn solve(count: u64, means: &Means, cov: &Covariances) -> CoefficientEstimate {
    let (slope1, slope2) = if count <= 1 {
        (0.0, 0.0)
    } else {
        let k = cov.determinant();
        (
            (cov.yx1 * cov.x2x2 - cov.x1x2 * cov.yx2) / k,
            (cov.x1x1 * cov.yx2 - cov.yx1 * cov.x1x2) / k,
        )
    };

    CoefficientEstimate {
        intercept: means.y - slope1 * means.x1 - slope2 * means.x2,
        slope1,
        slope2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::fixtures::{collinear_samples, plane_samples, scrambled_grid};

    fn fold_all(samples: &[Sample]) -> Vec<CoefficientEstimate> {
        let mut state = RunningState::new();
        samples.iter().map(|s| state.fold(s)).collect()
    }

    #[test]
    fn new_state_is_all_zero() {
        let state = RunningState::new();
        assert_eq!(state.count(), 0);
        assert_eq!(state.means(), Means::default());
        assert_eq!(state.covariances(), Covariances::default());
        assert_eq!(state.determinant(), 0.0);
    }

    #[test]
    fn single_sample_gives_flat_fit_through_its_y() {
        let mut state = RunningState::new();
        let est = state.fold(&Sample::new(3.0, 5.0, 7.0));
        assert_eq!(est, CoefficientEstimate::new(7.0, 0.0, 0.0));
        assert_eq!(state.count(), 1);
        assert_eq!(state.covariances(), Covariances::default());
    }

    #[test]
    fn means_are_exact_for_every_prefix() {
        let samples = [
            Sample::new(1.0, 10.0, 100.0),
            Sample::new(3.0, 20.0, 50.0),
            Sample::new(8.0, 0.0, 0.0),
            Sample::new(4.0, 2.0, 2.0),
        ];
        let mut state = RunningState::new();
        let mut sums = (0.0, 0.0, 0.0);
        for (i, s) in samples.iter().enumerate() {
            state.fold(s);
            sums = (sums.0 + s.x1, sums.1 + s.x2, sums.2 + s.y);
            let n = (i + 1) as f64;
            let m = state.means();
            assert!((m.x1 - sums.0 / n).abs() < 1e-12);
            assert!((m.x2 - sums.1 / n).abs() < 1e-12);
            assert!((m.y - sums.2 / n).abs() < 1e-12);
        }
    }

    #[test]
    fn accumulators_center_on_the_current_mean_only() {
        let mut state = RunningState::new();
        state.fold(&Sample::new(0.0, 0.0, 0.0));
        state.fold(&Sample::new(2.0, 4.0, 6.0));

        // second sample, means (1, 2, 3): centered (1, 2, 3), divided by 2
        let cov = state.covariances();
        assert_eq!(cov.x1x1, 0.5);
        assert_eq!(cov.x2x2, 2.0);
        assert_eq!(cov.x1x2, 1.0);
        assert_eq!(cov.yx1, 1.5);
        assert_eq!(cov.yx2, 3.0);

        state.fold(&Sample::new(4.0, 2.0, 0.0));
        // means (2, 2, 2): centered (2, 0, -2), divided by 3, first sample never re-centered
        let cov = state.covariances();
        assert!((cov.x1x1 - (0.5 + 4.0 / 3.0)).abs() < 1e-15);
        assert_eq!(cov.x2x2, 2.0);
        assert_eq!(cov.x1x2, 1.0);
        assert!((cov.yx1 - (1.5 - 4.0 / 3.0)).abs() < 1e-15);
        assert_eq!(cov.yx2, 3.0);
    }

    #[test]
    fn identical_inputs_make_the_fit_degenerate() {
        let mut state = RunningState::new();
        state.fold(&Sample::new(2.0, 3.0, 1.0));
        let est = state.fold(&Sample::new(2.0, 3.0, 9.0));

        assert_eq!(state.determinant(), 0.0);
        assert!(!est.slope1.is_finite());
        assert!(!est.slope2.is_finite());
        assert!(!est.intercept.is_finite());
    }

    #[test]
    fn collinear_inputs_zero_the_determinant_from_the_second_sample_on() {
        let samples = collinear_samples(50);
        let mut state = RunningState::new();

        let first = state.fold(&samples[0]);
        assert_eq!((first.slope1, first.slope2), (0.0, 0.0));

        for s in &samples[1..] {
            let est = state.fold(s);
            assert_eq!(state.determinant(), 0.0);
            assert!(!est.slope1.is_finite());
            assert!(!est.slope2.is_finite());
        }
    }

    #[test]
    fn noise_free_plane_converges_to_its_coefficients() {
        let truth = CoefficientEstimate::new(-3.5, 0.75, -0.25);
        let samples = plane_samples(truth, 200, 11);
        let estimates = fold_all(&samples);

        for est in &estimates[99..] {
            assert!((est.intercept - truth.intercept).abs() < 1e-4, "{est}");
            assert!((est.slope1 - truth.slope1).abs() < 1e-4, "{est}");
            assert!((est.slope2 - truth.slope2).abs() < 1e-4, "{est}");
        }
    }

    #[test]
    fn noise_free_orderings_agree_once_the_plane_is_determined() {
        let truth = CoefficientEstimate::new(2.0, 1.0, -1.0);
        let forward = plane_samples(truth, 120, 5);
        let mut backward = forward.clone();
        backward.reverse();

        let a = fold_all(&forward);
        let b = fold_all(&backward);

        // the first estimate is just the first sample's y
        assert_eq!(a[0].intercept, forward[0].y);
        assert_eq!(b[0].intercept, backward[0].y);
        assert_ne!(a[0].intercept, b[0].intercept);

        // exact data keeps the accumulators consistent, so every later prefix
        // solves to the plane whatever the order
        let want = truth.to_array();
        for (i, (x, y)) in a.iter().zip(&b).enumerate().skip(10) {
            for got in [x.to_array(), y.to_array()] {
                for c in 0..3 {
                    assert!((got[c] - want[c]).abs() < 1e-6, "prefix {i}: {got:?}");
                }
            }
        }
    }

    #[test]
    fn permutations_of_noisy_samples_diverge_at_intermediate_steps() {
        let forward = scrambled_grid(64);
        let mut rotated = forward.clone();
        rotated.rotate_left(17);

        let a = fold_all(&forward);
        let b = fold_all(&rotated);

        let differing = a[2..40]
            .iter()
            .zip(&b[2..40])
            .filter(|(x, y)| x != y)
            .count();
        assert!(differing > 0);
    }

    #[test]
    fn reset_discards_everything() {
        let mut state = RunningState::new();
        for s in plane_samples(CoefficientEstimate::new(1.0, 1.0, 1.0), 10, 3) {
            state.fold(&s);
        }
        state.reset();
        assert_eq!(state, RunningState::new());
    }

    #[test]
    fn estimate_does_not_mutate() {
        let mut state = RunningState::new();
        for s in plane_samples(CoefficientEstimate::new(1.0, 2.0, 3.0), 10, 9) {
            state.fold(&s);
        }
        let before = state;
        let a = state.estimate();
        let b = state.estimate();
        assert_eq!(a, b);
        assert_eq!(state, before);
    }
}
