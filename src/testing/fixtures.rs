use crate::core::{CoefficientEstimate, Sample};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Noise-free samples on the plane `truth`, inputs uniform in `[0, 10]`.
pub fn plane_samples(truth: CoefficientEstimate, n: usize, seed: u64) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x1 = rng.random_range(0.0..=10.0);
            let x2 = rng.random_range(0.0..=10.0);
            Sample::new(x1, x2, truth.predict(x1, x2))
        })
        .collect()
}

/// `x1 = 2·x2` exactly, so every prefix past the first is degenerate.
pub fn collinear_samples(n: usize) -> Vec<Sample> {
    let mut rng = StdRng::seed_from_u64(n as u64);
    (0..n)
        .map(|_| {
            let x2: f64 = rng.random_range(0.0..=10.0);
            let y = rng.random_range(-5.0..=5.0);
            Sample::new(2.0 * x2, x2, y)
        })
        .collect()
}

/// Deterministic, non-collinear samples with a bounded residual.
pub fn scrambled_grid(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let x1 = (i * 7 % 11) as f64;
            let x2 = (i * 3 % 13) as f64;
            let residual = ((i * 37 % 17) as f64 - 8.0) * 0.1;
            Sample::new(x1, x2, 1.0 + 0.5 * x1 - 0.25 * x2 + residual)
        })
        .collect()
}
