use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::core::{CoefficientEstimate, Sample};
use crate::streams::generators::linear::{InputDomain, ModelSpec};
use crate::streams::stream::SampleStream;
use crate::utils::math::standard_normal;

/// Synthetic stream of noisy samples from a hidden two-variable linear model.
///
/// The model is `y = intercept + slope1·x1 + slope2·x2`. Coefficients not
/// fixed through [`ModelSpec`] are drawn once per (re)start: slopes uniformly
/// in `[-1, 1]`, the intercept uniformly in `[-10, 10]`. Each sample draws
/// `x1, x2` from the [`InputDomain`] and perturbs `y` multiplicatively:
///
/// `y ← y·(1 − 2·noise)`, with `noise = N(0, 1)·noise_fraction`.
///
/// Fully reproducible from the seed.
#[derive(Debug)]
pub struct LinearGenerator {
    seed: u64,
    rng: StdRng,
    spec: ModelSpec,
    model: CoefficientEstimate,
    domain: InputDomain,
    noise_fraction: f64,
    max_samples: usize,
    produced: usize,
}

impl LinearGenerator {
    /// Returns an error if `noise_fraction ∉ [0, 1]` or a fixed coefficient
    /// is not finite.
    pub fn new(
        spec: ModelSpec,
        domain: InputDomain,
        noise_fraction: f64,
        max_samples: usize,
        seed: u64,
    ) -> Result<Self, Error> {
        if !(0.0..=1.0).contains(&noise_fraction) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "noise_fraction must be in 0.0..=1.0",
            ));
        }
        if !spec.is_finite() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "fixed model coefficients must be finite",
            ));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let model = Self::draw_model(&mut rng, &spec);
        debug!(%model, noise_fraction, max_samples, seed, "linear generator ready");

        Ok(Self {
            seed,
            rng,
            spec,
            model,
            domain,
            noise_fraction,
            max_samples,
            produced: 0,
        })
    }

    /// Generator with every coefficient drawn at random.
    pub fn random(noise_fraction: f64, max_samples: usize, seed: u64) -> Result<Self, Error> {
        Self::new(
            ModelSpec::default(),
            InputDomain::Continuous,
            noise_fraction,
            max_samples,
            seed,
        )
    }

    pub fn noise_fraction(&self) -> f64 {
        self.noise_fraction
    }

    pub fn domain(&self) -> InputDomain {
        self.domain
    }

    fn draw_model<R: Rng + ?Sized>(rng: &mut R, spec: &ModelSpec) -> CoefficientEstimate {
        let slope1 = spec
            .slope1
            .unwrap_or_else(|| rng.random_range(-1.0..=1.0));
        let slope2 = spec
            .slope2
            .unwrap_or_else(|| rng.random_range(-1.0..=1.0));
        let intercept = spec
            .intercept
            .unwrap_or_else(|| rng.random_range(-10.0..=10.0));
        CoefficientEstimate::new(intercept, slope1, slope2)
    }

    #[inline]
    fn gen_input(&mut self) -> f64 {
        match self.domain {
            InputDomain::Continuous => self.rng.random_range(0.0..=10.0),
            InputDomain::Integer => f64::from(self.rng.random_range(0u8..=10)),
        }
    }
}

impl SampleStream for LinearGenerator {
    fn has_more_samples(&self) -> bool {
        self.produced < self.max_samples
    }

    fn next_sample(&mut self) -> Option<Sample> {
        if !self.has_more_samples() {
            return None;
        }

        let noise = if self.noise_fraction > 0.0 {
            standard_normal(&mut self.rng) * self.noise_fraction
        } else {
            0.0
        };
        let x1 = self.gen_input();
        let x2 = self.gen_input();

        let y = self.model.predict(x1, x2);
        let y = if noise == 0.0 { y } else { y * (1.0 - 2.0 * noise) };

        self.produced += 1;
        Some(Sample::new(x1, x2, y))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.model = Self::draw_model(&mut self.rng, &self.spec);
        self.produced = 0;
        Ok(())
    }

    fn model(&self) -> Option<CoefficientEstimate> {
        Some(self.model)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.max_samples - self.produced)
    }
}
