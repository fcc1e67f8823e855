use rand::Rng;
use std::f64::consts::PI;

/// Standard normal deviate (mean 0, standard deviation 1) via Box–Muller.
///
/// A zero first draw is rejected so the logarithm stays finite.
pub fn standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let u1 = loop {
        let u: f64 = rng.random();
        if u > 0.0 {
            break u;
        }
    };
    let u2: f64 = rng.random();
    libm::sqrt(-2.0 * libm::log(u1)) * libm::cos(2.0 * PI * u2)
}

/// `(reference - value) / reference * 100`; non-finite for a zero reference.
#[inline]
pub fn percent_error(reference: f64, value: f64) -> f64 {
    (reference - value) / reference * 100.0
}
