use crate::accelerator::PrefixEstimates;
use crate::core::CoefficientEstimate;
use crate::evaluation::{CoefficientDelta, Divergence, EstimateCurve, Measurement};
use chrono::{DateTime, Local};
use std::time::Duration;

/// Final estimate and compute time of one path.
#[derive(Debug, Clone, PartialEq)]
pub struct PathOutcome {
    pub name: String,
    pub estimate: CoefficientEstimate,
    /// Time spent computing estimates. For the core path this sums the
    /// `update` calls only; snapshots and progress messages are excluded.
    pub elapsed: Duration,
}

impl PathOutcome {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

/// Everything a benchmark run produced.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub started_at: DateTime<Local>,
    pub samples: usize,
    /// Samples the regressor rejected; their trajectory slots repeat the
    /// previous estimate.
    pub skipped: u64,
    pub truth: Option<CoefficientEstimate>,
    pub core: PathOutcome,
    pub accelerator: Option<PathOutcome>,
    /// Core final estimate against the accelerator's.
    pub core_vs_accelerator: Option<CoefficientDelta>,
    pub core_vs_truth: Option<CoefficientDelta>,
    pub accelerator_vs_truth: Option<CoefficientDelta>,
    pub divergence: Option<Divergence>,
    pub curve: EstimateCurve,
    pub trajectory: PrefixEstimates,
    pub accelerator_estimates: Option<PrefixEstimates>,
}

impl BenchmarkReport {
    /// Flat list of every numeric outcome, for logging or export.
    pub fn measurements(&self) -> Vec<Measurement> {
        let mut out = vec![
            Measurement::new("samples", self.samples as f64),
            Measurement::new("skipped", self.skipped as f64),
            Measurement::new("core_ms", self.core.millis()),
        ];
        if let Some(acc) = &self.accelerator {
            out.push(Measurement::new("accelerator_ms", acc.millis()));
        }
        let deltas = [
            ("core_vs_accelerator_", &self.core_vs_accelerator),
            ("core_vs_truth_", &self.core_vs_truth),
            ("accelerator_vs_truth_", &self.accelerator_vs_truth),
        ];
        for (prefix, delta) in deltas {
            if let Some(d) = delta {
                out.extend(d.measurements(prefix));
            }
        }
        if let Some(d) = &self.divergence {
            out.push(Measurement::new("divergence_compared", d.compared as f64));
            out.push(Measurement::new(
                "divergence_mismatches",
                d.non_finite_mismatches as f64,
            ));
        }
        out
    }
}
