use crate::accelerator::{AcceleratorError, PrefixEstimates, ReferenceAccelerator};
use crate::core::{CoefficientEstimate, SampleColumns};
use crate::evaluation::{CoefficientDelta, Divergence, EstimateCurve, Snapshot};
use crate::regressors::{IncrementalRegressor, RegressionError};
use crate::streams::SampleStream;
use crate::tasks::{BenchmarkReport, ExecutionMode, PathOutcome, TaskError};
use chrono::Local;
use std::any::Any;
use std::io::{Error, ErrorKind};
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::Sender;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, error, info, warn};

/// Runs the incremental regressor and the accelerator path over the same
/// sample sequence and compares them.
pub struct RegressionBenchmark {
    regressor: Box<dyn IncrementalRegressor>,
    stream: Box<dyn SampleStream>,
    accelerator: Option<Box<dyn ReferenceAccelerator>>,

    sample_frequency: u64,
    tolerance: f64,
    mode: ExecutionMode,

    progress_tx: Option<Sender<Snapshot>>,
}

struct CoreRun {
    estimate: CoefficientEstimate,
    trajectory: PrefixEstimates,
    curve: EstimateCurve,
    skipped: u64,
    elapsed: Duration,
}

struct AcceleratorRun {
    estimates: PrefixEstimates,
    elapsed: Duration,
}

type AcceleratorOutcome = Result<Result<AcceleratorRun, AcceleratorError>, Box<dyn Any + Send>>;

impl RegressionBenchmark {
    pub fn new(
        regressor: Box<dyn IncrementalRegressor>,
        stream: Box<dyn SampleStream>,
        accelerator: Option<Box<dyn ReferenceAccelerator>>,
        sample_frequency: u64,
        tolerance: f64,
        mode: ExecutionMode,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "sample_frequency must be > 0",
            ));
        }
        if !(tolerance >= 0.0 && tolerance.is_finite()) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "tolerance must be finite and >= 0",
            ));
        }

        Ok(Self {
            regressor,
            stream,
            accelerator,
            sample_frequency,
            tolerance,
            mode,
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    pub fn run(&mut self) -> Result<BenchmarkReport, TaskError> {
        let started_at = Local::now();
        let truth = self.stream.model();
        let columns = self.drain_stream();
        if columns.is_empty() {
            return Err(TaskError::EmptyStream);
        }
        info!(
            samples = columns.len(),
            regressor = self.regressor.name(),
            accelerator = self.accelerator.as_ref().map(|a| a.name()),
            mode = ?self.mode,
            "starting benchmark"
        );

        let Self {
            regressor,
            accelerator,
            sample_frequency,
            mode,
            progress_tx,
            ..
        } = self;
        let regressor = regressor.as_mut();
        let frequency = *sample_frequency;
        let progress = progress_tx.as_ref();

        let (core, accel) = match accelerator.as_mut() {
            None => (fold_core(regressor, &columns, frequency, progress), None),
            Some(acc) => {
                let acc = acc.as_mut();
                let name = acc.name().to_string();
                let copy = columns.clone();
                let (core, outcome) = match mode {
                    ExecutionMode::Sequential => {
                        let core = fold_core(regressor, &columns, frequency, progress);
                        let outcome =
                            panic::catch_unwind(AssertUnwindSafe(|| time_accelerator(acc, &copy)));
                        (core, outcome)
                    }
                    ExecutionMode::Concurrent => thread::scope(|scope| {
                        let worker = scope.spawn(move || time_accelerator(acc, &copy));
                        let core = fold_core(regressor, &columns, frequency, progress);
                        (core, worker.join())
                    }),
                };
                (core, Some(settle(name, outcome)))
            }
        };

        let core = core?;
        let accel = accel.transpose()?;
        Ok(self.report(started_at, columns.len(), truth, core, accel)?)
    }

    fn drain_stream(&mut self) -> SampleColumns {
        let mut columns = SampleColumns::with_capacity(self.stream.size_hint().unwrap_or(0));
        while self.stream.has_more_samples() {
            let Some(sample) = self.stream.next_sample() else {
                break;
            };
            columns.push(sample);
        }
        debug!(samples = columns.len(), "stream drained");
        columns
    }

    fn report(
        &self,
        started_at: chrono::DateTime<Local>,
        samples: usize,
        truth: Option<CoefficientEstimate>,
        core: CoreRun,
        accel: Option<(String, AcceleratorRun)>,
    ) -> Result<BenchmarkReport, Error> {
        let core_outcome = PathOutcome {
            name: self.regressor.name().to_string(),
            estimate: core.estimate,
            elapsed: core.elapsed,
        };

        let (accelerator, accelerator_estimates, divergence) = match accel {
            Some((name, run)) => {
                let divergence = Divergence::between(&core.trajectory, &run.estimates, self.tolerance)?;
                let outcome = PathOutcome {
                    name,
                    estimate: run.estimates.last().unwrap_or_else(CoefficientEstimate::nan),
                    elapsed: run.elapsed,
                };
                (Some(outcome), Some(run.estimates), Some(divergence))
            }
            None => (None, None, None),
        };

        let core_vs_accelerator = accelerator
            .as_ref()
            .map(|a| CoefficientDelta::between(&core_outcome.estimate, &a.estimate));
        let core_vs_truth = truth.map(|t| CoefficientDelta::between(&core_outcome.estimate, &t));
        let accelerator_vs_truth = truth
            .zip(accelerator.as_ref())
            .map(|(t, a)| CoefficientDelta::between(&a.estimate, &t));

        info!(
            core_ms = core_outcome.elapsed.as_secs_f64() * 1e3,
            accelerator_ms = accelerator.as_ref().map(|a| a.elapsed.as_secs_f64() * 1e3),
            skipped = core.skipped,
            "benchmark finished"
        );

        Ok(BenchmarkReport {
            started_at,
            samples,
            skipped: core.skipped,
            truth,
            core: core_outcome,
            accelerator,
            core_vs_accelerator,
            core_vs_truth,
            accelerator_vs_truth,
            divergence,
            curve: core.curve,
            trajectory: core.trajectory,
            accelerator_estimates,
        })
    }
}

fn fold_core(
    regressor: &mut dyn IncrementalRegressor,
    columns: &SampleColumns,
    sample_frequency: u64,
    progress: Option<&Sender<Snapshot>>,
) -> Result<CoreRun, RegressionError> {
    let mut trajectory = PrefixEstimates::with_capacity(columns.len());
    let mut curve = EstimateCurve::default();
    let mut skipped = 0;
    let mut previous = None;

    let start = Instant::now();
    let mut compute = Duration::ZERO;
    regressor.reset();

    for (i, sample) in columns.iter().enumerate() {
        let seen = i as u64 + 1;
        let tick = Instant::now();
        let outcome = regressor.update(&sample);
        compute += tick.elapsed();
        match outcome {
            Ok(estimate) => {
                trajectory.push(estimate);
                previous = Some(estimate);
            }
            Err(RegressionError::InvalidSample { .. }) => {
                warn!(index = i, %sample, "skipping invalid sample");
                skipped += 1;
                trajectory.push(previous.unwrap_or_else(CoefficientEstimate::nan));
            }
            Err(e) => return Err(e),
        }

        if seen % sample_frequency == 0 {
            push_snapshot(&mut curve, regressor, seen, start, progress);
        }
    }

    let total = columns.len() as u64;
    if curve.latest().map(|s| s.samples_seen) != Some(total) {
        push_snapshot(&mut curve, regressor, total, start, progress);
    }

    Ok(CoreRun {
        estimate: previous.unwrap_or_else(CoefficientEstimate::nan),
        trajectory,
        curve,
        skipped,
        elapsed: compute,
    })
}

fn push_snapshot(
    curve: &mut EstimateCurve,
    regressor: &dyn IncrementalRegressor,
    seen: u64,
    start: Instant,
    progress: Option<&Sender<Snapshot>>,
) {
    let estimate = regressor.latest().unwrap_or_else(CoefficientEstimate::nan);
    let snapshot = Snapshot {
        samples_seen: seen,
        intercept: estimate.intercept,
        slope1: estimate.slope1,
        slope2: estimate.slope2,
        determinant: regressor.determinant().unwrap_or(f64::NAN),
        seconds: start.elapsed().as_secs_f64(),
    };

    if let Some(tx) = progress {
        let _ = tx.send(snapshot);
    }
    curve.push(snapshot);
}

fn time_accelerator(
    accelerator: &mut dyn ReferenceAccelerator,
    columns: &SampleColumns,
) -> Result<AcceleratorRun, AcceleratorError> {
    let start = Instant::now();
    let estimates = accelerator.run(columns)?;
    Ok(AcceleratorRun {
        estimates,
        elapsed: start.elapsed(),
    })
}

fn settle(name: String, outcome: AcceleratorOutcome) -> Result<(String, AcceleratorRun), TaskError> {
    match outcome {
        Ok(Ok(run)) => Ok((name, run)),
        Ok(Err(e)) => Err(e.into()),
        Err(payload) => {
            let msg = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_default();
            error!(accelerator = %name, panic = %msg, "accelerator panicked");
            Err(TaskError::AcceleratorPanicked(name))
        }
    }
}
