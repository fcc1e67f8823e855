use crate::tasks::RegressionBenchmark;
use crate::ui::types::build::{BuildError, build_accelerator, build_regressor, build_stream};
use crate::ui::types::choices::TaskChoice;

pub fn build_task(choice: &TaskChoice) -> Result<RegressionBenchmark, BuildError> {
    match choice {
        TaskChoice::Benchmark(p) => {
            let regressor = build_regressor(&p.regressor);
            let stream = build_stream(&p.stream)?;
            let accelerator = p.accelerator.as_ref().map(build_accelerator).transpose()?;
            Ok(RegressionBenchmark::new(
                regressor,
                stream,
                accelerator,
                p.sample_frequency,
                p.tolerance,
                p.mode,
            )?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{
        AcceleratorChoice, BenchmarkParams, LinearGeneratorParameters, PrecisionChoice,
        SoftwareParameters, StreamChoice,
    };

    #[test]
    fn zero_frequency_is_rejected() {
        let t = TaskChoice::Benchmark(BenchmarkParams {
            sample_frequency: 0,
            ..Default::default()
        });
        assert!(matches!(build_task(&t), Err(BuildError::Io(_))));
    }

    #[test]
    fn small_noise_free_task_runs_end_to_end() {
        let t = TaskChoice::Benchmark(BenchmarkParams {
            stream: StreamChoice::LinearGenerator(LinearGeneratorParameters {
                noise_fraction: 0.0,
                max_samples: 256,
                ..Default::default()
            }),
            accelerator: Some(AcceleratorChoice::Software(SoftwareParameters {
                lane_width: 4,
                precision: PrecisionChoice::Double,
            })),
            sample_frequency: 64,
            ..Default::default()
        });
        let report = build_task(&t).unwrap().run().unwrap();

        assert_eq!(report.samples, 256);
        assert_eq!(report.curve.len(), 4);
        assert!(report.core_vs_truth.unwrap().max_absolute() < 1e-6);
        assert!(report.core_vs_accelerator.unwrap().max_absolute() < 1e-6);
    }
}
