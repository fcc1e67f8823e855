use crate::tasks::ExecutionMode;
use crate::ui::cli::drivers::PromptDriver;
use crate::ui::cli::wizard::{prompt_choice, prompt_export_path};
use crate::ui::types::choices::{
    AcceleratorChoice, ExtraParams, RegressorChoice, StreamChoice, UIChoice, params_of,
};
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::path::PathBuf;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_sample_frequency() -> u64 {
    1
}

fn default_tolerance() -> f64 {
    1e-3
}

/// An absent `accelerator` keeps the comparison; `null` turns it off.
fn default_accelerator() -> Option<AcceleratorChoice> {
    Some(AcceleratorChoice::default())
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct BenchmarkParams {
    #[serde(default)]
    #[schemars(skip)]
    pub regressor: RegressorChoice,
    #[serde(default)]
    #[schemars(skip)]
    pub stream: StreamChoice,
    #[serde(default = "default_accelerator")]
    #[schemars(skip)]
    pub accelerator: Option<AcceleratorChoice>,
    #[serde(default)]
    #[schemars(skip)]
    pub export_path: Option<PathBuf>,

    #[serde(default = "default_sample_frequency")]
    #[schemars(
        title = "Sample Frequency",
        description = "Record and print the running estimate every N samples",
        range(min = 1),
        default = "default_sample_frequency"
    )]
    pub sample_frequency: u64,

    #[serde(default = "default_tolerance")]
    #[schemars(
        title = "Divergence Tolerance",
        description = "Absolute per-prefix difference counted as divergence",
        range(min = 0.0),
        default = "default_tolerance"
    )]
    pub tolerance: f64,

    #[serde(default)]
    #[schemars(
        title = "Execution Mode",
        description = "Run the accelerator after the core fold or alongside it"
    )]
    pub mode: ExecutionMode,
}

impl Default for BenchmarkParams {
    /// 16000 noisy samples, reference regressor, four-lane single precision
    /// accelerator.
    fn default() -> Self {
        Self {
            regressor: RegressorChoice::default(),
            stream: StreamChoice::default(),
            accelerator: default_accelerator(),
            export_path: None,
            sample_frequency: default_sample_frequency(),
            tolerance: default_tolerance(),
            mode: ExecutionMode::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(TaskKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum TaskChoice {
    #[strum_discriminants(strum(
        message = "Regression Benchmark",
        detailed_message = "Fold the stream incrementally and compare against the accelerator path."
    ))]
    Benchmark(BenchmarkParams),
}

impl Default for TaskChoice {
    fn default() -> Self {
        Self::Benchmark(BenchmarkParams::default())
    }
}

impl TaskChoice {
    pub fn export_path(&self) -> Option<&PathBuf> {
        match self {
            TaskChoice::Benchmark(p) => p.export_path.as_ref(),
        }
    }

    pub fn set_export_path(&mut self, path: PathBuf) {
        match self {
            TaskChoice::Benchmark(p) => p.export_path = Some(path),
        }
    }
}

impl UIChoice for TaskChoice {
    type Kind = TaskKind;

    fn schema() -> Schema {
        schema_for!(TaskChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a task:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        match kind {
            TaskKind::Benchmark => Ok(json!({
                "sample_frequency": default_sample_frequency(),
                "tolerance": default_tolerance(),
                "mode": ExecutionMode::default(),
            })),
        }
    }

    fn subprompts<D: PromptDriver>(
        driver: &D,
        kind: Self::Kind,
    ) -> Result<Option<ExtraParams>> {
        match kind {
            TaskKind::Benchmark => {
                let regressor = prompt_choice::<RegressorChoice, _>(driver)?;
                let stream = prompt_choice::<StreamChoice, _>(driver)?;
                let accelerator = if driver.ask_bool(
                    "Compare against the accelerator path?",
                    "Runs the same fit through the reference accelerator",
                    true,
                )? {
                    Some(prompt_choice::<AcceleratorChoice, _>(driver)?)
                } else {
                    None
                };
                let export_path = prompt_export_path(driver)?;

                let mut m = ExtraParams::new();
                m.insert("regressor".into(), params_of(regressor)?);
                m.insert("stream".into(), params_of(stream)?);
                m.insert("accelerator".into(), params_of(accelerator)?);
                m.insert("export_path".into(), params_of(export_path)?);
                Ok(Some(m))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{PrecisionChoice, SoftwareParameters};

    #[test]
    fn minimal_json_uses_defaults() {
        let t: TaskChoice = serde_json::from_value(json!({ "type": "benchmark", "params": {} })).unwrap();
        let TaskChoice::Benchmark(p) = t;
        assert_eq!(p.sample_frequency, 1);
        assert_eq!(p.tolerance, 1e-3);
        assert_eq!(p.mode, ExecutionMode::Sequential);
        assert_eq!(p.regressor, RegressorChoice::default());
        assert_eq!(p.accelerator, Some(AcceleratorChoice::default()));
        assert!(p.export_path.is_none());
        assert_eq!(TaskChoice::Benchmark(p), TaskChoice::default());
    }

    #[test]
    fn null_accelerator_skips_the_comparison() {
        let t: TaskChoice = serde_json::from_value(json!({
            "type": "benchmark",
            "params": { "accelerator": null }
        }))
        .unwrap();
        let TaskChoice::Benchmark(p) = t;
        assert!(p.accelerator.is_none());
    }

    #[test]
    fn default_task_runs_the_accelerator() {
        let TaskChoice::Benchmark(p) = TaskChoice::default();
        assert_eq!(p.accelerator, Some(AcceleratorChoice::default()));
    }

    #[test]
    fn full_json_round_trips() {
        let mut t = TaskChoice::Benchmark(BenchmarkParams {
            accelerator: Some(AcceleratorChoice::Software(SoftwareParameters {
                lane_width: 8,
                precision: PrecisionChoice::Double,
            })),
            mode: ExecutionMode::Concurrent,
            ..BenchmarkParams::default()
        });
        t.set_export_path(PathBuf::from("curve.csv"));

        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["type"], "benchmark");
        assert_eq!(v["params"]["mode"], "concurrent");
        assert_eq!(v["params"]["accelerator"]["params"]["precision"], "double");

        let back: TaskChoice = serde_json::from_value(v).unwrap();
        assert_eq!(back, t);
        assert_eq!(back.export_path(), Some(&PathBuf::from("curve.csv")));
    }
}
