use crate::ui::types::choices::{UIChoice, params_of};
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_noise_fraction() -> f64 {
    0.25
}

fn default_max_samples() -> u64 {
    16_000
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LinearGeneratorParameters {
    #[serde(default = "default_noise_fraction")]
    #[schemars(
        title = "Noise Fraction",
        description = "Scale of the Gaussian perturbation applied to y (0.0–1.0)",
        range(min = 0.0, max = 1.0),
        default = "default_noise_fraction"
    )]
    pub noise_fraction: f64,

    #[serde(default = "default_max_samples")]
    #[schemars(
        title = "Samples",
        description = "Number of samples to generate",
        range(min = 1),
        default = "default_max_samples"
    )]
    pub max_samples: u64,

    #[serde(default)]
    #[schemars(
        title = "Integer Inputs",
        description = "Draw x1 and x2 as integers in 0..=10 instead of reals in [0, 10]?"
    )]
    pub integer_inputs: bool,

    #[serde(default)]
    #[schemars(
        title = "Intercept",
        description = "Fixed intercept; empty = random in [-10, 10]"
    )]
    pub intercept: Option<f64>,

    #[serde(default)]
    #[schemars(title = "Slope 1", description = "Fixed slope of x1; empty = random in [-1, 1]")]
    pub slope1: Option<f64>,

    #[serde(default)]
    #[schemars(title = "Slope 2", description = "Fixed slope of x2; empty = random in [-1, 1]")]
    pub slope2: Option<f64>,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for LinearGeneratorParameters {
    fn default() -> Self {
        Self {
            noise_fraction: default_noise_fraction(),
            max_samples: default_max_samples(),
            integer_inputs: false,
            intercept: None,
            slope1: None,
            slope2: None,
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(StreamKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum StreamChoice {
    #[strum_discriminants(strum(
        message = "Linear Generator",
        detailed_message = "Noisy samples of y = a + b1·x1 + b2·x2 with hidden coefficients."
    ))]
    LinearGenerator(LinearGeneratorParameters),
}

impl Default for StreamChoice {
    fn default() -> Self {
        Self::LinearGenerator(LinearGeneratorParameters::default())
    }
}

impl UIChoice for StreamChoice {
    type Kind = StreamKind;

    fn schema() -> Schema {
        schema_for!(StreamChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a stream:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        match kind {
            StreamKind::LinearGenerator => {
                params_of(LinearGeneratorParameters::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_apply_reference_defaults() {
        let p: LinearGeneratorParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, LinearGeneratorParameters::default());
        assert_eq!(p.noise_fraction, 0.25);
        assert_eq!(p.max_samples, 16_000);
        assert_eq!(p.seed, 42);
        assert!(p.intercept.is_none());
    }

    #[test]
    fn tagged_enum_serialization() {
        let v = serde_json::to_value(StreamChoice::default()).unwrap();
        assert_eq!(v["type"], "linear-generator");
        assert_eq!(v["params"]["max_samples"], 16_000);
        assert!(v["params"]["slope1"].is_null());
    }

    #[test]
    fn fixed_coefficients_deserialize() {
        let c: StreamChoice = serde_json::from_value(json!({
            "type": "linear-generator",
            "params": { "intercept": 2.0, "slope1": 1.0, "slope2": 1.0, "noise_fraction": 0.0 }
        }))
        .unwrap();
        let StreamChoice::LinearGenerator(p) = c;
        assert_eq!(p.intercept, Some(2.0));
        assert_eq!(p.noise_fraction, 0.0);
        assert_eq!(p.max_samples, 16_000);
    }

    #[test]
    fn default_params_rebuild() {
        let v = <StreamChoice as UIChoice>::default_params(StreamKind::LinearGenerator).unwrap();
        let rebuilt = <StreamChoice as UIChoice>::from_parts(StreamKind::LinearGenerator, v).unwrap();
        assert_eq!(rebuilt, StreamChoice::default());
    }
}
