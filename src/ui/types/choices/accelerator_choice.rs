use crate::ui::types::choices::{UIChoice, params_of};
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

fn default_lane_width() -> u64 {
    4
}

/// Arithmetic width of the emulated pipeline.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PrecisionChoice {
    #[default]
    Single,
    Double,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SoftwareParameters {
    #[serde(default = "default_lane_width")]
    #[schemars(
        title = "Lane Width",
        description = "Samples consumed per burst; the sample count must be a multiple of it",
        range(min = 1, max = 64),
        default = "default_lane_width"
    )]
    pub lane_width: u64,

    #[serde(default)]
    #[schemars(title = "Precision", description = "Arithmetic width of the pipeline")]
    pub precision: PrecisionChoice,
}

impl Default for SoftwareParameters {
    fn default() -> Self {
        Self {
            lane_width: default_lane_width(),
            precision: PrecisionChoice::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(AcceleratorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum AcceleratorChoice {
    #[strum_discriminants(strum(
        message = "Software Accelerator",
        detailed_message = "Emulates the dataflow engine: sums-based means, burst input."
    ))]
    Software(SoftwareParameters),
}

impl Default for AcceleratorChoice {
    fn default() -> Self {
        Self::Software(SoftwareParameters::default())
    }
}

impl UIChoice for AcceleratorChoice {
    type Kind = AcceleratorKind;

    fn schema() -> Schema {
        schema_for!(AcceleratorChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose an accelerator:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        match kind {
            AcceleratorKind::Software => params_of(SoftwareParameters::default()),
        }
    }
}
