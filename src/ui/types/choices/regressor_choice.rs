use crate::ui::types::choices::{UIChoice, params_of};
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct RegressorParameters {
    #[serde(default)]
    #[schemars(
        title = "Reject Non-finite Samples",
        description = "Skip samples with NaN or infinite components instead of folding them?"
    )]
    pub reject_non_finite: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(RegressorKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum RegressorChoice {
    #[strum_discriminants(strum(
        message = "Reference Regressor",
        detailed_message = "Running means and drifting covariances, step-for-step with the accelerator."
    ))]
    Reference(RegressorParameters),

    #[strum_discriminants(strum(
        message = "Welford Regressor",
        detailed_message = "Exact streaming co-moments; the textbook online least squares."
    ))]
    Welford(RegressorParameters),
}

impl Default for RegressorChoice {
    fn default() -> Self {
        Self::Reference(RegressorParameters::default())
    }
}

impl UIChoice for RegressorChoice {
    type Kind = RegressorKind;

    fn schema() -> Schema {
        schema_for!(RegressorChoice)
    }

    fn prompt_label() -> &'static str {
        "Choose a regressor:"
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        match kind {
            RegressorKind::Reference | RegressorKind::Welford => {
                params_of(RegressorParameters::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strum::{EnumMessage, IntoEnumIterator};

    #[test]
    fn kinds_are_kebab_case() {
        let keys: Vec<&'static str> = RegressorKind::iter().map(Into::into).collect();
        assert_eq!(keys, vec!["reference", "welford"]);
        assert_eq!(RegressorKind::Welford.get_message(), Some("Welford Regressor"));
    }

    #[test]
    fn params_default_to_unchecked() {
        let c: RegressorChoice =
            serde_json::from_value(json!({ "type": "welford", "params": {} })).unwrap();
        assert_eq!(c, RegressorChoice::Welford(RegressorParameters::default()));
    }
}
