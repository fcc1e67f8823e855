use crate::ui::cli::drivers::PromptDriver;
use anyhow::{Context, Result};
use schemars::{JsonSchema, Schema};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value, json};
use strum::{EnumMessage, IntoEnumIterator};

/// Params gathered outside the schema walk, merged over the prompted ones.
pub type ExtraParams = Map<String, Value>;

/// A `{ "type": kind, "params": {..} }` enum the wizard can fill field by
/// field from its JSON schema.
pub trait UIChoice: Sized + Serialize + DeserializeOwned + JsonSchema {
    type Kind: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator;

    fn schema() -> Schema;

    fn prompt_label() -> &'static str;

    fn prompt_help() -> Option<&'static str> {
        Some("↑/↓ to navigate, ↵ to select")
    }

    /// Serialized tag of `kind`.
    fn key(kind: Self::Kind) -> &'static str {
        kind.into()
    }

    /// Values offered as prompt defaults when the schema carries none.
    fn default_params(kind: Self::Kind) -> Result<Value>;

    /// Nested choices (regressor, stream, accelerator) and anything else the
    /// flat field walk cannot express.
    fn subprompts<D: PromptDriver>(_driver: &D, _kind: Self::Kind) -> Result<Option<ExtraParams>> {
        Ok(None)
    }

    fn from_parts(kind: Self::Kind, params: Value) -> Result<Self> {
        let key = Self::key(kind);
        serde_json::from_value(json!({ "type": key, "params": params }))
            .with_context(|| format!("invalid params for `{key}`"))
    }
}

/// Serializes a parameter struct for [`UIChoice::default_params`].
pub fn params_of<P: Serialize>(params: P) -> Result<Value> {
    Ok(serde_json::to_value(params)?)
}
