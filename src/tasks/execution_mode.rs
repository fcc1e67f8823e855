use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How the accelerator path is scheduled relative to the core fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Concurrent,
}
