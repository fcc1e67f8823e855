use crate::ui::types::choices::TaskChoice;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads a `{"type": "benchmark", "params": {...}}` task description.
pub fn load_task<P: AsRef<Path>>(path: P) -> Result<TaskChoice> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read task file {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("failed to parse task file {}", path.display()))
}
