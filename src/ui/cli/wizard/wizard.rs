use anyhow::{Context, Result, anyhow};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use strum::{EnumMessage, IntoEnumIterator};

use crate::ui::cli::drivers::{Bounds, PromptDriver};
use crate::ui::types::choices::{FieldKind, FieldSpec, UIChoice, specs_for_kind};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

const EXPORT_EXTENSIONS: [&str; 3] = ["csv", "tsv", "json"];

fn kind_items<K>() -> Vec<(K, String)>
where
    K: Copy + Into<&'static str> + EnumMessage + IntoEnumIterator,
{
    K::iter()
        .map(|k| {
            let label = k.get_message().unwrap_or_else(|| k.into());
            let desc = k.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            (k, text)
        })
        .collect()
}

/// Walks the user through picking a variant of `C` and filling its params.
pub fn prompt_choice<C: UIChoice, D: PromptDriver>(driver: &D) -> Result<C> {
    let items = kind_items::<C::Kind>();
    let labels: Vec<String> = items.iter().map(|(_, text)| text.clone()).collect();

    let picked = driver.ask_select(
        C::prompt_label(),
        C::prompt_help().unwrap_or(""),
        &labels,
        0,
    )?;
    let choice_kind = items
        .get(picked)
        .map(|(k, _)| *k)
        .ok_or_else(|| anyhow!("selection {picked} out of range"))?;

    let key: &'static str = choice_kind.into();
    let specs = specs_for_kind(&C::schema(), key)?;
    let defaults = C::default_params(choice_kind)?;

    let mut params = Map::new();
    for s in specs {
        let init = s.default.clone().or_else(|| defaults.get(&s.name).cloned());
        if let Some(val) = prompt_field(driver, &s, init)? {
            params.insert(s.name.clone(), val);
        }
    }

    if let Some(extra) = C::subprompts(driver, choice_kind)? {
        params.extend(extra);
    }
    C::from_parts(choice_kind, Value::Object(params))
}

fn prompt_field<D: PromptDriver>(
    driver: &D,
    s: &FieldSpec,
    init: Option<Value>,
) -> Result<Option<Value>> {
    let help = s.description.as_deref().unwrap_or("");

    let is_optional_numeric = !s.required
        && matches!(s.kind, FieldKind::Integer | FieldKind::Number)
        && matches!(init, None | Some(Value::Null));

    if is_optional_numeric {
        let def_txt = init
            .as_ref()
            .filter(|v| !v.is_null())
            .map(|v| v.to_string())
            .unwrap_or_default();

        let answer = driver.ask_string(
            &s.title,
            &format!("{help}\n(leave blank for none)"),
            &def_txt,
        )?;

        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        let value = match s.kind {
            FieldKind::Integer => {
                let n: u64 = answer
                    .parse()
                    .with_context(|| format!("invalid integer for {}", s.title))?;
                Value::from(n)
            }
            _ => {
                let x: f64 = answer
                    .parse()
                    .with_context(|| format!("invalid number for {}", s.title))?;
                Value::from(x)
            }
        };
        return Ok(Some(value));
    }

    let value = match s.kind {
        FieldKind::Boolean => {
            let def = init.and_then(|v| v.as_bool()).unwrap_or(false);
            Value::Bool(driver.ask_bool(&s.title, help, def)?)
        }
        FieldKind::String => {
            let def = init
                .and_then(|v| v.as_str().map(|s| s.to_string()))
                .unwrap_or_default();
            Value::String(driver.ask_string(&s.title, help, &def)?)
        }
        FieldKind::Integer => {
            let def = init.and_then(|v| v.as_u64()).unwrap_or(0);
            let bounds = Bounds::new(s.min.map(|x| x as u64), s.max.map(|x| x as u64));
            Value::from(driver.ask_u64(&s.title, help, def, bounds)?)
        }
        FieldKind::Number => {
            let def = init.and_then(|v| v.as_f64()).unwrap_or(0.0);
            Value::from(driver.ask_f64(&s.title, help, def, Bounds::new(s.min, s.max))?)
        }
        FieldKind::Choice => {
            let def = init
                .as_ref()
                .and_then(|v| v.as_str())
                .and_then(|d| s.options.iter().position(|o| o == d))
                .unwrap_or(0);
            let idx = driver.ask_select(&s.title, help, &s.options, def)?;
            let picked = s
                .options
                .get(idx)
                .ok_or_else(|| anyhow!("selection {idx} out of range for {}", s.title))?;
            Value::String(picked.clone())
        }
    };
    Ok(Some(value))
}

fn validate_export_path(input: &str, allowed_exts: &[&str]) -> Result<(), String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(());
    }
    let p = Path::new(trimmed);

    if p.is_dir() {
        return Err("Expected a file path, not a directory".into());
    }
    if let Some(parent) = p.parent().filter(|d| !d.as_os_str().is_empty()) {
        if !parent.is_dir() {
            return Err(format!("Directory does not exist: {}", parent.display()));
        }
    }
    match p.extension().and_then(|e| e.to_str()) {
        Some(ext) if allowed_exts.iter().any(|e| e.eq_ignore_ascii_case(ext)) => Ok(()),
        _ => Err(format!("Expected a .{} file", allowed_exts.join(" / ."))),
    }
}

/// Asks where to write the estimate curve; blank means no export.
pub fn prompt_export_path<D: PromptDriver>(driver: &D) -> Result<Option<PathBuf>> {
    loop {
        let answer = driver.ask_string(
            "Export curve to",
            "Path ending in .csv, .tsv or .json (leave blank to skip)",
            "",
        )?;
        match validate_export_path(&answer, &EXPORT_EXTENSIONS) {
            Ok(()) if answer.trim().is_empty() => return Ok(None),
            Ok(()) => return Ok(Some(PathBuf::from(answer.trim()))),
            Err(msg) => eprintln!("✗ {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::ExecutionMode;
    use crate::testing::ScriptedDriver;
    use crate::testing::stubs::Answer;
    use crate::ui::types::choices::{
        BenchmarkParams, LinearGeneratorParameters, RegressorChoice, RegressorParameters,
        StreamChoice, TaskChoice,
    };
    use tempfile::tempdir;

    #[test]
    fn accepting_every_default_gives_the_reference_task() {
        let driver = ScriptedDriver::default();
        let task = prompt_choice::<TaskChoice, _>(&driver).unwrap();
        assert_eq!(task, TaskChoice::default());
        assert!(driver.asked().iter().any(|t| t == "Noise Fraction"));
    }

    #[test]
    fn scripted_answers_fill_every_level() {
        let driver = ScriptedDriver::new([
            Answer::Select(0),
            Answer::U64(100),
            Answer::F64(1e-6),
            Answer::Select(1),
            Answer::Select(1),
            Answer::Bool(true),
            Answer::Select(0),
            Answer::F64(0.0),
            Answer::U64(400),
            Answer::Bool(true),
            Answer::Str("2".into()),
            Answer::Str("1".into()),
            Answer::Str("".into()),
            Answer::U64(7),
            Answer::Bool(false),
            Answer::Str("".into()),
        ]);
        let TaskChoice::Benchmark(p) = prompt_choice::<TaskChoice, _>(&driver).unwrap();

        assert!(driver.is_exhausted());
        assert_eq!(
            p,
            BenchmarkParams {
                regressor: RegressorChoice::Welford(RegressorParameters {
                    reject_non_finite: true
                }),
                stream: StreamChoice::LinearGenerator(LinearGeneratorParameters {
                    noise_fraction: 0.0,
                    max_samples: 400,
                    integer_inputs: true,
                    intercept: Some(2.0),
                    slope1: Some(1.0),
                    slope2: None,
                    seed: 7,
                }),
                accelerator: None,
                export_path: None,
                sample_frequency: 100,
                tolerance: 1e-6,
                mode: ExecutionMode::Concurrent,
            }
        );
    }

    #[test]
    fn optional_number_rejects_garbage() {
        let driver = ScriptedDriver::new([
            Answer::Select(0),
            Answer::U64(1),
            Answer::F64(1e-3),
            Answer::Select(0),
            Answer::Select(0),
            Answer::Bool(false),
            Answer::Select(0),
            Answer::F64(0.25),
            Answer::U64(16),
            Answer::Bool(false),
            Answer::Str("two".into()),
        ]);
        let err = prompt_choice::<TaskChoice, _>(&driver).unwrap_err();
        assert!(err.to_string().contains("Intercept"));
    }

    #[test]
    fn export_path_validation() {
        let dir = tempdir().unwrap();
        let ok = dir.path().join("curve.csv");
        assert!(validate_export_path("", &EXPORT_EXTENSIONS).is_ok());
        assert!(validate_export_path(ok.to_str().unwrap(), &EXPORT_EXTENSIONS).is_ok());
        assert!(validate_export_path("curve.JSON", &EXPORT_EXTENSIONS).is_ok());

        let dir_str = dir.path().to_str().unwrap();
        assert!(validate_export_path(dir_str, &EXPORT_EXTENSIONS).is_err());

        let txt = dir.path().join("curve.txt");
        assert!(validate_export_path(txt.to_str().unwrap(), &EXPORT_EXTENSIONS).is_err());

        let missing = dir.path().join("nope").join("curve.csv");
        assert!(validate_export_path(missing.to_str().unwrap(), &EXPORT_EXTENSIONS).is_err());
    }

    #[test]
    fn export_prompt_retries_until_valid() {
        let driver = ScriptedDriver::new([
            Answer::Str("curve.txt".into()),
            Answer::Str(" curve.tsv ".into()),
        ]);
        let path = prompt_export_path(&driver).unwrap();
        assert_eq!(path, Some(PathBuf::from("curve.tsv")));
    }
}
