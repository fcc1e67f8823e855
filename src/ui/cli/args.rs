use std::ffi::OsString;
use std::path::PathBuf;
use thiserror::Error;

pub const USAGE: &str = "\
usage: streamreg [--verbose] [--defaults | <task.json>] [--export <curve.csv|.tsv|.json>]

  (no task)    build the task interactively
  --defaults   reference run: 16000 noisy samples, software accelerator
  <task.json>  load {\"type\": \"benchmark\", \"params\": {...}}
  --export     write the estimate curve, format from the extension
  --verbose    debug logging on stderr";

#[derive(Debug, Error)]
pub enum ArgsError {
    #[error(transparent)]
    Parse(#[from] pico_args::Error),

    #[error("--export needs a path, got option `{0}`")]
    ExportWithoutPath(String),

    #[error("unknown option {0:?}")]
    UnknownOption(OsString),

    #[error("extra arguments: {0:?}")]
    TrailingArgs(Vec<OsString>),

    #[error("give either --defaults or a task file, not both")]
    ConflictingSources,
}

/// Where the task description comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskSource {
    Wizard,
    Defaults,
    File(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub source: TaskSource,
    pub export: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
}

impl Args {
    /// Parses everything after the executable name.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let mut args = pico_args::Arguments::from_vec(args.into_iter().map(Into::into).collect());

        if args.contains(["-h", "--help"]) {
            return Ok(Args {
                source: TaskSource::Wizard,
                export: None,
                verbose: false,
                help: true,
            });
        }

        // options with values before bare flags, so a flag is never eaten as a value
        let export: Option<PathBuf> = args.opt_value_from_str("--export")?;
        if let Some(path) = &export {
            if path.to_string_lossy().starts_with('-') {
                return Err(ArgsError::ExportWithoutPath(path.to_string_lossy().into_owned()));
            }
        }

        let verbose = args.contains(["-v", "--verbose"]);
        let defaults = args.contains("--defaults");

        let mut rest = args.finish();
        if let Some(flag) = rest.iter().find(|a| a.to_string_lossy().starts_with('-')) {
            return Err(ArgsError::UnknownOption(flag.clone()));
        }
        if rest.len() > 1 {
            return Err(ArgsError::TrailingArgs(rest.split_off(1)));
        }

        let source = match (defaults, rest.pop()) {
            (true, Some(_)) => return Err(ArgsError::ConflictingSources),
            (true, None) => TaskSource::Defaults,
            (false, Some(path)) => TaskSource::File(PathBuf::from(path)),
            (false, None) => TaskSource::Wizard,
        };

        Ok(Args {
            source,
            export,
            verbose,
            help: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_start_the_wizard() {
        let a = Args::parse(Vec::<String>::new()).unwrap();
        assert_eq!(a.source, TaskSource::Wizard);
        assert!(!a.verbose);
        assert!(a.export.is_none());
    }

    #[test]
    fn flags_and_task_file() {
        let a = Args::parse(["--verbose", "task.json", "--export", "out.csv"]).unwrap();
        assert_eq!(a.source, TaskSource::File(PathBuf::from("task.json")));
        assert!(a.verbose);
        assert_eq!(a.export, Some(PathBuf::from("out.csv")));

        let a = Args::parse(["--defaults", "-v"]).unwrap();
        assert_eq!(a.source, TaskSource::Defaults);
        assert!(a.verbose);
    }

    #[test]
    fn export_accepts_equals_form() {
        let a = Args::parse(["--export=out.csv", "--defaults"]).unwrap();
        assert_eq!(a.export, Some(PathBuf::from("out.csv")));
        assert_eq!(a.source, TaskSource::Defaults);
    }

    #[test]
    fn flag_in_place_of_export_path_is_rejected() {
        assert!(Args::parse(["--export", "--verbose"]).is_err());
        assert!(Args::parse(["--export", "--defaults", "task.json"]).is_err());
    }

    #[test]
    fn help_wins_over_everything() {
        let a = Args::parse(["--fast", "-h"]).unwrap();
        assert!(a.help);
    }

    #[test]
    fn rejects_bad_combinations() {
        assert!(matches!(
            Args::parse(["--defaults", "task.json"]),
            Err(ArgsError::ConflictingSources)
        ));
        assert!(matches!(
            Args::parse(["a.json", "b.json"]),
            Err(ArgsError::TrailingArgs(_))
        ));
        assert!(Args::parse(["--export"]).is_err());
        assert!(matches!(
            Args::parse(["--fast"]),
            Err(ArgsError::UnknownOption(_))
        ));
    }
}
