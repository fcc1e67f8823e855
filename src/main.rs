use anyhow::{Context, Result};
use std::io::{self, Write};
use std::process::ExitCode;
use streamreg::ui::cli::args::{Args, TaskSource, USAGE};
use streamreg::ui::cli::config::load_task;
use streamreg::ui::cli::drivers::InquireDriver;
use streamreg::ui::cli::report::write_report;
use streamreg::ui::cli::wizard::prompt_choice;
use streamreg::ui::types::build::build_task;
use streamreg::ui::types::choices::TaskChoice;
use tracing::{Level, debug, error, info};

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let mut task = match &args.source {
        TaskSource::Wizard => prompt_choice::<TaskChoice, _>(&InquireDriver)?,
        TaskSource::Defaults => TaskChoice::default(),
        TaskSource::File(path) => load_task(path)?,
    };
    if let Some(path) = args.export {
        task.set_export_path(path);
    }

    let mut benchmark = build_task(&task).context("failed to build task")?;
    let report = benchmark.run().context("benchmark failed")?;

    let mut out = io::stdout().lock();
    write_report(&mut out, &report)?;
    out.flush()?;

    for m in report.measurements() {
        debug!(target: "streamreg::metrics", "{m}");
    }

    if let Some(path) = task.export_path() {
        report
            .curve
            .export_to(path)
            .with_context(|| format!("failed to export curve to {}", path.display()))?;
        info!(path = %path.display(), snapshots = report.curve.len(), "curve exported");
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = match Args::parse(std::env::args_os().skip(1)) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    if args.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    init_tracing(args.verbose);
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
