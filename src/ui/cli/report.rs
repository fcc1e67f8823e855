use crate::evaluation::CoefficientDelta;
use crate::tasks::BenchmarkReport;
use std::io::{Result, Write};

/// Prints a finished benchmark: one block per snapshot, then the final
/// deltas, divergence summary and compute times.
pub fn write_report<W: Write>(w: &mut W, report: &BenchmarkReport) -> Result<()> {
    let accelerator_name = report.accelerator.as_ref().map(|a| a.name.as_str());

    writeln!(w, "started:     {}", report.started_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(w, "samples:     {} (skipped {})", report.samples, report.skipped)?;
    writeln!(w, "regressor:   {}", report.core.name)?;
    writeln!(w, "accelerator: {}", accelerator_name.unwrap_or("none"))?;
    if let Some(truth) = &report.truth {
        writeln!(w, "model:       {truth} (noise-free)")?;
    }
    writeln!(w)?;

    for snap in report.curve.iter() {
        writeln!(
            w,
            "[{}]\tcore:        y = {:.6} + x1 * {:.6} + x2 * {:.6}",
            snap.samples_seen, snap.intercept, snap.slope1, snap.slope2
        )?;
        let index = snap.samples_seen.checked_sub(1).map(|i| i as usize);
        let accel = report
            .accelerator_estimates
            .as_ref()
            .zip(index)
            .and_then(|(estimates, i)| estimates.get(i));
        if let Some(estimate) = accel {
            writeln!(w, "\taccelerator: {estimate}")?;
        }
    }
    writeln!(w)?;

    write_delta(w, "core vs model", report.core_vs_truth.as_ref())?;
    write_delta(w, "accelerator vs model", report.accelerator_vs_truth.as_ref())?;
    write_delta(w, "core vs accelerator", report.core_vs_accelerator.as_ref())?;

    if let Some(d) = &report.divergence {
        writeln!(w, "divergence")?;
        writeln!(w, "{d}")?;
        writeln!(w)?;
    }

    writeln!(w, "{} compute time: {:.3} ms", report.core.name, report.core.millis())?;
    if let Some(acc) = &report.accelerator {
        writeln!(w, "{} compute time: {:.3} ms", acc.name, acc.millis())?;
    }
    Ok(())
}

fn write_delta<W: Write>(w: &mut W, label: &str, delta: Option<&CoefficientDelta>) -> Result<()> {
    if let Some(d) = delta {
        writeln!(w, "{label}")?;
        writeln!(w, "{d}")?;
        writeln!(w)?;
    }
    Ok(())
}
