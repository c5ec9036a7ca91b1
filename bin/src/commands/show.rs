//! Show command implementation.
//!
//! Runs one lookup cycle and writes the charts and export to disk. The
//! interactive shell reuses [`run_cycle`] for every trigger.

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use krxchart_lib::prelude::*;
use krxchart_lib::{MISSING_IDENTIFIER, NO_DATA};
use std::path::Path;
use std::time::Duration;

use crate::display::{date_range, print_ambiguity, print_report};

/// Run a single non-interactive lookup.
pub(crate) async fn show<L: ListingSource, P: PriceSource>(
    dashboard: &Dashboard<L, P>,
    identifier: &str,
    start: Option<&str>,
    end: Option<&str>,
    output_dir: &Path,
    format: OutputFormat,
    quiet: bool,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let range = date_range(start, end, today)?;
    let request = CycleRequest::new(identifier, range).with_format(format);
    run_cycle(dashboard, &request, output_dir, quiet).await
}

/// Trigger one cycle with a spinner and report its outcome.
pub(crate) async fn run_cycle<L: ListingSource, P: PriceSource>(
    dashboard: &Dashboard<L, P>,
    request: &CycleRequest,
    output_dir: &Path,
    quiet: bool,
) -> Result<()> {
    let spinner = if quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new_spinner();
        pb.set_style(ProgressStyle::with_template("{spinner:.green} {msg}")?);
        pb
    };

    let outcome = dashboard
        .trigger(request, |state| match state {
            ShellState::Loading => {
                spinner.set_message(format!(
                    "Fetching {} ({})...",
                    request.identifier, request.range
                ));
                spinner.enable_steady_tick(Duration::from_millis(100));
            }
            state if state.is_terminal() => spinner.finish_and_clear(),
            _ => {}
        })
        .await?;

    match outcome {
        CycleOutcome::MissingIdentifier => println!("{MISSING_IDENTIFIER}"),
        CycleOutcome::Empty { lookup } => {
            print_ambiguity(&request.identifier, &lookup);
            println!("{NO_DATA}");
        }
        CycleOutcome::Success(report) => {
            print_report(&report);
            save_artifacts(&report, output_dir)?;
        }
    }

    Ok(())
}

fn save_artifacts(report: &Report, output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;

    println!();
    for artifact in report.artifacts() {
        let path = artifact
            .write_to(output_dir)
            .with_context(|| format!("Failed to write {}", artifact.file_name))?;
        println!("Saved {} ({} bytes)", path.display(), artifact.len());
    }
    Ok(())
}
