//! Display utilities and input parsing for the krxchart CLI.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use krxchart_lib::{DateRange, FrameRow, Lookup, OutputFormat, Report};

/// Export format selectable on the command line.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum ExportFormat {
    Xlsx,
    Csv,
}

impl From<ExportFormat> for OutputFormat {
    fn from(format: ExportFormat) -> Self {
        match format {
            ExportFormat::Xlsx => Self::Xlsx,
            ExportFormat::Csv => Self::Csv,
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
pub(crate) fn parse_date(s: &str, what: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid {what} date: {s}"))
}

/// Builds the lookup range, defaulting to January 1 of `today`'s year
/// through `today`.
pub(crate) fn date_range(
    start: Option<&str>,
    end: Option<&str>,
    today: NaiveDate,
) -> Result<DateRange> {
    let default = DateRange::year_to_date(today);
    let start = start.map(|s| parse_date(s, "start")).transpose()?.unwrap_or(default.start);
    let end = end.map(|s| parse_date(s, "end")).transpose()?.unwrap_or(default.end);
    Ok(DateRange::new(start, end)?)
}

fn cell(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}"))
}

fn preview_line(row: &FrameRow) -> String {
    let bar = row.bar;
    let [ma5, ma20, ma120] = row.moving_averages;
    format!(
        "{:<12} {:>10.0} {:>10.0} {:>10.0} {:>10.0} {:>12} {:>10} {:>10} {:>10}",
        bar.date.format("%Y-%m-%d"),
        bar.open,
        bar.high,
        bar.low,
        bar.close,
        bar.volume,
        cell(ma5),
        cell(ma20),
        cell(ma120),
    )
}

/// Warns when other companies share the looked-up name.
pub(crate) fn print_ambiguity(name: &str, lookup: &Lookup) {
    if !lookup.is_ambiguous() {
        return;
    }
    let others: Vec<String> = lookup.alternatives.iter().map(|r| r.code.to_string()).collect();
    println!(
        "Warning: {} companies are named '{name}'; using {}. Others: {}",
        lookup.alternatives.len() + 1,
        lookup.ticker,
        others.join(", ")
    );
}

/// Prints the heading, the tail of the frame and the return statistics.
pub(crate) fn print_report(report: &Report) {
    print_ambiguity(&report.identifier, &report.lookup);

    println!("\n{}", report.heading());
    println!(
        "{:<12} {:>10} {:>10} {:>10} {:>10} {:>12} {:>10} {:>10} {:>10}",
        "DATE", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME", "MA5", "MA20", "MA120"
    );
    println!("{}", "-".repeat(104));
    for row in report.preview() {
        println!("{}", preview_line(&row));
    }

    match &report.stats {
        Some(stats) => {
            let std_dev = stats
                .std_dev
                .map_or_else(|| "n/a".to_string(), |sd| format!("{sd:.2}%"));
            println!(
                "\nDaily returns: {} | Mean: {:.2}% | Std: {std_dev} | Min: {:.2}% | Max: {:.2}%",
                stats.count, stats.mean, stats.min, stats.max
            );
        }
        None => println!("\nNot enough data for return statistics."),
    }
    if report.histogram.is_none() {
        println!("Return histogram skipped: no finite daily returns in range.");
    }
}
