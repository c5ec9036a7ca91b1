//! Log subscriber setup.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 7] = [
    "krxchart",
    "krxchart_lib",
    "krxchart_fetch",
    "krxchart_listing",
    "krxchart_analytics",
    "krxchart_format",
    "krxchart_chart",
];

/// Filter directives used when `RUST_LOG` is not set.
pub(crate) fn default_directives(verbose: u8, quiet: bool) -> String {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let mut directives = String::from(if quiet { "error" } else { "warn" });
    for krate in CRATES {
        directives.push_str(&format!(",{krate}={level}"));
    }
    directives
}

/// Installs a stderr subscriber. `RUST_LOG` wins over the verbosity flags.
pub(crate) fn init(verbose: u8, quiet: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(verbose, quiet))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose > 1)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
