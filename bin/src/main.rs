//! krxchart CLI - KRX company lookup with price charts and spreadsheet export.

use anyhow::Result;
use clap::{Parser, Subcommand};
use krxchart_lib::{Dashboard, KrxClient};
use std::path::PathBuf;

mod commands;
mod config;
mod display;
mod logging;

use config::AppConfig;
use display::ExportFormat;

#[derive(Parser)]
#[command(name = "krxchart")]
#[command(about = "Look up a KRX-listed company and chart its daily prices", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress progress output)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive lookup loop (default)
    Shell,

    /// Run one lookup and write the charts and export
    Show {
        /// Company name (exact, as listed) or 6-digit ticker
        identifier: String,

        /// Start date (YYYY-MM-DD). Defaults to January 1 of this year.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Output directory. Defaults to KRXCHART_OUTPUT_DIR or the current directory.
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Export format
        #[arg(short, long, value_enum, default_value = "xlsx")]
        format: ExportFormat,
    },

    /// Print the ticker a company name resolves to
    Resolve {
        /// Company name or 6-digit ticker
        identifier: String,
    },

    /// List listed companies
    List {
        /// Case-insensitive search over names and codes
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    logging::init(cli.verbose, cli.quiet)?;
    tracing::debug!(?config, "configuration loaded");

    let client = KrxClient::new(config.client_config())?;
    let dashboard = Dashboard::new(client.clone(), client);

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => commands::shell::shell(&dashboard, &config.output_dir, cli.quiet).await,
        Commands::Show {
            identifier,
            start,
            end,
            output_dir,
            format,
        } => {
            let output_dir = output_dir.unwrap_or(config.output_dir);
            commands::show::show(
                &dashboard,
                &identifier,
                start.as_deref(),
                end.as_deref(),
                &output_dir,
                format.into(),
                cli.quiet,
            )
            .await
        }
        Commands::Resolve { identifier } => {
            commands::resolve::resolve(&dashboard, &identifier).await
        }
        Commands::List { search } => {
            commands::list::list_companies(&dashboard, search.as_deref()).await
        }
    }
}
