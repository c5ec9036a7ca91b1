//! Interactive lookup loop.

use anyhow::Result;
use inquire::{InquireError, Text};
use krxchart_lib::prelude::*;
use std::path::Path;

use super::show::run_cycle;
use crate::display::date_range;

/// Answer typed at the identifier prompt to leave the shell.
const QUIT: &str = "q";

/// Prompt for lookups until the user quits.
///
/// Failures of a single cycle are reported and the loop continues.
pub(crate) async fn shell<L: ListingSource, P: PriceSource>(
    dashboard: &Dashboard<L, P>,
    output_dir: &Path,
    quiet: bool,
) -> Result<()> {
    println!("KRX price lookup. Enter a company name or 6-digit ticker, or '{QUIT}' to quit.");
    println!("Charts and exports are saved to {}\n", output_dir.display());

    loop {
        let today = chrono::Local::now().date_naive();

        let Some(identifier) = ask(
            Text::new("Company name or ticker:").with_help_message("e.g. 삼성전자 or 005930"),
        )?
        else {
            break;
        };
        if identifier == QUIT {
            break;
        }

        let range = if identifier.is_empty() {
            DateRange::year_to_date(today)
        } else {
            let default = DateRange::year_to_date(today);
            let start_default = default.start.to_string();
            let end_default = default.end.to_string();

            let start_prompt = Text::new("Start date (YYYY-MM-DD):").with_default(&start_default);
            let Some(start) = ask(start_prompt)? else {
                break;
            };
            let end_prompt = Text::new("End date (YYYY-MM-DD):").with_default(&end_default);
            let Some(end) = ask(end_prompt)? else {
                break;
            };

            match date_range(Some(&start), Some(&end), today) {
                Ok(range) => range,
                Err(err) => {
                    println!("An error occurred: {err:#}\n");
                    continue;
                }
            }
        };

        let request = CycleRequest::new(identifier, range);
        if let Err(err) = run_cycle(dashboard, &request, output_dir, quiet).await {
            println!("An error occurred: {err:#}");
        }
        println!();
    }

    Ok(())
}

/// Runs a prompt, mapping Esc and Ctrl-C to `None`.
fn ask(prompt: Text<'_>) -> Result<Option<String>> {
    match prompt.prompt() {
        Ok(answer) => Ok(Some(answer)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err.into()),
    }
}
