//! Resolve command implementation.

use anyhow::Result;
use krxchart_lib::prelude::*;

use crate::display::print_ambiguity;

/// Print the ticker `identifier` resolves to.
pub(crate) async fn resolve<L: ListingSource, P: PriceSource>(
    dashboard: &Dashboard<L, P>,
    identifier: &str,
) -> Result<()> {
    let lookup = dashboard.resolver().lookup(identifier).await?;

    match &lookup.matched {
        Some(record) => println!("{} -> {}", record.name, lookup.ticker),
        None => println!("{}", lookup.ticker),
    }
    print_ambiguity(identifier, &lookup);

    Ok(())
}
