//! List command implementation.
//!
//! This module prints the listed-company roster with optional filtering.

use anyhow::Result;
use krxchart_lib::prelude::*;

/// Print the roster, or the entries matching `search`.
pub(crate) async fn list_companies<L: ListingSource, P: PriceSource>(
    dashboard: &Dashboard<L, P>,
    search: Option<&str>,
) -> Result<()> {
    let roster = dashboard.resolver().roster().await?;

    let companies: Vec<&CompanyRecord> = match search {
        Some(pattern) => roster.search(pattern),
        None => roster.all().collect(),
    };

    if companies.is_empty() {
        println!("No companies found.");
        return Ok(());
    }

    println!("{:<8} {}", "CODE", "NAME");
    println!("{}", "-".repeat(40));

    for company in &companies {
        println!("{:<8} {}", company.code.as_str(), company.name);
    }

    println!("\nTotal: {} companies", companies.len());
    Ok(())
}
