//! List command - print every stored day.

use anyhow::Result;

use crate::commands::{format_row, print_header};
use crate::storage::DailyMetricsStore;


/// Run the list command. Records are sorted by day here; the store has no order.
pub fn run(store: &DailyMetricsStore) -> Result<()> {
    if store.is_empty() {
        println!("No metrics recorded.");
        return Ok(());
    }

    let mut records = store.get_all();
    records.sort_by(|a, b| a.day.cmp(&b.day));

    print_header();
    for record in &records {
        println!("{}", format_row(record));
    }
    println!("\n{} day{} recorded", records.len(), if records.len() == 1 { "" } else { "s" });

    Ok(())
}
