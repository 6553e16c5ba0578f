//! Week command - show the trailing seven days.

use anyhow::Result;
use chrono::{Local, NaiveDate};

use crate::aggregation::summarize_week;
use crate::commands::{format_number, format_row, print_header};
use crate::storage::DailyMetricsStore;


/// Run the week command, anchored at `reference_day` or today.
pub fn run(store: &DailyMetricsStore, reference_day: Option<NaiveDate>) -> Result<()> {
    let reference_day = reference_day.unwrap_or_else(|| Local::now().date_naive());
    let summary = summarize_week(store, reference_day);

    println!("Trailing week: {} to {}\n", summary.start_day, summary.end_day);
    print_header();
    for day in &summary.days {
        println!("{}", format_row(day));
    }

    println!("\nSUMMARY");
    println!("{}", "-".repeat(40));
    println!("  Total Steps:         {:>15}", format_number(summary.total_steps));
    println!("  Total Calories:      {:>15}", format_number(summary.total_calories));
    println!("  Total Distance:      {:>12.2} km", summary.total_distance_km);
    println!("  Average Steps:       {:>15.0}", summary.average_steps());
    println!("  Days Recorded:       {:>15}", format!("{}/{}", summary.days_recorded, summary.days.len()));
    println!("  Step Goal Met:       {:>15}", summary.steps_goal_days);
    println!("  Calorie Goal Met:    {:>15}", summary.calories_goal_days);

    Ok(())
}
