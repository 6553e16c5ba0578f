//! Show command - print a single day's metrics.

use anyhow::Result;

use crate::commands::format_number;
use crate::models::day_key;
use crate::storage::DailyMetricsStore;


/// Run the show command for a validated day.
pub fn run(store: &DailyMetricsStore, day: chrono::NaiveDate) -> Result<()> {
    let day = day_key(day);

    let Some(record) = store.get(&day) else {
        println!("No metrics recorded for {day}");
        return Ok(());
    };

    println!("{}", record.day);
    println!("{}", "-".repeat(40));
    println!(
        "  Steps:     {} / {}",
        format_number(record.steps),
        format_number(record.steps_goal)
    );
    println!(
        "  Calories:  {} / {}",
        format_number(record.calories),
        format_number(record.calories_goal)
    );
    println!("  Distance:  {:.2} km", record.distance_km);
    println!(
        "  Goals:     steps {}, calories {}",
        if record.steps_goal_met() { "met" } else { "not met" },
        if record.calories_goal_met() { "met" } else { "not met" }
    );

    Ok(())
}
