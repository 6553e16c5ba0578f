//! CLI command implementations.

pub mod list;
pub mod show;
pub mod week;

use crate::models::DailyMetrics;


/// Format a number with commas.
pub(crate) fn format_number(n: i64) -> String {
    let s = n.unsigned_abs().to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    if n < 0 {
        result.push('-');
    }

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}


/// One table row for a day's metrics.
pub(crate) fn format_row(record: &DailyMetrics) -> String {
    format!(
        "  {:12} {:>10} {:>10} {:>10.2} km {:>5.0}%",
        record.day,
        format_number(record.steps),
        format_number(record.calories),
        record.distance_km,
        record.steps_progress() * 100.0
    )
}


pub(crate) fn print_header() {
    println!(
        "  {:12} {:>10} {:>10} {:>13} {:>6}",
        "Day", "Steps", "Calories", "Distance", "Goal"
    );
    println!("{}", "-".repeat(60));
}
