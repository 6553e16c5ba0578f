//! Data models for daily metrics, profiles and workouts.

mod daily_metrics;
mod user_profile;
mod workout;

#[allow(unused_imports)]
pub use daily_metrics::{day_key, DailyMetrics};
#[allow(unused_imports)]
pub use user_profile::UserProfile;
#[allow(unused_imports)]
pub use workout::{Exercise, WorkoutSession, WorkoutType};
