//! Workout session records.

use serde::{Deserialize, Serialize};


#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutType {
    Running,
    Walking,
    Cycling,
    Strength,
    Yoga,
    Other,
}


/// A single exercise within a session.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub name: String,
    pub sets: u32,
    pub reps: u32,
    #[serde(default)]
    pub weight_kg: Option<f64>,
}


#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSession {
    pub id: String,
    pub workout_type: WorkoutType,
    pub started_at_epoch_millis: i64,
    pub duration_minutes: u32,
    #[serde(default)]
    pub calories_burned: i64,
    #[serde(default)]
    pub distance_km: Option<f64>,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}


#[allow(dead_code)]
impl WorkoutSession {
    /// Total repetitions across all exercises (sets x reps), saturating.
    pub fn total_reps(&self) -> u64 {
        self.exercises
            .iter()
            .map(|e| u64::from(e.sets) * u64::from(e.reps))
            .fold(0u64, u64::saturating_add)
    }
}
