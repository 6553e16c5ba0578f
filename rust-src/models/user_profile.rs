//! User profile record.

use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_CALORIES_GOAL, DEFAULT_STEPS_GOAL};


#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub height_cm: Option<f64>,
    #[serde(default)]
    pub weight_kg: Option<f64>,
    #[serde(default = "default_steps_goal")]
    pub steps_goal: i64,
    #[serde(default = "default_calories_goal")]
    pub calories_goal: i64,
}


fn default_steps_goal() -> i64 {
    DEFAULT_STEPS_GOAL
}

fn default_calories_goal() -> i64 {
    DEFAULT_CALORIES_GOAL
}


#[allow(dead_code)]
impl UserProfile {
    pub fn new(
        user_id: impl Into<String>,
        display_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
            email: email.into(),
            age: None,
            height_cm: None,
            weight_kg: None,
            steps_goal: DEFAULT_STEPS_GOAL,
            calories_goal: DEFAULT_CALORIES_GOAL,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = UserProfile::new("u1", "Sam", "sam@example.com");
        assert_eq!(profile.steps_goal, 10000);
        assert_eq!(profile.calories_goal, 600);
        assert!(profile.age.is_none());
    }

    #[test]
    fn test_deserialize_partial_profile() {
        let json = r#"{"userId":"u1","displayName":"Sam","email":"sam@example.com","weightKg":71.5}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.user_id, "u1");
        assert_eq!(profile.weight_kg, Some(71.5));
        assert_eq!(profile.height_cm, None);
        assert_eq!(profile.steps_goal, 10000);
    }
}
