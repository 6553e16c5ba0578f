//! Configuration and settings for fitpulse.

mod settings;

#[allow(unused_imports)]
pub use settings::{
    get_data_dir,
    get_data_path,
    DEFAULT_STEPS_GOAL,
    DEFAULT_CALORIES_GOAL,
    TRAILING_WEEK_DAYS,
    DAY_KEY_FORMAT,
};
