pub mod calculations;
pub mod constants;
pub mod progress;
pub mod validation;

pub use calculations::{
    BmiCategory, calculate, calculate_bmi, calculate_bmr, calculate_macros,
    calculate_target_calories, calculate_tdee, calculate_tdee_for_key, calculate_time_to_goal,
    calculate_weekly_weight_change, get_bmi_category,
};
pub use constants::*;
pub use progress::compute_goal_progress;
pub use validation::{GoalValidation, validate_goal, validate_profile};
