pub mod prompts;
pub mod render;

pub use prompts::{
    profile_from_args, prompt_activity_level, prompt_gender, prompt_goal, prompt_yes_no,
    resolve_profile,
};
pub use render::{
    display_analysis, display_calculation, display_catalog, display_goal_summary,
    display_meal_plan, display_progress, format_food_line,
};
