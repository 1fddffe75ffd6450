pub mod analysis;
pub mod constants;
pub mod generator;
pub mod random;
pub mod selection;

pub use analysis::{
    analyze_meal_plan, calculate_calorie_difference, check_nutritional_balance, summarize_plan,
    NutritionalBalance, PlanAnalysis, PlanStatus, PlanSummary,
};
pub use constants::*;
pub use generator::{
    calculate_meal_distribution, generate_meal_plan, generate_meal_plan_for_date,
    regenerate_all_meals, regenerate_meal_type,
};
pub use random::{RandomSource, SequenceSource};
pub use selection::{
    find_closest_calorie_foods, is_food_suitable_for_goal, select_meals_for_calories,
    select_single_meal,
};
