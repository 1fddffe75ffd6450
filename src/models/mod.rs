mod food;
mod plan;
mod profile;
mod progress;

pub use food::{FoodItem, MealSlot};
pub use plan::{
    CalorieCalculation, DailyPlan, MacroBreakdown, MealDistribution, MealPlan, PlanSource,
};
pub use profile::{ActivityLevel, Gender, Goal, UserProfile};
pub use progress::{GoalProgress, WeightLog};
