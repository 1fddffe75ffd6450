pub mod catalog;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod interface;
pub mod models;
pub mod planner;
pub mod remote;
pub mod state;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{PlannerError, Result};
pub use models::{CalorieCalculation, DailyPlan, FoodItem, MealPlan, MealSlot, UserProfile};
