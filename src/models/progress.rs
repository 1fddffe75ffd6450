use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single weigh-in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLog {
    pub date: NaiveDate,
    pub weight: f64,
}

/// How far a user has moved toward their weight target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub weeks_passed: u32,
    pub timeframe: u32,
    /// Absolute kg between start and target.
    pub total_change: f64,
    /// Kg moved in the goal's direction, never negative.
    pub progress_kg: f64,
    pub progress_percentage: f64,
    pub current_weight: f64,
    pub start_weight: f64,
    pub target_weight: f64,
}
