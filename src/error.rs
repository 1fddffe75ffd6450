use thiserror::Error;

use crate::models::MealSlot;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),

    #[error("Invalid activity level: {0}")]
    InvalidActivityLevel(String),

    #[error("Invalid goal: {0}")]
    InvalidGoal(String),

    #[error("Invalid meal slot: {0}")]
    InvalidMealSlot(String),

    #[error("Food catalog unavailable: {0}")]
    CatalogUnavailable(String),

    #[error("Meal plan has no calorie distribution for {0}")]
    MissingDistribution(MealSlot),

    #[error("Remote meal generation failed: {0}")]
    RemoteGeneration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
