//! Optional remote meal-plan generation.
//!
//! A remote service is asked for a plan; whatever comes back is validated
//! and clamped to the target. Any failure falls back to the local generator,
//! so callers always get a plan when the catalog is loaded.

pub mod clamp;
pub mod client;
pub mod prompt;
mod wire;

pub use clamp::clamp_plan_to_target;
pub use client::HttpPlanClient;
pub use prompt::build_prompt;

use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{FoodItem, MealPlan, MealSlot, PlanSource, UserProfile};
use crate::planner::{RandomSource, calculate_meal_distribution, generate_meal_plan};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cuisine {
    #[default]
    Thai,
    Any,
}

impl Cuisine {
    pub fn label(&self) -> &'static str {
        match self {
            Cuisine::Thai => "Thai",
            Cuisine::Any => "any cuisine",
        }
    }
}

impl FromStr for Cuisine {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "thai" => Ok(Cuisine::Thai),
            "any" => Ok(Cuisine::Any),
            _ => Err(PlannerError::InvalidInput(format!(
                "unknown cuisine '{}' (expected thai or any)",
                s
            ))),
        }
    }
}

/// Body posted to the plan service.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePlanRequest {
    pub profile: UserProfile,
    pub target_calories: u32,
    pub cuisine: Cuisine,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl RemotePlanRequest {
    pub fn new(profile: UserProfile, target_calories: u32) -> Self {
        Self {
            profile,
            target_calories,
            cuisine: Cuisine::default(),
            prompt: None,
        }
    }

    pub fn with_cuisine(mut self, cuisine: Cuisine) -> Self {
        self.cuisine = cuisine;
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// The explicit prompt, or one composed from the profile and target.
    pub fn prompt_text(&self) -> String {
        self.prompt.clone().unwrap_or_else(|| build_prompt(self))
    }
}

/// Plan as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePlanResponse {
    #[serde(deserialize_with = "wire::lenient_items")]
    pub breakfast: Vec<FoodItem>,
    #[serde(deserialize_with = "wire::lenient_items")]
    pub lunch: Vec<FoodItem>,
    #[serde(deserialize_with = "wire::lenient_items")]
    pub dinner: Vec<FoodItem>,
    #[serde(default, deserialize_with = "wire::lenient_items")]
    pub snacks: Vec<FoodItem>,
    #[serde(default, deserialize_with = "wire::lenient_calories")]
    pub total_calories: u32,
}

impl RemotePlanResponse {
    pub fn items(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    pub fn items_mut(&mut self, slot: MealSlot) -> &mut Vec<FoodItem> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
        }
    }

    pub fn sum_calories(&self) -> u32 {
        MealSlot::ALL
            .iter()
            .flat_map(|slot| self.items(*slot))
            .map(|f| f.calories)
            .sum()
    }

    /// Reject empty plans and items with no name or negative macros.
    pub fn validate(&self) -> Result<()> {
        let mut count = 0;
        for slot in MealSlot::ALL {
            for item in self.items(slot) {
                if !item.is_valid() {
                    return Err(PlannerError::RemoteGeneration(format!(
                        "invalid {} item: {}",
                        slot,
                        item.debug_string()
                    )));
                }
                count += 1;
            }
        }

        if count == 0 {
            return Err(PlannerError::RemoteGeneration("plan has no items".to_string()));
        }
        Ok(())
    }
}

/// Anything that can produce a plan for a request.
pub trait RemotePlanSource {
    fn fetch_plan(&self, request: &RemotePlanRequest) -> Result<RemotePlanResponse>;
}

fn fetch_clamped(source: &dyn RemotePlanSource, request: &RemotePlanRequest) -> Result<MealPlan> {
    let response = source.fetch_plan(request)?;
    response.validate()?;
    let clamped = clamp_plan_to_target(response, request.target_calories);

    Ok(MealPlan {
        date: Local::now().date_naive(),
        target_calories: request.target_calories,
        goal: request.profile.goal,
        breakfast: clamped.breakfast,
        lunch: clamped.lunch,
        dinner: clamped.dinner,
        snacks: clamped.snacks,
        total_calories: clamped.total_calories,
        distribution: Some(calculate_meal_distribution(request.target_calories)),
        source: PlanSource::Remote,
    })
}

/// Ask the remote source for a plan, falling back to the local generator.
///
/// Remote errors never reach the caller. Only a missing catalog during the
/// fallback is reported.
pub fn generate_with_fallback<R: RandomSource + ?Sized>(
    source: Option<&dyn RemotePlanSource>,
    request: &RemotePlanRequest,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<MealPlan> {
    if let Some(source) = source {
        match fetch_clamped(source, request) {
            Ok(plan) => {
                tracing::info!(
                    target = request.target_calories,
                    total = plan.total_calories,
                    "using remote meal plan"
                );
                return Ok(plan);
            }
            Err(e) => {
                tracing::warn!(error = %e, "remote plan generation failed, using local generator");
            }
        }
    }

    generate_meal_plan(catalog, request.target_calories, request.profile.goal, rng)
}
