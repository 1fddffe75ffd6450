use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::models::{MealPlan, MealSlot};
use crate::planner::constants::*;

/// Where a plan's total sits relative to its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlanStatus {
    Under,
    OnTarget,
    Over,
}

impl PlanStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PlanStatus::Under => "under target",
            PlanStatus::OnTarget => "on target",
            PlanStatus::Over => "over target",
        }
    }
}

impl fmt::Display for PlanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    pub total_calories: u32,
    pub target_calories: u32,
    /// Rounded percentage difference from the target.
    pub difference: i32,
    pub status: PlanStatus,
    pub total_meals: usize,
    pub breakdown: BTreeMap<MealSlot, usize>,
}

/// How many chosen dishes carry each nutrition tag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NutritionalBalance {
    pub protein: usize,
    pub carbs: usize,
    pub vegetables: usize,
    pub fiber: usize,
    pub vitamins: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanAnalysis {
    pub summary: PlanSummary,
    pub balance: NutritionalBalance,
    pub recommendations: Vec<String>,
}

/// Percent difference of `actual` from `target`, rounded. Zero target gives 0.
pub fn calculate_calorie_difference(actual: u32, target: u32) -> i32 {
    if target == 0 {
        return 0;
    }
    ((actual as f64 - target as f64) / target as f64 * 100.0).round() as i32
}

pub fn summarize_plan(plan: &MealPlan) -> PlanSummary {
    let total_calories = plan.sum_calories();
    let difference = calculate_calorie_difference(total_calories, plan.target_calories);

    let status = if difference > ON_TARGET_PERCENT {
        PlanStatus::Over
    } else if difference < -ON_TARGET_PERCENT {
        PlanStatus::Under
    } else {
        PlanStatus::OnTarget
    };

    let breakdown: BTreeMap<MealSlot, usize> = MealSlot::ALL
        .iter()
        .map(|slot| (*slot, plan.items(*slot).len()))
        .collect();

    PlanSummary {
        total_calories,
        target_calories: plan.target_calories,
        difference,
        status,
        total_meals: plan.item_count(),
        breakdown,
    }
}

pub fn check_nutritional_balance(plan: &MealPlan) -> NutritionalBalance {
    let count = |tag: &str| plan.all_items().filter(|f| f.has_tag(tag)).count();

    NutritionalBalance {
        protein: count(TAG_PROTEIN),
        carbs: count(TAG_CARBOHYDRATE),
        vegetables: count(TAG_VEGETABLE),
        fiber: count(TAG_FIBER),
        vitamins: count(TAG_VITAMIN),
    }
}

fn recommendations(summary: &PlanSummary, balance: &NutritionalBalance) -> Vec<String> {
    let mut out = Vec::new();

    if summary.difference > RECOMMEND_PERCENT {
        out.push("Calories exceed the target; reduce portions or choose lighter dishes".to_string());
    } else if summary.difference < -RECOMMEND_PERCENT {
        out.push("Calories fall short of the target; add portions or choose heartier dishes".to_string());
    }

    if balance.protein < MIN_PROTEIN_DISHES {
        out.push("Add more protein such as meat, fish, eggs or tofu".to_string());
    }

    if balance.vegetables < MIN_VEGETABLE_DISHES {
        out.push("Add more vegetables for fiber and vitamins".to_string());
    }

    out
}

/// Summary, tag balance and recommendations for a plan.
pub fn analyze_meal_plan(plan: &MealPlan) -> PlanAnalysis {
    let summary = summarize_plan(plan);
    let balance = check_nutritional_balance(plan);
    let recommendations = recommendations(&summary, &balance);

    PlanAnalysis {
        summary,
        balance,
        recommendations,
    }
}
