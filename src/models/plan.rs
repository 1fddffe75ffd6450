use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{FoodItem, Goal, MealSlot, UserProfile};

/// Grams of each macro-nutrient implied by the calorie target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroBreakdown {
    pub protein: u32,
    pub carbs: u32,
    pub fat: u32,
}

/// Result of running a profile through the calorie engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieCalculation {
    pub bmr: u32,
    pub tdee: u32,
    pub target_calories: u32,
    /// Negative for a deficit, positive for a surplus.
    pub deficit_or_surplus: i32,
    pub macro_breakdown: MacroBreakdown,
}

/// Calorie sub-budget per meal slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDistribution {
    pub breakfast: u32,
    pub lunch: u32,
    pub dinner: u32,
    pub snacks: u32,
}

impl MealDistribution {
    pub fn get(&self, slot: MealSlot) -> u32 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snacks => self.snacks,
        }
    }

    pub fn total(&self) -> u32 {
        self.breakfast + self.lunch + self.dinner + self.snacks
    }
}

/// Where a meal plan came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanSource {
    #[default]
    Local,
    Remote,
}

impl PlanSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanSource::Local => "local",
            PlanSource::Remote => "remote",
        }
    }
}

/// A day of meals.
///
/// Never mutated in place by the generator: regeneration builds a new plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlan {
    pub date: NaiveDate,
    pub target_calories: u32,
    pub goal: Goal,
    pub breakfast: Vec<FoodItem>,
    pub lunch: Vec<FoodItem>,
    pub dinner: Vec<FoodItem>,
    pub snacks: Vec<FoodItem>,
    pub total_calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distribution: Option<MealDistribution>,
    #[serde(default)]
    pub source: PlanSource,
}

impl MealPlan {
    pub fn items(&self, slot: MealSlot) -> &[FoodItem] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snacks => &self.snacks,
        }
    }

    /// Copy of this plan with one slot replaced and the total recomputed.
    pub fn with_slot(&self, slot: MealSlot, items: Vec<FoodItem>) -> MealPlan {
        let mut plan = self.clone();
        match slot {
            MealSlot::Breakfast => plan.breakfast = items,
            MealSlot::Lunch => plan.lunch = items,
            MealSlot::Dinner => plan.dinner = items,
            MealSlot::Snacks => plan.snacks = items,
        }
        plan.total_calories = plan.sum_calories();
        plan
    }

    pub fn slot_calories(&self, slot: MealSlot) -> u32 {
        self.items(slot).iter().map(|f| f.calories).sum()
    }

    /// Sum of every chosen item's calories.
    pub fn sum_calories(&self) -> u32 {
        MealSlot::ALL.iter().map(|s| self.slot_calories(*s)).sum()
    }

    pub fn item_count(&self) -> usize {
        MealSlot::ALL.iter().map(|s| self.items(*s).len()).sum()
    }

    pub fn all_items(&self) -> impl Iterator<Item = &FoodItem> {
        MealSlot::ALL.into_iter().flat_map(move |s| self.items(s).iter())
    }
}

/// Everything shown or stored for one profile submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyPlan {
    pub profile: UserProfile,
    pub calorie_calc: CalorieCalculation,
    pub meal_plan: MealPlan,
    pub generated_at: DateTime<Utc>,
}

impl DailyPlan {
    pub fn new(profile: UserProfile, calorie_calc: CalorieCalculation, meal_plan: MealPlan) -> Self {
        Self {
            profile,
            calorie_calc,
            meal_plan,
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food(name: &str, calories: u32) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            portion: "1 plate".to_string(),
            calories,
            protein: 10.0,
            carbs: 20.0,
            fat: 5.0,
            tags: Vec::new(),
        }
    }

    fn sample_plan() -> MealPlan {
        MealPlan {
            date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            target_calories: 2000,
            goal: Goal::Maintain,
            breakfast: vec![food("Congee", 220)],
            lunch: vec![food("Pad Thai", 400), food("Papaya Salad", 120)],
            dinner: vec![food("Grilled Fish", 320)],
            snacks: Vec::new(),
            total_calories: 1060,
            distribution: None,
            source: PlanSource::Local,
        }
    }

    #[test]
    fn test_sum_calories() {
        let plan = sample_plan();
        assert_eq!(plan.sum_calories(), 1060);
        assert_eq!(plan.slot_calories(MealSlot::Lunch), 520);
        assert_eq!(plan.item_count(), 4);
    }

    #[test]
    fn test_with_slot_recomputes_total() {
        let plan = sample_plan();
        let updated = plan.with_slot(MealSlot::Snacks, vec![food("Banana", 90)]);
        assert_eq!(updated.total_calories, 1150);
        assert_eq!(updated.lunch.len(), 2);
        // Original untouched
        assert!(plan.snacks.is_empty());
    }

    #[test]
    fn test_distribution_total() {
        let dist = MealDistribution {
            breakfast: 500,
            lunch: 700,
            dinner: 600,
            snacks: 200,
        };
        assert_eq!(dist.total(), 2000);
        assert_eq!(dist.get(MealSlot::Dinner), 600);
    }
}
