use crate::models::{FoodItem, MealSlot};
use crate::remote::RemotePlanResponse;

/// Slots are trimmed in this order when a plan runs over.
pub const REDUCTION_ORDER: [MealSlot; 4] = [
    MealSlot::Snacks,
    MealSlot::Dinner,
    MealSlot::Lunch,
    MealSlot::Breakfast,
];

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn scale_item(item: &mut FoodItem, factor: f64) {
    let f = factor.max(0.0);
    item.calories = (item.calories as f64 * f).round() as u32;
    item.protein = round1(item.protein * f);
    item.carbs = round1(item.carbs * f);
    item.fat = round1(item.fat * f);
}

/// Trim up to `cut` kcal from a slot, last item first. Returns what is left to cut.
fn reduce_slot(items: &mut [FoodItem], mut cut: i64) -> i64 {
    for item in items.iter_mut().rev() {
        if cut <= 0 {
            break;
        }
        if item.calories == 0 {
            continue;
        }
        let calories = item.calories as i64;
        let reducible = calories.min(cut);
        scale_item(item, (calories - reducible) as f64 / calories as f64);
        cut -= reducible;
    }
    cut.max(0)
}

/// Shrink an over-target plan until its total is at most `target`.
///
/// Each item is scaled by one factor across calories and macros, and never
/// loses more than its own calories. Under-target plans only get their
/// total recomputed.
pub fn clamp_plan_to_target(mut plan: RemotePlanResponse, target: u32) -> RemotePlanResponse {
    let sum = plan.sum_calories();
    if sum <= target {
        plan.total_calories = sum;
        return plan;
    }

    let mut cut = (sum - target) as i64;
    for slot in REDUCTION_ORDER {
        cut = reduce_slot(plan.items_mut(slot), cut);
    }

    plan.total_calories = plan.sum_calories();
    tracing::debug!(before = sum, after = plan.total_calories, target, "clamped remote plan");
    plan
}
