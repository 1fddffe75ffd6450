use std::collections::HashSet;

use crate::catalog::Catalog;
use crate::models::{FoodItem, Goal, MealSlot};
use crate::planner::constants::*;
use crate::planner::random::RandomSource;

/// Whether a dish fits the user's goal, judged from its tags and calories.
pub fn is_food_suitable_for_goal(food: &FoodItem, goal: Goal) -> bool {
    match goal {
        Goal::Lose => food.has_any_tag(&LOSE_TAGS) || food.calories < LIGHT_DISH_CALORIES,
        Goal::Gain => food.has_any_tag(&GAIN_TAGS) || food.calories >= HEARTY_DISH_CALORIES,
        Goal::Maintain => true,
    }
}

/// Up to `count` foods ordered by calorie distance from `target`.
///
/// Ties keep catalog order.
pub fn find_closest_calorie_foods<'a>(
    mut foods: Vec<&'a FoodItem>,
    target: i64,
    count: usize,
) -> Vec<&'a FoodItem> {
    foods.sort_by_key(|f| (f.calories as i64 - target).abs());
    foods.truncate(count);
    foods
}

/// Pick one dish near `target` kcal that is not already `used`.
///
/// Candidates are the unused, goal-suitable dishes (capped at `target` for
/// supplements). When none qualify, any unused dish within
/// `target * FALLBACK_TOLERANCE` is accepted instead. The pick is drawn
/// uniformly from the [`TOP_K_CANDIDATES`] closest candidates.
pub fn select_single_meal<'a, R: RandomSource + ?Sized>(
    foods: &'a [FoodItem],
    target: i64,
    goal: Goal,
    used: &HashSet<String>,
    is_supplement: bool,
    rng: &mut R,
) -> Option<&'a FoodItem> {
    let available: Vec<&FoodItem> = foods.iter().filter(|f| !used.contains(&f.key())).collect();
    if available.is_empty() {
        return None;
    }

    let mut candidates: Vec<&FoodItem> = available
        .iter()
        .copied()
        .filter(|f| is_food_suitable_for_goal(f, goal))
        .collect();

    if is_supplement {
        candidates.retain(|f| f.calories as i64 <= target);
    }

    if candidates.is_empty() {
        let limit = target as f64 * FALLBACK_TOLERANCE;
        candidates = available
            .into_iter()
            .filter(|f| f.calories as f64 <= limit)
            .collect();
    }

    if candidates.is_empty() {
        return None;
    }

    let top = find_closest_calorie_foods(candidates, target, TOP_K_CANDIDATES);
    let pick = rng.pick_index(top.len()).min(top.len() - 1);
    Some(top[pick])
}

/// Fill one slot with up to [`MAX_ITEMS_PER_SLOT`] distinct dishes.
///
/// A main dish aims at [`MAIN_ITEM_SHARE`] of the budget, then supplements
/// are added while more than [`MIN_SUPPLEMENT_BUDGET`] kcal remain. Running
/// out of candidates just yields fewer dishes.
pub fn select_meals_for_calories<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    slot: MealSlot,
    sub_budget: u32,
    goal: Goal,
    rng: &mut R,
) -> Vec<FoodItem> {
    let foods = catalog.items(slot);
    if foods.is_empty() {
        tracing::debug!(slot = %slot, "no catalog items for slot");
        return Vec::new();
    }

    let mut selected: Vec<FoodItem> = Vec::new();
    let mut used: HashSet<String> = HashSet::new();
    let mut remaining = sub_budget as i64;

    let main_target = (sub_budget as f64 * MAIN_ITEM_SHARE).round() as i64;
    if let Some(main) = select_single_meal(foods, main_target, goal, &used, false, rng) {
        remaining -= main.calories as i64;
        used.insert(main.key());
        selected.push(main.clone());
    }

    while remaining > MIN_SUPPLEMENT_BUDGET && selected.len() < MAX_ITEMS_PER_SLOT {
        let Some(extra) = select_single_meal(foods, remaining, goal, &used, true, rng) else {
            break;
        };
        remaining -= extra.calories as i64;
        used.insert(extra.key());
        selected.push(extra.clone());
    }

    tracing::debug!(
        slot = %slot,
        budget = sub_budget,
        items = selected.len(),
        remaining,
        "filled meal slot"
    );

    selected
}
