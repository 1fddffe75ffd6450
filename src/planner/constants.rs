use crate::models::MealSlot;

// ─────────────────────────────────────────────────────────────────────────────
// Slot filling
// ─────────────────────────────────────────────────────────────────────────────

/// Share of a slot's budget aimed at by the main item.
pub const MAIN_ITEM_SHARE: f64 = 0.75;

/// Supplements are only added while more than this many kcal remain.
pub const MIN_SUPPLEMENT_BUDGET: i64 = 50;

/// Maximum items chosen for one slot.
pub const MAX_ITEMS_PER_SLOT: usize = 3;

/// Number of nearest-calorie candidates a pick is drawn from.
pub const TOP_K_CANDIDATES: usize = 3;

/// Calorie tolerance when no goal-suitable item fits.
pub const FALLBACK_TOLERANCE: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Goal suitability
// ─────────────────────────────────────────────────────────────────────────────

pub const TAG_PROTEIN: &str = "protein";
pub const TAG_CARBOHYDRATE: &str = "carbohydrate";
pub const TAG_VEGETABLE: &str = "vegetable";
pub const TAG_FIBER: &str = "fiber";
pub const TAG_LIGHT: &str = "light";
pub const TAG_VITAMIN: &str = "vitamin";

/// Tags that make a dish suitable for weight loss.
pub const LOSE_TAGS: [&str; 4] = [TAG_VEGETABLE, TAG_FIBER, TAG_PROTEIN, TAG_LIGHT];

/// Tags that make a dish suitable for weight gain.
pub const GAIN_TAGS: [&str; 2] = [TAG_PROTEIN, TAG_CARBOHYDRATE];

/// Dishes under this are light enough for weight loss regardless of tags.
pub const LIGHT_DISH_CALORIES: u32 = 300;

/// Dishes at or above this are hearty enough for weight gain regardless of tags.
pub const HEARTY_DISH_CALORIES: u32 = 300;

// ─────────────────────────────────────────────────────────────────────────────
// Plan analysis
// ─────────────────────────────────────────────────────────────────────────────

/// Percent difference within which a plan counts as on target.
pub const ON_TARGET_PERCENT: i32 = 5;

/// Percent difference beyond which a calorie recommendation is made.
pub const RECOMMEND_PERCENT: i32 = 10;

/// Fewer tagged dishes than this triggers a recommendation.
pub const MIN_PROTEIN_DISHES: usize = 2;
pub const MIN_VEGETABLE_DISHES: usize = 2;

// ─────────────────────────────────────────────────────────────────────────────
// Daily distribution
// ─────────────────────────────────────────────────────────────────────────────

/// Fraction of the daily target assigned to a slot (25/35/30/10).
pub fn slot_share(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Breakfast => 0.25,
        MealSlot::Lunch => 0.35,
        MealSlot::Dinner => 0.30,
        MealSlot::Snacks => 0.10,
    }
}
