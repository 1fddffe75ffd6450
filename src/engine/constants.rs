use std::ops::RangeInclusive;

use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin–St Jeor
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_FACTOR: f64 = 10.0;
pub const BMR_HEIGHT_FACTOR: f64 = 6.25;
pub const BMR_AGE_FACTOR: f64 = 5.0;

/// Constant term added for men.
pub const BMR_MALE_OFFSET: f64 = 5.0;

/// Constant term added for women.
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Energy balance
// ─────────────────────────────────────────────────────────────────────────────

/// Energy stored in one kilogram of body weight.
pub const KCAL_PER_KG: f64 = 7700.0;

/// Largest daily deficit or surplus the engine will prescribe.
pub const MAX_DAILY_DELTA: f64 = 1000.0;

/// Daily deficit/surplus used when no target weight and timeframe are given.
pub const DEFAULT_DAILY_DELTA: f64 = 500.0;

/// Weight-loss targets never go below BMR times this factor.
pub const LOSE_BMR_FLOOR_FACTOR: f64 = 1.2;

/// Absolute minimum daily target for any goal.
pub const MIN_TARGET_CALORIES: f64 = 1200.0;

/// Weekly change above this (kg) is flagged as unsafe.
pub const MAX_SAFE_WEEKLY_CHANGE_KG: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split (30% protein / 45% carbs / 25% fat)
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_SHARE: f64 = 0.30;
pub const CARBS_SHARE: f64 = 0.45;
pub const FAT_SHARE: f64 = 0.25;

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Profile ranges
// ─────────────────────────────────────────────────────────────────────────────

pub const AGE_RANGE: RangeInclusive<u32> = 15..=100;
pub const HEIGHT_RANGE_CM: RangeInclusive<u32> = 100..=250;
pub const WEIGHT_RANGE_KG: RangeInclusive<f64> = 30.0..=300.0;

// ─────────────────────────────────────────────────────────────────────────────
// BMI thresholds
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
pub const BMI_NORMAL_BELOW: f64 = 25.0;
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity multipliers
// ─────────────────────────────────────────────────────────────────────────────

/// TDEE multiplier for an activity tier.
pub fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}
