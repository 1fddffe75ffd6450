use serde::{Deserialize, Serialize};

use crate::engine::constants::*;
use crate::engine::validation::validate_profile;
use crate::error::{PlannerError, Result};
use crate::models::{
    ActivityLevel, CalorieCalculation, Gender, Goal, MacroBreakdown, UserProfile,
};

/// Basal metabolic rate via Mifflin–St Jeor, rounded to whole kcal/day.
pub fn calculate_bmr(profile: &UserProfile) -> Result<u32> {
    if profile.age == 0 || profile.height == 0 || profile.weight <= 0.0 || !profile.weight.is_finite()
    {
        return Err(PlannerError::InvalidProfile(
            "age, height and weight are required to calculate BMR".to_string(),
        ));
    }

    let offset = match profile.gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };

    let bmr = BMR_WEIGHT_FACTOR * profile.weight + BMR_HEIGHT_FACTOR * profile.height as f64
        - BMR_AGE_FACTOR * profile.age as f64
        + offset;

    Ok(bmr.round().max(0.0) as u32)
}

/// Total daily energy expenditure: BMR scaled by the activity multiplier.
pub fn calculate_tdee(bmr: u32, activity_level: ActivityLevel) -> u32 {
    (bmr as f64 * activity_multiplier(activity_level)).round() as u32
}

/// Same as [`calculate_tdee`] for a raw activity key such as `"very-active"`.
pub fn calculate_tdee_for_key(bmr: u32, activity_key: &str) -> Result<u32> {
    let level: ActivityLevel = activity_key.parse()?;
    Ok(calculate_tdee(bmr, level))
}

/// Daily kcal delta for a lose/gain goal, magnitude capped at [`MAX_DAILY_DELTA`].
///
/// `change` yields the kg to move in the goal's direction.
fn daily_delta(profile: &UserProfile, change: impl Fn(f64, f64) -> f64) -> f64 {
    match profile.weight_target() {
        Some((target, weeks)) => {
            let weekly = change(profile.weight, target) / weeks as f64;
            (weekly * KCAL_PER_KG / 7.0).clamp(-MAX_DAILY_DELTA, MAX_DAILY_DELTA)
        }
        None => DEFAULT_DAILY_DELTA,
    }
}

/// Macro grams for a calorie target.
pub fn calculate_macros(target_calories: u32) -> MacroBreakdown {
    let target = target_calories as f64;
    MacroBreakdown {
        protein: (target * PROTEIN_SHARE / KCAL_PER_GRAM_PROTEIN).round() as u32,
        carbs: (target * CARBS_SHARE / KCAL_PER_GRAM_CARBS).round() as u32,
        fat: (target * FAT_SHARE / KCAL_PER_GRAM_FAT).round() as u32,
    }
}

/// Goal-adjusted daily target with macro breakdown.
///
/// The target never drops below [`MIN_TARGET_CALORIES`], and for weight loss
/// never below `bmr * LOSE_BMR_FLOOR_FACTOR`.
pub fn calculate_target_calories(profile: &UserProfile, tdee: u32) -> Result<CalorieCalculation> {
    let bmr = calculate_bmr(profile)?;
    let tdee_f = tdee as f64;

    let (target, delta) = match profile.goal {
        Goal::Maintain => (tdee_f, 0.0),
        Goal::Lose => {
            let deficit = daily_delta(profile, |weight, target| weight - target);
            let floor = bmr as f64 * LOSE_BMR_FLOOR_FACTOR;
            ((tdee_f - deficit).max(floor), -deficit)
        }
        Goal::Gain => {
            let surplus = daily_delta(profile, |weight, target| target - weight);
            (tdee_f + surplus, surplus)
        }
    };

    let target_calories = target.max(MIN_TARGET_CALORIES).round() as u32;

    Ok(CalorieCalculation {
        bmr,
        tdee,
        target_calories,
        deficit_or_surplus: delta.round() as i32,
        macro_breakdown: calculate_macros(target_calories),
    })
}

/// Validate, then run the full BMR → TDEE → target pipeline.
pub fn calculate(profile: &UserProfile) -> Result<CalorieCalculation> {
    validate_profile(profile)?;
    let bmr = calculate_bmr(profile)?;
    let tdee = calculate_tdee(bmr, profile.activity_level);
    calculate_target_calories(profile, tdee)
}

/// Whole weeks needed to reach the target weight at the given daily delta.
///
/// Zero for maintain, a missing target, or a zero delta.
pub fn calculate_time_to_goal(profile: &UserProfile, daily_deficit_or_surplus: i32) -> u32 {
    if profile.goal == Goal::Maintain || daily_deficit_or_surplus == 0 {
        return 0;
    }
    let Some(target) = profile.target_weight.filter(|t| *t > 0.0) else {
        return 0;
    };

    let kg_diff = (profile.weight - target).abs();
    let weekly_kcal = daily_deficit_or_surplus.unsigned_abs() as f64 * 7.0;
    (kg_diff * KCAL_PER_KG / weekly_kcal).ceil() as u32
}

/// Kg per week implied by a daily delta (negative means losing).
pub fn calculate_weekly_weight_change(daily_deficit_or_surplus: i32) -> f64 {
    daily_deficit_or_surplus as f64 * 7.0 / KCAL_PER_KG
}

/// Body mass index rounded to one decimal.
pub fn calculate_bmi(height_cm: u32, weight_kg: f64) -> f64 {
    if height_cm == 0 {
        return 0.0;
    }
    let height_m = height_cm as f64 / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    (bmi * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

pub fn get_bmi_category(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(gender: Gender, goal: Goal) -> UserProfile {
        UserProfile {
            gender,
            age: 25,
            weight: 70.0,
            height: 170,
            activity_level: ActivityLevel::Moderate,
            goal,
            target_weight: None,
            timeframe: None,
        }
    }

    #[test]
    fn test_bmr_male_and_female() {
        // 700 + 1062.5 - 125 + 5 = 1642.5
        assert_eq!(calculate_bmr(&profile(Gender::Male, Goal::Maintain)).unwrap(), 1643);
        // 700 + 1062.5 - 125 - 161 = 1476.5
        assert_eq!(calculate_bmr(&profile(Gender::Female, Goal::Maintain)).unwrap(), 1477);
    }

    #[test]
    fn test_bmr_rejects_missing_fields() {
        let mut p = profile(Gender::Male, Goal::Maintain);
        p.age = 0;
        assert!(matches!(calculate_bmr(&p), Err(PlannerError::InvalidProfile(_))));

        let mut p = profile(Gender::Male, Goal::Maintain);
        p.weight = 0.0;
        assert!(matches!(calculate_bmr(&p), Err(PlannerError::InvalidProfile(_))));
    }

    #[test]
    fn test_tdee_multipliers() {
        assert_eq!(calculate_tdee(1673, ActivityLevel::Moderate), 2593);
        assert_eq!(calculate_tdee(1000, ActivityLevel::Sedentary), 1200);
        assert_eq!(calculate_tdee(1000, ActivityLevel::VeryActive), 1900);
    }

    #[test]
    fn test_tdee_for_unknown_key() {
        assert!(matches!(
            calculate_tdee_for_key(1500, "couch"),
            Err(PlannerError::InvalidActivityLevel(_))
        ));
        assert_eq!(calculate_tdee_for_key(1000, "light").unwrap(), 1375);
    }

    #[test]
    fn test_maintain_keeps_tdee() {
        let p = profile(Gender::Male, Goal::Maintain);
        let calc = calculate_target_calories(&p, 2500).unwrap();
        assert_eq!(calc.target_calories, 2500);
        assert_eq!(calc.deficit_or_surplus, 0);
    }

    #[test]
    fn test_default_deficit_and_surplus() {
        let lose = calculate_target_calories(&profile(Gender::Male, Goal::Lose), 2547).unwrap();
        assert_eq!(lose.deficit_or_surplus, -500);
        assert_eq!(lose.target_calories, 2047);

        let gain = calculate_target_calories(&profile(Gender::Male, Goal::Gain), 2547).unwrap();
        assert_eq!(gain.deficit_or_surplus, 500);
        assert_eq!(gain.target_calories, 3047);
    }

    #[test]
    fn test_deficit_clamped_to_max() {
        let mut p = profile(Gender::Male, Goal::Lose);
        p.target_weight = Some(50.0);
        p.timeframe = Some(4);
        // 5 kg/week → 5500 kcal/day, clamped
        let calc = calculate_target_calories(&p, 3000).unwrap();
        assert_eq!(calc.deficit_or_surplus, -1000);
        assert_eq!(calc.target_calories, 2000);
    }

    #[test]
    fn test_lose_respects_bmr_floor() {
        let p = profile(Gender::Male, Goal::Lose);
        // BMR 1643 → floor 1971.6
        let calc = calculate_target_calories(&p, 2100).unwrap();
        assert_eq!(calc.target_calories, 1972);
    }

    #[test]
    fn test_absolute_floor() {
        let p = UserProfile {
            gender: Gender::Female,
            age: 80,
            weight: 40.0,
            height: 145,
            activity_level: ActivityLevel::Sedentary,
            goal: Goal::Maintain,
            target_weight: None,
            timeframe: None,
        };
        let bmr = calculate_bmr(&p).unwrap();
        let tdee = calculate_tdee(bmr, p.activity_level);
        assert!(tdee < 1200);
        assert_eq!(calculate_target_calories(&p, tdee).unwrap().target_calories, 1200);
    }

    #[test]
    fn test_macros_split() {
        let macros = calculate_macros(2000);
        assert_eq!(macros.protein, 150);
        assert_eq!(macros.carbs, 225);
        assert_eq!(macros.fat, 56);
    }

    #[test]
    fn test_time_to_goal() {
        let mut p = profile(Gender::Male, Goal::Lose);
        p.target_weight = Some(65.0);
        // 500 kcal/day → 0.4545 kg/week → 11 weeks for 5 kg
        assert_eq!(calculate_time_to_goal(&p, -500), 11);
        assert_eq!(calculate_time_to_goal(&p, 0), 0);

        p.goal = Goal::Maintain;
        assert_eq!(calculate_time_to_goal(&p, -500), 0);
    }

    #[test]
    fn test_weekly_weight_change() {
        assert!((calculate_weekly_weight_change(-1100) + 1.0).abs() < 1e-9);
        assert_eq!(calculate_weekly_weight_change(0), 0.0);
    }

    #[test]
    fn test_bmi_and_category() {
        let bmi = calculate_bmi(170, 70.0);
        assert!((bmi - 24.2).abs() < 1e-9);
        assert_eq!(get_bmi_category(bmi), BmiCategory::Normal);
        assert_eq!(get_bmi_category(18.4), BmiCategory::Underweight);
        assert_eq!(get_bmi_category(25.0), BmiCategory::Overweight);
        assert_eq!(get_bmi_category(30.0), BmiCategory::Obese);
        assert_eq!(calculate_bmi(0, 70.0), 0.0);
    }
}
