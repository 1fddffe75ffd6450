#[macro_use]
extern crate assert_float_eq;

use calorie_planner_rs::engine::{
    calculate, calculate_bmr, calculate_tdee, calculate_tdee_for_key, calculate_time_to_goal,
    calculate_weekly_weight_change, validate_goal, MAX_DAILY_DELTA, MIN_TARGET_CALORIES,
};
use calorie_planner_rs::models::{ActivityLevel, Gender, Goal, UserProfile};
use calorie_planner_rs::PlannerError;

fn make_profile(
    gender: Gender,
    age: u32,
    weight: f64,
    height: u32,
    activity_level: ActivityLevel,
    goal: Goal,
) -> UserProfile {
    UserProfile {
        gender,
        age,
        weight,
        height,
        activity_level,
        goal,
        target_weight: None,
        timeframe: None,
    }
}

#[test]
fn test_end_to_end_weight_loss() {
    let profile = UserProfile {
        target_weight: Some(65.0),
        timeframe: Some(12),
        ..make_profile(Gender::Male, 25, 70.0, 170, ActivityLevel::Moderate, Goal::Lose)
    };

    let calc = calculate(&profile).unwrap();
    assert_eq!(calc.bmr, 1643);
    assert_eq!(calc.tdee, 2547);
    assert_eq!(calc.deficit_or_surplus, -458);
    assert_eq!(calc.target_calories, 2089);
    assert_eq!(calc.macro_breakdown.protein, 157);
    assert_eq!(calc.macro_breakdown.carbs, 235);
    assert_eq!(calc.macro_breakdown.fat, 58);

    // 5 kg at 458 kcal/day is just over 12 weeks
    assert_eq!(calculate_time_to_goal(&profile, calc.deficit_or_surplus), 13);
    assert_float_absolute_eq!(calculate_weekly_weight_change(calc.deficit_or_surplus), -0.416, 0.001);
}

#[test]
fn test_bmr_both_genders() {
    let male = make_profile(Gender::Male, 25, 70.0, 170, ActivityLevel::Moderate, Goal::Maintain);
    let female = UserProfile {
        gender: Gender::Female,
        ..male.clone()
    };

    assert_eq!(calculate_bmr(&male).unwrap(), 1643);
    assert_eq!(calculate_bmr(&female).unwrap(), 1477);
}

#[test]
fn test_tdee_table() {
    assert_eq!(calculate_tdee(1673, ActivityLevel::Moderate), 2593);
    assert_eq!(calculate_tdee(1500, ActivityLevel::Sedentary), 1800);
    assert_eq!(calculate_tdee_for_key(1500, "very-active").unwrap(), 2850);
    assert!(matches!(
        calculate_tdee_for_key(1500, "couch"),
        Err(PlannerError::InvalidActivityLevel(_))
    ));
}

#[test]
fn test_target_never_below_floor() {
    let genders = [Gender::Male, Gender::Female];
    let goals = [Goal::Lose, Goal::Maintain, Goal::Gain];

    for gender in genders {
        for goal in goals {
            for (age, weight, height) in [(100, 30.0, 100), (15, 45.0, 150), (60, 55.0, 160)] {
                let profile = UserProfile {
                    target_weight: Some(30.0),
                    timeframe: Some(1),
                    ..make_profile(gender, age, weight, height, ActivityLevel::Sedentary, goal)
                };
                let calc = calculate(&profile).unwrap();
                assert!(
                    calc.target_calories as f64 >= MIN_TARGET_CALORIES,
                    "{:?} {:?} {} -> {}",
                    gender,
                    goal,
                    age,
                    calc.target_calories
                );
            }
        }
    }
}

#[test]
fn test_weekly_loss_clamped() {
    for (weight, target, weeks) in [(100.0, 60.0, 2), (90.0, 80.0, 4), (70.0, 69.0, 52)] {
        let profile = UserProfile {
            target_weight: Some(target),
            timeframe: Some(weeks),
            ..make_profile(Gender::Female, 40, weight, 165, ActivityLevel::Light, Goal::Lose)
        };
        let calc = calculate(&profile).unwrap();
        let weekly = calculate_weekly_weight_change(calc.deficit_or_surplus);

        assert!(weekly < 0.0);
        assert!(weekly.abs() <= MAX_DAILY_DELTA * 7.0 / 7700.0 + 1e-9);
    }
}

#[test]
fn test_default_delta_without_target() {
    let profile = make_profile(Gender::Male, 30, 80.0, 180, ActivityLevel::Active, Goal::Gain);
    let calc = calculate(&profile).unwrap();
    assert_eq!(calc.deficit_or_surplus, 500);
    assert_eq!(calc.target_calories, calc.tdee + 500);
}

#[test]
fn test_validate_goal_rejects_fast_change() {
    for weight in [60.0, 80.0, 120.0] {
        for weeks in [1u32, 4, 10] {
            for step in [0.5, 1.5, 3.0] {
                let change = step * weeks as f64;
                for (goal, target) in [(Goal::Lose, weight - change), (Goal::Gain, weight + change)] {
                    let profile = UserProfile {
                        target_weight: Some(target),
                        timeframe: Some(weeks),
                        ..make_profile(Gender::Male, 30, weight, 175, ActivityLevel::Moderate, goal)
                    };
                    let result = validate_goal(&profile);
                    assert_eq!(result.is_valid, step <= 1.0, "{} {} {}", weight, weeks, step);
                }
            }
        }
    }
}

#[test]
fn test_invalid_profile_lists_every_problem() {
    let profile = make_profile(Gender::Male, 12, 20.0, 90, ActivityLevel::Moderate, Goal::Maintain);
    match calculate(&profile) {
        Err(PlannerError::InvalidProfile(message)) => {
            assert!(message.contains("age"));
            assert!(message.contains("height"));
            assert!(message.contains("weight"));
        }
        other => panic!("expected InvalidProfile, got {:?}", other),
    }
}
