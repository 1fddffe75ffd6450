use serde::{Deserialize, Serialize};

use crate::engine::constants::*;
use crate::error::{PlannerError, Result};
use crate::models::{Goal, UserProfile};

/// Check biometric ranges, reporting every violation at once.
pub fn validate_profile(profile: &UserProfile) -> Result<()> {
    let mut errors = Vec::new();

    if !AGE_RANGE.contains(&profile.age) {
        errors.push(format!(
            "age must be between {} and {} years",
            AGE_RANGE.start(),
            AGE_RANGE.end()
        ));
    }

    if !HEIGHT_RANGE_CM.contains(&profile.height) {
        errors.push(format!(
            "height must be between {} and {} cm",
            HEIGHT_RANGE_CM.start(),
            HEIGHT_RANGE_CM.end()
        ));
    }

    if !WEIGHT_RANGE_KG.contains(&profile.weight) {
        errors.push(format!(
            "weight must be between {} and {} kg",
            WEIGHT_RANGE_KG.start(),
            WEIGHT_RANGE_KG.end()
        ));
    }

    if let Some(target) = profile.target_weight {
        if !WEIGHT_RANGE_KG.contains(&target) {
            errors.push(format!(
                "target weight must be between {} and {} kg",
                WEIGHT_RANGE_KG.start(),
                WEIGHT_RANGE_KG.end()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(PlannerError::InvalidProfile(errors.join("; ")))
    }
}

/// Advisory verdict on a weight target; not an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalValidation {
    pub is_valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GoalValidation {
    fn valid() -> Self {
        Self {
            is_valid: true,
            message: None,
        }
    }

    fn invalid(message: String) -> Self {
        Self {
            is_valid: false,
            message: Some(message),
        }
    }
}

/// Check that a weight target is safe and points the same way as the goal.
///
/// Profiles without a target weight and timeframe are always valid.
pub fn validate_goal(profile: &UserProfile) -> GoalValidation {
    let Some((target, weeks)) = profile.weight_target() else {
        return GoalValidation::valid();
    };

    let weekly_change = (profile.weight - target).abs() / weeks as f64;
    if weekly_change > MAX_SAFE_WEEKLY_CHANGE_KG {
        return GoalValidation::invalid(format!(
            "A change of {:.1} kg/week may be unsafe (keep it at or below {:.0} kg/week)",
            weekly_change, MAX_SAFE_WEEKLY_CHANGE_KG
        ));
    }

    match profile.goal {
        Goal::Lose if target >= profile.weight => GoalValidation::invalid(
            "A weight-loss target must be below your current weight".to_string(),
        ),
        Goal::Gain if target <= profile.weight => GoalValidation::invalid(
            "A weight-gain target must be above your current weight".to_string(),
        ),
        _ => GoalValidation::valid(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityLevel, Gender};

    fn profile(goal: Goal, target_weight: Option<f64>, timeframe: Option<u32>) -> UserProfile {
        UserProfile {
            gender: Gender::Male,
            age: 25,
            weight: 70.0,
            height: 170,
            activity_level: ActivityLevel::Moderate,
            goal,
            target_weight,
            timeframe,
        }
    }

    #[test]
    fn test_validate_profile_ok() {
        assert!(validate_profile(&profile(Goal::Lose, Some(65.0), Some(12))).is_ok());
    }

    #[test]
    fn test_validate_profile_collects_all_errors() {
        let mut p = profile(Goal::Maintain, Some(500.0), None);
        p.age = 12;
        p.height = 90;

        let err = validate_profile(&p).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("age"));
        assert!(msg.contains("height"));
        assert!(msg.contains("target weight"));
        assert!(!msg.contains("; weight"));
    }

    #[test]
    fn test_goal_without_target_is_valid() {
        assert!(validate_goal(&profile(Goal::Lose, None, None)).is_valid);
        assert!(validate_goal(&profile(Goal::Lose, Some(60.0), None)).is_valid);
    }

    #[test]
    fn test_goal_too_fast() {
        let result = validate_goal(&profile(Goal::Lose, Some(60.0), Some(5)));
        assert!(!result.is_valid);
        assert!(result.message.unwrap().contains("2.0 kg/week"));
    }

    #[test]
    fn test_goal_direction_mismatch() {
        assert!(!validate_goal(&profile(Goal::Lose, Some(72.0), Some(10))).is_valid);
        assert!(!validate_goal(&profile(Goal::Gain, Some(68.0), Some(10))).is_valid);
        assert!(!validate_goal(&profile(Goal::Gain, Some(70.0), Some(10))).is_valid);
        assert!(validate_goal(&profile(Goal::Gain, Some(74.0), Some(10))).is_valid);
    }
}
