use chrono::NaiveDate;

use crate::models::{Goal, GoalProgress, UserProfile, WeightLog};

/// Whole weeks between two dates, floored at zero.
fn weeks_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let days = (to - from).num_days();
    if days <= 0 { 0 } else { (days / 7) as u32 }
}

/// Track progress toward the profile's weight target from weigh-in history.
///
/// The earliest log is the starting point and the latest is the current
/// weight; with no logs both fall back to the profile weight. Returns `None`
/// when the profile has no positive timeframe.
pub fn compute_goal_progress(
    profile: &UserProfile,
    logs: &[WeightLog],
    today: NaiveDate,
) -> Option<GoalProgress> {
    let timeframe = profile.timeframe.filter(|t| *t > 0)?;

    let target_weight = match profile.goal {
        Goal::Maintain => profile.weight,
        _ => profile.target_weight.unwrap_or(profile.weight),
    };

    let mut sorted: Vec<&WeightLog> = logs.iter().collect();
    sorted.sort_by_key(|log| log.date);

    let start_weight = sorted.first().map(|l| l.weight).unwrap_or(profile.weight);
    let start_date = sorted.first().map(|l| l.date).unwrap_or(today);
    let current_weight = sorted.last().map(|l| l.weight).unwrap_or(start_weight);

    let total_change = (target_weight - start_weight).abs();
    // Positive when weight went down
    let delta = start_weight - current_weight;
    let progress_kg = if profile.goal == Goal::Gain { -delta } else { delta };

    let progress_percentage = if total_change == 0.0 {
        100.0
    } else {
        (progress_kg / total_change * 100.0).clamp(0.0, 100.0)
    };

    Some(GoalProgress {
        weeks_passed: weeks_between(start_date, today),
        timeframe,
        total_change,
        progress_kg: progress_kg.max(0.0),
        progress_percentage,
        current_weight,
        start_weight,
        target_weight,
    })
}
