use chrono::{Local, NaiveDate};

use crate::catalog::Catalog;
use crate::error::{PlannerError, Result};
use crate::models::{Goal, MealDistribution, MealPlan, MealSlot, PlanSource};
use crate::planner::constants::slot_share;
use crate::planner::random::RandomSource;
use crate::planner::selection::select_meals_for_calories;

/// Split a daily target into per-slot budgets (25/35/30/10).
///
/// Each budget is rounded on its own, so the sum may drift by a kcal.
pub fn calculate_meal_distribution(target_calories: u32) -> MealDistribution {
    let share = |slot: MealSlot| (target_calories as f64 * slot_share(slot)).round() as u32;
    MealDistribution {
        breakfast: share(MealSlot::Breakfast),
        lunch: share(MealSlot::Lunch),
        dinner: share(MealSlot::Dinner),
        snacks: share(MealSlot::Snacks),
    }
}

/// Generate a full day of meals for the given target and goal.
pub fn generate_meal_plan<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    target_calories: u32,
    goal: Goal,
    rng: &mut R,
) -> Result<MealPlan> {
    generate_meal_plan_for_date(catalog, target_calories, goal, Local::now().date_naive(), rng)
}

/// Same as [`generate_meal_plan`] with an explicit plan date.
pub fn generate_meal_plan_for_date<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    target_calories: u32,
    goal: Goal,
    date: NaiveDate,
    rng: &mut R,
) -> Result<MealPlan> {
    if catalog.is_empty() {
        return Err(PlannerError::CatalogUnavailable(
            "cannot plan meals without a food catalog".to_string(),
        ));
    }

    let distribution = calculate_meal_distribution(target_calories);

    let breakfast = select_meals_for_calories(catalog, MealSlot::Breakfast, distribution.breakfast, goal, rng);
    let lunch = select_meals_for_calories(catalog, MealSlot::Lunch, distribution.lunch, goal, rng);
    let dinner = select_meals_for_calories(catalog, MealSlot::Dinner, distribution.dinner, goal, rng);
    let snacks = select_meals_for_calories(catalog, MealSlot::Snacks, distribution.snacks, goal, rng);

    let mut plan = MealPlan {
        date,
        target_calories,
        goal,
        breakfast,
        lunch,
        dinner,
        snacks,
        total_calories: 0,
        distribution: Some(distribution),
        source: PlanSource::Local,
    };
    plan.total_calories = plan.sum_calories();

    tracing::info!(
        target = target_calories,
        total = plan.total_calories,
        items = plan.item_count(),
        goal = %goal,
        "generated meal plan"
    );

    Ok(plan)
}

/// Re-roll one slot, keeping every other slot and the distribution.
///
/// The new items come from the local catalog, so the result is marked
/// `PlanSource::Local` even when the input plan came from the service.
pub fn regenerate_meal_type<R: RandomSource + ?Sized>(
    plan: &MealPlan,
    slot: MealSlot,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<MealPlan> {
    let distribution = plan
        .distribution
        .ok_or(PlannerError::MissingDistribution(slot))?;

    let items = select_meals_for_calories(catalog, slot, distribution.get(slot), plan.goal, rng);
    let mut updated = plan.with_slot(slot, items);
    updated.source = PlanSource::Local;

    tracing::info!(slot = %slot, total = updated.total_calories, "regenerated meal slot");
    Ok(updated)
}

/// Re-roll the whole plan with the same target and goal.
pub fn regenerate_all_meals<R: RandomSource + ?Sized>(
    plan: &MealPlan,
    catalog: &Catalog,
    rng: &mut R,
) -> Result<MealPlan> {
    generate_meal_plan_for_date(catalog, plan.target_calories, plan.goal, plan.date, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::random::SequenceSource;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_distribution_percentages() {
        let dist = calculate_meal_distribution(2000);
        assert_eq!(dist.breakfast, 500);
        assert_eq!(dist.lunch, 700);
        assert_eq!(dist.dinner, 600);
        assert_eq!(dist.snacks, 200);
    }

    #[test]
    fn test_distribution_rounding_drift() {
        for target in [1200, 1333, 1777, 2089, 2135, 3001] {
            let total = calculate_meal_distribution(target).total() as i64;
            assert!((total - target as i64).abs() <= 2, "{} -> {}", target, total);
        }
    }

    #[test]
    fn test_plan_totals_match_items() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SequenceSource::new(vec![0, 1, 2]);
        let plan = generate_meal_plan_for_date(&catalog, 2000, Goal::Lose, date(), &mut rng).unwrap();

        assert_eq!(plan.total_calories, plan.sum_calories());
        assert_eq!(plan.distribution, Some(calculate_meal_distribution(2000)));
        assert_eq!(plan.source, PlanSource::Local);
        assert_eq!(plan.date, date());
    }

    #[test]
    fn test_regenerate_keeps_other_slots() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SequenceSource::closest();
        let plan = generate_meal_plan_for_date(&catalog, 2200, Goal::Maintain, date(), &mut rng).unwrap();

        let mut rng = SequenceSource::new(vec![2]);
        let updated = regenerate_meal_type(&plan, MealSlot::Dinner, &catalog, &mut rng).unwrap();

        assert_eq!(updated.breakfast, plan.breakfast);
        assert_eq!(updated.lunch, plan.lunch);
        assert_eq!(updated.snacks, plan.snacks);
        assert_eq!(updated.distribution, plan.distribution);
        assert_eq!(updated.total_calories, updated.sum_calories());
    }

    #[test]
    fn test_regenerate_marks_remote_plan_local() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SequenceSource::closest();
        let mut plan = generate_meal_plan_for_date(&catalog, 2000, Goal::Lose, date(), &mut rng).unwrap();
        plan.source = PlanSource::Remote;

        let updated = regenerate_meal_type(&plan, MealSlot::Snacks, &catalog, &mut rng).unwrap();
        assert_eq!(updated.source, PlanSource::Local);
        assert_eq!(updated.breakfast, plan.breakfast);
    }

    #[test]
    fn test_regenerate_without_distribution() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SequenceSource::closest();
        let mut plan = generate_meal_plan_for_date(&catalog, 1800, Goal::Gain, date(), &mut rng).unwrap();
        plan.distribution = None;

        let result = regenerate_meal_type(&plan, MealSlot::Lunch, &catalog, &mut rng);
        assert!(matches!(result, Err(PlannerError::MissingDistribution(MealSlot::Lunch))));
    }

    #[test]
    fn test_regenerate_all_uses_same_target() {
        let catalog = Catalog::builtin().unwrap();
        let mut rng = SequenceSource::closest();
        let plan = generate_meal_plan_for_date(&catalog, 1800, Goal::Gain, date(), &mut rng).unwrap();

        let mut rng = SequenceSource::closest();
        let again = regenerate_all_meals(&plan, &catalog, &mut rng).unwrap();
        assert_eq!(again.target_calories, 1800);
        assert_eq!(again.goal, Goal::Gain);
        // Same scripted picks, same catalog: same plan
        assert_eq!(again.total_calories, plan.total_calories);
    }
}
