use crate::catalog::Catalog;
use crate::engine::{
    calculate_bmi, calculate_time_to_goal, calculate_weekly_weight_change, get_bmi_category,
    GoalValidation,
};
use crate::models::{CalorieCalculation, FoodItem, GoalProgress, MealPlan, MealSlot, UserProfile};
use crate::planner::PlanAnalysis;

/// One aligned line for a food: name, portion, calories and macros.
pub fn format_food_line(food: &FoodItem, width: usize) -> String {
    let portion = if food.portion.is_empty() {
        String::new()
    } else {
        format!(" ({})", food.portion)
    };
    format!(
        "{:<width$} - {:>4} cal | P:{:.1} C:{:.1} F:{:.1}{}",
        food.name,
        food.calories,
        food.protein,
        food.carbs,
        food.fat,
        portion,
        width = width
    )
}

/// Display BMR, TDEE, target and macros.
pub fn display_calculation(calc: &CalorieCalculation) {
    println!();
    println!("=== Daily Calories ===");
    println!();
    println!("BMR:            {:>5} kcal", calc.bmr);
    println!("TDEE:           {:>5} kcal", calc.tdee);

    let sign = if calc.deficit_or_surplus > 0 { "+" } else { "" };
    println!("Adjustment:     {:>5} kcal", format!("{}{}", sign, calc.deficit_or_surplus));
    println!("Target:         {:>5} kcal", calc.target_calories);
    println!();
    println!("--- Macros ---");
    println!("Protein: {} g", calc.macro_breakdown.protein);
    println!("Carbs:   {} g", calc.macro_breakdown.carbs);
    println!("Fat:     {} g", calc.macro_breakdown.fat);
    println!();
}

/// Display BMI, goal feasibility and the expected pace.
pub fn display_goal_summary(
    profile: &UserProfile,
    calc: &CalorieCalculation,
    validation: &GoalValidation,
) {
    let bmi = calculate_bmi(profile.height, profile.weight);
    println!("BMI: {:.1} ({})", bmi, get_bmi_category(bmi).label());
    println!("Goal: {}", profile.goal.description());

    if let Some(message) = &validation.message {
        println!("Warning: {}", message);
    }

    let weeks = calculate_time_to_goal(profile, calc.deficit_or_surplus);
    if weeks > 0 {
        println!(
            "Expected change: {:+.2} kg/week, about {} weeks to reach {:.1} kg",
            calculate_weekly_weight_change(calc.deficit_or_surplus),
            weeks,
            profile.target_weight.unwrap_or(profile.weight)
        );
    }
    println!();
}

/// Display a meal plan slot by slot.
pub fn display_meal_plan(plan: &MealPlan) {
    println!();
    println!("=== Meal Plan for {} ({}) ===", plan.date, plan.source.as_str());

    let width = plan.all_items().map(|f| f.name.chars().count()).max().unwrap_or(10);

    for slot in MealSlot::ALL {
        let items = plan.items(slot);
        let budget = plan
            .distribution
            .map(|d| format!(" / {} kcal", d.get(slot)))
            .unwrap_or_default();

        println!();
        println!("{} ({} kcal{})", slot.title(), plan.slot_calories(slot), budget);

        if items.is_empty() {
            println!("  (nothing suitable)");
            continue;
        }
        for item in items {
            println!("  {}", format_food_line(item, width));
        }
    }

    println!();
    println!("--- Summary ---");
    println!("Total items: {}", plan.item_count());
    println!("Total calories: {} / {} kcal", plan.total_calories, plan.target_calories);
    println!();
}

pub fn display_analysis(analysis: &PlanAnalysis) {
    let summary = &analysis.summary;
    println!(
        "Status: {} ({:+}%)",
        summary.status, summary.difference
    );

    let b = &analysis.balance;
    println!(
        "Balance: protein {} | carbs {} | vegetables {} | fiber {} | vitamins {}",
        b.protein, b.carbs, b.vegetables, b.fiber, b.vitamins
    );

    if !analysis.recommendations.is_empty() {
        println!();
        println!("--- Recommendations ---");
        for rec in &analysis.recommendations {
            println!("  - {}", rec);
        }
    }
    println!();
}

/// Display every catalog food grouped by slot.
pub fn display_catalog(catalog: &Catalog) {
    println!();
    println!("=== Food Catalog ({} items) ===", catalog.len());

    for slot in MealSlot::ALL {
        let foods = catalog.items(slot);
        println!();
        if foods.is_empty() {
            println!("{}: (none)", slot.title());
            continue;
        }

        println!("{} ({} items)", slot.title(), foods.len());
        let width = foods.iter().map(|f| f.name.chars().count()).max().unwrap_or(10);
        for food in foods {
            let tags = if food.tags.is_empty() {
                String::new()
            } else {
                format!("  [{}]", food.tags.join(", "))
            };
            println!("  {}{}", format_food_line(food, width), tags);
        }
    }
    println!();
}

pub fn display_progress(progress: Option<&GoalProgress>) {
    let Some(p) = progress else {
        println!("No timeframe set, so there is no progress to report.");
        return;
    };

    println!();
    println!("=== Goal Progress ===");
    println!();
    println!("Start:   {:.1} kg", p.start_weight);
    println!("Current: {:.1} kg", p.current_weight);
    println!("Target:  {:.1} kg", p.target_weight);
    println!(
        "Progress: {:.1} of {:.1} kg ({:.0}%)",
        p.progress_kg, p.total_change, p.progress_percentage
    );
    println!("Week {} of {}", p.weeks_passed, p.timeframe);
    println!();
}
