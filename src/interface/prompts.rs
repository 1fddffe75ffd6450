use std::str::FromStr;

use dialoguer::{Confirm, Input, Select};

use crate::cli::ProfileArgs;
use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Prompt for a number as text and parse it.
fn prompt_number<T: FromStr>(prompt: &str, default: &str) -> Result<T> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput(format!("Invalid number: '{}'", input)))
}

pub fn prompt_gender() -> Result<Gender> {
    let options = ["male", "female"];
    let selection = Select::new()
        .with_prompt("Gender")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(if selection == 0 { Gender::Male } else { Gender::Female })
}

pub fn prompt_activity_level() -> Result<ActivityLevel> {
    let options: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{:<12} {}", level.key(), level.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&options)
        .default(2)
        .interact()?;

    Ok(ActivityLevel::ALL[selection.min(ActivityLevel::ALL.len() - 1)])
}

pub fn prompt_goal() -> Result<Goal> {
    let goals = [Goal::Lose, Goal::Maintain, Goal::Gain];
    let options: Vec<String> = goals
        .iter()
        .map(|g| format!("{:<9} {}", g.as_str(), g.description()))
        .collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&options)
        .default(1)
        .interact()?;

    Ok(goals[selection.min(goals.len() - 1)])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

fn parse_opt<T: FromStr<Err = PlannerError>>(value: &Option<String>) -> Result<Option<T>> {
    value.as_deref().map(str::parse).transpose()
}

/// Build a profile from flags, returning `None` if a required field is missing.
pub fn profile_from_args(args: &ProfileArgs) -> Result<Option<UserProfile>> {
    let gender: Option<Gender> = parse_opt(&args.gender)?;
    let activity: Option<ActivityLevel> = parse_opt(&args.activity)?;
    let goal: Option<Goal> = parse_opt(&args.goal)?;

    Ok(match (gender, args.age, args.weight, args.height, activity, goal) {
        (Some(gender), Some(age), Some(weight), Some(height), Some(activity_level), Some(goal)) => {
            Some(UserProfile {
                gender,
                age,
                weight,
                height,
                activity_level,
                goal,
                target_weight: args.target_weight,
                timeframe: args.timeframe,
            })
        }
        _ => None,
    })
}

/// Complete a profile from flags, prompting for whatever is missing.
///
/// Target weight and timeframe are only offered in an interactive session
/// for a non-maintain goal.
pub fn resolve_profile(args: &ProfileArgs) -> Result<UserProfile> {
    if let Some(profile) = profile_from_args(args)? {
        return Ok(profile);
    }

    let gender = match parse_opt(&args.gender)? {
        Some(g) => g,
        None => prompt_gender()?,
    };
    let age = match args.age {
        Some(a) => a,
        None => prompt_number("Age (years)", "30")?,
    };
    let weight = match args.weight {
        Some(w) => w,
        None => prompt_number("Weight (kg)", "70")?,
    };
    let height = match args.height {
        Some(h) => h,
        None => prompt_number("Height (cm)", "170")?,
    };
    let activity_level = match parse_opt(&args.activity)? {
        Some(a) => a,
        None => prompt_activity_level()?,
    };
    let goal = match parse_opt(&args.goal)? {
        Some(g) => g,
        None => prompt_goal()?,
    };

    let mut target_weight = args.target_weight;
    let mut timeframe = args.timeframe;

    if goal != Goal::Maintain
        && target_weight.is_none()
        && timeframe.is_none()
        && prompt_yes_no("Set a target weight and timeframe?", false)?
    {
        target_weight = Some(prompt_number("Target weight (kg)", &format!("{weight}"))?);
        timeframe = Some(prompt_number("Timeframe (weeks)", "12")?);
    }

    Ok(UserProfile {
        gender,
        age,
        weight,
        height,
        activity_level,
        goal,
        target_weight,
        timeframe,
    })
}
