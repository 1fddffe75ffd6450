use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calorie_planner_rs::cli::{Cli, Command, ProfileArgs};
use calorie_planner_rs::config::AppConfig;
use calorie_planner_rs::engine::{calculate, compute_goal_progress, validate_goal};
use calorie_planner_rs::error::Result;
use calorie_planner_rs::interface::{
    display_analysis, display_calculation, display_catalog, display_goal_summary,
    display_meal_plan, display_progress, prompt_yes_no, resolve_profile,
};
use calorie_planner_rs::models::{DailyPlan, MealSlot};
use calorie_planner_rs::planner::{analyze_meal_plan, regenerate_all_meals, regenerate_meal_type};
use calorie_planner_rs::remote::{
    generate_with_fallback, Cuisine, RemotePlanRequest, RemotePlanSource,
};
use calorie_planner_rs::state::{load_daily_plan, load_weight_logs, save_daily_plan};

fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    init_tracing(config.json_logs);

    if let Err(e) = run(config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so plan output on stdout stays clean.
fn init_tracing(json_logs: bool) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("calorie_planner_rs=info"));

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn run(config: AppConfig) -> Result<()> {
    let cli = Cli::parse();
    let config = config.with_overrides(cli.catalog, cli.remote_url, cli.seed);

    let Some(command) = cli.command else {
        // No subcommand: behave like `plan` with every field prompted
        return cmd_plan(&config, &ProfileArgs::default(), None, Cuisine::Thai);
    };

    match command {
        Command::Calculate { profile } => cmd_calculate(&profile),
        Command::Plan {
            profile,
            output,
            cuisine,
        } => cmd_plan(&config, &profile, output, cuisine.parse()?),
        Command::Regenerate { plan, slot } => cmd_regenerate(&config, &plan, slot.as_deref()),
        Command::Progress { profile, logs } => cmd_progress(&profile, &logs),
        Command::Catalog => cmd_catalog(&config),
    }
}

/// Compute and show the calorie target for a profile.
fn cmd_calculate(args: &ProfileArgs) -> Result<()> {
    let profile = resolve_profile(args)?;
    let calc = calculate(&profile)?;

    display_calculation(&calc);
    display_goal_summary(&profile, &calc, &validate_goal(&profile));
    Ok(())
}

/// Calculate the target, then plan meals remotely or locally.
fn cmd_plan(
    config: &AppConfig,
    args: &ProfileArgs,
    output: Option<PathBuf>,
    cuisine: Cuisine,
) -> Result<()> {
    let profile = resolve_profile(args)?;
    let calc = calculate(&profile)?;

    display_calculation(&calc);
    display_goal_summary(&profile, &calc, &validate_goal(&profile));

    let catalog = config.load_catalog()?;
    let remote = config.remote_client()?;
    let mut rng = config.rng();

    if let Some(client) = &remote {
        tracing::info!(
            endpoint = %client.endpoint(),
            cuisine = cuisine.label(),
            "remote plan service configured"
        );
    }

    let request =
        RemotePlanRequest::new(profile.clone(), calc.target_calories).with_cuisine(cuisine);
    let source = remote.as_ref().map(|c| c as &dyn RemotePlanSource);
    let meal_plan = generate_with_fallback(source, &request, &catalog, &mut rng)?;

    display_meal_plan(&meal_plan);
    display_analysis(&analyze_meal_plan(&meal_plan));

    let daily = DailyPlan::new(profile, calc, meal_plan);

    let path = match output {
        Some(path) => Some(path),
        None if args_were_prompted(args) => prompt_yes_no("Save this plan?", false)?
            .then(|| PathBuf::from(format!("plan-{}.json", daily.meal_plan.date))),
        None => None,
    };

    if let Some(path) = path {
        save_daily_plan(&path, &daily)?;
        println!("Plan saved to {}", path.display());
    }

    Ok(())
}

/// Only offer interactive saves when the user is already at a prompt.
fn args_were_prompted(args: &ProfileArgs) -> bool {
    args.gender.is_none()
        || args.age.is_none()
        || args.weight.is_none()
        || args.height.is_none()
        || args.activity.is_none()
        || args.goal.is_none()
}

/// Re-roll one slot or the whole plan in a saved daily plan.
fn cmd_regenerate(config: &AppConfig, path: &Path, slot: Option<&str>) -> Result<()> {
    let mut daily = load_daily_plan(path)?;
    let catalog = config.load_catalog()?;
    let mut rng = config.rng();

    daily.meal_plan = match slot {
        Some(slot) => {
            let slot: MealSlot = slot.parse()?;
            regenerate_meal_type(&daily.meal_plan, slot, &catalog, &mut rng)?
        }
        None => regenerate_all_meals(&daily.meal_plan, &catalog, &mut rng)?,
    };
    daily.generated_at = chrono::Utc::now();

    display_meal_plan(&daily.meal_plan);
    display_analysis(&analyze_meal_plan(&daily.meal_plan));

    save_daily_plan(path, &daily)?;
    println!("Plan updated: {}", path.display());
    Ok(())
}

fn cmd_progress(args: &ProfileArgs, logs_path: &Path) -> Result<()> {
    let profile = resolve_profile(args)?;
    let logs = load_weight_logs(logs_path)?;

    println!("Loaded {} weigh-ins", logs.len());
    let progress = compute_goal_progress(&profile, &logs, Local::now().date_naive());
    display_progress(progress.as_ref());
    Ok(())
}

fn cmd_catalog(config: &AppConfig) -> Result<()> {
    let catalog = config.load_catalog()?;
    display_catalog(&catalog);
    Ok(())
}
