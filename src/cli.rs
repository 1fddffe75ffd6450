use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Calorie Planner: daily calorie targets and Thai meal plans from a biometric profile.
#[derive(Parser, Debug)]
#[command(name = "calorie-planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Food catalog file (.json or .csv). Defaults to the built-in Thai catalog.
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Remote meal plan service URL.
    #[arg(long, global = true)]
    pub remote_url: Option<String>,

    /// Fixed seed for reproducible meal picks.
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Profile fields; anything left out is asked for interactively.
#[derive(Args, Debug, Clone, Default)]
pub struct ProfileArgs {
    /// male or female.
    #[arg(long)]
    pub gender: Option<String>,

    /// Age in years.
    #[arg(long)]
    pub age: Option<u32>,

    /// Weight in kg.
    #[arg(long)]
    pub weight: Option<f64>,

    /// Height in cm.
    #[arg(long)]
    pub height: Option<u32>,

    /// sedentary, light, moderate, active or very-active.
    #[arg(long)]
    pub activity: Option<String>,

    /// lose, maintain or gain.
    #[arg(long)]
    pub goal: Option<String>,

    /// Target weight in kg.
    #[arg(long)]
    pub target_weight: Option<f64>,

    /// Weeks to reach the target weight.
    #[arg(long)]
    pub timeframe: Option<u32>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute BMR, TDEE, target calories and macros.
    Calculate {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Calculate the target and generate a meal plan for today.
    Plan {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Write the daily plan as JSON.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Cuisine asked of the remote plan service: thai or any.
        #[arg(long, default_value = "thai")]
        cuisine: String,
    },

    /// Re-roll one meal slot (or all of them) in a saved daily plan.
    Regenerate {
        /// Saved daily plan JSON, updated in place.
        #[arg(short, long)]
        plan: PathBuf,

        /// breakfast, lunch, dinner or snacks. Omit to re-roll everything.
        #[arg(short, long)]
        slot: Option<String>,
    },

    /// Report goal progress from a weight log CSV (date,weight).
    Progress {
        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(short, long)]
        logs: PathBuf,
    },

    /// List the foods in the catalog.
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_cuisine(args: &[&str]) -> String {
        match Cli::try_parse_from(args).unwrap().command {
            Some(Command::Plan { cuisine, .. }) => cuisine,
            other => panic!("expected plan command, got {:?}", other),
        }
    }

    #[test]
    fn test_plan_cuisine_flag() {
        assert_eq!(plan_cuisine(&["calorie-planner", "plan"]), "thai");
        assert_eq!(plan_cuisine(&["calorie-planner", "plan", "--cuisine", "any"]), "any");
    }
}
