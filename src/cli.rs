use clap::{Parser, Subcommand};

use crate::i18n::Lang;

/// PlatePlanner — nutrient-aware daily and weekly meal plan generator.
#[derive(Parser, Debug)]
#[command(name = "plate_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog CSV.
    #[arg(long, default_value = "data/foods.csv")]
    pub foods: String,

    /// Path to the recipe catalog CSV.
    #[arg(long, default_value = "data/recipes.csv")]
    pub recipes: String,

    /// Daily calorie target. Prompted interactively when omitted.
    #[arg(short, long)]
    pub kcal: Option<u32>,

    /// Dietary flags (VEG, PESC, GF), repeatable. Prompted when omitted
    /// together with --kcal.
    #[arg(short, long)]
    pub diet: Vec<String>,

    /// Path to a nutrient targets JSON file; overrides --kcal-derived targets.
    #[arg(long)]
    pub targets: Option<String>,

    /// Display language.
    #[arg(short, long, value_enum, default_value_t = Lang::En)]
    pub lang: Lang,

    /// Seed for the random generator. Same seed, same plan.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Emit the plan as JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,

    /// Write the plan as JSON to a file in addition to the console output.
    #[arg(short, long)]
    pub out: Option<String>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Generate a single-day plate.
    Day,

    /// Generate a seven-day plan with a consolidated shopping list.
    Week,

    /// List the food catalog.
    Foods,
}

impl Default for Command {
    fn default() -> Self {
        Command::Week
    }
}
