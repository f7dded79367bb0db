use std::fs;
use std::path::Path;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use plate_planner_rs::catalog::{load_food_catalog, load_recipe_catalog, FoodCatalog, RecipeCatalog};
use plate_planner_rs::cli::{Cli, Command};
use plate_planner_rs::error::Result;
use plate_planner_rs::i18n::Lang;
use plate_planner_rs::interface::{
    display_day_plan, display_food_list, display_week_plan, prompt_diet_flags, prompt_kcal,
    prompt_yes_no,
};
use plate_planner_rs::models::{parse_tags, DietTags, NutrientTargets};
use plate_planner_rs::planner::{build_day, build_week};
use plate_planner_rs::targets::reference_targets;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or_default();

    let foods = load_food_catalog(&cli.foods)?;

    if let Command::Foods = command {
        display_food_list(foods.all_foods(), cli.lang);
        return Ok(());
    }

    let recipes = load_recipe_catalog(&cli.recipes, &foods)?;
    let targets = resolve_targets(&cli)?;
    let diet_flags = resolve_diet_flags(&cli)?;

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match command {
        Command::Day => cmd_day(&cli, &targets, &diet_flags, &foods, &recipes, &mut rng),
        Command::Week => cmd_week(&cli, &targets, &diet_flags, &foods, &recipes, &mut rng),
        Command::Foods => unreachable!("handled above"),
    }
}

/// Targets come from an explicit JSON file, the --kcal flag, or an
/// interactive prompt, in that order of precedence.
fn resolve_targets(cli: &Cli) -> Result<NutrientTargets> {
    if let Some(path) = &cli.targets {
        let raw = fs::read_to_string(Path::new(path))?;
        return Ok(serde_json::from_str(&raw)?);
    }

    let kcal = match cli.kcal {
        Some(kcal) => kcal,
        None => prompt_kcal()?,
    };
    Ok(reference_targets(kcal))
}

/// Diet flags from --diet, or an interactive prompt when neither --diet nor a
/// non-interactive calorie source was given.
fn resolve_diet_flags(cli: &Cli) -> Result<DietTags> {
    if !cli.diet.is_empty() {
        return Ok(parse_tags(&cli.diet));
    }
    if cli.kcal.is_some() || cli.targets.is_some() {
        return Ok(DietTags::new());
    }
    prompt_diet_flags()
}

fn cmd_day(
    cli: &Cli,
    targets: &NutrientTargets,
    diet_flags: &DietTags,
    foods: &FoodCatalog,
    recipes: &RecipeCatalog,
    rng: &mut StdRng,
) -> Result<()> {
    let day = build_day(targets, diet_flags, cli.lang, foods, recipes, rng)?;
    emit(cli, &day, |d, lang| display_day_plan(d, lang))
}

fn cmd_week(
    cli: &Cli,
    targets: &NutrientTargets,
    diet_flags: &DietTags,
    foods: &FoodCatalog,
    recipes: &RecipeCatalog,
    rng: &mut StdRng,
) -> Result<()> {
    let week = build_week(targets, diet_flags, cli.lang, foods, recipes, rng)?;
    emit(cli, &week, |w, lang| display_week_plan(w, lang))
}

/// Print the plan (JSON or formatted) and optionally persist it as JSON.
fn emit<T: Serialize>(cli: &Cli, plan: &T, render: impl Fn(&T, Lang)) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(plan)?);
    } else {
        render(plan, cli.lang);
    }

    if let Some(path) = &cli.out {
        if Path::new(path).exists() && !prompt_yes_no(&format!("Overwrite {path}?"), true)? {
            return Ok(());
        }
        fs::write(path, serde_json::to_string_pretty(plan)?)?;
        println!("Plan written to {path}");
    }

    Ok(())
}
