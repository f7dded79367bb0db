use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::catalog::{FoodCatalog, RecipeCatalog};
use crate::error::{PlanError, Result};
use crate::models::{
    parse_tags, FoodItem, Macros, MealSlot, Micro, Micros, NutrientProfile, Recipe,
};

/// Raw food row as stored in the catalog CSV (nutrients per reference weight).
#[derive(Debug, Deserialize)]
struct FoodRecord {
    name: String,
    group: String,
    per_g: f64,
    protein_g: f64,
    fat_g: f64,
    carbs_g: f64,
    fiber_g: f64,
    #[serde(rename = "Fe_mg")]
    fe_mg: f64,
    #[serde(rename = "Ca_mg")]
    ca_mg: f64,
    #[serde(rename = "VitD_IU")]
    vitd_iu: f64,
    #[serde(rename = "B12_ug")]
    b12_ug: f64,
    #[serde(rename = "Folate_ug")]
    folate_ug: f64,
    #[serde(rename = "Iodine_ug")]
    iodine_ug: f64,
    #[serde(rename = "K_mg")]
    k_mg: f64,
    #[serde(rename = "Mg_mg")]
    mg_mg: f64,
    #[serde(default)]
    flags: String,
    #[serde(default)]
    price: f64,
}

impl From<FoodRecord> for FoodItem {
    fn from(rec: FoodRecord) -> Self {
        let micros = Micros::default()
            .with(Micro::Iron, rec.fe_mg)
            .with(Micro::Calcium, rec.ca_mg)
            .with(Micro::VitaminD, rec.vitd_iu)
            .with(Micro::B12, rec.b12_ug)
            .with(Micro::Folate, rec.folate_ug)
            .with(Micro::Iodine, rec.iodine_ug)
            .with(Micro::Potassium, rec.k_mg)
            .with(Micro::Magnesium, rec.mg_mg);
        let flags: Vec<&str> = rec.flags.split(';').collect();
        FoodItem {
            name: rec.name,
            group: rec.group,
            per_g: rec.per_g,
            profile: NutrientProfile {
                macros: Macros {
                    protein_g: rec.protein_g,
                    fat_g: rec.fat_g,
                    carbs_g: rec.carbs_g,
                    fiber_g: rec.fiber_g,
                },
                micros,
            },
            tags: parse_tags(&flags),
            price: rec.price,
        }
    }
}

/// Raw recipe row: ingredients encoded as `food:grams;food:grams`.
#[derive(Debug, Deserialize)]
struct RecipeRecord {
    name: String,
    meal: String,
    ingredients: String,
    #[serde(default)]
    tags: String,
}

/// Load the food catalog from CSV. Duplicate names: last occurrence wins.
pub fn load_food_catalog<P: AsRef<Path>>(path: P) -> Result<FoodCatalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut foods = Vec::new();
    for record in reader.deserialize::<FoodRecord>() {
        let food = FoodItem::from(record?);
        if !food.is_valid() {
            return Err(PlanError::InvalidInput(format!(
                "negative nutrient values for food '{}'",
                food.name
            )));
        }
        foods.push(food);
    }
    Ok(FoodCatalog::new(foods))
}

/// Load the recipe catalog from CSV, validating every ingredient against the
/// food catalog up front so plan building never hits an unknown name.
pub fn load_recipe_catalog<P: AsRef<Path>>(path: P, foods: &FoodCatalog) -> Result<RecipeCatalog> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut recipes = Vec::new();
    for record in reader.deserialize::<RecipeRecord>() {
        let rec = record?;
        let slot = MealSlot::parse(&rec.meal).ok_or_else(|| {
            PlanError::InvalidInput(format!("unknown meal slot '{}' in recipe '{}'", rec.meal, rec.name))
        })?;
        let ingredients = parse_ingredients(&rec.name, &rec.ingredients)?;
        for name in ingredients.keys() {
            foods.lookup(name)?;
        }
        let tags: Vec<&str> = rec.tags.split(';').collect();
        recipes.push(Recipe {
            name: rec.name,
            slot,
            ingredients,
            tags: parse_tags(&tags),
        });
    }
    Ok(RecipeCatalog::new(recipes))
}

fn parse_ingredients(recipe: &str, raw: &str) -> Result<BTreeMap<String, f64>> {
    let mut out = BTreeMap::new();
    for pair in raw.split(';').filter(|p| !p.trim().is_empty()) {
        let (name, grams) = pair.split_once(':').ok_or_else(|| {
            PlanError::InvalidInput(format!("malformed ingredient '{pair}' in recipe '{recipe}'"))
        })?;
        let grams: f64 = grams.trim().parse().map_err(|_| {
            PlanError::InvalidInput(format!("bad gram amount '{grams}' in recipe '{recipe}'"))
        })?;
        if grams < 0.0 {
            return Err(PlanError::InvalidInput(format!(
                "negative gram amount in recipe '{recipe}'"
            )));
        }
        out.insert(name.trim().to_string(), grams);
    }
    Ok(out)
}
