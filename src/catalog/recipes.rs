use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::catalog::FoodCatalog;
use crate::error::Result;
use crate::i18n::{self, Lang};
use crate::models::{
    is_compatible, round1, DietTags, Meal, MealSlot, NutrientProfile, Recipe,
};
use crate::planner::constants::{JITTER_MAX, JITTER_MIN, MIN_INGREDIENT_G, SCALE_TOLERANCE};

/// Read-only recipe catalog.
#[derive(Debug, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Pick a base recipe for a meal slot, uniformly at random among
    /// diet-compatible candidates.
    ///
    /// When no candidate matches the slot's meal type, the filter widens to
    /// any meal type while still respecting dietary compatibility. Returns
    /// `None` when no compatible recipe exists at all.
    pub fn select_base<R: Rng + ?Sized>(
        &self,
        diet_flags: &DietTags,
        slot: MealSlot,
        rng: &mut R,
    ) -> Option<&Recipe> {
        let slot_matches: Vec<&Recipe> = self
            .recipes
            .iter()
            .filter(|r| r.slot == slot && is_compatible(&r.tags, diet_flags))
            .collect();

        let candidates = if slot_matches.is_empty() {
            self.recipes
                .iter()
                .filter(|r| is_compatible(&r.tags, diet_flags))
                .collect()
        } else {
            slot_matches
        };

        candidates.choose(rng).copied()
    }

    /// Nutrient profile of an ingredient-gram mix.
    ///
    /// Each ingredient's per-reference-weight profile is scaled by its grams
    /// and summed; calories stay derived from the macro totals.
    pub fn compute_nutrition(
        &self,
        foods: &FoodCatalog,
        ingredient_grams: &BTreeMap<String, f64>,
    ) -> Result<NutrientProfile> {
        let mut total = NutrientProfile::default();
        for (name, grams) in ingredient_grams {
            total = total + foods.lookup(name)?.profile_for(*grams);
        }
        Ok(total)
    }

    /// Scale a recipe's ingredient quantities to hit a calorie goal.
    ///
    /// One proportional pass with a 10 g per-ingredient floor, independent
    /// per-ingredient jitter in [0.95, 1.05] for day-to-day variety, then a
    /// single corrective re-scale (no floor) when the result is off by more
    /// than 5% relative. The algorithm never iterates beyond that second
    /// pass. A zero-calorie base recipe uses scale factor 1.
    ///
    /// `prefer_fiber` is accepted for future tie-breaking and currently does
    /// not alter the scaling math.
    pub fn scale_to_calories<R: Rng + ?Sized>(
        &self,
        foods: &FoodCatalog,
        recipe: &Recipe,
        kcal_goal: u32,
        prefer_fiber: bool,
        lang: Lang,
        rng: &mut R,
    ) -> Result<Meal> {
        let _ = prefer_fiber;
        let goal = f64::from(kcal_goal);

        let base = self.compute_nutrition(foods, &recipe.ingredients)?;
        let alpha = if base.kcal() <= 0.0 {
            1.0
        } else {
            goal / base.kcal()
        };

        let mut grams: BTreeMap<String, f64> = recipe
            .ingredients
            .iter()
            .map(|(name, g)| {
                let scaled = (g * alpha).max(MIN_INGREDIENT_G);
                (name.clone(), scaled * rng.gen_range(JITTER_MIN..=JITTER_MAX))
            })
            .collect();

        let mut nutrition = self.compute_nutrition(foods, &grams)?;
        if (nutrition.kcal() - goal).abs() / goal.max(1.0) > SCALE_TOLERANCE {
            let alpha2 = goal / nutrition.kcal().max(1.0);
            for value in grams.values_mut() {
                *value *= alpha2;
            }
            nutrition = self.compute_nutrition(foods, &grams)?;
        }

        Ok(Meal {
            title: recipe.name.clone(),
            title_translated: i18n::recipe_title(lang, &recipe.name),
            grams: grams.into_iter().map(|(k, v)| (k, round1(v))).collect(),
            kcal: nutrition.kcal().round() as i32,
            macros: nutrition.macros.rounded1(),
            micros: nutrition.micros.rounded1(),
        })
    }

    pub fn all_recipes(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
