use rand::Rng;

use crate::catalog::{FoodCatalog, RecipeCatalog};
use crate::error::{PlanError, Result};
use crate::i18n::{self, Lang};
use crate::models::{
    DayPlan, DietTags, FoodItem, Meal, MealSlot, Micro, Micros, NutrientProfile,
    NutrientTargets,
};
use crate::planner::constants::{
    BOOSTER_KCAL_SHARE, BOOSTER_MAX_G, BOOSTER_MIN_G, COVERAGE_CAP, DEFICIENCY_THRESHOLD,
};

/// Percent of a target met by accumulated intake, clamped to [0, 200].
///
/// A target of zero or less reports 0% coverage; there is never a division
/// by zero.
pub fn coverage_percent(accumulated: f64, target: f64) -> f64 {
    if target <= 0.0 {
        0.0
    } else {
        (100.0 * accumulated / target).min(COVERAGE_CAP)
    }
}

fn coverage_for(micros: &Micros, targets: &Micros) -> Micros {
    let mut out = Micros::default();
    for micro in Micro::ALL {
        out.set(micro, coverage_percent(micros.get(micro), targets.get(micro)));
    }
    out
}

fn sum_profiles(meals: &[Meal]) -> NutrientProfile {
    meals
        .iter()
        .fold(NutrientProfile::default(), |acc, m| acc + m.profile())
}

/// Assemble one day: split calories across slots, fill each slot with a
/// scaled recipe, then correct micronutrient shortfalls with boosters.
///
/// Slots without a compatible recipe are skipped; a day may have fewer than
/// four meals. An empty recipe catalog is a configuration error.
pub fn build_day<R: Rng + ?Sized>(
    targets: &NutrientTargets,
    diet_flags: &DietTags,
    lang: Lang,
    foods: &FoodCatalog,
    recipes: &RecipeCatalog,
    rng: &mut R,
) -> Result<DayPlan> {
    if recipes.is_empty() {
        return Err(PlanError::EmptyRecipeCatalog);
    }

    let mut meals: Vec<Meal> = Vec::with_capacity(MealSlot::ALL.len());
    for slot in MealSlot::ALL {
        let kcal_goal = (f64::from(targets.kcal) * slot.calorie_share()) as u32;
        let Some(recipe) = recipes.select_base(diet_flags, slot, rng) else {
            continue;
        };
        meals.push(recipes.scale_to_calories(foods, recipe, kcal_goal, true, lang, rng)?);
    }

    // Coverage before correction decides which boosters fire; it is not
    // re-evaluated between boosters.
    let totals = sum_profiles(&meals);
    let coverage = coverage_for(&totals.micros, &targets.micro);

    let booster_kcal_limit = BOOSTER_KCAL_SHARE * f64::from(targets.kcal);
    let mut tips = Vec::new();
    for micro in Micro::ALL {
        // A zero target reads as 0% coverage but is not a deficiency.
        if targets.micro.get(micro) <= 0.0 || coverage.get(micro) >= DEFICIENCY_THRESHOLD {
            continue;
        }
        let Some(donor) = foods.select_booster(micro, diet_flags) else {
            continue;
        };
        let Some(meal) = booster_meal(donor, booster_kcal_limit, lang) else {
            continue;
        };
        tips.push(i18n::deficiency_tip(lang, micro, &i18n::food_name(lang, &donor.name)));
        meals.push(meal);
    }

    let totals = sum_profiles(&meals);
    let coverage = coverage_for(&totals.micros, &targets.micro);

    // Overshoot from boosters is accepted; the day total is never forced back
    // to the original target.
    Ok(DayPlan {
        kcal: meals.iter().map(|m| m.kcal).sum(),
        macros: totals.macros.rounded1(),
        micros: totals.micros.rounded1(),
        coverage: coverage.rounded1(),
        tips,
        meals,
    })
}

/// Build a small corrective serving of a donor food.
///
/// The serving is sized so its calories stay near the booster budget, bounded
/// to [30 g, 200 g]. Donors with zero calorie density are skipped.
fn booster_meal(donor: &FoodItem, kcal_limit: f64, lang: Lang) -> Option<Meal> {
    let kcal_per_ref = donor.kcal_per_ref();
    if kcal_per_ref <= 0.0 {
        return None;
    }

    let grams = ((kcal_limit / kcal_per_ref) * donor.per_g).clamp(BOOSTER_MIN_G, BOOSTER_MAX_G);
    let profile = donor.profile_for(grams);

    Some(Meal {
        title: format!("booster_{}", donor.name),
        title_translated: format!("booster_{}", i18n::food_name(lang, &donor.name)),
        grams: [(donor.name.clone(), crate::models::round1(grams))].into(),
        kcal: profile.kcal().round() as i32,
        macros: profile.macros.rounded1(),
        micros: profile.micros.rounded1(),
    })
}
