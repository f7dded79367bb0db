use crate::models::diet::DietTags;
use crate::models::nutrient::{Micros, NutrientProfile};

/// A catalog food with per-reference-weight nutrient data.
///
/// All nutrient values refer to one reference weight (`per_g`, normally 100 g).
/// Immutable once loaded; owned exclusively by the food catalog.
#[derive(Debug, Clone)]
pub struct FoodItem {
    /// Canonical name, unique key in the catalog.
    pub name: String,

    /// Food group (grain, protein, vegetable, ...).
    pub group: String,

    /// Reference weight in grams the nutrient values describe.
    pub per_g: f64,

    /// Macro grams per reference weight plus micronutrient amounts.
    pub profile: NutrientProfile,

    /// Dietary tags (VEG, GF, OMNI, ...).
    pub tags: DietTags,

    /// Price per reference weight in local currency.
    pub price: f64,
}

impl FoodItem {
    /// Calories in one reference weight, derived from macros.
    pub fn kcal_per_ref(&self) -> f64 {
        self.profile.kcal()
    }

    /// Nutrient content of `grams` of this food.
    pub fn profile_for(&self, grams: f64) -> NutrientProfile {
        self.profile.scaled(grams / self.per_g)
    }

    pub fn micros(&self) -> &Micros {
        &self.profile.micros
    }

    /// Basic validation: non-negative quantities and a positive reference weight.
    pub fn is_valid(&self) -> bool {
        self.per_g > 0.0
            && self.price >= 0.0
            && self.profile.macros.protein_g >= 0.0
            && self.profile.macros.fat_g >= 0.0
            && self.profile.macros.carbs_g >= 0.0
            && self.profile.macros.fiber_g >= 0.0
            && self.profile.micros.iter().all(|(_, v)| v >= 0.0)
    }
}
