use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::nutrient::{Macros, Micros, NutrientProfile};

/// Daily nutrient targets supplied by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutrientTargets {
    /// Daily calorie target, > 0.
    pub kcal: u32,

    /// Macro gram targets.
    pub macros: Macros,

    /// Micronutrient targets, fixed eight-key set.
    pub micro: Micros,
}

/// A recipe or booster materialized at a specific gram scaling.
///
/// Created fresh per plate build; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meal {
    pub title: String,
    pub title_translated: String,

    /// Per-ingredient gram amounts, keyed by food name.
    pub grams: BTreeMap<String, f64>,

    pub kcal: i32,
    pub macros: Macros,
    pub micros: Micros,
}

impl Meal {
    /// Nutrient increment this meal contributes to the day totals.
    pub fn profile(&self) -> NutrientProfile {
        NutrientProfile {
            macros: self.macros,
            micros: self.micros,
        }
    }
}

/// One day's plate: meals, summed totals, coverage, and correction tips.
///
/// Immutable after construction; `kcal` is always the exact sum of the
/// meals' kcal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayPlan {
    pub meals: Vec<Meal>,
    pub kcal: i32,
    pub macros: Macros,
    pub micros: Micros,

    /// Percent-of-target coverage per micronutrient, clamped to [0, 200].
    pub coverage: Micros,

    /// Human-readable booster tips, localized.
    pub tips: Vec<String>,
}

/// One consolidated shopping list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub name: String,
    pub name_translated: String,
    pub grams: f64,
    pub price_est: f64,
}

/// Seven daily plates with averaged coverage and one shopping list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
    pub weekly_coverage: Micros,
    pub shopping_list: Vec<ShoppingItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::nutrient::Micro;

    #[test]
    fn test_targets_roundtrip() {
        let json = r#"{
            "kcal": 2000,
            "macros": {"protein_g": 100.0, "fat_g": 70.0, "carbs_g": 250.0, "fiber_g": 30.0},
            "micro": {"Fe_mg": 18, "Ca_mg": 1000, "VitD_IU": 600, "B12_ug": 2.4,
                      "Folate_ug": 400, "Iodine_ug": 150, "K_mg": 3500, "Mg_mg": 400}
        }"#;
        let targets: NutrientTargets = serde_json::from_str(json).unwrap();
        assert_eq!(targets.kcal, 2000);
        assert_eq!(targets.micro.get(Micro::Iron), 18.0);
        assert_eq!(targets.micro.get(Micro::Potassium), 3500.0);
    }

    #[test]
    fn test_meal_serializes_with_expected_fields() {
        let meal = Meal {
            title: "oatmeal_walnut_bowl".to_string(),
            title_translated: "Oatmeal walnut bowl".to_string(),
            grams: BTreeMap::from([("oats".to_string(), 60.0)]),
            kcal: 500,
            macros: Macros::default(),
            micros: Micros::default(),
        };
        let json = serde_json::to_value(&meal).unwrap();
        for field in ["title", "title_translated", "grams", "kcal", "macros", "micros"] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}
