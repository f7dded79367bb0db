use std::collections::BTreeMap;

use strsim::jaro_winkler;

use crate::error::{PlanError, Result};
use crate::i18n::{self, Lang};
use crate::models::{is_compatible, DayPlan, DietTags, FoodItem, Micro, ShoppingItem};

/// Similarity floor for "did you mean" suggestions on failed lookups.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Read-only food catalog keyed by canonical name.
#[derive(Debug, Default)]
pub struct FoodCatalog {
    items: BTreeMap<String, FoodItem>,
}

impl FoodCatalog {
    /// Build a catalog from a food list. Duplicate names: last occurrence wins.
    pub fn new(foods: Vec<FoodItem>) -> Self {
        let mut items = BTreeMap::new();
        for food in foods {
            items.insert(food.name.clone(), food);
        }
        Self { items }
    }

    /// Look up a food by canonical name.
    ///
    /// An absent name is a hard configuration error, not a soft fallback; the
    /// message carries a fuzzy suggestion when a close name exists.
    pub fn lookup(&self, name: &str) -> Result<&FoodItem> {
        self.items.get(name).ok_or_else(|| {
            let message = match self.closest_name(name) {
                Some(hint) => format!("{name} (did you mean '{hint}'?)"),
                None => name.to_string(),
            };
            PlanError::FoodNotFound(message)
        })
    }

    fn closest_name(&self, name: &str) -> Option<&str> {
        self.items
            .keys()
            .map(|k| (k, jaro_winkler(&k.to_lowercase(), &name.to_lowercase())))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(k, _)| k.as_str())
    }

    /// Pick a donor food to correct a deficiency in `micro`.
    ///
    /// Walks the hand-curated priority list for the nutrient and returns the
    /// first candidate present in the catalog whose tags are admissible under
    /// the diet flags.
    pub fn select_booster(&self, micro: Micro, diet_flags: &DietTags) -> Option<&FoodItem> {
        donor_candidates(micro)
            .iter()
            .filter_map(|name| self.items.get(*name))
            .find(|item| is_compatible(&item.tags, diet_flags))
    }

    /// Consolidate every meal of every day into one priced shopping list.
    ///
    /// Gram totals are summed per food name; prices scale linearly from the
    /// per-reference-weight price; output is sorted by name. Deterministic
    /// given identical inputs, and invariant under day/meal order.
    pub fn aggregate_shopping(&self, days: &[DayPlan], lang: Lang) -> Vec<ShoppingItem> {
        let mut basket: BTreeMap<&str, f64> = BTreeMap::new();
        for day in days {
            for meal in &day.meals {
                for (name, grams) in &meal.grams {
                    *basket.entry(name.as_str()).or_insert(0.0) += grams;
                }
            }
        }

        basket
            .into_iter()
            .map(|(name, grams)| {
                let price_est = self
                    .items
                    .get(name)
                    .map(|item| round2(item.price * grams / item.per_g))
                    .unwrap_or(0.0);
                ShoppingItem {
                    name: name.to_string(),
                    name_translated: i18n::food_name(lang, name),
                    grams: grams.round(),
                    price_est,
                }
            })
            .collect()
    }

    pub fn all_foods(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.values()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Hand-curated donor priority list per micronutrient.
fn donor_candidates(micro: Micro) -> &'static [&'static str] {
    match micro {
        Micro::Iron => &["lentils", "spinach", "tofu", "chicken_breast"],
        Micro::Calcium => &["greek_yogurt", "tofu", "spinach"],
        Micro::VitaminD => &["salmon", "eggs"],
        Micro::B12 => &["salmon", "chicken_breast", "greek_yogurt"],
        Micro::Folate => &["spinach", "lentils"],
        Micro::Iodine => &["seaweed", "salmon"],
        Micro::Potassium => &["banana", "spinach", "potato"],
        Micro::Magnesium => &["oats", "spinach", "lentils"],
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::models::{
        DietTag, Macros, Meal, Micros, NutrientProfile,
    };

    fn food(name: &str, tags: &[DietTag], price: f64) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            group: "test".to_string(),
            per_g: 100.0,
            profile: NutrientProfile {
                macros: Macros {
                    protein_g: 10.0,
                    fat_g: 1.0,
                    carbs_g: 10.0,
                    fiber_g: 1.0,
                },
                micros: Micros::default(),
            },
            tags: tags.iter().copied().collect(),
            price,
        }
    }

    fn sample_catalog() -> FoodCatalog {
        FoodCatalog::new(vec![
            food("lentils", &[DietTag::Veg, DietTag::Gf], 0.8),
            food("spinach", &[DietTag::Veg, DietTag::Gf], 0.9),
            food("chicken_breast", &[DietTag::Omni, DietTag::Gf], 2.5),
            food("oats", &[DietTag::Veg], 0.5),
        ])
    }

    fn meal_of(grams: &[(&str, f64)]) -> Meal {
        Meal {
            title: "test".to_string(),
            title_translated: "test".to_string(),
            grams: grams
                .iter()
                .map(|(n, g)| (n.to_string(), *g))
                .collect::<BTreeMap<_, _>>(),
            kcal: 0,
            macros: Macros::default(),
            micros: Micros::default(),
        }
    }

    fn day_of(meals: Vec<Meal>) -> DayPlan {
        DayPlan {
            meals,
            kcal: 0,
            macros: Macros::default(),
            micros: Micros::default(),
            coverage: Micros::default(),
            tips: vec![],
        }
    }

    #[test]
    fn test_lookup_found() {
        let catalog = sample_catalog();
        assert_eq!(catalog.lookup("lentils").unwrap().name, "lentils");
    }

    #[test]
    fn test_lookup_missing_suggests_closest() {
        let catalog = sample_catalog();
        let err = catalog.lookup("lentis").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("lentis"));
        assert!(msg.contains("lentils"), "expected suggestion in: {msg}");
    }

    #[test]
    fn test_booster_priority_order() {
        let catalog = sample_catalog();
        let donor = catalog.select_booster(Micro::Iron, &DietTags::new()).unwrap();
        assert_eq!(donor.name, "lentils");
    }

    #[test]
    fn test_booster_respects_diet_flags() {
        // Only an OMNI candidate present for iron.
        let catalog = FoodCatalog::new(vec![food("chicken_breast", &[DietTag::Omni], 2.5)]);
        let veg: DietTags = [DietTag::Veg].into_iter().collect();
        assert!(catalog.select_booster(Micro::Iron, &veg).is_none());
        assert!(catalog.select_booster(Micro::Iron, &DietTags::new()).is_some());
    }

    #[test]
    fn test_booster_gluten_free_filter() {
        let catalog = sample_catalog();
        let gf: DietTags = [DietTag::Gf].into_iter().collect();
        // oats lack the GF tag, so magnesium falls through to spinach.
        let donor = catalog.select_booster(Micro::Magnesium, &gf).unwrap();
        assert_eq!(donor.name, "spinach");
    }

    #[test]
    fn test_booster_none_for_unknown_candidates() {
        let catalog = FoodCatalog::new(vec![food("oats", &[DietTag::Veg], 0.5)]);
        assert!(catalog.select_booster(Micro::VitaminD, &DietTags::new()).is_none());
    }

    #[test]
    fn test_shopping_sums_and_prices() {
        let catalog = sample_catalog();
        let days = vec![
            day_of(vec![meal_of(&[("lentils", 150.0), ("spinach", 50.0)])]),
            day_of(vec![meal_of(&[("lentils", 100.0)])]),
        ];
        let list = catalog.aggregate_shopping(&days, Lang::En);
        assert_eq!(list.len(), 2);
        // Sorted by name.
        assert_eq!(list[0].name, "lentils");
        assert_eq!(list[0].grams, 250.0);
        assert!((list[0].price_est - 2.0).abs() < 1e-9);
        assert_eq!(list[1].name, "spinach");
        assert_eq!(list[1].name_translated, "Spinach");
    }

    #[test]
    fn test_shopping_order_invariant() {
        let catalog = sample_catalog();
        let a = day_of(vec![meal_of(&[("lentils", 150.0)]), meal_of(&[("oats", 40.0)])]);
        let b = day_of(vec![meal_of(&[("spinach", 80.0), ("lentils", 30.0)])]);

        let forward = catalog.aggregate_shopping(&[a.clone(), b.clone()], Lang::En);
        let reversed = catalog.aggregate_shopping(&[b, a], Lang::En);

        assert_eq!(forward.len(), reversed.len());
        for (x, y) in forward.iter().zip(&reversed) {
            assert_eq!(x.name, y.name);
            assert_eq!(x.grams, y.grams);
            assert_eq!(x.price_est, y.price_est);
        }
    }

    #[test]
    fn test_shopping_unknown_food_has_zero_price() {
        let catalog = sample_catalog();
        let days = vec![day_of(vec![meal_of(&[("mystery", 100.0)])])];
        let list = catalog.aggregate_shopping(&days, Lang::En);
        assert_eq!(list[0].price_est, 0.0);
        assert_eq!(list[0].grams, 100.0);
    }
}
