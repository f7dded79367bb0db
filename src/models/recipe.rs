use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::diet::DietTags;

/// One of the four meal positions in a day, in serving order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealSlot {
    #[serde(rename = "breakfast")]
    Breakfast,
    #[serde(rename = "lunch")]
    Lunch,
    #[serde(rename = "dinner")]
    Dinner,
    #[serde(rename = "snack")]
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];

    /// Share of the daily calorie budget assigned to this slot.
    pub fn calorie_share(self) -> f64 {
        match self {
            MealSlot::Breakfast => 0.25,
            MealSlot::Lunch => 0.35,
            MealSlot::Dinner => 0.30,
            MealSlot::Snack => 0.10,
        }
    }

    /// Parse a raw slot name from the recipe catalog.
    pub fn parse(raw: &str) -> Option<MealSlot> {
        match raw.trim().to_lowercase().as_str() {
            "breakfast" => Some(MealSlot::Breakfast),
            "lunch" => Some(MealSlot::Lunch),
            "dinner" => Some(MealSlot::Dinner),
            "snack" => Some(MealSlot::Snack),
            _ => None,
        }
    }
}

/// A recipe representing one canonical serving.
///
/// Immutable; owned by the recipe catalog.
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Unique key.
    pub name: String,

    /// Meal slot this recipe is intended for.
    pub slot: MealSlot,

    /// Ingredient grams per canonical serving, keyed by food name.
    pub ingredients: BTreeMap<String, f64>,

    /// Dietary tags (VEG, GF, OMNI, ...).
    pub tags: DietTags,
}
