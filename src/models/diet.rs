use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Dietary tag vocabulary shared by user flags, foods, and recipes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DietTag {
    /// Vegetarian-friendly (on items) / vegetarian diet (on users).
    #[serde(rename = "VEG")]
    Veg,
    /// Pescatarian-friendly / pescatarian diet.
    #[serde(rename = "PESC")]
    Pesc,
    /// Gluten-free.
    #[serde(rename = "GF")]
    Gf,
    /// Omnivore-only: contains meat, rejected by VEG and PESC diets.
    #[serde(rename = "OMNI")]
    Omni,
}

impl DietTag {
    /// Parse a raw tag. Unknown strings yield `None` (non-matching, never an error).
    pub fn parse(raw: &str) -> Option<DietTag> {
        match raw.trim().to_uppercase().as_str() {
            "VEG" => Some(DietTag::Veg),
            "PESC" => Some(DietTag::Pesc),
            "GF" => Some(DietTag::Gf),
            "OMNI" => Some(DietTag::Omni),
            _ => None,
        }
    }

    /// Canonical wire/CSV spelling of this tag.
    pub fn key(self) -> &'static str {
        match self {
            DietTag::Veg => "VEG",
            DietTag::Pesc => "PESC",
            DietTag::Gf => "GF",
            DietTag::Omni => "OMNI",
        }
    }
}

pub type DietTags = BTreeSet<DietTag>;

/// Convert raw flag strings to the closed tag set, dropping unknown entries.
pub fn parse_tags<S: AsRef<str>>(raw: &[S]) -> DietTags {
    raw.iter().filter_map(|s| DietTag::parse(s.as_ref())).collect()
}

/// Check whether an item (food or recipe) is admissible under the user's diet.
///
/// VEG and PESC diets reject anything tagged OMNI; a GF diet requires the GF
/// tag; every other combination passes.
pub fn is_compatible(item_tags: &DietTags, diet_flags: &DietTags) -> bool {
    if diet_flags.contains(&DietTag::Veg) && item_tags.contains(&DietTag::Omni) {
        return false;
    }
    if diet_flags.contains(&DietTag::Pesc) && item_tags.contains(&DietTag::Omni) {
        return false;
    }
    if diet_flags.contains(&DietTag::Gf) && !item_tags.contains(&DietTag::Gf) {
        return false;
    }
    true
}
