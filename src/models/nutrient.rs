use std::collections::BTreeMap;
use std::ops::Add;

use serde::{Deserialize, Serialize};

/// The closed set of tracked micronutrients.
///
/// Serialized names match the catalog CSV columns and the API output keys.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Micro {
    #[serde(rename = "Fe_mg")]
    Iron,
    #[serde(rename = "Ca_mg")]
    Calcium,
    #[serde(rename = "VitD_IU")]
    VitaminD,
    #[serde(rename = "B12_ug")]
    B12,
    #[serde(rename = "Folate_ug")]
    Folate,
    #[serde(rename = "Iodine_ug")]
    Iodine,
    #[serde(rename = "K_mg")]
    Potassium,
    #[serde(rename = "Mg_mg")]
    Magnesium,
}

impl Micro {
    pub const ALL: [Micro; 8] = [
        Micro::Iron,
        Micro::Calcium,
        Micro::VitaminD,
        Micro::B12,
        Micro::Folate,
        Micro::Iodine,
        Micro::Potassium,
        Micro::Magnesium,
    ];

    fn index(self) -> usize {
        Micro::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }
}

/// Fixed eight-slot value map over [`Micro`].
///
/// Every instance carries exactly the eight keys; serialization produces a
/// JSON object keyed by the wire names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "BTreeMap<Micro, f64>", from = "BTreeMap<Micro, f64>")]
pub struct Micros([f64; 8]);

impl Micros {
    pub fn get(&self, micro: Micro) -> f64 {
        self.0[micro.index()]
    }

    pub fn set(&mut self, micro: Micro, value: f64) {
        self.0[micro.index()] = value;
    }

    pub fn with(mut self, micro: Micro, value: f64) -> Self {
        self.set(micro, value);
        self
    }

    /// Multiply every value by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        let mut out = *self;
        for v in &mut out.0 {
            *v *= factor;
        }
        out
    }

    pub fn rounded1(&self) -> Self {
        let mut out = *self;
        for v in &mut out.0 {
            *v = round1(*v);
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = (Micro, f64)> + '_ {
        Micro::ALL.iter().map(|m| (*m, self.get(*m)))
    }
}

impl Add for Micros {
    type Output = Micros;

    fn add(self, rhs: Micros) -> Micros {
        let mut out = self;
        for (slot, v) in out.0.iter_mut().zip(rhs.0) {
            *slot += v;
        }
        out
    }
}

impl From<Micros> for BTreeMap<Micro, f64> {
    fn from(micros: Micros) -> Self {
        micros.iter().collect()
    }
}

impl From<BTreeMap<Micro, f64>> for Micros {
    fn from(map: BTreeMap<Micro, f64>) -> Self {
        let mut out = Micros::default();
        for (micro, value) in map {
            out.set(micro, value);
        }
        out
    }
}

/// Macronutrient grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: f64,
    pub fat_g: f64,
    pub carbs_g: f64,
    pub fiber_g: f64,
}

impl Macros {
    /// Calories derived from macros: 4 kcal/g protein and carbs, 9 kcal/g fat.
    ///
    /// Calories are never stored independently so accounting stays consistent.
    pub fn kcal(&self) -> f64 {
        4.0 * self.protein_g + 4.0 * self.carbs_g + 9.0 * self.fat_g
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            protein_g: self.protein_g * factor,
            fat_g: self.fat_g * factor,
            carbs_g: self.carbs_g * factor,
            fiber_g: self.fiber_g * factor,
        }
    }

    pub fn rounded1(&self) -> Self {
        Self {
            protein_g: round1(self.protein_g),
            fat_g: round1(self.fat_g),
            carbs_g: round1(self.carbs_g),
            fiber_g: round1(self.fiber_g),
        }
    }
}

impl Add for Macros {
    type Output = Macros;

    fn add(self, rhs: Macros) -> Macros {
        Macros {
            protein_g: self.protein_g + rhs.protein_g,
            fat_g: self.fat_g + rhs.fat_g,
            carbs_g: self.carbs_g + rhs.carbs_g,
            fiber_g: self.fiber_g + rhs.fiber_g,
        }
    }
}

/// Combined macro + micro content of some quantity of food.
///
/// Profiles form a monoid under `Add`, so day totals are folds over immutable
/// per-meal increments.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NutrientProfile {
    pub macros: Macros,
    pub micros: Micros,
}

impl NutrientProfile {
    pub fn kcal(&self) -> f64 {
        self.macros.kcal()
    }

    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            macros: self.macros.scaled(factor),
            micros: self.micros.scaled(factor),
        }
    }
}

impl Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, rhs: NutrientProfile) -> NutrientProfile {
        NutrientProfile {
            macros: self.macros + rhs.macros,
            micros: self.micros + rhs.micros,
        }
    }
}

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kcal_derivation() {
        let macros = Macros {
            protein_g: 10.0,
            fat_g: 10.0,
            carbs_g: 10.0,
            fiber_g: 5.0,
        };
        // 4*10 + 4*10 + 9*10, fiber does not contribute
        assert!((macros.kcal() - 170.0).abs() < 1e-9);
    }

    #[test]
    fn test_micros_fixed_key_set() {
        let micros = Micros::default().with(Micro::Iron, 3.5);
        let json = serde_json::to_value(micros).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 8);
        assert_eq!(obj["Fe_mg"], 3.5);
        assert_eq!(obj["Iodine_ug"], 0.0);
    }

    #[test]
    fn test_micros_roundtrip() {
        let micros = Micros::default()
            .with(Micro::Calcium, 120.0)
            .with(Micro::B12, 0.8);
        let json = serde_json::to_string(&micros).unwrap();
        let back: Micros = serde_json::from_str(&json).unwrap();
        assert_eq!(micros, back);
    }

    #[test]
    fn test_profile_fold() {
        let a = NutrientProfile {
            macros: Macros {
                protein_g: 5.0,
                ..Default::default()
            },
            micros: Micros::default().with(Micro::Iron, 1.0),
        };
        let b = a.scaled(2.0);
        let total = [a, b]
            .into_iter()
            .fold(NutrientProfile::default(), |acc, p| acc + p);
        assert!((total.macros.protein_g - 15.0).abs() < 1e-9);
        assert!((total.micros.get(Micro::Iron) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(1.25), 1.3);
        assert_eq!(round1(1.24), 1.2);
        assert_eq!(round1(0.0), 0.0);
    }
}
