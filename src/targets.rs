use crate::models::{Macros, Micro, Micros, NutrientTargets};

/// Calorie fractions for the maintenance macro split.
const PROTEIN_SHARE: f64 = 0.25;
const CARBS_SHARE: f64 = 0.45;
const FAT_SHARE: f64 = 0.30;

/// Dietary fiber guideline, grams per 1000 kcal.
const FIBER_G_PER_1000_KCAL: f64 = 14.0;

/// Reference daily targets for a given calorie goal.
///
/// Macros follow a 25/45/30 protein/carbs/fat calorie split; fiber scales
/// with intake at 14 g per 1000 kcal. Micronutrient targets are fixed adult
/// reference values and do not scale with calories.
pub fn reference_targets(kcal: u32) -> NutrientTargets {
    let energy = f64::from(kcal);
    NutrientTargets {
        kcal,
        macros: Macros {
            protein_g: energy * PROTEIN_SHARE / 4.0,
            fat_g: energy * FAT_SHARE / 9.0,
            carbs_g: energy * CARBS_SHARE / 4.0,
            fiber_g: energy / 1000.0 * FIBER_G_PER_1000_KCAL,
        },
        micro: Micros::default()
            .with(Micro::Iron, 18.0)
            .with(Micro::Calcium, 1000.0)
            .with(Micro::VitaminD, 600.0)
            .with(Micro::B12, 2.4)
            .with(Micro::Folate, 400.0)
            .with(Micro::Iodine, 150.0)
            .with(Micro::Potassium, 3500.0)
            .with(Micro::Magnesium, 400.0),
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::assert_float_absolute_eq;

    use super::*;

    #[test]
    fn test_macro_split_adds_back_to_kcal() {
        let targets = reference_targets(2000);
        assert_float_absolute_eq!(targets.macros.kcal(), 2000.0, 1e-6);
    }

    #[test]
    fn test_2000_kcal_reference_values() {
        let targets = reference_targets(2000);
        assert_float_absolute_eq!(targets.macros.protein_g, 125.0, 1e-9);
        assert_float_absolute_eq!(targets.macros.carbs_g, 225.0, 1e-9);
        assert_float_absolute_eq!(targets.macros.fat_g, 2000.0 * 0.30 / 9.0, 1e-9);
        assert_float_absolute_eq!(targets.macros.fiber_g, 28.0, 1e-9);
    }

    #[test]
    fn test_micros_do_not_scale_with_kcal() {
        let low = reference_targets(1500);
        let high = reference_targets(3000);
        assert_eq!(low.micro, high.micro);
        assert_eq!(low.micro.get(Micro::Iron), 18.0);
        assert_eq!(low.micro.get(Micro::Iodine), 150.0);
    }
}
