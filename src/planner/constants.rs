/// Coverage percentage below which a micronutrient triggers a booster.
pub const DEFICIENCY_THRESHOLD: f64 = 80.0;

/// Coverage cap: intake beyond twice the target reports as 200%.
pub const COVERAGE_CAP: f64 = 200.0;

/// Share of the daily calorie target a single booster serving may cost.
pub const BOOSTER_KCAL_SHARE: f64 = 0.05;

/// Booster serving bounds in grams.
pub const BOOSTER_MIN_G: f64 = 30.0;
pub const BOOSTER_MAX_G: f64 = 200.0;

/// Floor applied to every ingredient on the first scaling pass, to avoid
/// degenerate near-zero amounts.
pub const MIN_INGREDIENT_G: f64 = 10.0;

/// Per-ingredient jitter range applied during recipe scaling.
pub const JITTER_MIN: f64 = 0.95;
pub const JITTER_MAX: f64 = 1.05;

/// Relative calorie deviation that triggers the single corrective re-scale.
pub const SCALE_TOLERANCE: f64 = 0.05;

/// Days in a weekly plan.
pub const WEEK_DAYS: usize = 7;
