pub mod catalog;
pub mod cli;
pub mod error;
pub mod i18n;
pub mod interface;
pub mod models;
pub mod planner;
pub mod targets;

pub use error::{PlanError, Result};
pub use models::{DayPlan, FoodItem, NutrientTargets, Recipe, WeekPlan};
