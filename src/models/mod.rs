pub mod diet;
pub mod food;
pub mod nutrient;
pub mod plan;
pub mod recipe;

pub use diet::{is_compatible, parse_tags, DietTag, DietTags};
pub use food::FoodItem;
pub use nutrient::{round1, Macros, Micro, Micros, NutrientProfile};
pub use plan::{DayPlan, Meal, NutrientTargets, ShoppingItem, WeekPlan};
pub use recipe::{MealSlot, Recipe};
