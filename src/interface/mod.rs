pub mod prompts;
pub mod render;

pub use prompts::{prompt_diet_flags, prompt_kcal, prompt_yes_no};
pub use render::{display_day_plan, display_food_list, display_shopping_list, display_week_plan};
