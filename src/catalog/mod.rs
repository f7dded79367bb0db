mod foods;
mod load;
mod recipes;

pub use foods::FoodCatalog;
pub use load::{load_food_catalog, load_recipe_catalog};
pub use recipes::RecipeCatalog;
