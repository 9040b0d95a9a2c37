mod manager;
mod persistence;
mod recipes;

pub use manager::MealHistory;
pub use persistence::{load_meals, load_profile, load_recipes, save_meals, save_recipes};
pub use recipes::RecipeBook;
