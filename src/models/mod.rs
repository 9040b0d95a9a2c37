mod meal;
mod message;
mod profile;
mod recipe;
mod stats;

pub use meal::{tags, Meal, MealInputType};
pub use message::{AdvisorMessage, MessageType};
pub use profile::{HealthGoal, UserProfile};
pub use recipe::{curated_recipes, recipe_key, Recipe, RecipeDraft, RecipeSource};
pub use stats::DailyStats;
