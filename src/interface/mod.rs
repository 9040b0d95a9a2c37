pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_week_csv;
pub use prompts::{
    collect_meal_entry, collect_recipe_draft, parse_amount, prompt_cost, prompt_description,
    prompt_input_type, prompt_meal_name, prompt_recipe, prompt_yes_no, split_list, MealEntry,
};
pub use render::{
    display_day, display_meal, display_message, display_recipe, display_recipe_list,
    display_score, display_weekly,
};
