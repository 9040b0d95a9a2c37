use dialoguer::{Confirm, Input, Select};

use crate::error::{Result, WelldayError};
use crate::models::{MealInputType, RecipeDraft};

/// What the user typed in for a new meal, before analysis.
#[derive(Debug, Clone)]
pub struct MealEntry {
    pub name: String,
    pub input_type: MealInputType,
    /// Description, transcript or photo location. Empty for recipes.
    pub text: String,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub cost: Option<f64>,
}

/// Prompt for the meal name.
pub fn prompt_meal_name() -> Result<String> {
    let name: String = Input::<String>::new()
        .with_prompt("What did you eat?")
        .interact_text()?;

    let name = name.trim();
    if name.is_empty() {
        return Err(WelldayError::InvalidInput("Meal name is required".to_string()));
    }
    Ok(name.to_string())
}

/// Prompt for how the meal is described.
pub fn prompt_input_type() -> Result<MealInputType> {
    let options = ["Text description", "Voice transcript", "Recipe", "Photo"];

    let selection = Select::new()
        .with_prompt("How would you like to describe it?")
        .items(&options)
        .default(0)
        .interact()?;

    Ok(match selection {
        1 => MealInputType::Voice,
        2 => MealInputType::Recipe,
        3 => MealInputType::Photo,
        _ => MealInputType::Text,
    })
}

/// Prompt for a free-text description.
pub fn prompt_description(input_type: MealInputType) -> Result<String> {
    let prompt = match input_type {
        MealInputType::Voice => "Paste the transcript",
        MealInputType::Photo => "Photo path or URL",
        _ => "Describe the meal",
    };
    Ok(Input::<String>::new().with_prompt(prompt).interact_text()?)
}

/// Prompt for comma-separated ingredients and optional instructions.
pub fn prompt_recipe() -> Result<(Vec<String>, Option<String>)> {
    let raw: String = Input::<String>::new()
        .with_prompt("Ingredients (comma-separated)")
        .interact_text()?;

    let ingredients = split_list(&raw);

    if ingredients.is_empty() {
        return Err(WelldayError::InvalidInput(
            "At least one ingredient is required".to_string(),
        ));
    }

    let instructions = prompt_optional("Instructions")?;
    let instructions = (!instructions.is_empty()).then_some(instructions);

    Ok((ingredients, instructions))
}

fn prompt_optional(prompt: &str) -> Result<String> {
    let input: String = Input::<String>::new()
        .with_prompt(format!("{} (press Enter to skip)", prompt))
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Parse a money amount such as `12.50` or `$12.50`. Empty means unknown.
pub fn parse_amount(input: &str) -> Result<Option<f64>> {
    let input = input.trim().trim_start_matches('$');
    if input.is_empty() {
        return Ok(None);
    }

    let cost: f64 = input
        .parse()
        .map_err(|_| WelldayError::InvalidInput("Invalid amount".to_string()))?;

    if !cost.is_finite() || cost < 0.0 {
        return Err(WelldayError::InvalidInput(
            "Cost must be a non-negative amount".to_string(),
        ));
    }

    Ok(Some(cost))
}

/// Prompt for what the meal cost. Empty input means unknown.
pub fn prompt_cost() -> Result<Option<f64>> {
    parse_amount(&prompt_optional("What did it cost?")?)
}

/// Split a comma-separated list, dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect everything needed to log a meal.
pub fn collect_meal_entry() -> Result<MealEntry> {
    let name = prompt_meal_name()?;
    let input_type = prompt_input_type()?;

    let (text, ingredients, instructions) = match input_type {
        MealInputType::Recipe => {
            let (ingredients, instructions) = prompt_recipe()?;
            (String::new(), ingredients, instructions)
        }
        _ => (prompt_description(input_type)?, Vec::new(), None),
    };

    let cost = prompt_cost()?;

    Ok(MealEntry {
        name,
        input_type,
        text,
        ingredients,
        instructions,
        cost,
    })
}

/// Collect a new recipe for analysis.
pub fn collect_recipe_draft() -> Result<RecipeDraft> {
    let title: String = Input::<String>::new()
        .with_prompt("Recipe title")
        .interact_text()?;
    let (ingredients, instructions) = prompt_recipe()?;

    let prep = prompt_optional("Prep time in minutes")?;
    let prep_time_minutes = if prep.is_empty() {
        None
    } else {
        Some(prep.parse::<u32>().map_err(|_| {
            WelldayError::InvalidInput("Prep time must be a whole number of minutes".to_string())
        })?)
    };

    let estimated_cost = parse_amount(&prompt_optional("Estimated cost")?)?;
    let diet_tags = split_list(&prompt_optional("Diet tags, comma-separated")?);

    Ok(RecipeDraft {
        title,
        ingredients,
        instructions,
        prep_time_minutes,
        estimated_cost,
        diet_tags,
    })
}
