use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{tags, Meal, MealInputType};
use crate::scoring::{self, Tier};

/// Where a recipe came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipeSource {
    #[default]
    User,
    Curated,
    Community,
}

impl RecipeSource {
    pub fn label(self) -> &'static str {
        match self {
            RecipeSource::User => "user",
            RecipeSource::Curated => "curated",
            RecipeSource::Community => "community",
        }
    }
}

/// A saved recipe with its analyzed health index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub title: String,

    pub ingredients: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,

    pub health_index: f64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time_minutes: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,

    #[serde(default)]
    pub source: RecipeSource,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,

    #[serde(default)]
    pub is_favorite: bool,
}

impl Recipe {
    pub fn new(title: impl Into<String>, ingredients: Vec<String>, health_index: f64) -> Self {
        Self {
            title: title.into(),
            ingredients,
            instructions: None,
            health_index,
            tags: Vec::new(),
            prep_time_minutes: None,
            estimated_cost: None,
            source: RecipeSource::default(),
            created_at: None,
            is_favorite: false,
        }
    }

    /// Lookup key: titles are unique ignoring case and surrounding space.
    pub fn key(&self) -> String {
        recipe_key(&self.title)
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        scoring::tier(self.health_index)
    }

    pub fn toggle_favorite(&mut self) -> bool {
        self.is_favorite = !self.is_favorite;
        self.is_favorite
    }

    /// A meal eaten from this recipe at `timestamp`.
    ///
    /// The meal keeps the recipe's health index and tags, and its estimated
    /// cost counts toward the day's spending.
    pub fn to_meal(&self, timestamp: NaiveDateTime) -> Meal {
        let mut meal = Meal::new(self.title.clone(), timestamp, self.health_index)
            .with_tags(self.tags.iter().cloned());
        meal.input_type = MealInputType::Recipe;
        meal.description = Some(format!("Made from recipe: {}", self.title));
        meal.cost = self.estimated_cost;
        meal
    }
}

/// User input for a new recipe, before analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub ingredients: Vec<String>,
    pub instructions: Option<String>,
    pub prep_time_minutes: Option<u32>,
    pub estimated_cost: Option<f64>,
    /// Extra tags such as "vegan", appended after the analyzer's.
    pub diet_tags: Vec<String>,
}

pub fn recipe_key(title: &str) -> String {
    title.trim().to_lowercase()
}

fn curated(
    title: &str,
    ingredients: &[&str],
    instructions: &str,
    health_index: f64,
    recipe_tags: &[&str],
    prep_time_minutes: u32,
    estimated_cost: f64,
) -> Recipe {
    let mut recipe = Recipe::new(
        title,
        ingredients.iter().map(|s| s.to_string()).collect(),
        health_index,
    );
    recipe.instructions = Some(instructions.to_string());
    recipe.tags = recipe_tags.iter().map(|s| s.to_string()).collect();
    recipe.prep_time_minutes = Some(prep_time_minutes);
    recipe.estimated_cost = Some(estimated_cost);
    recipe.source = RecipeSource::Curated;
    recipe
}

/// Built-in recipes offered before the user has saved any of their own.
pub fn curated_recipes() -> Vec<Recipe> {
    vec![
        curated(
            "Grilled Chicken Salad",
            &[
                "2 chicken breasts",
                "4 cups mixed greens",
                "1 cup cherry tomatoes",
                "1/2 cucumber",
                "2 tbsp olive oil",
                "1 lemon",
            ],
            "1. Grill chicken until cooked through\n2. Chop vegetables\n3. Combine all ingredients\n4. Dress with olive oil and lemon",
            88.0,
            &[tags::PROTEIN_PACKED, "low_carb", tags::NUTRIENT_DENSE],
            25,
            12.50,
        ),
        curated(
            "Quinoa Buddha Bowl",
            &[
                "1 cup quinoa",
                "1 can chickpeas",
                "1 sweet potato",
                "2 cups kale",
                "1/4 cup tahini",
                "Spices to taste",
            ],
            "1. Cook quinoa according to package\n2. Roast sweet potato and chickpeas\n3. Massage kale with olive oil\n4. Assemble bowl and drizzle with tahini",
            92.0,
            &[tags::FIBER_RICH, "plant_based", tags::BALANCED],
            35,
            8.75,
        ),
        curated(
            "Salmon with Roasted Vegetables",
            &[
                "2 salmon fillets",
                "2 cups broccoli",
                "1 bell pepper",
                "1 zucchini",
                "2 tbsp olive oil",
                "Herbs and spices",
            ],
            "1. Season salmon with herbs\n2. Chop vegetables\n3. Roast everything at 400°F for 20 minutes\n4. Serve hot",
            90.0,
            &[tags::PROTEIN_PACKED, "omega_3", "low_carb"],
            30,
            16.00,
        ),
        curated(
            "Overnight Oats",
            &[
                "1/2 cup rolled oats",
                "1/2 cup milk",
                "1 tbsp chia seeds",
                "1/2 banana",
                "1 tbsp honey",
                "Berries for topping",
            ],
            "1. Mix oats, milk, and chia seeds\n2. Refrigerate overnight\n3. Top with banana and berries\n4. Drizzle with honey",
            82.0,
            &[tags::FIBER_RICH, "quick_prep", "breakfast"],
            5,
            3.50,
        ),
        curated(
            "Veggie Stir Fry",
            &[
                "2 cups mixed vegetables",
                "1 block tofu",
                "2 tbsp soy sauce",
                "1 tbsp ginger",
                "2 cloves garlic",
                "1 cup brown rice",
            ],
            "1. Cook brown rice\n2. Press and cube tofu\n3. Stir fry tofu until golden\n4. Add vegetables and sauces\n5. Serve over rice",
            85.0,
            &["plant_based", tags::FIBER_RICH, tags::BALANCED],
            25,
            7.00,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_curated_catalog() {
        let recipes = curated_recipes();
        assert_eq!(recipes.len(), 5);
        assert!(recipes.iter().all(|r| r.source == RecipeSource::Curated));
        assert!(recipes.iter().all(|r| r.tier() == Tier::Excellent));
        assert!(recipes.iter().all(|r| !r.is_favorite));

        let oats = &recipes[3];
        assert_eq!(oats.title, "Overnight Oats");
        assert_eq!(oats.prep_time_minutes, Some(5));
        assert_eq!(oats.estimated_cost, Some(3.50));
    }

    #[test]
    fn test_to_meal_carries_recipe_fields() {
        let recipe = &curated_recipes()[1];
        let meal = recipe.to_meal(noon());

        assert_eq!(meal.name, "Quinoa Buddha Bowl");
        assert_eq!(meal.input_type, MealInputType::Recipe);
        assert_eq!(meal.health_index, 92.0);
        assert_eq!(meal.points(), 10);
        assert_eq!(meal.tags, recipe.tags);
        assert_eq!(meal.description.as_deref(), Some("Made from recipe: Quinoa Buddha Bowl"));
        assert_eq!(meal.cost, Some(8.75));
        assert_eq!(meal.timestamp, noon());
    }

    #[test]
    fn test_toggle_favorite() {
        let mut recipe = Recipe::new("Toast", vec!["bread".to_string()], 45.0);
        assert!(recipe.toggle_favorite());
        assert!(!recipe.toggle_favorite());
        assert_eq!(recipe.tier(), Tier::NeedsImprovement);
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{"title": "Toast", "ingredients": ["bread"], "healthIndex": 45}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.source, RecipeSource::User);
        assert!(!recipe.is_favorite);
        assert_eq!(recipe.key(), "toast");

        let json = serde_json::to_string(&curated_recipes()[0]).unwrap();
        assert!(json.contains(r#""source":"curated""#));
        assert!(json.contains(r#""prepTimeMinutes":25"#));
    }
}
