use chrono::NaiveDateTime;
use rand::Rng;
use tracing::info;

use crate::analysis::analyze_recipe;
use crate::error::{Result, WelldayError};
use crate::models::{curated_recipes, recipe_key, Recipe, RecipeDraft, RecipeSource};

/// Saved recipes, newest first, with unique titles.
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    /// Create a book from stored recipes. When none of them are curated,
    /// the built-in curated recipes are appended.
    pub fn new(recipes: Vec<Recipe>) -> Self {
        let mut book = Self {
            recipes: Vec::with_capacity(recipes.len()),
        };
        for recipe in recipes {
            if book.get(&recipe.title).is_none() {
                book.recipes.push(recipe);
            }
        }
        if book.curated().next().is_none() {
            book.seed_curated();
        }
        book
    }

    fn seed_curated(&mut self) {
        let mut added = 0;
        for recipe in curated_recipes() {
            if self.get(&recipe.title).is_none() {
                self.recipes.push(recipe);
                added += 1;
            }
        }
        info!(added, "curated recipes added");
    }

    fn position(&self, title: &str) -> Option<usize> {
        let key = recipe_key(title);
        self.recipes.iter().position(|r| r.key() == key)
    }

    /// Find a recipe by title, ignoring case.
    pub fn get(&self, title: &str) -> Option<&Recipe> {
        self.position(title).map(|i| &self.recipes[i])
    }

    /// Analyze a draft and save it as the user's newest recipe.
    pub fn create_recipe(
        &mut self,
        draft: RecipeDraft,
        created_at: NaiveDateTime,
        rng: &mut impl Rng,
    ) -> Result<&Recipe> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(WelldayError::InvalidInput("Recipe title is required".to_string()));
        }
        if draft.ingredients.is_empty() {
            return Err(WelldayError::InvalidInput(
                "At least one ingredient is required".to_string(),
            ));
        }
        if self.get(title).is_some() {
            return Err(WelldayError::DuplicateRecipe(title.to_string()));
        }

        let analysis = analyze_recipe(&draft.ingredients, draft.instructions.as_deref(), rng);

        let mut recipe = Recipe::new(title, draft.ingredients, analysis.health_index);
        recipe.instructions = draft.instructions;
        recipe.tags = analysis.tags;
        recipe.tags.extend(draft.diet_tags);
        recipe.prep_time_minutes = draft.prep_time_minutes;
        recipe.estimated_cost = draft.estimated_cost;
        recipe.source = RecipeSource::User;
        recipe.created_at = Some(created_at);

        info!(title = %recipe.title, health_index = recipe.health_index, "recipe created");
        self.recipes.insert(0, recipe);
        Ok(&self.recipes[0])
    }

    /// Flip a recipe's favorite flag and return the new value.
    pub fn toggle_favorite(&mut self, title: &str) -> Result<bool> {
        let i = self
            .position(title)
            .ok_or_else(|| WelldayError::RecipeNotFound(title.to_string()))?;
        Ok(self.recipes[i].toggle_favorite())
    }

    /// Remove a recipe by title.
    pub fn remove(&mut self, title: &str) -> Result<Recipe> {
        let i = self
            .position(title)
            .ok_or_else(|| WelldayError::RecipeNotFound(title.to_string()))?;
        Ok(self.recipes.remove(i))
    }

    pub fn by_source(&self, source: RecipeSource) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(move |r| r.source == source)
    }

    pub fn user(&self) -> impl Iterator<Item = &Recipe> {
        self.by_source(RecipeSource::User)
    }

    pub fn curated(&self) -> impl Iterator<Item = &Recipe> {
        self.by_source(RecipeSource::Curated)
    }

    pub fn favorites(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter().filter(|r| r.is_favorite)
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }
}
