use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;
use crate::models::{Meal, Recipe, UserProfile};

/// Load the meal log from a JSON file.
///
/// A missing file is an empty log. Meals with a non-finite health index are
/// dropped with a warning.
pub fn load_meals<P: AsRef<Path>>(path: P) -> Result<Vec<Meal>> {
    let path = path.as_ref();
    if !path.exists() {
        info!(path = %path.display(), "meal log not found, starting empty");
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let meals: Vec<Meal> = serde_json::from_str(&content)?;
    let total = meals.len();

    let meals: Vec<Meal> = meals
        .into_iter()
        .filter(|m| {
            let ok = m.health_index.is_finite();
            if !ok {
                warn!(meal = %m.name, "skipping meal with non-finite health index");
            }
            ok
        })
        .collect();

    info!(path = %path.display(), loaded = meals.len(), total, "meal log loaded");
    Ok(meals)
}

/// Save the meal log to a JSON file.
pub fn save_meals<P: AsRef<Path>>(path: P, meals: &[Meal]) -> Result<()> {
    let json = serde_json::to_string_pretty(meals)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load saved recipes. A missing file means none have been saved.
pub fn load_recipes<P: AsRef<Path>>(path: P) -> Result<Vec<Recipe>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let content = fs::read_to_string(path)?;
    let recipes: Vec<Recipe> = serde_json::from_str(&content)?;
    info!(path = %path.display(), loaded = recipes.len(), "recipes loaded");
    Ok(recipes)
}

pub fn save_recipes<P: AsRef<Path>>(path: P, recipes: &[Recipe]) -> Result<()> {
    let json = serde_json::to_string_pretty(recipes)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a user profile from a JSON file.
pub fn load_profile<P: AsRef<Path>>(path: P) -> Result<UserProfile> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_and_save_roundtrip() {
        let json = r#"[
            {"name": "Salmon Bowl", "timestamp": "2026-10-14T12:30:00", "inputType": "photo", "healthIndex": 90, "tags": ["protein_packed"], "cost": 14.5}
        ]"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let meals = load_meals(file.path()).unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].name, "Salmon Bowl");
        assert_eq!(meals[0].cost, Some(14.5));

        let out_file = NamedTempFile::new().unwrap();
        save_meals(out_file.path(), &meals).unwrap();

        let reloaded = load_meals(out_file.path()).unwrap();
        assert_eq!(reloaded, meals);
    }

    #[test]
    fn test_missing_file_is_empty_log() {
        let dir = tempfile::tempdir().unwrap();
        let meals = load_meals(dir.path().join("meals.json")).unwrap();
        assert!(meals.is_empty());
    }

    #[test]
    fn test_malformed_json_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();
        assert!(load_meals(file.path()).is_err());
    }

    #[test]
    fn test_recipes_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.json");
        assert!(load_recipes(&path).unwrap().is_empty());

        let mut recipes = crate::models::curated_recipes();
        recipes[2].is_favorite = true;
        save_recipes(&path, &recipes).unwrap();

        let reloaded = load_recipes(&path).unwrap();
        assert_eq!(reloaded, recipes);
        assert!(reloaded[2].is_favorite);
    }

    #[test]
    fn test_load_profile() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"email": "demo@wellday.app", "name": "Demo User", "healthGoal": "lose", "dailyBudget": 30}"#)
            .unwrap();
        let profile = load_profile(file.path()).unwrap();
        assert_eq!(profile.display_name(), "Demo User");
        assert_eq!(profile.budget(), Some(30.0));
    }
}
