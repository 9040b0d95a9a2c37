use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::models::RecipeSource;

/// Wellday: meal scoring and daily coaching from your meal log.
#[derive(Parser, Debug)]
#[command(name = "wellday")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal log JSON file.
    #[arg(short, long, default_value = "meals.json")]
    pub file: PathBuf,

    /// Path to the saved recipes JSON file.
    #[arg(long, default_value = "recipes.json")]
    pub recipes: PathBuf,

    /// Path to a user profile JSON file (provides the daily budget).
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Daily food budget. Overrides the profile.
    #[arg(short, long)]
    pub budget: Option<f64>,

    /// Seed for message selection, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Evaluate as of this date (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = parse_date)]
    pub today: Option<NaiveDate>,

    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show today's meals and advisor message.
    Today,

    /// Show the tier and points for a health index.
    Score {
        /// Health index to classify.
        #[arg(allow_negative_numbers = true)]
        health_index: f64,
    },

    /// Show feedback for the most recently logged meal.
    Feedback,

    /// Summarize the last seven days.
    Weekly {
        /// Also write the per-day stats to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Describe a meal, analyze it and add it to the log.
    Log,

    /// Delete one of the day's meals, numbered as `today` lists them.
    Delete {
        /// Meal number, starting at 1.
        #[arg(value_parser = clap::value_parser!(u32).range(1..))]
        number: u32,
    },

    /// Browse, create and cook saved recipes.
    Recipes {
        #[command(subcommand)]
        action: Option<RecipeAction>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RecipeAction {
    /// List recipes, newest first.
    List {
        /// Only recipes from this source: user, curated or community.
        #[arg(long, value_parser = parse_source)]
        source: Option<RecipeSource>,

        /// Only favorites.
        #[arg(long)]
        favorites: bool,
    },

    /// Show one recipe in full.
    Show { title: String },

    /// Enter a new recipe and analyze it.
    Add,

    /// Mark or unmark a recipe as a favorite.
    Favorite { title: String },

    /// Log a meal made from a recipe.
    Cook { title: String },

    /// Delete a saved recipe.
    Remove { title: String },
}

impl Default for Command {
    fn default() -> Self {
        Command::Today
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|err| err.to_string())
}

impl Default for RecipeAction {
    fn default() -> Self {
        RecipeAction::List {
            source: None,
            favorites: false,
        }
    }
}

fn parse_source(value: &str) -> Result<RecipeSource, String> {
    match value.to_lowercase().as_str() {
        "user" => Ok(RecipeSource::User),
        "curated" => Ok(RecipeSource::Curated),
        "community" => Ok(RecipeSource::Community),
        other => Err(format!("unknown recipe source '{}'", other)),
    }
}
