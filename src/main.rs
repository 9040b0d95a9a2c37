use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use wellday_advisor::advisor::{
    generate_daily_message, generate_meal_feedback, generate_weekly_summary, RngPicker,
};
use wellday_advisor::analysis::{analyze_photo, analyze_recipe, analyze_text, analyze_voice};
use wellday_advisor::cli::{Cli, Command, RecipeAction};
use wellday_advisor::error::{Result, WelldayError};
use wellday_advisor::interface::{
    collect_meal_entry, collect_recipe_draft, display_day, display_message, display_recipe,
    display_recipe_list, display_score, display_weekly, prompt_yes_no, write_week_csv,
};
use wellday_advisor::models::{DailyStats, Meal, MealInputType, Recipe};
use wellday_advisor::state::{
    load_meals, load_profile, load_recipes, save_meals, save_recipes, MealHistory, RecipeBook,
};
use wellday_advisor::telemetry;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    telemetry::init(&cli.log_level)?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let backdated = cli.today.is_some();
    let budget = resolve_budget(cli.budget, cli.profile.as_deref())?;
    let rng = make_rng(cli.seed);

    debug!(%today, ?budget, seed = ?cli.seed, "resolved settings");

    match cli.command.unwrap_or_default() {
        Command::Today => cmd_today(&cli.file, today, budget, rng),
        Command::Score { health_index } => cmd_score(health_index),
        Command::Feedback => cmd_feedback(&cli.file, rng),
        Command::Weekly { csv } => cmd_weekly(&cli.file, today, csv.as_deref()),
        Command::Log => cmd_log(&cli.file, today, backdated, budget, rng),
        Command::Delete { number } => cmd_delete(&cli.file, today, number),
        Command::Recipes { action } => {
            let recipes = RecipeBook::new(load_recipes(&cli.recipes)?);
            let ctx = RecipeCmd {
                recipes_file: &cli.recipes,
                meals_file: &cli.file,
                today,
                backdated,
                budget,
            };
            cmd_recipes(&ctx, recipes, action.unwrap_or_default(), rng)
        }
    }
}

/// With `--today`, new meals land on that day at the current wall-clock time.
fn meal_timestamp(today: NaiveDate, backdated: bool) -> NaiveDateTime {
    if backdated {
        today.and_time(Local::now().time())
    } else {
        Local::now().naive_local()
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// The `--budget` flag wins over the profile; non-positive budgets are rejected.
fn resolve_budget(flag: Option<f64>, profile: Option<&Path>) -> Result<Option<f64>> {
    if let Some(budget) = flag {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(WelldayError::InvalidInput(
                "Budget must be a positive amount".to_string(),
            ));
        }
        return Ok(Some(budget));
    }

    match profile {
        Some(path) => {
            let profile = load_profile(path)?;
            info!(user = profile.display_name(), "profile loaded");
            Ok(profile.budget())
        }
        None => Ok(None),
    }
}

/// Show today's meals and the advisor's message.
fn cmd_today(file: &Path, today: NaiveDate, budget: Option<f64>, rng: StdRng) -> Result<()> {
    let history = MealHistory::new(load_meals(file)?);
    let today_meals = history.today_meals(today);
    let ctx = history.daily_context(today, &today_meals, budget);

    display_day(
        &today_meals,
        ctx.today_stats,
        ctx.current_streak,
        history.longest_streak(),
    );

    let message = generate_daily_message(&ctx, &mut RngPicker::new(rng));
    display_message(&message);

    Ok(())
}

fn cmd_score(health_index: f64) -> Result<()> {
    if !health_index.is_finite() {
        return Err(WelldayError::InvalidInput(
            "Health index must be a finite number".to_string(),
        ));
    }
    display_score(health_index);
    Ok(())
}

/// Feedback on the most recently logged meal.
fn cmd_feedback(file: &Path, rng: StdRng) -> Result<()> {
    let history = MealHistory::new(load_meals(file)?);
    let meal = history.latest_meal().ok_or(WelldayError::NoMeals)?;

    println!("{}", meal.name);
    display_score(meal.health_index);
    display_message(&generate_meal_feedback(meal, &mut RngPicker::new(rng)));

    Ok(())
}

/// Summarize the seven days ending today.
fn cmd_weekly(file: &Path, today: NaiveDate, csv: Option<&Path>) -> Result<()> {
    let history = MealHistory::new(load_meals(file)?);
    let week = history.last_7_days_stats(today);
    let owned: Vec<DailyStats> = week.iter().map(|s| (*s).clone()).collect();

    let lines = generate_weekly_summary(&owned, history.current_streak(today));
    display_weekly(&lines, &week);

    if let Some(path) = csv {
        write_week_csv(&week, path)?;
        println!("Wrote {} day(s) to {}", week.len(), path.display());
    }

    Ok(())
}

/// Interactively describe a meal, analyze it, and append it to the log.
fn cmd_log(
    file: &Path,
    today: NaiveDate,
    backdated: bool,
    budget: Option<f64>,
    mut rng: StdRng,
) -> Result<()> {
    let mut history = MealHistory::new(load_meals(file)?);
    let entry = collect_meal_entry()?;

    let analysis = match entry.input_type {
        MealInputType::Recipe => {
            analyze_recipe(&entry.ingredients, entry.instructions.as_deref(), &mut rng)
        }
        MealInputType::Voice => analyze_voice(&entry.text, &mut rng),
        MealInputType::Photo => analyze_photo(&entry.text, &mut rng),
        MealInputType::Text => analyze_text(&entry.text, &mut rng),
    };

    let mut meal = Meal::new(entry.name, meal_timestamp(today, backdated), analysis.health_index);
    meal.input_type = entry.input_type;
    meal.tags = analysis.tags.clone();
    meal.description = Some(analysis.description.to_string());
    meal.cost = entry.cost;
    if entry.input_type == MealInputType::Photo {
        meal.photo_url = Some(entry.text);
    }

    println!();
    display_score(meal.health_index);
    println!("{}", analysis.description);
    if !meal.tags.is_empty() {
        println!("Tags: {}", meal.tags.join(", "));
    }
    println!(
        "~{:.0} kcal | P {:.0}g C {:.0}g F {:.0}g | fiber {:.0}g | sodium {:.0}mg",
        analysis.facts.calories,
        analysis.facts.protein,
        analysis.facts.carbs,
        analysis.facts.fat,
        analysis.facts.fiber,
        analysis.facts.sodium
    );

    let mut picker = RngPicker::new(rng);
    display_message(&generate_meal_feedback(&meal, &mut picker));
    println!();

    if !prompt_yes_no("Save this meal?", true)? {
        return Ok(());
    }

    save_meal(file, &mut history, meal)?;

    let today_meals = history.today_meals(today);
    let ctx = history.daily_context(today, &today_meals, budget);
    display_message(&generate_daily_message(&ctx, &mut picker));

    Ok(())
}

fn save_meal(file: &Path, history: &mut MealHistory, meal: Meal) -> Result<()> {
    debug!(meal = %meal.debug_string(), "saving meal");
    history.add_meal(meal);
    save_meals(file, history.meals())?;
    println!("Meal saved.");
    Ok(())
}

/// Delete the `number`-th meal listed for `today`.
fn cmd_delete(file: &Path, today: NaiveDate, number: u32) -> Result<()> {
    let mut history = MealHistory::new(load_meals(file)?);
    let position = number.saturating_sub(1) as usize;

    let meal = history.remove_meal(today, position).ok_or_else(|| {
        WelldayError::InvalidInput(format!("No meal #{} logged on {}", number, today))
    })?;

    if !prompt_yes_no(&format!("Delete '{}'?", meal.name), false)? {
        return Ok(());
    }

    save_meals(file, history.meals())?;
    info!(meal = %meal.debug_string(), "meal deleted");
    println!("Deleted {}.", meal.name);
    Ok(())
}

/// Paths and settings shared by the `recipes` actions.
struct RecipeCmd<'a> {
    recipes_file: &'a Path,
    meals_file: &'a Path,
    today: NaiveDate,
    backdated: bool,
    budget: Option<f64>,
}

fn cmd_recipes(
    ctx: &RecipeCmd<'_>,
    mut book: RecipeBook,
    action: RecipeAction,
    mut rng: StdRng,
) -> Result<()> {
    match action {
        RecipeAction::List { source, favorites } => {
            let shown: Vec<&Recipe> = book
                .recipes()
                .iter()
                .filter(|r| source.is_none_or(|s| r.source == s))
                .filter(|r| !favorites || r.is_favorite)
                .collect();
            display_recipe_list(&shown);
        }

        RecipeAction::Show { title } => {
            let recipe = book
                .get(&title)
                .ok_or_else(|| WelldayError::RecipeNotFound(title.clone()))?;
            display_recipe(recipe);
        }

        RecipeAction::Add => {
            let draft = collect_recipe_draft()?;
            let created_at = meal_timestamp(ctx.today, ctx.backdated);
            display_recipe(book.create_recipe(draft, created_at, &mut rng)?);
            save_recipes(ctx.recipes_file, book.recipes())?;
            println!("Recipe saved.");
        }

        RecipeAction::Favorite { title } => {
            let favorite = book.toggle_favorite(&title)?;
            save_recipes(ctx.recipes_file, book.recipes())?;
            if favorite {
                println!("Added {} to favorites.", title);
            } else {
                println!("Removed {} from favorites.", title);
            }
        }

        RecipeAction::Cook { title } => {
            let recipe = book
                .get(&title)
                .ok_or_else(|| WelldayError::RecipeNotFound(title.clone()))?;
            let meal = recipe.to_meal(meal_timestamp(ctx.today, ctx.backdated));

            let mut history = MealHistory::new(load_meals(ctx.meals_file)?);
            let mut picker = RngPicker::new(rng);

            display_score(meal.health_index);
            display_message(&generate_meal_feedback(&meal, &mut picker));
            save_meal(ctx.meals_file, &mut history, meal)?;

            let today_meals = history.today_meals(ctx.today);
            let daily = history.daily_context(ctx.today, &today_meals, ctx.budget);
            display_message(&generate_daily_message(&daily, &mut picker));
        }

        RecipeAction::Remove { title } => {
            let removed = book.remove(&title)?;
            save_recipes(ctx.recipes_file, book.recipes())?;
            println!("Deleted recipe {}.", removed.title);
        }
    }

    Ok(())
}
