use crate::models::{AdvisorMessage, DailyStats, Meal, Recipe};
use crate::scoring::{self, Tier};

/// Display an advisor message.
pub fn display_message(message: &AdvisorMessage) {
    println!("{} [{}] {}", message.icon, message.kind.label(), message.message);
}

/// Display the tier and points for a health index.
pub fn display_score(health_index: f64) {
    let tier = scoring::tier(health_index);
    println!(
        "Health index {:.1}: {} ({:+} pts)",
        health_index,
        tier,
        tier.points()
    );
}

/// Display one numbered meal on a single line.
pub fn display_meal(number: usize, meal: &Meal) {
    let tags_str = if meal.tags.is_empty() {
        String::new()
    } else {
        format!("  [{}]", meal.tags.join(", "))
    };
    println!(
        "  {:>2}. {}  {} {:<24} {:>5.1}  {:+} pts{}",
        number,
        meal.timestamp.format("%H:%M"),
        meal.tier().emoji(),
        meal.name,
        meal.health_index,
        meal.points(),
        tags_str
    );
}

/// Display today's meals with the running total and streaks.
pub fn display_day(meals: &[Meal], stats: Option<&DailyStats>, streak: u32, best_streak: u32) {
    println!();
    if meals.is_empty() {
        println!("No meals logged today.");
    } else {
        println!("=== Today ({} meals) ===", meals.len());
        for (i, meal) in meals.iter().enumerate() {
            display_meal(i + 1, meal);
        }
    }

    if let Some(stats) = stats {
        let bonus = if stats.has_completion_bonus() {
            " (incl. +2 completion bonus)"
        } else {
            ""
        };
        println!();
        println!("Points: {}{}", stats.final_points(), bonus);
        if stats.total_spent > 0.0 {
            println!("Spent: ${:.2}", stats.total_spent);
        }
    }
    println!("Streak: {} day(s) (best: {})", streak, best_streak);
    println!();
}

/// Display a weekly summary with a per-day breakdown.
pub fn display_weekly(lines: &[String], week: &[&DailyStats]) {
    println!();
    println!("=== This Week ===");
    println!();

    for stats in week {
        let tiers: String = Tier::ALL
            .iter()
            .map(|t| t.emoji().repeat(stats.tier_count(*t) as usize))
            .collect();
        println!(
            "  {} {}  {:>3} pts  {} meals  {}",
            stats.date.format("%a"),
            stats.date,
            stats.final_points(),
            stats.meal_count,
            tiers
        );
    }

    if !week.is_empty() {
        println!();
    }
    for line in lines {
        println!("{}", line);
    }
    println!();
}

/// Display recipes one per line, newest first.
pub fn display_recipe_list(recipes: &[&Recipe]) {
    println!();
    if recipes.is_empty() {
        println!("No recipes found.");
        println!();
        return;
    }

    println!("=== Recipes ({}) ===", recipes.len());
    for recipe in recipes {
        let favorite = if recipe.is_favorite { "★" } else { " " };
        let prep = recipe
            .prep_time_minutes
            .map(|m| format!("{} min", m))
            .unwrap_or_default();
        let cost = recipe
            .estimated_cost
            .map(|c| format!("${:.2}", c))
            .unwrap_or_default();
        println!(
            "  {} {} {:<32} {:>5.1}  {:>7} {:>7}  ({})",
            favorite,
            recipe.tier().emoji(),
            recipe.title,
            recipe.health_index,
            prep,
            cost,
            recipe.source.label()
        );
    }
    println!();
}

/// Display one recipe with ingredients and instructions.
pub fn display_recipe(recipe: &Recipe) {
    println!();
    println!("=== {} ===", recipe.title);
    println!(
        "Health index {:.1}: {} ({} recipe)",
        recipe.health_index,
        recipe.tier(),
        recipe.source.label()
    );
    if let Some(minutes) = recipe.prep_time_minutes {
        println!("Prep time: {} min", minutes);
    }
    if let Some(cost) = recipe.estimated_cost {
        println!("Estimated cost: ${:.2}", cost);
    }
    if !recipe.tags.is_empty() {
        println!("Tags: {}", recipe.tags.join(", "));
    }

    println!();
    println!("Ingredients:");
    for ingredient in &recipe.ingredients {
        println!("  - {}", ingredient);
    }
    if let Some(instructions) = &recipe.instructions {
        println!();
        println!("{}", instructions);
    }
    println!();
}
