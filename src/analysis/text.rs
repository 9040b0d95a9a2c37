use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::tags;
use crate::scoring::{self, Tier};

/// Starting health index before any keyword adjustments.
pub const BASE_HEALTH_INDEX: f64 = 50.0;

/// Analyzer output is clamped to this range.
pub const MIN_HEALTH_INDEX: f64 = 20.0;
pub const MAX_HEALTH_INDEX: f64 = 95.0;

const NUTRIENT_DENSE_WORDS: &[&str] = &[
    "salad",
    "vegetables",
    "fruit",
    "quinoa",
    "brown rice",
    "grilled",
    "steamed",
    "baked",
    "chicken breast",
    "salmon",
    "avocado",
    "leafy greens",
];

const PROTEIN_WORDS: &[&str] = &["protein", "chicken", "fish", "tofu", "eggs", "beans", "lentils"];

const FIBER_WORDS: &[&str] = &["fiber", "whole grain", "oats", "beans", "vegetables"];

const PROCESSED_WORDS: &[&str] = &["fried", "deep fried", "fast food", "burger", "fries", "pizza"];

const SUGAR_WORDS: &[&str] = &["soda", "candy", "dessert", "cake", "cookies", "ice cream"];

const SODIUM_WORDS: &[&str] = &["salty", "chips", "bacon", "soy sauce", "canned"];

const STARCH_WORDS: &[&str] = &["pasta", "bread", "rice", "potatoes", "cereal"];

/// Tags a photo estimate can carry.
const PHOTO_TAGS: &[&str] = &[
    tags::PROTEIN_PACKED,
    tags::FIBER_RICH,
    tags::NUTRIENT_DENSE,
    tags::HIGH_SODIUM,
    tags::HIGH_SUGAR,
    tags::CARB_DENSE,
    tags::PROCESSED,
    tags::LOW_CALORIE,
    tags::BALANCED,
];

/// Inclusive integer ranges for each estimated nutrient.
struct FactRanges {
    calories: (u32, u32),
    protein: (u32, u32),
    carbs: (u32, u32),
    fat: (u32, u32),
    fiber: (u32, u32),
    sodium: (u32, u32),
}

const TEXT_FACTS: FactRanges = FactRanges {
    calories: (200, 600),
    protein: (10, 40),
    carbs: (20, 70),
    fat: (5, 25),
    fiber: (2, 12),
    sodium: (200, 1000),
};

// Photo portions are assumed a little larger.
const PHOTO_FACTS: FactRanges = FactRanges {
    calories: (250, 650),
    protein: (15, 45),
    carbs: (25, 75),
    fat: (8, 28),
    fiber: (3, 13),
    sodium: (300, 1100),
};

/// Rough per-meal nutrition estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sodium: f64,
}

impl NutritionFacts {
    fn estimate(ranges: &FactRanges, rng: &mut impl Rng) -> Self {
        let mut draw = |(lo, hi): (u32, u32)| rng.gen_range(lo..=hi) as f64;
        Self {
            calories: draw(ranges.calories),
            protein: draw(ranges.protein),
            carbs: draw(ranges.carbs),
            fat: draw(ranges.fat),
            fiber: draw(ranges.fiber),
            sodium: draw(ranges.sodium),
        }
    }
}

/// Result of analyzing a meal description.
#[derive(Debug, Clone, PartialEq)]
pub struct NutritionAnalysis {
    pub health_index: f64,
    pub tags: Vec<String>,
    pub description: &'static str,
    pub facts: NutritionFacts,
}

impl NutritionAnalysis {
    pub fn tier(&self) -> Tier {
        scoring::tier(self.health_index)
    }
}

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Estimate health index and tags from a free-text meal description.
///
/// Keyword matching is case-insensitive and substring based. The random
/// generator covers the variable-size adjustments and the nutrition facts.
pub fn analyze_text(text: &str, rng: &mut impl Rng) -> NutritionAnalysis {
    let text = text.to_lowercase();
    let mut health_index = BASE_HEALTH_INDEX;
    let mut found: Vec<String> = Vec::new();

    // Positive indicators
    if contains_any(&text, NUTRIENT_DENSE_WORDS) {
        health_index += rng.gen_range(10.0..=30.0);
        found.push(tags::NUTRIENT_DENSE.to_string());
    }

    if contains_any(&text, PROTEIN_WORDS) {
        health_index += 10.0;
        found.push(tags::PROTEIN_PACKED.to_string());
    }

    if contains_any(&text, FIBER_WORDS) {
        health_index += 8.0;
        found.push(tags::FIBER_RICH.to_string());
    }

    // Negative indicators
    if contains_any(&text, PROCESSED_WORDS) {
        health_index -= rng.gen_range(15.0..=25.0);
        found.push(tags::PROCESSED.to_string());
    }

    if contains_any(&text, SUGAR_WORDS) {
        health_index -= 15.0;
        found.push(tags::HIGH_SUGAR.to_string());
    }

    if contains_any(&text, SODIUM_WORDS) {
        health_index -= 8.0;
        found.push(tags::HIGH_SODIUM.to_string());
    }

    let nutrient_dense = found.iter().any(|t| t == tags::NUTRIENT_DENSE);
    if contains_any(&text, STARCH_WORDS) && !nutrient_dense {
        found.push(tags::CARB_DENSE.to_string());
    }

    let health_index = health_index.clamp(MIN_HEALTH_INDEX, MAX_HEALTH_INDEX);

    NutritionAnalysis {
        health_index,
        tags: found,
        description: scoring::tier(health_index).description(),
        facts: NutritionFacts::estimate(&TEXT_FACTS, rng),
    }
}

/// Voice entries are analyzed from their transcript.
pub fn analyze_voice(transcript: &str, rng: &mut impl Rng) -> NutritionAnalysis {
    analyze_text(transcript, rng)
}

/// Analyze a recipe from its ingredient list and optional instructions.
pub fn analyze_recipe(
    ingredients: &[String],
    instructions: Option<&str>,
    rng: &mut impl Rng,
) -> NutritionAnalysis {
    let combined = format!("{} {}", ingredients.join(" "), instructions.unwrap_or(""));
    analyze_text(&combined, rng)
}

/// Rough estimate for a meal photo.
///
/// The image is not inspected: the health index is drawn from 30 to 90 and
/// one to three distinct tags are drawn from the known set.
pub fn analyze_photo(photo_url: &str, rng: &mut impl Rng) -> NutritionAnalysis {
    let health_index = rng.gen_range(30..=90) as f64;
    let count = rng.gen_range(1..=3);
    let tags: Vec<String> = PHOTO_TAGS
        .choose_multiple(rng, count)
        .map(|t| t.to_string())
        .collect();

    tracing::debug!(photo_url, health_index, "estimated meal photo");

    NutritionAnalysis {
        health_index,
        tags,
        description: scoring::tier(health_index).description(),
        facts: NutritionFacts::estimate(&PHOTO_FACTS, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    #[test]
    fn test_plain_text_stays_at_base() {
        let result = analyze_text("a sandwich", &mut rng());
        assert_eq!(result.health_index, BASE_HEALTH_INDEX);
        assert!(result.tags.is_empty());
        assert_eq!(result.tier(), Tier::Neutral);
        assert_eq!(result.description, Tier::Neutral.description());
    }

    #[test]
    fn test_fixed_adjustments() {
        // protein +10, fiber +8 (lentils + whole grain)
        let result = analyze_text("Lentils with WHOLE GRAIN toast", &mut rng());
        assert_eq!(result.health_index, 68.0);
        assert_eq!(result.tags, vec!["protein_packed", "fiber_rich"]);
    }

    #[test]
    fn test_variable_adjustment_in_range() {
        let mut rng = rng();
        for _ in 0..50 {
            let result = analyze_text("big salad", &mut rng);
            assert!((60.0..=80.0).contains(&result.health_index));
            assert_eq!(result.tags, vec!["nutrient_dense"]);
        }
    }

    #[test]
    fn test_clamped_to_floor() {
        // processed, sugar and sodium together push well below 20
        let result = analyze_text("fried chips and cake with soda", &mut rng());
        assert_eq!(result.health_index, MIN_HEALTH_INDEX);
        assert_eq!(result.tags, vec!["processed", "high_sugar", "high_sodium"]);
    }

    #[test]
    fn test_carb_dense_only_without_nutrient_dense() {
        let pasta = analyze_text("pasta", &mut rng());
        assert_eq!(pasta.tags, vec!["carb_dense"]);

        let bowl = analyze_text("brown rice bowl", &mut rng());
        assert!(!bowl.tags.iter().any(|t| t == "carb_dense"));
    }

    #[test]
    fn test_facts_in_range() {
        let facts = analyze_text("anything", &mut rng()).facts;
        assert!((200.0..=600.0).contains(&facts.calories));
        assert!((200.0..=1000.0).contains(&facts.sodium));
        assert!((2.0..=12.0).contains(&facts.fiber));
    }

    #[test]
    fn test_photo_estimate_in_range() {
        let mut rng = rng();
        for _ in 0..100 {
            let result = analyze_photo("file:///tmp/lunch.jpg", &mut rng);
            assert!((30.0..=90.0).contains(&result.health_index));
            assert_eq!(result.health_index.fract(), 0.0);
            assert!((1..=3).contains(&result.tags.len()));
            assert!(result.tags.iter().all(|t| PHOTO_TAGS.contains(&t.as_str())));

            let mut unique = result.tags.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), result.tags.len());

            assert_eq!(result.description, result.tier().description());
            assert!((250.0..=650.0).contains(&result.facts.calories));
            assert!((300.0..=1100.0).contains(&result.facts.sodium));
            assert!((8.0..=28.0).contains(&result.facts.fat));
        }
    }

    #[test]
    fn test_photo_estimate_is_seeded() {
        let a = analyze_photo("a.jpg", &mut StdRng::seed_from_u64(5));
        let b = analyze_photo("b.jpg", &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_recipe_joins_ingredients() {
        let ingredients = vec!["tofu".to_string(), "oats".to_string()];
        let result = analyze_recipe(&ingredients, Some("steamed for 20 minutes"), &mut rng());
        assert!(result.tags.iter().any(|t| t == "protein_packed"));
        assert!(result.tags.iter().any(|t| t == "fiber_rich"));
        assert!(result.tags.iter().any(|t| t == "nutrient_dense"));
    }
}
