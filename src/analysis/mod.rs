mod text;

pub use text::{
    analyze_photo, analyze_recipe, analyze_text, analyze_voice, NutritionAnalysis, NutritionFacts,
    BASE_HEALTH_INDEX, MAX_HEALTH_INDEX, MIN_HEALTH_INDEX,
};
