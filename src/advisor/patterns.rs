use crate::advisor::catalog;
use crate::models::{tags, AdvisorMessage, Meal, MessageType};
use crate::scoring::{Tier, PATTERN_MIN_MEALS};

fn any_tagged(meals: &[Meal], tag: &str) -> bool {
    meals.iter().any(|m| m.has_tag(tag))
}

fn count_tagged(meals: &[Meal], tag: &str) -> usize {
    meals.iter().filter(|m| m.has_tag(tag)).count()
}

/// Look for same-day nutritional trends.
///
/// Each check runs independently and appends at most one message, in a
/// fixed order: protein, sodium, processed food, excellent meals, fiber.
/// An empty day yields no insights.
pub fn analyze_nutritional_patterns(meals: &[Meal]) -> Vec<AdvisorMessage> {
    let mut messages = Vec::new();

    if meals.is_empty() {
        return messages;
    }

    let enough_meals = meals.len() >= PATTERN_MIN_MEALS;

    if enough_meals && !any_tagged(meals, tags::PROTEIN_PACKED) {
        messages.push(AdvisorMessage::new(
            catalog::ADD_PROTEIN,
            MessageType::Suggestion,
            "🥩",
        ));
    }

    if count_tagged(meals, tags::HIGH_SODIUM) >= PATTERN_MIN_MEALS {
        messages.push(AdvisorMessage::new(
            catalog::SODIUM_TREND,
            MessageType::Suggestion,
            "🧂",
        ));
    }

    if count_tagged(meals, tags::PROCESSED) >= PATTERN_MIN_MEALS {
        messages.push(AdvisorMessage::new(
            catalog::WHOLE_FOODS,
            MessageType::Suggestion,
            "🥗",
        ));
    }

    let excellent = meals.iter().filter(|m| m.tier() == Tier::Excellent).count();
    if excellent >= PATTERN_MIN_MEALS {
        messages.push(AdvisorMessage::new(
            catalog::EXCELLENT_DAY,
            MessageType::Celebration,
            "🥇",
        ));
    }

    if enough_meals && !any_tagged(meals, tags::FIBER_RICH) {
        messages.push(AdvisorMessage::new(
            catalog::ADD_FIBER,
            MessageType::Suggestion,
            "🥦",
        ));
    }

    messages
}
