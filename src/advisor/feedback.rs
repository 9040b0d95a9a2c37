use crate::advisor::catalog;
use crate::advisor::picker::Picker;
use crate::models::{AdvisorMessage, Meal, MessageType};
use crate::scoring::Tier;

/// Catalog, message type and icon used for a tier's feedback.
pub fn feedback_catalog(tier: Tier) -> (&'static [&'static str], MessageType, &'static str) {
    match tier {
        Tier::Excellent => (catalog::EXCELLENT_FEEDBACK, MessageType::Celebration, "🥇"),
        Tier::Good => (catalog::GOOD_FEEDBACK, MessageType::Encouragement, "✅"),
        Tier::Neutral => (catalog::NEUTRAL_FEEDBACK, MessageType::Suggestion, "ℹ️"),
        Tier::NeedsImprovement => (
            catalog::NEEDS_IMPROVEMENT_FEEDBACK,
            MessageType::Suggestion,
            "💡",
        ),
        Tier::Poor => (catalog::POOR_FEEDBACK, MessageType::Suggestion, "🔄"),
    }
}

/// Reaction to a single meal, based only on its tier.
pub fn generate_meal_feedback(meal: &Meal, picker: &mut impl Picker) -> AdvisorMessage {
    let (candidates, kind, icon) = feedback_catalog(meal.tier());
    AdvisorMessage::new(picker.pick(candidates), kind, icon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::picker::FixedPick;
    use chrono::NaiveDate;

    fn meal(hi: f64) -> Meal {
        let ts = NaiveDate::from_ymd_opt(2026, 10, 14)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap();
        Meal::new("Dinner", ts, hi)
    }

    #[test]
    fn test_catalog_sizes() {
        for tier in Tier::ALL {
            let (candidates, _, _) = feedback_catalog(tier);
            assert!((2..=3).contains(&candidates.len()), "{:?}", tier);
        }
    }

    #[test]
    fn test_feedback_per_tier() {
        let msg = generate_meal_feedback(&meal(92.0), &mut FixedPick(0));
        assert_eq!(msg.kind, MessageType::Celebration);
        assert_eq!(msg.icon, "🥇");
        assert_eq!(msg.message, catalog::EXCELLENT_FEEDBACK[0]);

        let msg = generate_meal_feedback(&meal(70.0), &mut FixedPick(2));
        assert_eq!(msg.kind, MessageType::Encouragement);
        assert_eq!(msg.message, catalog::GOOD_FEEDBACK[2]);

        let msg = generate_meal_feedback(&meal(55.0), &mut FixedPick(0));
        assert_eq!(msg.icon, "ℹ️");

        let msg = generate_meal_feedback(&meal(40.0), &mut FixedPick(0));
        assert_eq!(msg.icon, "💡");

        let msg = generate_meal_feedback(&meal(10.0), &mut FixedPick(1));
        assert_eq!(msg.kind, MessageType::Suggestion);
        assert_eq!(msg.message, catalog::POOR_FEEDBACK[1]);
    }

    #[test]
    fn test_tags_do_not_change_feedback() {
        let plain = generate_meal_feedback(&meal(70.0), &mut FixedPick(0));
        let tagged = generate_meal_feedback(
            &meal(70.0).with_tags(["processed", "high_sodium"]),
            &mut FixedPick(0),
        );
        assert_eq!(plain, tagged);
    }
}
