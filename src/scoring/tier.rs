use serde::{Deserialize, Serialize};

use crate::scoring::constants::*;

/// Quality band of a meal, derived from its health index.
///
/// Variants are declared best to worst, so the derived `Ord` sorts
/// Excellent first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Excellent,
    Good,
    Neutral,
    NeedsImprovement,
    Poor,
}

impl Tier {
    /// All tiers, best to worst.
    pub const ALL: [Tier; 5] = [
        Tier::Excellent,
        Tier::Good,
        Tier::Neutral,
        Tier::NeedsImprovement,
        Tier::Poor,
    ];

    /// Classify a health index. Total over every `f64`; NaN lands in Poor.
    pub fn from_health_index(health_index: f64) -> Self {
        if health_index >= EXCELLENT_THRESHOLD {
            Tier::Excellent
        } else if health_index >= GOOD_THRESHOLD {
            Tier::Good
        } else if health_index >= NEUTRAL_THRESHOLD {
            Tier::Neutral
        } else if health_index >= NEEDS_IMPROVEMENT_THRESHOLD {
            Tier::NeedsImprovement
        } else {
            Tier::Poor
        }
    }

    /// Points awarded for a meal in this tier.
    pub fn points(self) -> i32 {
        match self {
            Tier::Excellent => EXCELLENT_POINTS,
            Tier::Good => GOOD_POINTS,
            Tier::Neutral => NEUTRAL_POINTS,
            Tier::NeedsImprovement => NEEDS_IMPROVEMENT_POINTS,
            Tier::Poor => POOR_POINTS,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Tier::Excellent => "🥇",
            Tier::Good => "🥈",
            Tier::Neutral => "⚪",
            Tier::NeedsImprovement => "🟠",
            Tier::Poor => "🔴",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent",
            Tier::Good => "Good",
            Tier::Neutral => "Neutral",
            Tier::NeedsImprovement => "Needs Improvement",
            Tier::Poor => "Poor",
        }
    }

    /// Short verdict attached to an analyzed meal.
    pub fn description(self) -> &'static str {
        match self {
            Tier::Excellent => "Excellent nutritional balance with quality ingredients",
            Tier::Good => "Good meal choice with some healthy elements",
            Tier::Neutral => "Balanced meal with room for improvement",
            Tier::NeedsImprovement => "Consider adding more whole foods",
            Tier::Poor => "Try to incorporate more nutritious options",
        }
    }

    /// Serialized key, matching the JSON form (`"needsImprovement"`).
    pub fn key(self) -> &'static str {
        match self {
            Tier::Excellent => "excellent",
            Tier::Good => "good",
            Tier::Neutral => "neutral",
            Tier::NeedsImprovement => "needsImprovement",
            Tier::Poor => "poor",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.emoji(), self.label())
    }
}

/// Tier for a health index.
#[inline]
pub fn tier(health_index: f64) -> Tier {
    Tier::from_health_index(health_index)
}

/// Points for a health index. Always agrees with [`tier`].
#[inline]
pub fn points(health_index: f64) -> i32 {
    tier(health_index).points()
}
