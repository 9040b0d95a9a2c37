use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::scoring::{self, Tier};

/// Known nutritional tags. Tags stay free-form strings; these are the ones
/// the analyzer emits and the advisor looks for.
pub mod tags {
    pub const PROTEIN_PACKED: &str = "protein_packed";
    pub const FIBER_RICH: &str = "fiber_rich";
    pub const NUTRIENT_DENSE: &str = "nutrient_dense";
    pub const HIGH_SODIUM: &str = "high_sodium";
    pub const HIGH_SUGAR: &str = "high_sugar";
    pub const PROCESSED: &str = "processed";
    pub const CARB_DENSE: &str = "carb_dense";
    pub const LOW_CALORIE: &str = "low_calorie";
    pub const BALANCED: &str = "balanced";
}

/// How a meal was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealInputType {
    Photo,
    #[default]
    Text,
    Voice,
    Recipe,
}

impl MealInputType {
    pub fn label(self) -> &'static str {
        match self {
            MealInputType::Photo => "photo",
            MealInputType::Text => "text",
            MealInputType::Voice => "voice",
            MealInputType::Recipe => "recipe",
        }
    }
}

/// A logged meal.
///
/// Tier and points are never stored; they are derived from `health_index`
/// on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,

    pub timestamp: NaiveDateTime,

    #[serde(default)]
    pub input_type: MealInputType,

    pub health_index: f64,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// What the meal cost, in the user's currency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,

    #[serde(default, rename = "photoURL", skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

impl Meal {
    pub fn new(name: impl Into<String>, timestamp: NaiveDateTime, health_index: f64) -> Self {
        Self {
            name: name.into(),
            timestamp,
            input_type: MealInputType::default(),
            health_index,
            tags: Vec::new(),
            description: None,
            cost: None,
            photo_url: None,
        }
    }

    /// Builder-style tag setter.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = Some(cost);
        self
    }

    #[inline]
    pub fn tier(&self) -> Tier {
        scoring::tier(self.health_index)
    }

    #[inline]
    pub fn points(&self) -> i32 {
        scoring::points(self.health_index)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Calendar day the meal belongs to.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// Debug string for logging.
    pub fn debug_string(&self) -> String {
        format!(
            "{} @ {}: hi {:.1} ({}, {:+} pts) [{}]",
            self.name,
            self.timestamp.format("%Y-%m-%d %H:%M"),
            self.health_index,
            self.tier().label(),
            self.points(),
            self.tags.join(", ")
        )
    }
}
