use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Meal;
use crate::scoring::{Tier, COMPLETION_BONUS_POINTS, COMPLETION_MEAL_COUNT};

/// Aggregated progress for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    pub date: NaiveDate,

    /// Sum of the day's meal points, before any bonus.
    pub total_points: i32,

    pub meal_count: u32,

    #[serde(default)]
    pub total_spent: f64,

    /// Occurrences of each tier. Tiers with no meals are absent.
    #[serde(default)]
    pub tier_counts: BTreeMap<Tier, u32>,
}

impl DailyStats {
    /// An empty day.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            total_points: 0,
            meal_count: 0,
            total_spent: 0.0,
            tier_counts: BTreeMap::new(),
        }
    }

    /// Build a day's stats from its meals.
    ///
    /// Meals are taken as given; the caller is responsible for passing only
    /// meals from `date`.
    pub fn calculate(meals: &[Meal], date: NaiveDate) -> Self {
        let mut stats = Self::new(date);
        for meal in meals {
            stats.total_points += meal.points();
            stats.meal_count += 1;
            stats.total_spent += meal.cost.unwrap_or(0.0);
            *stats.tier_counts.entry(meal.tier()).or_insert(0) += 1;
        }
        stats
    }

    #[inline]
    pub fn has_completion_bonus(&self) -> bool {
        self.meal_count >= COMPLETION_MEAL_COUNT
    }

    /// Total points including the completion bonus.
    #[inline]
    pub fn final_points(&self) -> i32 {
        if self.has_completion_bonus() {
            self.total_points + COMPLETION_BONUS_POINTS
        } else {
            self.total_points
        }
    }

    pub fn tier_count(&self, tier: Tier) -> u32 {
        self.tier_counts.get(&tier).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 14).unwrap()
    }

    fn meal(hi: f64, cost: Option<f64>) -> Meal {
        let mut meal = Meal::new("Meal", day().and_hms_opt(12, 0, 0).unwrap(), hi);
        meal.cost = cost;
        meal
    }

    #[test]
    fn test_calculate_sums_points_and_tiers() {
        let meals = vec![meal(85.0, Some(12.5)), meal(90.0, None), meal(70.0, Some(8.0))];
        let stats = DailyStats::calculate(&meals, day());

        assert_eq!(stats.total_points, 26);
        assert_eq!(stats.meal_count, 3);
        assert!((stats.total_spent - 20.5).abs() < 1e-9);
        assert_eq!(stats.tier_count(Tier::Excellent), 2);
        assert_eq!(stats.tier_count(Tier::Good), 1);
        assert_eq!(stats.tier_count(Tier::Poor), 0);
    }

    #[test]
    fn test_completion_bonus() {
        let two = DailyStats::calculate(&[meal(85.0, None), meal(85.0, None)], day());
        assert!(!two.has_completion_bonus());
        assert_eq!(two.final_points(), 20);

        let three = DailyStats::calculate(
            &[meal(85.0, None), meal(85.0, None), meal(20.0, None)],
            day(),
        );
        assert!(three.has_completion_bonus());
        assert_eq!(three.total_points, 17);
        assert_eq!(three.final_points(), 19);
    }

    #[test]
    fn test_tier_counts_json_uses_string_keys() {
        let stats = DailyStats::calculate(&[meal(40.0, None)], day());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["tierCounts"]["needsImprovement"], 1);

        let back: DailyStats = serde_json::from_value(json).unwrap();
        assert_eq!(back.tier_count(Tier::NeedsImprovement), 1);
    }
}
