use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::advisor::DailyContext;
use crate::models::{DailyStats, Meal};
use crate::scoring::{COMPLETION_MEAL_COUNT, MAX_STREAK_DAYS, WEEK_DAYS};

/// Holds the meal log and a per-day stats cache.
pub struct MealHistory {
    /// All meals, oldest first.
    meals: Vec<Meal>,
    /// Stats for every day with at least one meal.
    stats: BTreeMap<NaiveDate, DailyStats>,
}

impl MealHistory {
    /// Create a history from a list of meals in any order.
    pub fn new(mut meals: Vec<Meal>) -> Self {
        meals.sort_by_key(|m| m.timestamp);
        let mut history = Self {
            meals,
            stats: BTreeMap::new(),
        };
        history.rebuild_stats();
        history
    }

    fn rebuild_stats(&mut self) {
        self.stats.clear();
        let mut by_day: BTreeMap<NaiveDate, Vec<Meal>> = BTreeMap::new();
        for meal in &self.meals {
            by_day.entry(meal.date()).or_default().push(meal.clone());
        }
        for (date, meals) in by_day {
            self.stats.insert(date, DailyStats::calculate(&meals, date));
        }
    }

    fn refresh_day(&mut self, date: NaiveDate) {
        let meals = self.meals_for(date);
        if meals.is_empty() {
            self.stats.remove(&date);
        } else {
            self.stats.insert(date, DailyStats::calculate(&meals, date));
        }
    }

    /// Record a meal and update its day's stats.
    pub fn add_meal(&mut self, meal: Meal) {
        let date = meal.date();
        let at = self.meals.partition_point(|m| m.timestamp <= meal.timestamp);
        self.meals.insert(at, meal);
        self.refresh_day(date);
    }

    /// Remove the `position`-th meal (zero-based, chronological) logged on `date`.
    pub fn remove_meal(&mut self, date: NaiveDate, position: usize) -> Option<Meal> {
        let index = self
            .meals
            .iter()
            .enumerate()
            .filter(|(_, m)| m.date() == date)
            .nth(position)
            .map(|(i, _)| i)?;
        let meal = self.meals.remove(index);
        self.refresh_day(date);
        Some(meal)
    }

    /// Meals logged on `date`, in chronological order.
    pub fn meals_for(&self, date: NaiveDate) -> Vec<Meal> {
        self.meals
            .iter()
            .filter(|m| m.date() == date)
            .cloned()
            .collect()
    }

    pub fn today_meals(&self, today: NaiveDate) -> Vec<Meal> {
        self.meals_for(today)
    }

    /// Most recently logged meal.
    pub fn latest_meal(&self) -> Option<&Meal> {
        self.meals.last()
    }

    /// Stats for `date`; `None` when nothing was logged that day.
    pub fn stats_for(&self, date: NaiveDate) -> Option<&DailyStats> {
        self.stats.get(&date)
    }

    pub fn today_stats(&self, today: NaiveDate) -> Option<&DailyStats> {
        self.stats_for(today)
    }

    pub fn yesterday_stats(&self, today: NaiveDate) -> Option<&DailyStats> {
        today.pred_opt().and_then(|d| self.stats_for(d))
    }

    /// Stats for the seven calendar days ending at `today`, oldest first.
    /// Days without meals are skipped.
    pub fn last_7_days_stats(&self, today: NaiveDate) -> Vec<&DailyStats> {
        (0..WEEK_DAYS)
            .rev()
            .filter_map(|back| today.checked_sub_days(Days::new(back as u64)))
            .filter_map(|date| self.stats_for(date))
            .collect()
    }

    /// Consecutive completed days ending at `today`.
    ///
    /// A day counts when it has at least three meals. An incomplete or
    /// empty `today` ends the streak at zero.
    pub fn current_streak(&self, today: NaiveDate) -> u32 {
        let mut streak = 0;
        let mut day = today;

        while streak < MAX_STREAK_DAYS {
            match self.stats_for(day) {
                Some(stats) if stats.meal_count >= COMPLETION_MEAL_COUNT => {
                    streak += 1;
                    match day.pred_opt() {
                        Some(prev) => day = prev,
                        None => break,
                    }
                }
                _ => break,
            }
        }

        streak
    }

    /// Longest run of consecutive completed days anywhere in the log.
    pub fn longest_streak(&self) -> u32 {
        let mut longest = 0;
        let mut run = 0;
        let mut previous: Option<NaiveDate> = None;

        for (date, stats) in &self.stats {
            if stats.meal_count < COMPLETION_MEAL_COUNT {
                run = 0;
                previous = None;
                continue;
            }
            run = match previous {
                Some(p) if p.succ_opt() == Some(*date) => run + 1,
                _ => 1,
            };
            longest = longest.max(run);
            previous = Some(*date);
        }

        longest.min(MAX_STREAK_DAYS)
    }

    /// Advisor input for `today`, borrowing from this history.
    ///
    /// `today_meals` must come from [`MealHistory::today_meals`] for the same day.
    pub fn daily_context<'a>(
        &'a self,
        today: NaiveDate,
        today_meals: &'a [Meal],
        daily_budget: Option<f64>,
    ) -> DailyContext<'a> {
        DailyContext::new(today_meals)
            .with_yesterday(self.yesterday_stats(today))
            .with_today(self.today_stats(today))
            .with_streak(self.current_streak(today))
            .with_budget(daily_budget)
    }

    /// All meals, oldest first.
    pub fn meals(&self) -> &[Meal] {
        &self.meals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, day).unwrap()
    }

    fn meal(day: u32, hour: u32, hi: f64) -> Meal {
        Meal::new("Meal", date(day).and_hms_opt(hour, 0, 0).unwrap(), hi)
    }

    /// Three meals a day on each of `days`.
    fn full_days(days: &[u32]) -> Vec<Meal> {
        days.iter()
            .flat_map(|&d| [meal(d, 8, 70.0), meal(d, 12, 70.0), meal(d, 19, 70.0)])
            .collect()
    }

    #[test]
    fn test_meals_sorted_and_grouped() {
        let history = MealHistory::new(vec![
            meal(14, 19, 85.0),
            meal(13, 8, 50.0),
            meal(14, 8, 30.0),
        ]);

        let today = history.meals_for(date(14));
        assert_eq!(today.len(), 2);
        assert!(today[0].timestamp < today[1].timestamp);
        assert_eq!(history.stats_for(date(14)).unwrap().total_points, 7);
        assert_eq!(history.yesterday_stats(date(14)).unwrap().meal_count, 1);
        assert!(history.stats_for(date(12)).is_none());
        assert_eq!(history.latest_meal().unwrap().health_index, 85.0);
    }

    #[test]
    fn test_add_and_remove_refresh_stats() {
        let mut history = MealHistory::new(vec![meal(13, 9, 40.0), meal(14, 8, 70.0)]);
        history.add_meal(meal(14, 12, 90.0));
        assert_eq!(history.stats_for(date(14)).unwrap().total_points, 16);

        // Positions count within the day, not the whole log
        let removed = history.remove_meal(date(14), 0).unwrap();
        assert_eq!(removed.health_index, 70.0);
        assert_eq!(history.stats_for(date(14)).unwrap().total_points, 10);
        assert!(history.remove_meal(date(14), 1).is_none());

        history.remove_meal(date(14), 0);
        assert!(history.stats_for(date(14)).is_none());
        assert!(history.remove_meal(date(14), 0).is_none());
        assert_eq!(history.meals().len(), 1);
        assert_eq!(history.stats_for(date(13)).unwrap().meal_count, 1);
    }

    #[test]
    fn test_current_streak_walks_back() {
        let history = MealHistory::new(full_days(&[10, 11, 12, 13, 14]));
        assert_eq!(history.current_streak(date(14)), 5);
        assert_eq!(history.current_streak(date(12)), 3);
        // Nothing logged on the 15th yet
        assert_eq!(history.current_streak(date(15)), 0);
    }

    #[test]
    fn test_streak_broken_by_gap_or_short_day() {
        let mut meals = full_days(&[10, 12, 13, 14]);
        meals.push(meal(11, 8, 70.0));
        let history = MealHistory::new(meals);
        assert_eq!(history.current_streak(date(14)), 3);
        assert_eq!(history.longest_streak(), 3);
    }

    #[test]
    fn test_streak_capped_at_one_year() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let meals: Vec<Meal> = (0..400u64)
            .map(|n| start.checked_add_days(Days::new(n)).unwrap())
            .flat_map(|d| {
                [8, 12, 19].map(|h| Meal::new("Meal", d.and_hms_opt(h, 0, 0).unwrap(), 70.0))
            })
            .collect();
        let history = MealHistory::new(meals);
        let last = start.checked_add_days(Days::new(399)).unwrap();

        assert_eq!(history.current_streak(last), MAX_STREAK_DAYS);
        assert_eq!(history.current_streak(last), 365);
        assert_eq!(history.longest_streak(), 365);
        // 100 days in, the cap does not apply yet
        let early = start.checked_add_days(Days::new(99)).unwrap();
        assert_eq!(history.current_streak(early), 100);
    }

    #[test]
    fn test_last_7_days_chronological() {
        let history = MealHistory::new(vec![
            meal(14, 8, 70.0),
            meal(7, 8, 70.0),
            meal(8, 8, 70.0),
            meal(11, 8, 70.0),
        ]);
        let week = history.last_7_days_stats(date(14));
        let days: Vec<NaiveDate> = week.iter().map(|s| s.date).collect();
        // The 7th is outside the window
        assert_eq!(days, vec![date(8), date(11), date(14)]);
    }

    #[test]
    fn test_daily_context() {
        let history = MealHistory::new(full_days(&[13, 14]));
        let today = history.today_meals(date(14));
        let ctx = history.daily_context(date(14), &today, Some(25.0));

        assert_eq!(ctx.today_meals.len(), 3);
        assert_eq!(ctx.current_streak, 2);
        assert_eq!(ctx.yesterday_stats.unwrap().date, date(13));
        assert_eq!(ctx.today_stats.unwrap().meal_count, 3);
        assert_eq!(ctx.daily_budget, Some(25.0));
    }
}
