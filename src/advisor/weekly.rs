use crate::advisor::catalog;
use crate::models::DailyStats;
use crate::scoring::{Tier, LONG_STREAK_DAYS};

/// Summary lines for a run of days, in display order.
pub fn generate_weekly_summary(week_stats: &[DailyStats], current_streak: u32) -> Vec<String> {
    let mut lines = Vec::new();

    let total_points: i32 = week_stats.iter().map(DailyStats::final_points).sum();
    let average = if week_stats.is_empty() {
        0.0
    } else {
        total_points as f64 / week_stats.len() as f64
    };
    lines.push(catalog::weekly_points(total_points, average));

    if current_streak >= LONG_STREAK_DAYS {
        lines.push(catalog::FULL_WEEK_STREAK.to_string());
    }

    let total_meals: u32 = week_stats.iter().map(|s| s.meal_count).sum();
    lines.push(catalog::weekly_meals(total_meals));

    let excellent: u32 = week_stats
        .iter()
        .map(|s| s.tier_count(Tier::Excellent))
        .sum();
    if excellent > 0 {
        lines.push(catalog::weekly_excellent(excellent));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn stats(day: u32, total_points: i32, meal_count: u32, excellent: u32) -> DailyStats {
        let mut s = DailyStats::new(NaiveDate::from_ymd_opt(2026, 10, day).unwrap());
        s.total_points = total_points;
        s.meal_count = meal_count;
        if excellent > 0 {
            s.tier_counts.insert(Tier::Excellent, excellent);
        }
        s
    }

    #[test]
    fn test_empty_week() {
        let lines = generate_weekly_summary(&[], 0);
        assert_eq!(
            lines,
            vec![
                "You earned 0 points this week (avg: 0.0/day)".to_string(),
                "Logged 0 meals this week".to_string(),
            ]
        );
    }

    #[test]
    fn test_full_week_with_streak() {
        let week: Vec<DailyStats> = (8..=14).map(|d| stats(d, 20, 3, 1)).collect();
        let lines = generate_weekly_summary(&week, 7);

        assert_eq!(lines.len(), 4);
        // 7 days x (20 + 2 bonus)
        assert_eq!(lines[0], "You earned 154 points this week (avg: 22.0/day)");
        assert_eq!(lines[1], catalog::FULL_WEEK_STREAK);
        assert_eq!(lines[2], "Logged 21 meals this week");
        assert_eq!(lines[3], "7 excellent meals this week! 🥇");
    }

    #[test]
    fn test_average_rounds_to_one_decimal() {
        let week = vec![stats(12, 10, 1, 0), stats(13, 5, 2, 0), stats(14, 0, 1, 0)];
        let lines = generate_weekly_summary(&week, 2);
        assert_eq!(lines[0], "You earned 15 points this week (avg: 5.0/day)");

        let week = vec![stats(13, 10, 1, 0), stats(14, 5, 1, 0), stats(12, 6, 1, 0)];
        let lines = generate_weekly_summary(&week, 2);
        assert_eq!(lines[0], "You earned 21 points this week (avg: 7.0/day)");

        let week = vec![stats(13, 10, 1, 0), stats(14, 1, 1, 0)];
        let lines = generate_weekly_summary(&week, 0);
        assert_eq!(lines[0], "You earned 11 points this week (avg: 5.5/day)");
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_repeating_average_is_rounded() {
        // 10 / 3 = 3.333...
        let week = vec![stats(12, 10, 1, 0), stats(13, 0, 1, 0), stats(14, 0, 1, 0)];
        let lines = generate_weekly_summary(&week, 0);
        assert_eq!(lines[0], "You earned 10 points this week (avg: 3.3/day)");

        // 20 / 3 = 6.666...
        let week = vec![stats(12, 10, 1, 0), stats(13, 10, 1, 0), stats(14, 0, 1, 0)];
        let lines = generate_weekly_summary(&week, 0);
        assert_eq!(lines[0], "You earned 20 points this week (avg: 6.7/day)");
    }
}
