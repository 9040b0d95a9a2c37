/// Lower bound (inclusive) of the Excellent band.
pub const EXCELLENT_THRESHOLD: f64 = 80.0;

/// Lower bound (inclusive) of the Good band.
pub const GOOD_THRESHOLD: f64 = 65.0;

/// Lower bound (inclusive) of the Neutral band.
pub const NEUTRAL_THRESHOLD: f64 = 50.0;

/// Lower bound (inclusive) of the Needs Improvement band. Anything below is Poor.
pub const NEEDS_IMPROVEMENT_THRESHOLD: f64 = 35.0;

pub const EXCELLENT_POINTS: i32 = 10;
pub const GOOD_POINTS: i32 = 6;
pub const NEUTRAL_POINTS: i32 = 3;
pub const NEEDS_IMPROVEMENT_POINTS: i32 = 0;
pub const POOR_POINTS: i32 = -3;

// ─────────────────────────────────────────────────────────────────────────────
// Daily completion and streaks
// ─────────────────────────────────────────────────────────────────────────────

/// Meals needed in one day to earn the completion bonus and count toward a streak.
pub const COMPLETION_MEAL_COUNT: u32 = 3;

/// Points added to a day's total once the completion bonus is earned.
pub const COMPLETION_BONUS_POINTS: i32 = 2;

/// Upper bound on the streak walk.
pub const MAX_STREAK_DAYS: u32 = 365;

// ─────────────────────────────────────────────────────────────────────────────
// Advisor triggers
// ─────────────────────────────────────────────────────────────────────────────

pub const LONG_STREAK_DAYS: u32 = 7;
pub const SHORT_STREAK_DAYS: u32 = 3;

/// Yesterday's final points at or above this earn a shout-out.
pub const STRONG_DAY_POINTS: i32 = 30;

/// Remaining budget below this share of the daily budget triggers a heads-up.
pub const LOW_BUDGET_RATIO: f64 = 0.2;

/// Number of matching meals that makes a tag a same-day trend.
pub const PATTERN_MIN_MEALS: usize = 2;

/// Days covered by the weekly summary.
pub const WEEK_DAYS: u32 = 7;
