//! Fixed message texts. Entries that take numbers are formatted at the
//! call site; everything picked at random lives in a slice here.

/// Shown when nothing has been logged yet today.
pub const GREETINGS: &[&str] = &[
    "Good morning! Start your day with a nutritious breakfast.",
    "Ready for a great day? Log your first meal to get started!",
    "New day, fresh start! What's on the menu today?",
];

/// Fallback when no other rule applies.
pub const DEFAULT_ENCOURAGEMENTS: &[&str] = &[
    "You're doing great! Keep making healthy choices.",
    "Every meal is a chance to nourish your body.",
    "Consistency is key. You've got this!",
];

pub const ONE_MEAL_LOGGED: &str =
    "Good start! Add 2 more meals today to earn your completion bonus.";

pub const TWO_MEALS_LOGGED: &str = "Almost there! One more meal to unlock your +2 bonus points.";

pub const ADD_PROTEIN: &str =
    "Consider adding a protein source to your next meal for better balance.";

pub const SODIUM_TREND: &str =
    "Sodium has been trending high today. Consider a lighter option for your next meal.";

pub const WHOLE_FOODS: &str = "Try incorporating more whole foods in your next meal.";

pub const EXCELLENT_DAY: &str = "You're crushing it today! Two excellent meals already. 🎉";

pub const ADD_FIBER: &str =
    "Add some fiber-rich foods like vegetables or whole grains to your next meal.";

// Per-meal feedback, one catalog per tier.

pub const EXCELLENT_FEEDBACK: &[&str] = &[
    "Excellent choice! This meal is perfectly balanced.",
    "Wow! This is a top-tier healthy meal. Great work!",
    "Perfect! This meal has everything your body needs.",
];

pub const GOOD_FEEDBACK: &[&str] = &[
    "Nice! This is a solid, healthy choice.",
    "Good pick! You're making progress toward your goals.",
    "Well done! This meal supports your health journey.",
];

pub const NEUTRAL_FEEDBACK: &[&str] = &[
    "Decent choice. Consider adding more vegetables or lean protein next time.",
    "Not bad! A side of greens would take this meal up a level.",
];

pub const NEEDS_IMPROVEMENT_FEEDBACK: &[&str] = &[
    "This meal could be better. Try swapping processed items for whole foods.",
    "Room to grow here. A lean protein or a vegetable side would help.",
];

pub const POOR_FEEDBACK: &[&str] = &[
    "Let's aim higher next time! Small swaps can make a big difference.",
    "Tomorrow's another chance. Try one whole-food swap at your next meal.",
];

pub const FULL_WEEK_STREAK: &str = "🔥 Maintained a full week streak! Incredible consistency.";

pub fn long_streak(days: u32) -> String {
    format!("🔥 Amazing! {} day streak! You're building incredible habits.", days)
}

pub fn short_streak(days: u32) -> String {
    format!("Great work! You're on a {} day streak. Keep it going!", days)
}

pub fn strong_yesterday(points: i32) -> String {
    format!("Great job yesterday! You earned {} points. You're on track for a strong day.", points)
}

pub fn over_budget(amount: f64) -> String {
    format!("You're ${:.2} over budget today. Try a cost-effective dinner!", amount)
}

pub fn budget_left(amount: f64) -> String {
    format!("Nice! You have ${:.2} left in your budget.", amount)
}

pub fn weekly_points(total: i32, average: f64) -> String {
    format!("You earned {} points this week (avg: {:.1}/day)", total, average)
}

pub fn weekly_meals(count: u32) -> String {
    format!("Logged {} meals this week", count)
}

pub fn weekly_excellent(count: u32) -> String {
    format!("{} excellent meals this week! 🥇", count)
}
