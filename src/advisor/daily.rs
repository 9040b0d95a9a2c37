use tracing::debug;

use crate::advisor::catalog;
use crate::advisor::patterns::analyze_nutritional_patterns;
use crate::advisor::picker::Picker;
use crate::models::{AdvisorMessage, DailyStats, Meal, MessageType};
use crate::scoring::{LONG_STREAK_DAYS, LOW_BUDGET_RATIO, SHORT_STREAK_DAYS, STRONG_DAY_POINTS};

/// Everything the daily message depends on. The caller owns the data.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyContext<'a> {
    pub today_meals: &'a [Meal],
    /// Absent when nothing was logged yesterday.
    pub yesterday_stats: Option<&'a DailyStats>,
    pub today_stats: Option<&'a DailyStats>,
    pub current_streak: u32,
    pub daily_budget: Option<f64>,
}

impl<'a> DailyContext<'a> {
    pub fn new(today_meals: &'a [Meal]) -> Self {
        Self {
            today_meals,
            ..Self::default()
        }
    }

    pub fn with_yesterday(mut self, stats: Option<&'a DailyStats>) -> Self {
        self.yesterday_stats = stats;
        self
    }

    pub fn with_today(mut self, stats: Option<&'a DailyStats>) -> Self {
        self.today_stats = stats;
        self
    }

    pub fn with_streak(mut self, streak: u32) -> Self {
        self.current_streak = streak;
        self
    }

    pub fn with_budget(mut self, budget: Option<f64>) -> Self {
        self.daily_budget = budget;
        self
    }
}

/// A rule in the daily-message cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyRule {
    LongStreak,
    ShortStreak,
    StrongYesterday,
    NoMealsYet,
    OneMeal,
    TwoMeals,
    NutritionInsight,
    Budget,
    /// Always matches.
    Default,
}

/// Rules in priority order. The first one that matches wins.
pub const DAILY_RULES: [DailyRule; 9] = [
    DailyRule::LongStreak,
    DailyRule::ShortStreak,
    DailyRule::StrongYesterday,
    DailyRule::NoMealsYet,
    DailyRule::OneMeal,
    DailyRule::TwoMeals,
    DailyRule::NutritionInsight,
    DailyRule::Budget,
    DailyRule::Default,
];

impl DailyRule {
    /// Produce this rule's message if its condition holds.
    pub fn evaluate(
        self,
        ctx: &DailyContext<'_>,
        picker: &mut impl Picker,
    ) -> Option<AdvisorMessage> {
        match self {
            DailyRule::LongStreak => (ctx.current_streak >= LONG_STREAK_DAYS).then(|| {
                AdvisorMessage::new(
                    catalog::long_streak(ctx.current_streak),
                    MessageType::Celebration,
                    "🎉",
                )
            }),

            DailyRule::ShortStreak => (ctx.current_streak >= SHORT_STREAK_DAYS).then(|| {
                AdvisorMessage::new(
                    catalog::short_streak(ctx.current_streak),
                    MessageType::Celebration,
                    "✨",
                )
            }),

            DailyRule::StrongYesterday => ctx
                .yesterday_stats
                .map(DailyStats::final_points)
                .filter(|points| *points >= STRONG_DAY_POINTS)
                .map(|points| {
                    AdvisorMessage::new(
                        catalog::strong_yesterday(points),
                        MessageType::Encouragement,
                        "👏",
                    )
                }),

            DailyRule::NoMealsYet => ctx.today_meals.is_empty().then(|| {
                AdvisorMessage::new(
                    picker.pick(catalog::GREETINGS),
                    MessageType::Suggestion,
                    "☀️",
                )
            }),

            DailyRule::OneMeal => (ctx.today_meals.len() == 1).then(|| {
                AdvisorMessage::new(catalog::ONE_MEAL_LOGGED, MessageType::Encouragement, "💪")
            }),

            DailyRule::TwoMeals => (ctx.today_meals.len() == 2).then(|| {
                AdvisorMessage::new(catalog::TWO_MEALS_LOGGED, MessageType::Encouragement, "🎯")
            }),

            DailyRule::NutritionInsight => {
                analyze_nutritional_patterns(ctx.today_meals).into_iter().next()
            }

            DailyRule::Budget => budget_message(ctx.daily_budget?, ctx.today_stats?),

            DailyRule::Default => Some(AdvisorMessage::new(
                picker.pick(catalog::DEFAULT_ENCOURAGEMENTS),
                MessageType::Encouragement,
                "🌟",
            )),
        }
    }
}

fn budget_message(budget: f64, today: &DailyStats) -> Option<AdvisorMessage> {
    let remaining = budget - today.total_spent;
    if remaining < 0.0 {
        Some(AdvisorMessage::new(
            catalog::over_budget(remaining.abs()),
            MessageType::Insight,
            "💰",
        ))
    } else if remaining < budget * LOW_BUDGET_RATIO {
        Some(AdvisorMessage::new(
            catalog::budget_left(remaining),
            MessageType::Insight,
            "💰",
        ))
    } else {
        None
    }
}

/// Run the cascade and report which rule produced the message.
pub fn evaluate_daily(
    ctx: &DailyContext<'_>,
    picker: &mut impl Picker,
) -> (DailyRule, AdvisorMessage) {
    for rule in DAILY_RULES {
        if let Some(message) = rule.evaluate(ctx, picker) {
            debug!(?rule, kind = message.kind.label(), "daily advisor rule selected");
            return (rule, message);
        }
    }

    // DailyRule::Default always matches; kept total for the type checker.
    let message = AdvisorMessage::new(
        picker.pick(catalog::DEFAULT_ENCOURAGEMENTS),
        MessageType::Encouragement,
        "🌟",
    );
    (DailyRule::Default, message)
}

/// Select the one coaching message to show today.
pub fn generate_daily_message(ctx: &DailyContext<'_>, picker: &mut impl Picker) -> AdvisorMessage {
    evaluate_daily(ctx, picker).1
}
