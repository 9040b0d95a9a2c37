pub mod advisor;
pub mod analysis;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod scoring;
pub mod state;
pub mod telemetry;

pub use advisor::{
    analyze_nutritional_patterns, generate_daily_message, generate_meal_feedback,
    generate_weekly_summary, DailyContext, Picker,
};
pub use error::{Result, WelldayError};
pub use models::{AdvisorMessage, DailyStats, Meal, MessageType};
pub use scoring::{points, tier, Tier};
