pub mod catalog;
pub mod daily;
pub mod feedback;
pub mod patterns;
pub mod picker;
pub mod weekly;

pub use daily::{evaluate_daily, generate_daily_message, DailyContext, DailyRule, DAILY_RULES};
pub use feedback::{feedback_catalog, generate_meal_feedback};
pub use patterns::analyze_nutritional_patterns;
pub use picker::{FixedPick, Picker, RngPicker};
pub use weekly::generate_weekly_summary;
