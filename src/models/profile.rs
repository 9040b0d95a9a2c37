use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthGoal {
    Lose,
    #[default]
    Maintain,
    Gain,
}

impl HealthGoal {
    pub fn label(self) -> &'static str {
        match self {
            HealthGoal::Lose => "Lose Weight",
            HealthGoal::Maintain => "Maintain Weight",
            HealthGoal::Gain => "Gain Weight",
        }
    }
}

/// User settings that feed the advisor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub health_goal: HealthGoal,

    /// Daily food budget. Must be positive to be used.
    #[serde(default)]
    pub daily_budget: Option<f64>,
}

impl UserProfile {
    /// Name if set, otherwise the local part of the email.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => self.email.split('@').next().unwrap_or("User"),
        }
    }

    /// The budget, if one is set and positive.
    pub fn budget(&self) -> Option<f64> {
        self.daily_budget.filter(|b| *b > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back_to_email() {
        let json = r#"{"email": "demo@wellday.app", "dailyBudget": 30.0}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.display_name(), "demo");
        assert_eq!(profile.health_goal, HealthGoal::Maintain);
        assert_eq!(profile.budget(), Some(30.0));
    }

    #[test]
    fn test_non_positive_budget_ignored() {
        let profile = UserProfile {
            email: "a@b.c".to_string(),
            name: Some("Demo User".to_string()),
            health_goal: HealthGoal::Lose,
            daily_budget: Some(0.0),
        };
        assert_eq!(profile.display_name(), "Demo User");
        assert_eq!(profile.budget(), None);
    }
}
