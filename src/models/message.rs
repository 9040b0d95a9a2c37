use serde::Serialize;

/// Category of an advisor message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Encouragement,
    Suggestion,
    Celebration,
    Insight,
}

impl MessageType {
    pub fn label(self) -> &'static str {
        match self {
            MessageType::Encouragement => "encouragement",
            MessageType::Suggestion => "suggestion",
            MessageType::Celebration => "celebration",
            MessageType::Insight => "insight",
        }
    }
}

/// One coaching message chosen by the advisor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdvisorMessage {
    pub message: String,
    pub kind: MessageType,
    pub icon: &'static str,
}

impl AdvisorMessage {
    pub fn new(message: impl Into<String>, kind: MessageType, icon: &'static str) -> Self {
        Self {
            message: message.into(),
            kind,
            icon,
        }
    }
}
