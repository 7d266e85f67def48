use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Speaker of a chat turn. Serialized as `user` / `model`, the roles the model API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

/// One turn in the assistant conversation. The log of these is owned by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    /// The synthetic model turn that opens every chat log for a new roadmap.
    pub fn greeting(interest: &str) -> Self {
        Self::new(
            Role::Model,
            format!(
                "Hi! I've analyzed the path for {interest}. Ask me anything about these skills!"
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), r#""user""#);
        assert_eq!(serde_json::to_string(&Role::Model).unwrap(), r#""model""#);
        assert!(serde_json::from_str::<Role>(r#""assistant""#).is_err());
    }

    #[test]
    fn test_greeting_is_model_turn_naming_interest() {
        let greeting = ChatMessage::greeting("Swarm Drones");
        assert_eq!(greeting.role, Role::Model);
        assert!(greeting.text.contains("Swarm Drones"));
    }

    #[test]
    fn test_chat_message_deserializes_rfc3339_timestamp() {
        let json = r#"{"role":"user","text":"What is ROS?","timestamp":"2026-01-05T10:00:00Z"}"#;
        let message: ChatMessage = serde_json::from_str(json).unwrap();
        assert_eq!(message.role, Role::User);
        assert_eq!(message.text, "What is ROS?");
        assert_eq!(message.timestamp.to_rfc3339(), "2026-01-05T10:00:00+00:00");
    }
}
