use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// Represents a chat participant.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Auto-incremented identifier.
    pub id: i64,
    /// Unique display name.
    pub username: String,
    /// Unix timestamp of when the user was created.
    pub created_at: i64,
}

/// Represents a stored chat message with its sentiment annotation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i64,
    /// The ID of the user who posted the message.
    pub user_id: i64,
    pub content: String,
    /// Sentiment label as stored ("Positive", "Neutral", "Negative").
    pub sentiment: String,
    /// Confidence of the sentiment label, between 0.0 and 1.0.
    pub confidence: f64,
    /// Unix timestamp of when the message was posted.
    pub timestamp: i64,
}

/// A message joined with its author, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub id: i64,
    pub username: String,
    pub content: String,
    pub sentiment: String,
    pub confidence: f64,
    pub timestamp: i64,
}

/// A user with activity statistics.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub created_at: i64,
    pub message_count: i64,
    /// Timestamp of the most recent message, if any.
    pub last_message_at: Option<i64>,
    /// Content of the most recent message, if any.
    pub last_message: Option<String>,
}

impl UserSummary {
    /// Summary for a user with no activity yet.
    pub fn empty(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            created_at: user.created_at,
            message_count: 0,
            last_message_at: None,
            last_message: None,
        }
    }
}

/// Payload for posting a new message.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMessageRequest {
    #[validate(length(min = 1, max = 50), custom(function = "not_blank"))]
    pub username: String,
    #[validate(length(min = 1, max = 1000), custom(function = "not_blank"))]
    pub content: String,
}

/// Payload for registering a user.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 50), custom(function = "not_blank"))]
    pub username: String,
}

/// Payload for the standalone analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeTextRequest {
    #[validate(custom(function = "not_blank"))]
    #[serde(default)]
    pub text: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_request_validation() {
        let valid = CreateMessageRequest {
            username: "alice".to_string(),
            content: "Hello".to_string(),
        };
        assert!(valid.validate().is_ok());

        let blank = CreateMessageRequest {
            username: "alice".to_string(),
            content: "   ".to_string(),
        };
        assert!(blank.validate().is_err());

        let too_long = CreateMessageRequest {
            username: "alice".to_string(),
            content: "a".repeat(1001),
        };
        assert!(too_long.validate().is_err());
    }

    #[test]
    fn test_user_request_validation() {
        let short = CreateUserRequest {
            username: "a".to_string(),
        };
        assert!(short.validate().is_err());

        let long = CreateUserRequest {
            username: "a".repeat(51),
        };
        assert!(long.validate().is_err());

        let ok = CreateUserRequest {
            username: "bob".to_string(),
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_summary_serializes_camel_case() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            created_at: 42,
        };
        let json = serde_json::to_value(UserSummary::empty(&user)).unwrap();
        assert_eq!(json["messageCount"], 0);
        assert_eq!(json["createdAt"], 42);
        assert!(json["lastMessage"].is_null());
    }
}
