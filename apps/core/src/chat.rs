//! Chat service: user registration, message ingestion with sentiment, and the
//! standalone analysis operation.

use sqlx::sqlite::SqlitePool;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::database;
use crate::error::AppError;
use crate::models::{
    AnalyzeTextRequest, CreateMessageRequest, CreateUserRequest, MessageResponse, User,
    UserSummary,
};
use crate::sentiment::{AnalysisResult, SentimentAnalyzer};

/// Coordinates persistence and sentiment analysis.
#[derive(Clone)]
pub struct ChatService {
    pool: SqlitePool,
    analyzer: Arc<dyn SentimentAnalyzer>,
}

impl ChatService {
    pub fn new(pool: SqlitePool, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        Self { pool, analyzer }
    }

    /// Posts a message, annotating it with sentiment before it is stored.
    ///
    /// The author is created on first use. The analyzer never fails, so every
    /// stored message carries a label and a confidence.
    pub async fn create_message(
        &self,
        request: CreateMessageRequest,
    ) -> Result<MessageResponse, AppError> {
        request.validate()?;

        let (user, created) = database::find_or_create_user(&self.pool, &request.username).await?;
        if created {
            info!("Created user {} ({})", user.username, user.id);
        }

        let analysis = self.analyzer.analyze(&request.content).await;
        let message = database::add_message(&self.pool, user.id, &request.content, &analysis).await?;

        info!(
            "Stored message {} from {}: {} ({:.2})",
            message.id, user.username, message.sentiment, message.confidence
        );

        Ok(MessageResponse {
            id: message.id,
            username: user.username,
            content: message.content,
            sentiment: message.sentiment,
            confidence: message.confidence,
            timestamp: message.timestamp,
        })
    }

    pub async fn list_messages(&self) -> Result<Vec<MessageResponse>, AppError> {
        Ok(database::get_all_messages(&self.pool).await?)
    }

    /// Messages of one user; unknown users simply have none.
    pub async fn list_user_messages(&self, user_id: i64) -> Result<Vec<MessageResponse>, AppError> {
        Ok(database::get_user_messages(&self.pool, user_id).await?)
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AppError> {
        Ok(database::get_user_summaries(&self.pool).await?)
    }

    /// Registers a user, or returns the existing one.
    ///
    /// The flag is `true` when the user was created by this call.
    pub async fn create_user(&self, request: CreateUserRequest) -> Result<(User, bool), AppError> {
        request.validate()?;
        Ok(database::find_or_create_user(&self.pool, &request.username).await?)
    }

    /// Analyzes free text without storing anything.
    ///
    /// Blank text is rejected before the analyzer is called.
    pub async fn analyze_text(&self, request: AnalyzeTextRequest) -> Result<AnalysisResult, AppError> {
        if request.validate().is_err() {
            return Err(AppError::Validation(
                "Text to analyze cannot be empty".to_string(),
            ));
        }
        Ok(self.analyzer.analyze(&request.text).await)
    }
}
