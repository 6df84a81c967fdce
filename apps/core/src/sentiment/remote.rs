//! Remote sentiment analyzer.
//!
//! Delegates classification to an HTTP model service. Every failure (status,
//! payload, timeout, network) degrades to the neutral default so callers never
//! observe an error.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info, warn};

use super::result::{AnalysisResult, Sentiment};
use super::traits::SentimentAnalyzer;
use crate::error::AppError;

pub const DEFAULT_REMOTE_URL: &str = "http://localhost:8000/analyze";
pub const DEFAULT_REMOTE_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// Response body of the model service. Field names are matched in either case.
#[derive(Debug, Deserialize)]
struct RemoteResult {
    #[serde(default, alias = "Label")]
    label: Option<String>,
    #[serde(default, alias = "Score")]
    score: f64,
}

/// Sentiment analyzer backed by a remote model service
#[derive(Debug, Clone)]
pub struct RemoteAnalyzer {
    client: Client,
    endpoint: String,
}

impl RemoteAnalyzer {
    /// Build an analyzer posting to `endpoint` with the given request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    async fn request(&self, text: &str) -> Result<AnalysisResult, AppError> {
        info!("Requesting remote sentiment analysis: {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Internal(format!(
                "Remote analysis failed with status {}",
                status
            )));
        }

        let body = response.text().await?;
        let parsed: RemoteResult = serde_json::from_str(&body)?;

        let label = match parsed.label.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => label.to_string(),
            _ => {
                return Err(AppError::Validation(
                    "Remote analysis returned an empty label".to_string(),
                ))
            }
        };

        Ok(AnalysisResult::new(
            Sentiment::from_model_label(&label),
            parsed.score.clamp(0.0, 1.0),
        ))
    }
}

#[async_trait]
impl SentimentAnalyzer for RemoteAnalyzer {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        match self.request(text).await {
            Ok(result) => {
                info!("Remote sentiment: {} with score {:.3}", result.label, result.score);
                result
            }
            Err(AppError::Validation(reason)) => {
                warn!("Unusable remote sentiment payload: {}", reason);
                AnalysisResult::neutral()
            }
            Err(e) => {
                error!("Remote sentiment analysis failed: {}", e);
                AnalysisResult::neutral()
            }
        }
    }
}
