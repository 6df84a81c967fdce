//! Runtime configuration loaded from the environment (and `.env` if present).

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

use crate::error::AppError;
use crate::sentiment::remote::{DEFAULT_REMOTE_TIMEOUT, DEFAULT_REMOTE_URL};

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://emotionchat.db?mode=rwc";

/// Which sentiment backend to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    /// Local keyword heuristic
    Lexical,
    /// HTTP model service
    Remote,
}

impl FromStr for AnalyzerKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lexical" | "local" | "simple" => Ok(AnalyzerKind::Lexical),
            "remote" | "http" => Ok(AnalyzerKind::Remote),
            other => Err(AppError::Config(format!(
                "Unknown SENTIMENT_BACKEND '{}', expected 'lexical' or 'remote'",
                other
            ))),
        }
    }
}

/// Sentiment backend settings
#[derive(Debug, Clone)]
pub struct SentimentConfig {
    pub kind: AnalyzerKind,
    pub remote_url: Url,
    pub remote_timeout: Duration,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            kind: AnalyzerKind::Lexical,
            remote_url: Url::parse(DEFAULT_REMOTE_URL).expect("default remote URL is valid"),
            remote_timeout: DEFAULT_REMOTE_TIMEOUT,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,
    /// sqlx SQLite connection URL
    pub database_url: String,
    pub sentiment: SentimentConfig,
}

impl AppConfig {
    /// Read configuration from environment variables.
    ///
    /// * `EMOTIONCHAT_BIND` - listen address (default `127.0.0.1:5000`)
    /// * `DATABASE_URL` - SQLite URL (default `sqlite://emotionchat.db?mode=rwc`)
    /// * `SENTIMENT_BACKEND` - `lexical` or `remote` (default `lexical`)
    /// * `SENTIMENT_REMOTE_URL` - model service endpoint
    /// * `SENTIMENT_REMOTE_TIMEOUT_SECS` - request timeout, at least 1
    pub fn from_env() -> Result<Self, AppError> {
        let bind_addr = env::var("EMOTIONCHAT_BIND")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()?;

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        if database_url.trim().is_empty() {
            return Err(AppError::Config("DATABASE_URL is empty".to_string()));
        }

        let kind = match env::var("SENTIMENT_BACKEND") {
            Ok(value) => value.parse::<AnalyzerKind>()?,
            Err(_) => AnalyzerKind::Lexical,
        };

        let remote_url = match env::var("SENTIMENT_REMOTE_URL") {
            Ok(value) => Url::parse(&value)
                .map_err(|e| AppError::Config(format!("Invalid SENTIMENT_REMOTE_URL: {}", e)))?,
            Err(_) => SentimentConfig::default().remote_url,
        };

        let remote_timeout = match env::var("SENTIMENT_REMOTE_TIMEOUT_SECS") {
            Ok(value) => {
                let secs = value.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("Invalid SENTIMENT_REMOTE_TIMEOUT_SECS: {}", e))
                })?;
                if secs == 0 {
                    return Err(AppError::Config(
                        "SENTIMENT_REMOTE_TIMEOUT_SECS must be at least 1".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_REMOTE_TIMEOUT,
        };

        Ok(Self {
            bind_addr,
            database_url,
            sentiment: SentimentConfig {
                kind,
                remote_url,
                remote_timeout,
            },
        })
    }
}
