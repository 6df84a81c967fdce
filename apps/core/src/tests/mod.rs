//! Test Module
//!
//! Test suite for the EmotionChat backend.
//!
//! ## Test Categories
//! - `sentiment_tests`: analyzer properties and backend selection
//! - `database_tests`: user and message persistence
//! - `chat_tests`: message ingestion and standalone analysis
//! - `api_tests`: HTTP routes end to end


use crate::database;
use crate::sentiment::{AnalysisResult, SentimentAnalyzer};
use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::{tempdir, TempDir};

/// Create a migrated database in a temporary directory.
///
/// The directory is returned so it outlives the pool.
pub async fn create_test_pool() -> (SqlitePool, TempDir) {
    let dir = tempdir().expect("Failed to create temp dir");
    let db_path = dir.path().join("test.sqlite");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let pool = database::init_db(&db_url)
        .await
        .expect("Failed to create test pool");

    (pool, dir)
}

/// Analyzer that returns a fixed result and counts calls
pub struct MockAnalyzer {
    pub result: AnalysisResult,
    pub calls: AtomicUsize,
}

impl MockAnalyzer {
    pub fn new(result: AnalysisResult) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SentimentAnalyzer for MockAnalyzer {
    async fn analyze(&self, _text: &str) -> AnalysisResult {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
    }
}
