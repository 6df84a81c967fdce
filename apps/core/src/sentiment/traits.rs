use crate::sentiment::result::AnalysisResult;
use async_trait::async_trait;

/// Defines the public interface for a sentiment analyzer.
///
/// This trait abstracts the specific implementation, allowing the local lexical
/// heuristic and a remote model service to be used interchangeably.
///
/// Implementations are total: `analyze` never fails and always returns a label
/// with a score in `[0.0, 1.0]`. Any internal or remote fault is reported as
/// [`AnalysisResult::neutral`].
#[async_trait]
pub trait SentimentAnalyzer: Send + Sync + 'static {
    /// Classifies the emotional tone of `text`.
    async fn analyze(&self, text: &str) -> AnalysisResult;
}
