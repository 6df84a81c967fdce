//! # Sentiment Module
//!
//! Annotates text with an emotional tone (Positive / Neutral / Negative) and a
//! confidence score.
//!
//! ## Components
//! - `lexicon`: word lists, weights, negations and intensifiers
//! - `lexical`: deterministic keyword scoring (default backend)
//! - `remote`: HTTP model service backend with neutral fallback
//! - `result`: output types
//! - `traits`: the `SentimentAnalyzer` capability both backends implement

pub mod lexical;
pub mod lexicon;
pub mod remote;
pub mod result;
pub mod traits;

use std::sync::Arc;
use tracing::info;

use crate::config::{AnalyzerKind, SentimentConfig};
use crate::error::AppError;

pub use lexical::LexicalAnalyzer;
pub use lexicon::SentimentLexicon;
pub use remote::RemoteAnalyzer;
pub use result::{AnalysisResult, Sentiment};
pub use traits::SentimentAnalyzer;

/// Build the analyzer selected by configuration.
///
/// The lexicon is constructed here, once, and shared with the analyzer.
pub fn build_analyzer(config: &SentimentConfig) -> Result<Arc<dyn SentimentAnalyzer>, AppError> {
    match config.kind {
        AnalyzerKind::Lexical => {
            info!("Using lexical sentiment analyzer");
            let lexicon = Arc::new(SentimentLexicon::default());
            Ok(Arc::new(LexicalAnalyzer::new(lexicon)))
        }
        AnalyzerKind::Remote => {
            info!(
                "Using remote sentiment analyzer at {} (timeout {:?})",
                config.remote_url, config.remote_timeout
            );
            let analyzer = RemoteAnalyzer::new(config.remote_url.as_str(), config.remote_timeout)?;
            Ok(Arc::new(analyzer))
        }
    }
}
