//! Output types shared by every sentiment analyzer.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Confidence returned whenever no signal is found or a fault is recovered.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

/// Emotional tone of a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    /// Returns the label used in storage and on the wire
    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }

    /// Lenient mapping used for labels coming from a remote model.
    ///
    /// Anything that is not recognisably positive or negative is Neutral.
    pub fn from_model_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "positive" => Sentiment::Positive,
            "negative" => Sentiment::Negative,
            _ => Sentiment::Neutral,
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Positive" => Ok(Sentiment::Positive),
            "Neutral" => Ok(Sentiment::Neutral),
            "Negative" => Ok(Sentiment::Negative),
            other => Err(format!("unknown sentiment label: {}", other)),
        }
    }
}

/// Result of a sentiment analysis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Detected tone
    pub label: Sentiment,
    /// Confidence score (0.0 - 1.0)
    pub score: f64,
}

impl AnalysisResult {
    pub fn new(label: Sentiment, score: f64) -> Self {
        Self { label, score }
    }

    /// The safe default every analyzer falls back to.
    pub fn neutral() -> Self {
        Self {
            label: Sentiment::Neutral,
            score: NEUTRAL_CONFIDENCE,
        }
    }
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self::neutral()
    }
}
