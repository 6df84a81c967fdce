//! Lexical sentiment scoring.
//!
//! Deterministic keyword heuristic: weighted term accumulation, negation
//! inversion, a single intensifier, comparative bonuses, question dampening
//! and two hard overrides. No model, no I/O.
//!
//! Matching is substring based on the lowercased text, so "well" also fires
//! inside "farewell". Scores and confidence are `f64`.

use async_trait::async_trait;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error};

use super::lexicon::{Intensifier, SentimentLexicon};
use super::result::{AnalysisResult, Sentiment, NEUTRAL_CONFIDENCE};
use super::traits::SentimentAnalyzer;

const STRONG_NEGATION_FACTOR: f64 = 1.3;
const COMPARATIVE_BONUS: f64 = 1.5;

/// Questions are only dampened when both scores stay below this
const QUESTION_SIGNAL_THRESHOLD: f64 = 2.0;
const QUESTION_DAMPENING: f64 = 0.5;

const BASE_CONFIDENCE: f64 = 0.6;
const MAX_CONFIDENCE: f64 = 0.95;
const INTENSITY_RATE: f64 = 0.05;
const MAX_INTENSITY_BONUS: f64 = 0.3;
const DIFFERENCE_RATE: f64 = 0.1;
const MAX_DIFFERENCE_BONUS: f64 = 0.2;
const TIE_RATE: f64 = 0.02;
const MAX_TIE_BONUS: f64 = 0.3;

const WELL_TERM: &str = "well";
const WELL_CONFIDENCE: f64 = 0.7;
const WORSE_OVERRIDE_TERMS: &[&str] = &["worse", "worst"];
const WORSE_MIN_CONFIDENCE: f64 = 0.8;

/// Intermediate state of one scoring pass, for debugging and tests
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct ScoreBreakdown {
    /// Positive terms found, in scan order (duplicates repeated)
    pub positive_matches: Vec<String>,
    /// Negative terms found, in scan order
    pub negative_matches: Vec<String>,
    /// First negation marker found
    pub negation: Option<String>,
    pub strong_negation: bool,
    /// Intensifier applied, if any
    pub intensifier: Option<Intensifier>,
    pub better_comparison: bool,
    pub worse_comparison: bool,
    pub is_question: bool,
    /// Whether question dampening halved the scores
    pub dampened: bool,
    /// Final positive score before classification
    pub positive_score: f64,
    /// Final negative score before classification
    pub negative_score: f64,
    /// Which hard override fired last, if any
    pub override_applied: Option<&'static str>,
    pub result: AnalysisResult,
}

/// Keyword-based sentiment analyzer
#[derive(Debug, Clone)]
pub struct LexicalAnalyzer {
    lexicon: Arc<SentimentLexicon>,
}

impl Default for LexicalAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(SentimentLexicon::default()))
    }
}

impl LexicalAnalyzer {
    pub fn new(lexicon: Arc<SentimentLexicon>) -> Self {
        Self { lexicon }
    }

    /// Score `text`, recovering from any fault with the neutral default.
    pub fn score(&self, text: &str) -> AnalysisResult {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.explain(text)));

        match outcome {
            Ok(breakdown) if is_valid_confidence(breakdown.result.score) => {
                debug!(
                    "Sentiment detected: {} with score {:.3}",
                    breakdown.result.label, breakdown.result.score
                );
                breakdown.result
            }
            Ok(breakdown) => {
                error!(
                    "Invalid confidence {} for text of {} chars, falling back to neutral",
                    breakdown.result.score,
                    text.len()
                );
                AnalysisResult::neutral()
            }
            Err(_) => {
                error!(
                    "Sentiment scoring panicked for text of {} chars, falling back to neutral",
                    text.len()
                );
                AnalysisResult::neutral()
            }
        }
    }

    /// Run the full scoring pipeline and return every intermediate value
    pub fn explain(&self, text: &str) -> ScoreBreakdown {
        let lexicon = &*self.lexicon;
        let text_lower = text.to_lowercase();

        // 1. Weighted term accumulation
        let mut positive_score = 0.0;
        let mut positive_matches = Vec::new();
        for entry in lexicon.positive_entries() {
            if text_lower.contains(entry.term.as_str()) {
                positive_score += entry.weight;
                positive_matches.push(entry.term.clone());
            }
        }

        let mut negative_score = 0.0;
        let mut negative_matches = Vec::new();
        for entry in lexicon.negative_entries() {
            if text_lower.contains(entry.term.as_str()) {
                negative_score += entry.weight;
                negative_matches.push(entry.term.clone());
            }
        }

        // 2. Negation swaps the accumulated scores
        let negation = lexicon.find_negation(&text_lower).map(str::to_string);
        let mut strong_negation = false;
        if negation.is_some() {
            std::mem::swap(&mut positive_score, &mut negative_score);

            if lexicon.has_strong_negation(&text_lower) {
                strong_negation = true;
                negative_score *= STRONG_NEGATION_FACTOR;
            }
        }

        // 3. Only the first intensifier applies
        let intensifier = lexicon.find_intensifier(&text_lower).cloned();
        if let Some(ref found) = intensifier {
            positive_score *= found.multiplier;
            negative_score *= found.multiplier;
        }

        // 4. Comparatives
        let better_comparison = lexicon.has_better_comparison(&text_lower);
        if better_comparison {
            positive_score += COMPARATIVE_BONUS;
        }
        let worse_comparison = lexicon.has_worse_comparison(&text_lower);
        if worse_comparison {
            negative_score += COMPARATIVE_BONUS;
        }

        // 5. Low-signal questions lean neutral
        let is_question = lexicon.is_question(&text_lower);
        let dampened = is_question
            && positive_score < QUESTION_SIGNAL_THRESHOLD
            && negative_score < QUESTION_SIGNAL_THRESHOLD;
        if dampened {
            positive_score *= QUESTION_DAMPENING;
            negative_score *= QUESTION_DAMPENING;
        }

        // 6. Classification
        let mut result = classify(positive_score, negative_score);

        // 7. Hard overrides
        let mut override_applied = None;
        if text_lower.contains(WELL_TERM) && !lexicon.has_negated_well(&text_lower) {
            result = AnalysisResult::new(Sentiment::Positive, WELL_CONFIDENCE);
            override_applied = Some("well");
        }
        if WORSE_OVERRIDE_TERMS.iter().any(|t| text_lower.contains(t)) {
            result = AnalysisResult::new(
                Sentiment::Negative,
                result.score.max(WORSE_MIN_CONFIDENCE),
            );
            override_applied = Some("worse");
        }

        ScoreBreakdown {
            positive_matches,
            negative_matches,
            negation,
            strong_negation,
            intensifier,
            better_comparison,
            worse_comparison,
            is_question,
            dampened,
            positive_score,
            negative_score,
            override_applied,
            result,
        }
    }
}

#[async_trait]
impl SentimentAnalyzer for LexicalAnalyzer {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        self.score(text)
    }
}

/// Map final scores to a label and confidence
fn classify(positive: f64, negative: f64) -> AnalysisResult {
    if positive == 0.0 && negative == 0.0 {
        return AnalysisResult::neutral();
    }

    let total = positive + negative;
    let difference = (positive - negative).abs();

    let (label, confidence) = if positive > negative {
        (Sentiment::Positive, polar_confidence(total, difference))
    } else if negative > positive {
        (Sentiment::Negative, polar_confidence(total, difference))
    } else {
        (
            Sentiment::Neutral,
            NEUTRAL_CONFIDENCE + (total * TIE_RATE).min(MAX_TIE_BONUS),
        )
    };

    // Only reachable outside [0, 1] with custom negative weights
    AnalysisResult::new(label, confidence.clamp(0.0, 1.0))
}

fn polar_confidence(total: f64, difference: f64) -> f64 {
    let intensity_bonus = (total * INTENSITY_RATE).min(MAX_INTENSITY_BONUS);
    let difference_bonus = (difference * DIFFERENCE_RATE).min(MAX_DIFFERENCE_BONUS);
    (BASE_CONFIDENCE + intensity_bonus + difference_bonus).min(MAX_CONFIDENCE)
}

fn is_valid_confidence(score: f64) -> bool {
    score.is_finite() && (0.0..=1.0).contains(&score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = LexicalAnalyzer::default();
        assert_eq!(analyzer.score(""), AnalysisResult::neutral());
    }

    #[test]
    fn test_love_is_positive() {
        let analyzer = LexicalAnalyzer::default();
        let result = analyzer.score("I love this");
        assert_eq!(result.label, Sentiment::Positive);
        assert!(approx(result.score, 0.95));
    }

    #[test]
    fn test_hate_is_negative() {
        let analyzer = LexicalAnalyzer::default();
        let result = analyzer.score("I hate this");
        assert_eq!(result.label, Sentiment::Negative);
        assert!(result.score >= 0.6);
    }

    #[test]
    fn test_negation_swaps_scores() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("I don't love this");
        assert_eq!(breakdown.negation.as_deref(), Some("don't"));
        assert!(approx(breakdown.positive_score, 0.0));
        assert!(approx(breakdown.negative_score, 3.0));
        assert_eq!(breakdown.result.label, Sentiment::Negative);
    }

    #[test]
    fn test_strong_negation_scales_negative_score() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("not at all nice");
        // nice=2.0 positive, "no" (inside "not")=1.5 negative, then swapped
        assert!(breakdown.strong_negation);
        assert!(approx(breakdown.positive_score, 1.5));
        assert!(approx(breakdown.negative_score, 2.6));
        assert_eq!(breakdown.result.label, Sentiment::Negative);
        assert!(approx(breakdown.result.score, 0.915));
    }

    #[test]
    fn test_single_intensifier_applies() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("really very nice");
        let applied = breakdown.intensifier.expect("intensifier expected");
        assert_eq!(applied.term, "really");
        assert!(approx(breakdown.positive_score, 3.0));
    }

    #[test]
    fn test_intensifier_raises_confidence() {
        let analyzer = LexicalAnalyzer::default();
        let plain = analyzer.score("nice");
        let intensified = analyzer.score("very nice");
        assert!(approx(plain.score, 0.9));
        assert!(approx(intensified.score, 0.94));
    }

    #[test]
    fn test_tie_is_neutral_with_bonus() {
        let analyzer = LexicalAnalyzer::default();
        let result = analyzer.score("nice bad");
        assert_eq!(result.label, Sentiment::Neutral);
        assert!(approx(result.score, 0.58));
    }

    #[test]
    fn test_low_signal_question_is_dampened() {
        let analyzer = LexicalAnalyzer::default();
        let statement = analyzer.score("sure");
        let question = analyzer.explain("why sure?");

        assert!(question.dampened);
        assert!(approx(question.positive_score, 0.75));
        assert!(approx(statement.score, 0.825));
        assert!(approx(question.result.score, 0.7125));
    }

    #[test]
    fn test_strong_signal_question_is_not_dampened() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("how nice?");
        assert!(breakdown.is_question);
        assert!(!breakdown.dampened);
        assert!(approx(breakdown.result.score, analyzer.score("nice").score));
    }

    #[test]
    fn test_plain_question_is_neutral() {
        let analyzer = LexicalAnalyzer::default();
        assert_eq!(analyzer.score("What time is it?"), AnalysisResult::neutral());
    }

    #[test]
    fn test_better_adds_comparative_bonus() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("this is better");
        assert!(breakdown.better_comparison);
        assert!(approx(breakdown.positive_score, 2.5));
        assert_eq!(breakdown.result.label, Sentiment::Positive);
    }

    #[test]
    fn test_worse_adds_comparative_bonus() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("worse");
        // worse=2.0 negative, +1.5 comparative
        assert!(breakdown.worse_comparison);
        assert!(approx(breakdown.positive_score, 0.0));
        assert!(approx(breakdown.negative_score, 3.5));
        assert_eq!(breakdown.result.label, Sentiment::Negative);
        assert!(approx(breakdown.result.score, 0.95));
    }

    #[test]
    fn test_never_is_strong_negation() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("never good");
        // good counted twice=4.0 positive, never=1.5 negative, swapped then x1.3
        assert_eq!(breakdown.positive_matches, vec!["good", "good"]);
        assert_eq!(breakdown.negation.as_deref(), Some("never"));
        assert!(breakdown.strong_negation);
        assert!(approx(breakdown.positive_score, 1.5));
        assert!(approx(breakdown.negative_score, 5.2));
        assert_eq!(breakdown.result.label, Sentiment::Negative);
        assert!(approx(breakdown.result.score, 0.95));
    }

    #[test]
    fn test_well_override() {
        let analyzer = LexicalAnalyzer::default();
        assert_eq!(
            analyzer.score("well"),
            AnalysisResult::new(Sentiment::Positive, 0.7)
        );
        // substring match is kept
        assert_eq!(
            analyzer.score("farewell"),
            AnalysisResult::new(Sentiment::Positive, 0.7)
        );
    }

    #[test]
    fn test_negated_well_skips_override() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("not well");
        assert_eq!(breakdown.override_applied, None);
        assert_eq!(breakdown.result.label, Sentiment::Negative);
    }

    #[test]
    fn test_worse_override_wins_over_well() {
        let analyzer = LexicalAnalyzer::default();
        let breakdown = analyzer.explain("it went well but then worse");
        assert_eq!(breakdown.override_applied, Some("worse"));
        assert_eq!(
            breakdown.result,
            AnalysisResult::new(Sentiment::Negative, 0.8)
        );
    }

    #[test]
    fn test_worst_is_strongly_negative() {
        let analyzer = LexicalAnalyzer::default();
        let result = analyzer.score("this is the worst");
        assert_eq!(result.label, Sentiment::Negative);
        assert!(result.score >= 0.8);
    }

    #[test]
    fn test_negative_weight_in_positive_list() {
        let lexicon = SentimentLexicon::from_words(&["hate"], &[]);
        let analyzer = LexicalAnalyzer::new(Arc::new(lexicon));
        let breakdown = analyzer.explain("i hate it");

        assert!(approx(breakdown.positive_score, -3.0));
        assert_eq!(breakdown.result.label, Sentiment::Negative);
        assert!(approx(breakdown.result.score, 0.65));
    }

    #[tokio::test]
    async fn test_trait_matches_direct_scoring() {
        let analyzer = LexicalAnalyzer::default();
        let text = "Absolutely fantastic work";
        assert_eq!(analyzer.analyze(text).await, analyzer.score(text));
    }
}
