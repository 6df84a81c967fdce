//! Sentiment lexicon tables.
//!
//! Word lists, weight priorities, negation markers and intensifiers used by the
//! lexical analyzer. Matching is substring based on lowercased text, so every
//! term here must be lowercase.
//!
//! The tables are built once at startup and shared read-only.

/// Positive terms, scanned in this order. Duplicates are intentional: each
/// occurrence contributes its weight.
const POSITIVE_WORDS: &[&str] = &[
    // Strong positive emotions
    "love", "adore", "passion", "bliss", "ecstatic", "thrilled", "elated", "euphoric",
    "like", "enjoy", "appreciate", "cherish", "treasure", "value", "favor", "prefer",
    // Positive qualities
    "good", "great", "amazing", "awesome", "fantastic", "wonderful", "excellent", "perfect",
    "brilliant", "superb", "outstanding", "marvelous", "incredible", "magnificent", "spectacular",
    "phenomenal", "extraordinary", "remarkable", "impressive", "stunning", "gorgeous", "beautiful",
    // Well-being and satisfaction
    "happy", "joy", "delighted", "pleased", "satisfied", "content", "cheerful", "merry",
    "glad", "pleased", "grateful", "thankful", "blessed", "fortunate", "lucky",
    // Approval and agreement
    "yes", "yeah", "yep", "sure", "okay", "alright", "fine", "good", "well",
    "agree", "support", "approve", "endorse", "recommend", "suggest",
    // Informal
    "nice", "cool", "sweet", "lovely", "cute", "charming", "pleasant", "delightful",
    "wow", "awesome", "rad", "dope", "sick", "fire", "lit", "epic", "legendary",
    // Progress
    "better", "improved", "enhanced", "upgraded", "progress", "success", "victory", "triumph",
    "achievement", "accomplishment", "breakthrough", "milestone", "advancement",
];

/// Negative terms, scanned in this order. Duplicates are intentional.
const NEGATIVE_WORDS: &[&str] = &[
    // Strong negative emotions
    "hate", "loathe", "despise", "detest", "abhor", "disgust", "repulse", "revolt",
    "dislike", "disdain", "scorn", "contempt", "aversion", "antipathy", "hostility",
    // Negative qualities
    "bad", "terrible", "awful", "horrible", "disgusting", "vile", "nasty", "foul",
    "worse", "worst", "pathetic", "pathetic", "useless", "worthless", "pointless",
    "stupid", "dumb", "idiot", "moron", "foolish", "silly", "ridiculous", "absurd",
    // Anger and frustration
    "angry", "mad", "furious", "rage", "outrage", "indignation", "resentment", "bitterness",
    "annoyed", "irritated", "aggravated", "exasperated", "frustrated", "bothered", "troubled",
    // Sadness and disappointment
    "sad", "depressed", "melancholy", "gloomy", "miserable", "heartbroken", "devastated",
    "disappointed", "let down", "discouraged", "disheartened", "crushed", "defeated",
    // Fear and anxiety
    "worried", "concerned", "anxious", "nervous", "scared", "afraid", "terrified", "frightened",
    "panic", "alarm", "dread", "horror", "shock", "apprehension", "unease", "distress",
    // Rejection
    "no", "nope", "never", "reject", "refuse", "deny", "oppose", "resist", "object",
    "disagree", "disapprove", "condemn", "criticize", "blame", "fault", "accuse",
    // Fatigue and stress
    "tired", "exhausted", "drained", "weary", "fatigued", "burned out", "stressed",
    "overwhelmed", "pressured", "strained", "tense", "uptight", "on edge",
    // Boredom and disgust
    "boring", "tedious", "dull", "monotonous", "repetitive", "uninteresting", "lame",
    "sick", "gross", "yuck", "ew", "nasty", "disgusting", "revolting", "repulsive",
];

const NEGATION_MARKERS: &[&str] = &[
    "not", "don't", "doesn't", "didn't", "won't", "can't", "couldn't", "shouldn't",
    "wouldn't", "never", "no", "none", "nothing", "nobody", "nowhere",
];

const STRONG_NEGATION_MARKERS: &[&str] = &["never", "not at all"];

/// Declared order matters: only the first match is applied.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("extremely", 2.0),
    ("incredibly", 2.0),
    ("absolutely", 1.8),
    ("totally", 1.8),
    ("completely", 1.8),
    ("really", 1.5),
    ("very", 1.4),
    ("so", 1.3),
    ("super", 1.3),
    ("ultra", 1.3),
    ("quite", 1.2),
    ("pretty", 1.2),
    ("rather", 1.2),
    ("somewhat", 1.1),
];

const QUESTION_WORDS: &[&str] = &["what", "how", "why", "when", "where"];

const BETTER_MARKERS: &[&str] = &["better than", "better"];
const WORSE_MARKERS: &[&str] = &["worse than", "worse"];

/// Phrases that cancel the "well" override.
const NEGATED_WELL: &[&str] = &["not well", "not very well"];

/// A single lexicon term and the weight it contributes when found
#[derive(Debug, Clone, PartialEq)]
pub struct LexiconEntry {
    pub term: String,
    pub weight: f64,
}

/// Score multiplier triggered by a term
#[derive(Debug, Clone, PartialEq)]
pub struct Intensifier {
    pub term: String,
    pub multiplier: f64,
}

/// Weight priority for terms scanned in the positive list.
///
/// Lookup is by exact term, not by list. The hate/loathe/despise/detest branch
/// yields a negative weight; it only has an effect if one of those terms is
/// ever placed in the positive list.
pub fn positive_weight(term: &str) -> f64 {
    match term {
        "love" | "adore" | "passion" | "bliss" | "ecstatic" => 3.0,
        "hate" | "loathe" | "despise" | "detest" => -3.0,
        "great" | "amazing" | "awesome" | "fantastic" => 2.5,
        "good" | "nice" | "well" | "fine" => 2.0,
        "okay" | "alright" | "sure" => 1.5,
        _ => 1.0,
    }
}

/// Weight priority for terms scanned in the negative list.
pub fn negative_weight(term: &str) -> f64 {
    match term {
        "hate" | "loathe" | "despise" | "detest" => 3.0,
        "terrible" | "awful" | "horrible" | "disgusting" => 2.5,
        "bad" | "worse" | "worst" => 2.0,
        "sad" | "angry" | "mad" | "upset" => 2.0,
        "no" | "never" | "nope" => 1.5,
        _ => 1.0,
    }
}

fn to_owned_list(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

/// Immutable lexicon configuration for the lexical analyzer
#[derive(Debug, Clone)]
pub struct SentimentLexicon {
    pub(crate) positive: Vec<LexiconEntry>,
    pub(crate) negative: Vec<LexiconEntry>,
    pub(crate) negations: Vec<String>,
    pub(crate) strong_negations: Vec<String>,
    pub(crate) intensifiers: Vec<Intensifier>,
    pub(crate) question_words: Vec<String>,
    pub(crate) better_markers: Vec<String>,
    pub(crate) worse_markers: Vec<String>,
    pub(crate) negated_well: Vec<String>,
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self::from_words(POSITIVE_WORDS, NEGATIVE_WORDS)
    }
}

impl SentimentLexicon {
    /// Build a lexicon from custom word lists, keeping the default negation,
    /// intensifier and question tables.
    ///
    /// Weights come from [`positive_weight`] and [`negative_weight`].
    pub fn from_words(positive: &[&str], negative: &[&str]) -> Self {
        let positive = positive
            .iter()
            .map(|term| LexiconEntry {
                term: term.to_lowercase(),
                weight: positive_weight(term),
            })
            .collect();

        let negative = negative
            .iter()
            .map(|term| LexiconEntry {
                term: term.to_lowercase(),
                weight: negative_weight(term),
            })
            .collect();

        let intensifiers = INTENSIFIERS
            .iter()
            .map(|(term, multiplier)| Intensifier {
                term: term.to_string(),
                multiplier: *multiplier,
            })
            .collect();

        Self {
            positive,
            negative,
            negations: to_owned_list(NEGATION_MARKERS),
            strong_negations: to_owned_list(STRONG_NEGATION_MARKERS),
            intensifiers,
            question_words: to_owned_list(QUESTION_WORDS),
            better_markers: to_owned_list(BETTER_MARKERS),
            worse_markers: to_owned_list(WORSE_MARKERS),
            negated_well: to_owned_list(NEGATED_WELL),
        }
    }

    pub fn positive_entries(&self) -> &[LexiconEntry] {
        &self.positive
    }

    pub fn negative_entries(&self) -> &[LexiconEntry] {
        &self.negative
    }

    /// First negation marker contained in `text`, if any
    pub fn find_negation(&self, text: &str) -> Option<&str> {
        find_first(&self.negations, text)
    }

    pub fn has_strong_negation(&self, text: &str) -> bool {
        find_first(&self.strong_negations, text).is_some()
    }

    /// First intensifier in declared order whose term occurs in `text`
    pub fn find_intensifier(&self, text: &str) -> Option<&Intensifier> {
        self.intensifiers.iter().find(|i| text.contains(i.term.as_str()))
    }

    pub fn has_better_comparison(&self, text: &str) -> bool {
        find_first(&self.better_markers, text).is_some()
    }

    pub fn has_worse_comparison(&self, text: &str) -> bool {
        find_first(&self.worse_markers, text).is_some()
    }

    /// Ends with "?" or contains one of the interrogative words
    pub fn is_question(&self, text: &str) -> bool {
        text.ends_with('?') || find_first(&self.question_words, text).is_some()
    }

    pub fn has_negated_well(&self, text: &str) -> bool {
        find_first(&self.negated_well, text).is_some()
    }
}

fn find_first<'a>(terms: &'a [String], text: &str) -> Option<&'a str> {
    terms
        .iter()
        .find(|term| text.contains(term.as_str()))
        .map(String::as_str)
}
