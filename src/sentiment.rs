//! # Sentence Sentiment
//! Per-sentence compound polarity plus the document-level average.
//!
//! Scoring is delegated to a [`SentimentOracle`]; the engine only aligns
//! scores with sentences and aggregates. The bundled [`LexiconOracle`] uses
//! VADER (`vader_sentiment`) by default. When the language resources carry a
//! custom valence lexicon it scores with that instead, applying the same
//! heuristics: boosters, negation, capitalisation, "but" contrast and
//! exclamation emphasis, normalised to [-1, 1].

use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::WorkshopError;
use crate::resources::Resources;

/// Maps a sentence to a compound score in [-1, 1].
pub trait SentimentOracle: Send + Sync {
    fn compound(&self, sentence: &str) -> Result<f64, WorkshopError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    pub fn of(score: f64) -> Self {
        if score > 0.0 {
            Polarity::Positive
        } else if score < 0.0 {
            Polarity::Negative
        } else {
            Polarity::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Polarity::Positive => "Positive",
            Polarity::Negative => "Negative",
            Polarity::Neutral => "Neutral",
        }
    }
}

/// Scores aligned index-for-index with the sentence sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentSeries {
    pub scores: Vec<f64>,
    pub document_score: f64,
    pub polarity: Polarity,
}

impl SentimentSeries {
    pub fn from_scores(scores: Vec<f64>) -> Self {
        let document_score = document_sentiment(&scores);
        Self {
            scores,
            document_score,
            polarity: Polarity::of(document_score),
        }
    }

    /// Polarity of each sentence (bar colouring in the dashboard).
    pub fn bars(&self) -> Vec<Polarity> {
        self.scores.iter().copied().map(Polarity::of).collect()
    }
}

/// Mean of the series; 0 when empty.
pub fn document_sentiment(scores: &[f64]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Score every sentence. A failed oracle call contributes 0.0 so the series
/// stays aligned; the first error is returned alongside.
pub fn score_sentences(
    oracle: &dyn SentimentOracle,
    sentences: &[String],
) -> (SentimentSeries, Option<WorkshopError>) {
    let mut first_err = None;
    let scores = sentences
        .iter()
        .map(|s| match oracle.compound(s) {
            Ok(v) => v,
            Err(e) => {
                first_err.get_or_insert(e);
                0.0
            }
        })
        .collect();
    (SentimentSeries::from_scores(scores), first_err)
}

// --- lexicon oracle ---

const NEGATION_SCALAR: f64 = -0.74;
const BOOST_INCR: f64 = 0.293;
const BOOST_DECR: f64 = -0.293;
const CAPS_EMPHASIS: f64 = 0.733;
const EXCLAMATION_EMPHASIS: f64 = 0.292;
const QUESTION_EMPHASIS: f64 = 0.18;
const NORMALIZATION_ALPHA: f64 = 15.0;

static VADER: Lazy<vader_sentiment::SentimentIntensityAnalyzer<'static>> =
    Lazy::new(vader_sentiment::SentimentIntensityAnalyzer::new);

static BOOSTERS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    let incr = [
        "absolutely", "amazingly", "awfully", "completely", "considerably", "decidedly",
        "deeply", "enormously", "entirely", "especially", "exceptionally", "extremely",
        "fabulously", "greatly", "highly", "hugely", "incredibly", "intensely", "majorly",
        "more", "most", "particularly", "purely", "quite", "really", "remarkably", "so",
        "substantially", "thoroughly", "totally", "tremendously", "utterly", "very",
    ];
    let decr = [
        "almost", "barely", "hardly", "less", "little", "marginally", "occasionally",
        "partly", "scarcely", "slightly", "somewhat",
    ];
    incr.iter()
        .map(|w| (*w, BOOST_INCR))
        .chain(decr.iter().map(|w| (*w, BOOST_DECR)))
        .collect()
});

/// Negators within the three words before a sentiment word flip it.
fn is_negator(tok: &str) -> bool {
    tok.ends_with("n't")
        || matches!(
            tok,
            "not"
                | "no"
                | "never"
                | "nothing"
                | "nowhere"
                | "none"
                | "nobody"
                | "neither"
                | "nor"
                | "cannot"
                | "without"
                | "rarely"
                | "seldom"
                | "despite"
                | "isnt"
                | "dont"
                | "cant"
                | "wont"
        )
}

/// Valence-lexicon oracle backed by the shared language resources: VADER's
/// lexicon unless a custom one was loaded.
#[derive(Debug, Clone)]
pub struct LexiconOracle {
    resources: Arc<Resources>,
}

impl LexiconOracle {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }
}

impl SentimentOracle for LexiconOracle {
    fn compound(&self, sentence: &str) -> Result<f64, WorkshopError> {
        let data = self.resources.ensure_loaded()?;
        Ok(match &data.lexicon {
            Some(lexicon) => compound_score(sentence, lexicon),
            None => vader_compound(sentence),
        })
    }
}

struct Word<'a> {
    raw: &'a str,
    lower: String,
}

fn is_shouting(w: &str) -> bool {
    w.chars().any(char::is_alphabetic) && !w.chars().any(char::is_lowercase)
}

fn vader_compound(sentence: &str) -> f64 {
    VADER
        .polarity_scores(sentence)
        .get("compound")
        .copied()
        .unwrap_or(0.0)
        .clamp(-1.0, 1.0)
}

pub(crate) fn compound_score(sentence: &str, lexicon: &HashMap<String, f64>) -> f64 {
    let words: Vec<Word<'_>> = sentence
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|w| !w.is_empty())
        .map(|raw| Word {
            raw,
            lower: raw.to_lowercase().replace('’', "'"),
        })
        .collect();

    let shouting = words.iter().filter(|w| is_shouting(w.raw)).count();
    let caps_differential = shouting > 0 && shouting < words.len();

    let mut valences = Vec::with_capacity(words.len());
    for (i, w) in words.iter().enumerate() {
        if BOOSTERS.contains_key(w.lower.as_str()) {
            valences.push(0.0);
            continue;
        }
        let Some(mut v) = lexicon.get(&w.lower).copied() else {
            valences.push(0.0);
            continue;
        };

        if caps_differential && is_shouting(w.raw) {
            v += CAPS_EMPHASIS.copysign(v);
        }

        for (k, decay) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
            if i < k {
                break;
            }
            let prev = &words[i - k];
            if let Some(&b) = BOOSTERS.get(prev.lower.as_str()) {
                let mut scalar = if v < 0.0 { -b } else { b };
                if caps_differential && is_shouting(prev.raw) {
                    scalar += CAPS_EMPHASIS.copysign(v);
                }
                v += scalar * decay;
            }
        }

        let negated = (1..=3).any(|k| i >= k && is_negator(words[i - k].lower.as_str()));
        if negated {
            v *= NEGATION_SCALAR;
        }

        valences.push(v);
    }

    // contrast: what follows "but" dominates what precedes it
    if let Some(but) = words.iter().position(|w| w.lower == "but") {
        for (j, v) in valences.iter_mut().enumerate() {
            if j < but {
                *v *= 0.5;
            } else if j > but {
                *v *= 1.5;
            }
        }
    }

    let mut sum: f64 = valences.iter().sum();
    if sum != 0.0 {
        let bangs = sentence.matches('!').count().min(4) as f64;
        let questions = sentence.matches('?').count();
        let q = match questions {
            0 | 1 => 0.0,
            2 | 3 => questions as f64 * QUESTION_EMPHASIS,
            _ => 0.96,
        };
        sum += (bangs * EXCLAMATION_EMPHASIS + q).copysign(sum);
    }

    normalize(sum)
}

fn normalize(sum: f64) -> f64 {
    if sum == 0.0 {
        return 0.0;
    }
    (sum / (sum * sum + NORMALIZATION_ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon() -> HashMap<String, f64> {
        [
            ("good", 1.9),
            ("great", 3.1),
            ("horrible", -2.5),
            ("hate", -2.7),
            ("amazing", 2.8),
            ("wonderful", 2.7),
            ("love", 3.2),
            ("best", 3.2),
            ("perfect", 2.7),
        ]
        .into_iter()
        .map(|(w, v)| (w.to_string(), v))
        .collect()
    }

    fn score(s: &str) -> f64 {
        compound_score(s, &lexicon())
    }

    fn vader() -> LexiconOracle {
        LexiconOracle::new(Arc::new(Resources::ready_embedded()))
    }

    #[test]
    fn polarity_classification() {
        assert_eq!(Polarity::of(0.3), Polarity::Positive);
        assert_eq!(Polarity::of(-0.01), Polarity::Negative);
        assert_eq!(Polarity::of(0.0), Polarity::Neutral);
    }

    #[test]
    fn empty_series_is_neutral() {
        let s = SentimentSeries::from_scores(Vec::new());
        assert_eq!(s.document_score, 0.0);
        assert_eq!(s.polarity, Polarity::Neutral);
    }

    #[test]
    fn document_score_is_mean() {
        let s = SentimentSeries::from_scores(vec![0.5, -0.25, 0.0, 0.15]);
        assert!((s.document_score - 0.1).abs() < 1e-12);
        assert_eq!(s.polarity, Polarity::Positive);
        assert_eq!(
            s.bars(),
            vec![
                Polarity::Positive,
                Polarity::Negative,
                Polarity::Neutral,
                Polarity::Positive
            ]
        );
    }

    #[test]
    fn basic_valence() {
        assert!(score("This is a good day.") > 0.0);
        assert!(score("This is a horrible day.") < 0.0);
        assert_eq!(score("The table is brown."), 0.0);
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn negation_flips_sign() {
        assert!(score("The movie was not good.") < 0.0);
        assert!(score("I didn't hate it.") > 0.0);
    }

    #[test]
    fn boosters_and_emphasis_increase_magnitude() {
        let plain = score("The movie was good.");
        assert!(score("The movie was very good.") > plain);
        assert!(score("The movie was good!!") > plain);
        assert!(score("The movie was GOOD.") > plain);
        assert!(score("The movie was slightly good.") < plain);
    }

    #[test]
    fn but_shifts_weight_to_second_clause() {
        assert!(score("The food was good but the service was horrible.") < 0.0);
        assert!(score("The service was horrible but the food was great.") > 0.0);
    }

    #[test]
    fn scores_are_bounded() {
        let s = score("GREAT great AMAZING wonderful love love love best perfect!!!!");
        assert!(s > 0.9 && s <= 1.0);
    }

    #[test]
    fn builtin_lexicon_scores_everyday_prose() {
        let oracle = vader();
        for s in [
            "My neighbour waved cheerfully.",
            "She admired the elegant garden.",
            "I love this wonderful little town.",
        ] {
            let v = oracle.compound(s).unwrap();
            assert!(v > 0.0, "{s} scored {v}");
        }
        for s in [
            "He resented the unfair decision.",
            "The meeting was a terrible waste of time.",
        ] {
            let v = oracle.compound(s).unwrap();
            assert!(v < 0.0, "{s} scored {v}");
        }
        assert_eq!(oracle.compound("The table is brown.").unwrap(), 0.0);
    }

    #[test]
    fn builtin_lexicon_handles_negation() {
        let oracle = vader();
        assert!(oracle.compound("The food was not good.").unwrap() < 0.0);
    }

    #[test]
    fn custom_lexicon_replaces_builtin() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join(crate::resources::ABBREVIATIONS_FILE), "mr\n").unwrap();
        std::fs::write(tmp.path().join(crate::resources::LEXICON_FILE), r#"{"brown": -2.0}"#)
            .unwrap();
        let oracle = LexiconOracle::new(Arc::new(Resources::new(
            crate::resources::ResourceSource::Directory(tmp.path().to_path_buf()),
        )));
        assert!(oracle.compound("The table is brown.").unwrap() < 0.0);
        assert_eq!(oracle.compound("She admired the garden.").unwrap(), 0.0);
    }

    struct Broken;
    impl SentimentOracle for Broken {
        fn compound(&self, _: &str) -> Result<f64, WorkshopError> {
            Err(WorkshopError::unavailable("lexicon", "gone"))
        }
    }

    #[test]
    fn oracle_failure_keeps_alignment() {
        let sents = vec!["a.".to_string(), "b.".to_string()];
        let (series, err) = score_sentences(&Broken, &sents);
        assert_eq!(series.scores, vec![0.0, 0.0]);
        assert!(err.is_some());
    }
}
