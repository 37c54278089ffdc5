//! # Analysis Report
//! Structured per-section results handed to the presentation layer
//! (dashboard JSON, CLI text rendering).

use serde::Serialize;

use crate::frequency::FrequencyEntry;
use crate::highlight::HighlightSpan;
use crate::lexical::LongestWord;
use crate::prompts::{prompts_for, Section};
use crate::sentiment::Polarity;

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Short anonymised id of the document (never the text itself).
    pub document_id: String,
    /// User-visible, non-fatal problems (e.g. missing language resources).
    pub warnings: Vec<String>,
    pub counts: CountsSection,
    pub sentences: SentenceSection,
    pub vocabulary: VocabularySection,
    pub frequency: FrequencySection,
    pub sentiment: SentimentSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct CountsSection {
    pub word_count: usize,
    pub char_count: usize,
    pub average_word_length: f64,
    pub longest_words: Vec<LongestWord>,
    pub highlight_spans: Vec<HighlightSpan>,
    /// Document with the longest words wrapped in highlight markup.
    pub highlighted_html: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SentenceSection {
    pub count: usize,
    pub average_length: f64,
    pub longest: Vec<String>,
    /// Chart series: words per sentence, by sentence index.
    pub lengths: Vec<usize>,
    pub prompts: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct VocabularySection {
    pub type_token_ratio: f64,
    pub window_size: usize,
    /// `None` when the text is shorter than one window.
    pub windowed_ttr: Option<Vec<f64>>,
    pub hapax_count: usize,
    pub hapax_percentage: f64,
    pub hapax: Vec<String>,
    pub prompts: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct FrequencySection {
    pub top: Vec<FrequencyEntry>,
    pub prompts: &'static [&'static str],
}

#[derive(Debug, Clone, Serialize)]
pub struct SentimentSection {
    /// Chart series: compound score per sentence, by sentence index.
    pub scores: Vec<f64>,
    pub bars: Vec<Polarity>,
    pub document_score: f64,
    pub polarity: Polarity,
    pub prompts: &'static [&'static str],
}

impl SentenceSection {
    pub(crate) fn prompts() -> &'static [&'static str] {
        prompts_for(Section::Sentences)
    }
}

impl VocabularySection {
    pub(crate) fn prompts() -> &'static [&'static str] {
        prompts_for(Section::Vocabulary)
    }
}

impl FrequencySection {
    pub(crate) fn prompts() -> &'static [&'static str] {
        prompts_for(Section::Frequency)
    }
}

impl SentimentSection {
    pub(crate) fn prompts() -> &'static [&'static str] {
        prompts_for(Section::Sentiment)
    }
}
