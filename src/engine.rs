//! # Analysis Engine
//! Runs one request end to end: tokenize, then the lexical, frequency,
//! sentence and sentiment engines, each read-only over the same sequences.
//!
//! Pure apart from logging and metrics; suitable for unit tests. Missing
//! language resources degrade to empty sequences plus a warning.

use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use tracing::{info, warn};

use crate::config::AnalysisConfig;
use crate::frequency::FrequencyTable;
use crate::highlight::{highlight_spans, render_highlighted, Markup};
use crate::lexical;
use crate::report::{
    AnalysisReport, CountsSection, FrequencySection, SentenceSection, SentimentSection,
    VocabularySection,
};
use crate::resources::Resources;
use crate::sentences::sentence_stats;
use crate::sentiment::{score_sentences, LexiconOracle, SentimentOracle};
use crate::tokenize::{is_word_token, RuleTokenizer, Tokenizer};

const MISSING_RESOURCES_WARNING: &str = "Required language resources are missing";

/// Tokenized view of a document, discarded after the request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenizedDocument {
    /// Analysed tokens (punctuation filtered unless configured otherwise).
    pub tokens: Vec<String>,
    pub sentences: Vec<String>,
}

#[derive(Clone)]
pub struct Analyzer {
    tokenizer: Arc<dyn Tokenizer>,
    oracle: Arc<dyn SentimentOracle>,
    markup: Markup,
}

impl Analyzer {
    pub fn new(tokenizer: Arc<dyn Tokenizer>, oracle: Arc<dyn SentimentOracle>) -> Self {
        Self {
            tokenizer,
            oracle,
            markup: Markup::default(),
        }
    }

    /// Default rule tokenizer and lexicon oracle over shared resources.
    pub fn with_resources(resources: Arc<Resources>) -> Self {
        Self::new(
            Arc::new(RuleTokenizer::new(resources.clone())),
            Arc::new(LexiconOracle::new(resources)),
        )
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// Tokenize, falling back to empty sequences when resources are missing.
    pub fn tokenize(
        &self,
        text: &str,
        cfg: &AnalysisConfig,
        warnings: &mut Vec<String>,
    ) -> TokenizedDocument {
        let words = self.tokenizer.words(text);
        let sentences = self.tokenizer.sentences(text);
        match (words, sentences) {
            (Ok(mut tokens), Ok(sentences)) => {
                if !cfg.count_punctuation {
                    tokens.retain(|t| is_word_token(t));
                }
                TokenizedDocument { tokens, sentences }
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(target: "workshop", error = %e, "tokenizer unavailable; analysing empty sequences");
                counter!("workshop_resource_warnings_total").increment(1);
                warnings.push(format!("{MISSING_RESOURCES_WARNING}: {e}"));
                TokenizedDocument::default()
            }
        }
    }

    pub fn analyze(&self, text: &str, cfg: &AnalysisConfig) -> AnalysisReport {
        let started = Instant::now();
        let mut warnings = Vec::new();
        let doc = self.tokenize(text, cfg, &mut warnings);
        let tokens = &doc.tokens;

        // counts
        let word_count = lexical::word_count(tokens);
        let longest_words = lexical::longest_words(tokens, cfg.longest_words);
        let longest: Vec<&str> = longest_words.iter().map(|w| w.word.as_str()).collect();
        let spans = highlight_spans(text, &longest);
        let highlighted_html = format!(
            "<div style=\"white-space: pre-wrap;\">{}</div>",
            render_highlighted(text, &spans, &self.markup)
        );
        let counts = CountsSection {
            word_count,
            char_count: lexical::char_count(text),
            average_word_length: lexical::average_word_length(tokens),
            longest_words,
            highlight_spans: spans,
            highlighted_html,
        };

        // sentences
        let stats = sentence_stats(&doc.sentences, word_count, cfg.longest_sentences);
        let sentences = SentenceSection {
            count: stats.count,
            average_length: stats.average_length,
            longest: stats.longest,
            lengths: stats.lengths,
            prompts: SentenceSection::prompts(),
        };

        // vocabulary + frequency share one table
        let table = FrequencyTable::build(tokens);
        let window = cfg.window_size.get();
        let windowed_ttr = (tokens.len() >= window).then(|| lexical::windowed_ttr(tokens, window));
        let hapax = table.hapax_legomena();
        let vocabulary = VocabularySection {
            type_token_ratio: lexical::type_token_ratio(tokens),
            window_size: window,
            windowed_ttr,
            hapax_count: hapax.len(),
            hapax_percentage: lexical::hapax_percentage(&table),
            hapax,
            prompts: VocabularySection::prompts(),
        };
        let frequency = FrequencySection {
            top: table.top_n(cfg.top_n),
            prompts: FrequencySection::prompts(),
        };

        // sentiment
        let (series, oracle_err) = score_sentences(self.oracle.as_ref(), &doc.sentences);
        if let Some(e) = oracle_err {
            warn!(target: "workshop", error = %e, "sentiment oracle failed; unscored sentences count as 0");
            counter!("workshop_resource_warnings_total").increment(1);
            warnings.push(format!("Sentiment scoring unavailable: {e}"));
        }
        let sentiment = SentimentSection {
            bars: series.bars(),
            document_score: series.document_score,
            polarity: series.polarity,
            scores: series.scores,
            prompts: SentimentSection::prompts(),
        };

        let document_id = document_id(text);
        let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
        counter!("workshop_analyses_total").increment(1);
        histogram!("workshop_analysis_ms").record(elapsed_ms);
        info!(
            target: "workshop",
            id = %document_id,
            tokens = tokens.len(),
            sentences = sentences.count,
            window,
            elapsed_ms,
            "analysis complete"
        );

        AnalysisReport {
            document_id,
            warnings,
            counts,
            sentences,
            vocabulary,
            frequency,
            sentiment,
        }
    }
}

/// First 6 bytes of the SHA-256 digest, hex encoded.
pub(crate) fn document_id(text: &str) -> String {
    use sha2::{Digest, Sha256};
    let digest = Sha256::digest(text.as_bytes());
    let mut out = String::with_capacity(12);
    for b in digest.iter().take(6) {
        use std::fmt::Write as _;
        let _ = write!(&mut out, "{:02x}", b);
    }
    out
}
