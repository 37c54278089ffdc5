//! Tokenization capability: word tokens and sentence units.
//!
//! The analyzer only sees the [`Tokenizer`] trait, so alternative rule sets
//! can be swapped in without touching the statistics engines.

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::WorkshopError;
use crate::resources::{LanguageData, Resources};

/// Splits a document into word tokens and sentences.
pub trait Tokenizer: Send + Sync {
    /// Lowercased tokens in order of appearance. Punctuation marks are
    /// separate tokens; contractions split into stem + clitic ("did", "n't").
    fn words(&self, text: &str) -> Result<Vec<String>, WorkshopError>;

    /// Sentences in original order and casing, trimmed.
    fn sentences(&self, text: &str) -> Result<Vec<String>, WorkshopError>;
}

// Numbers with separators, ellipses and dashes, words with inner apostrophes
// or hyphens, then any other single non-space char.
static WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?u)\p{N}+(?:[.,]\p{N}+)+|\.{2,}|…|-{2,}|[\p{L}\p{N}_]+(?:['’\-][\p{L}\p{N}_]+)*|\S")
        .expect("word regex")
});

const CLITICS: [&str; 6] = ["'s", "'m", "'d", "'ll", "'re", "'ve"];

/// Rule-based tokenizer backed by the shared language resources.
#[derive(Debug, Clone)]
pub struct RuleTokenizer {
    resources: Arc<Resources>,
}

impl RuleTokenizer {
    pub fn new(resources: Arc<Resources>) -> Self {
        Self { resources }
    }
}

impl Tokenizer for RuleTokenizer {
    fn words(&self, text: &str) -> Result<Vec<String>, WorkshopError> {
        self.resources.ensure_loaded()?;
        Ok(word_tokens(text))
    }

    fn sentences(&self, text: &str) -> Result<Vec<String>, WorkshopError> {
        let data = self.resources.ensure_loaded()?;
        Ok(split_sentences(text, &data))
    }
}

/// True for tokens carrying at least one letter or digit.
pub fn is_word_token(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

pub(crate) fn word_tokens(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut out = Vec::new();
    for m in WORD_RE.find_iter(&lower) {
        push_splitting_clitics(m.as_str(), &mut out);
    }
    out
}

fn push_splitting_clitics(token: &str, out: &mut Vec<String>) {
    let norm = token.replace('’', "'");
    if norm.len() > 3 && norm.ends_with("n't") {
        out.push(norm[..norm.len() - 3].to_string());
        out.push("n't".to_string());
        return;
    }
    for clitic in CLITICS {
        if norm.len() > clitic.len() && norm.ends_with(clitic) {
            out.push(norm[..norm.len() - clitic.len()].to_string());
            out.push(clitic.to_string());
            return;
        }
    }
    out.push(norm);
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '…')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '”' | '’' | '»')
}

/// Abbreviation-aware sentence splitting.
///
/// A boundary is a run of `.`/`!`/`?`/`…` (plus closing quotes or brackets)
/// followed by whitespace or end of text. A single period is not a boundary
/// after a known abbreviation or an initial; an ellipsis is not one when the
/// next word starts lowercase.
pub(crate) fn split_sentences(text: &str, data: &LanguageData) -> Vec<String> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut out = Vec::new();
    let mut start = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let (_, c) = chars[i];
        if !is_terminator(c) {
            i += 1;
            continue;
        }

        let run_start = i;
        let mut only_periods = true;
        while i < chars.len() && is_terminator(chars[i].1) {
            if chars[i].1 == '!' || chars[i].1 == '?' {
                only_periods = false;
            }
            i += 1;
        }
        let run_len = i - run_start;
        while i < chars.len() && is_closer(chars[i].1) {
            i += 1;
        }
        let end = chars.get(i).map(|(b, _)| *b).unwrap_or(text.len());

        let next_visible = chars[i..].iter().find(|(_, ch)| !ch.is_whitespace());
        let followed_by_space = chars.get(i).map_or(true, |(_, ch)| ch.is_whitespace());
        if !followed_by_space {
            continue;
        }

        if only_periods {
            let joined = if run_len == 1 {
                let prev = preceding_word(text, chars[run_start].0);
                data.is_abbreviation(prev) || is_initial(prev)
            } else {
                next_visible.is_some_and(|(_, ch)| ch.is_lowercase())
            };
            if joined {
                continue;
            }
        }

        push_sentence(&text[start..end], &mut out);
        start = next_visible.map(|(b, _)| *b).unwrap_or(text.len());
    }

    if start < text.len() {
        push_sentence(&text[start..], &mut out);
    }
    out
}

fn push_sentence(raw: &str, out: &mut Vec<String>) {
    let s = raw.trim();
    if !s.is_empty() {
        out.push(s.to_string());
    }
}

/// The whitespace-delimited word right before byte offset `at`, without
/// leading brackets or quotes.
fn preceding_word(text: &str, at: usize) -> &str {
    let head = &text[..at];
    let from = head
        .rfind(char::is_whitespace)
        .map(|p| p + head[p..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    head[from..].trim_start_matches(|c: char| matches!(c, '(' | '[' | '"' | '\'' | '“' | '‘'))
}

/// A lone capital letter other than the pronoun "I".
fn is_initial(word: &str) -> bool {
    let mut it = word.chars();
    matches!((it.next(), it.next()), (Some(c), None) if c.is_uppercase() && c != 'I')
}
