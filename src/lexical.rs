//! Lexical statistics over a token sequence.
//!
//! Every ratio and average has a zero default for empty input; none of these
//! functions can fail.

use std::collections::HashSet;

use serde::Serialize;

use crate::frequency::FrequencyTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongestWord {
    pub word: String,
    /// Length in characters.
    pub length: usize,
}

pub fn word_count<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens.len()
}

/// Document length in characters (not bytes).
pub fn char_count(document: &str) -> usize {
    document.chars().count()
}

pub fn average_word_length<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    let total: usize = tokens.iter().map(|t| t.as_ref().chars().count()).sum();
    total as f64 / tokens.len() as f64
}

/// Top-`k` tokens by character length, longest first. Equal lengths keep
/// their original order; repeated tokens may appear more than once.
pub fn longest_words<S: AsRef<str>>(tokens: &[S], k: usize) -> Vec<LongestWord> {
    let mut ranked: Vec<LongestWord> = tokens
        .iter()
        .map(|t| LongestWord {
            word: t.as_ref().to_string(),
            length: t.as_ref().chars().count(),
        })
        .collect();
    ranked.sort_by(|a, b| b.length.cmp(&a.length));
    ranked.truncate(k);
    ranked
}

/// Distinct tokens over total tokens, in [0, 1].
pub fn type_token_ratio<S: AsRef<str>>(tokens: &[S]) -> f64 {
    if tokens.is_empty() {
        return 0.0;
    }
    distinct(tokens) as f64 / tokens.len() as f64
}

/// Type-token ratio of each non-overlapping window of exactly `window`
/// tokens; the trailing remainder is dropped.
pub fn windowed_ttr<S: AsRef<str>>(tokens: &[S], window: usize) -> Vec<f64> {
    if window == 0 {
        return Vec::new();
    }
    tokens
        .chunks_exact(window)
        .map(|w| distinct(w) as f64 / window as f64)
        .collect()
}

/// Share of tokens that are hapax legomena, as a percentage.
pub fn hapax_percentage(table: &FrequencyTable) -> f64 {
    if table.is_empty() {
        return 0.0;
    }
    table.hapax_legomena().len() as f64 / table.total() as f64 * 100.0
}

fn distinct<S: AsRef<str>>(tokens: &[S]) -> usize {
    tokens.iter().map(|t| t.as_ref()).collect::<HashSet<&str>>().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(s: &str) -> Vec<String> {
        s.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn empty_input_defaults_to_zero() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(word_count(&empty), 0);
        assert_eq!(char_count(""), 0);
        assert_eq!(average_word_length(&empty), 0.0);
        assert_eq!(type_token_ratio(&empty), 0.0);
        assert!(windowed_ttr(&empty, 10).is_empty());
        assert!(longest_words(&empty, 5).is_empty());
        assert_eq!(hapax_percentage(&FrequencyTable::build(&empty)), 0.0);
    }

    #[test]
    fn char_count_uses_characters() {
        assert_eq!(char_count("lamé —"), 6);
    }

    #[test]
    fn average_length() {
        assert_eq!(average_word_length(&toks("ab abcd")), 3.0);
    }

    #[test]
    fn longest_is_stable_and_keeps_duplicates() {
        let got = longest_words(&toks("bb aaaa cc dddd aaaa e"), 4);
        let words: Vec<_> = got.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, vec!["aaaa", "dddd", "aaaa", "bb"]);
        assert_eq!(got[0].length, 4);
    }

    #[test]
    fn ttr_extremes() {
        assert_eq!(type_token_ratio(&toks("a b c d")), 1.0);
        assert_eq!(type_token_ratio(&toks("a a a a")), 0.25);
        let words = toks("the cat sat the dog ran");
        assert!((type_token_ratio(&words) - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn windows_drop_remainder() {
        let t = toks("a b a b c d e f g");
        assert_eq!(windowed_ttr(&t, 4), vec![0.5, 1.0]);
        assert!(windowed_ttr(&t, 10).is_empty());
        assert!(windowed_ttr(&t, 0).is_empty());
    }

    #[test]
    fn hapax_share() {
        let t = FrequencyTable::build(&toks("a b a c"));
        assert_eq!(hapax_percentage(&t), 50.0);
    }
}
