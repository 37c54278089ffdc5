//! Sentence-level pacing statistics.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceStats {
    pub count: usize,
    /// Analysed words per sentence; 0 without sentences.
    pub average_length: f64,
    /// Longest sentences by character length, longest first.
    pub longest: Vec<String>,
    /// Whitespace-separated words per sentence, in sentence order.
    pub lengths: Vec<usize>,
}

pub fn sentence_stats(sentences: &[String], word_count: usize, longest_k: usize) -> SentenceStats {
    let count = sentences.len();
    let average_length = if count > 0 {
        word_count as f64 / count as f64
    } else {
        0.0
    };

    let mut by_len: Vec<&String> = sentences.iter().collect();
    by_len.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    let longest = by_len.into_iter().take(longest_k).cloned().collect();

    SentenceStats {
        count,
        average_length,
        longest,
        lengths: sentences
            .iter()
            .map(|s| s.split_whitespace().count())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let s = sentence_stats(&[], 0, 2);
        assert_eq!(s.count, 0);
        assert_eq!(s.average_length, 0.0);
        assert!(s.longest.is_empty());
        assert!(s.lengths.is_empty());
    }

    #[test]
    fn lengths_and_longest() {
        let sents = vec![
            "Run.".to_string(),
            "The dog ran far away.".to_string(),
            "It was late.".to_string(),
        ];
        let s = sentence_stats(&sents, 9, 2);
        assert_eq!(s.count, 3);
        assert_eq!(s.average_length, 3.0);
        assert_eq!(s.lengths, vec![1, 5, 3]);
        assert_eq!(s.longest, vec!["The dog ran far away.", "It was late."]);
    }
}
