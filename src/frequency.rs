//! # Frequency Table
//! Token -> occurrence count, built in one pass and queried many times.
//!
//! First-appearance order is remembered so that ranking ties resolve the same
//! way on every call (earlier token first).

use std::collections::HashMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    /// Distinct tokens in order of first appearance.
    order: Vec<String>,
    total: usize,
}

impl FrequencyTable {
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::with_capacity(tokens.len() / 2);
        let mut order = Vec::new();
        for t in tokens {
            let t = t.as_ref();
            match counts.get_mut(t) {
                Some(c) => *c += 1,
                None => {
                    counts.insert(t.to_string(), 1);
                    order.push(t.to_string());
                }
            }
        }
        Self {
            counts,
            order,
            total: tokens.len(),
        }
    }

    pub fn count(&self, token: &str) -> usize {
        self.counts.get(token).copied().unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn distinct(&self) -> usize {
        self.order.len()
    }

    /// Number of tokens the table was built from.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Distinct tokens with counts, in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.order.iter().map(|w| (w.as_str(), self.count(w)))
    }

    /// The `n` most frequent tokens, count descending, ties by first appearance.
    pub fn top_n(&self, n: usize) -> Vec<FrequencyEntry> {
        let mut ranked: Vec<(&str, usize)> = self.iter().collect();
        // stable sort keeps first-appearance order among equal counts
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(w, c)| FrequencyEntry {
                word: w.to_string(),
                count: c,
            })
            .collect()
    }

    /// Tokens occurring exactly once across the whole sequence.
    pub fn hapax_legomena(&self) -> Vec<String> {
        self.iter()
            .filter(|&(_, c)| c == 1)
            .map(|(w, _)| w.to_string())
            .collect()
    }
}
