//! Whole-word highlighting of selected words inside the original document.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

/// A matched occurrence; `start..end` are byte offsets into the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HighlightSpan {
    pub start: usize,
    pub end: usize,
    /// The word that was searched for (lowercase form).
    pub word: String,
}

/// Opening/closing markup wrapped around each highlighted occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markup {
    pub open: String,
    pub close: String,
    /// HTML-escape document text outside and inside the markup.
    pub escape_html: bool,
}

impl Default for Markup {
    fn default() -> Self {
        Self {
            open: r#"<span style="color: red; font-weight: bold;">"#.to_string(),
            close: "</span>".to_string(),
            escape_html: true,
        }
    }
}

/// Case-insensitive whole-word matches of every word in `words`.
///
/// Word boundaries are only required on sides where the word itself starts or
/// ends with a word character, so "cat" never matches inside "cats". Repeated
/// words are searched once; overlapping matches keep the earliest, longest one.
pub fn highlight_spans<S: AsRef<str>>(text: &str, words: &[S]) -> Vec<HighlightSpan> {
    let mut seen: Vec<&str> = Vec::new();
    let mut spans = Vec::new();

    for w in words {
        let w = w.as_ref();
        if w.is_empty() || seen.contains(&w) {
            continue;
        }
        seen.push(w);

        let Some(re) = whole_word_regex(w) else {
            continue;
        };
        spans.extend(re.find_iter(text).map(|m| HighlightSpan {
            start: m.start(),
            end: m.end(),
            word: w.to_string(),
        }));
    }

    spans.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));
    let mut out: Vec<HighlightSpan> = Vec::with_capacity(spans.len());
    for s in spans {
        if out.last().is_some_and(|last| s.start < last.end) {
            continue;
        }
        out.push(s);
    }
    out
}

/// Render `text` with every span wrapped in `markup`. Spans must be sorted and
/// non-overlapping, as returned by [`highlight_spans`].
pub fn render_highlighted(text: &str, spans: &[HighlightSpan], markup: &Markup) -> String {
    let mut out = String::with_capacity(text.len() + spans.len() * 48);
    let mut cursor = 0;
    for s in spans {
        if s.start < cursor || s.end > text.len() {
            continue;
        }
        push_text(&mut out, &text[cursor..s.start], markup.escape_html);
        out.push_str(&markup.open);
        push_text(&mut out, &text[s.start..s.end], markup.escape_html);
        out.push_str(&markup.close);
        cursor = s.end;
    }
    push_text(&mut out, &text[cursor..], markup.escape_html);
    out
}

fn push_text(out: &mut String, segment: &str, escape: bool) {
    if escape {
        out.push_str(&html_escape::encode_text(segment));
    } else {
        out.push_str(segment);
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn whole_word_regex(word: &str) -> Option<Regex> {
    let first = word.chars().next()?;
    let last = word.chars().next_back()?;
    let mut pattern = String::new();
    if is_word_char(first) {
        pattern.push_str(r"\b");
    }
    // tokens store ASCII apostrophes; documents often carry typographic ones
    let body: Vec<String> = word
        .split(|c: char| c == '\'' || c == '’')
        .map(regex::escape)
        .collect();
    pattern.push_str(&body.join("['’]"));
    if is_word_char(last) {
        pattern.push_str(r"\b");
    }
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .ok()
}
