//! Plain-text rendering of a report for terminals.

use std::fmt::Write as _;

use crate::report::AnalysisReport;

const BAR_WIDTH: usize = 30;

pub fn text_summary(r: &AnalysisReport) -> String {
    let mut out = String::new();
    // writes into a String cannot fail
    let _ = write_summary(&mut out, r);
    out
}

fn write_summary(out: &mut String, r: &AnalysisReport) -> std::fmt::Result {
    for w in &r.warnings {
        writeln!(out, "WARNING: {w}")?;
    }

    heading(out, "Word & Character Count")?;
    writeln!(out, "Total Words: {}", r.counts.word_count)?;
    writeln!(out, "Total Characters: {}", r.counts.char_count)?;
    writeln!(
        out,
        "Average Word Length: {:.2} characters",
        r.counts.average_word_length
    )?;
    writeln!(out, "{} Longest Words:", r.counts.longest_words.len())?;
    for w in &r.counts.longest_words {
        writeln!(out, "  {} ({} characters)", w.word, w.length)?;
    }

    heading(out, "Sentence Analysis")?;
    writeln!(out, "Total Sentences: {}", r.sentences.count)?;
    writeln!(
        out,
        "Average Sentence Length: {:.2} words",
        r.sentences.average_length
    )?;
    if !r.sentences.longest.is_empty() {
        writeln!(out, "Longest Sentences:")?;
        for s in &r.sentences.longest {
            writeln!(out, "  {}", s.replace('\n', " "))?;
        }
    }
    bars(
        out,
        r.sentences
            .lengths
            .iter()
            .enumerate()
            .map(|(i, &n)| (format!("#{i}"), n as f64)),
    )?;
    prompts(out, r.sentences.prompts)?;

    heading(out, "Type-Token Ratio")?;
    writeln!(
        out,
        "Type-Token Ratio (TTR): {:.2}",
        r.vocabulary.type_token_ratio
    )?;
    if let Some(series) = &r.vocabulary.windowed_ttr {
        writeln!(
            out,
            "TTR over time (window of {} tokens):",
            r.vocabulary.window_size
        )?;
        bars(
            out,
            series
                .iter()
                .enumerate()
                .map(|(i, &v)| (format!("w{i}"), v)),
        )?;
    }
    writeln!(
        out,
        "Number of Hapax Legomena (words that occur only once): {}",
        r.vocabulary.hapax_count
    )?;
    writeln!(
        out,
        "Percentage of Hapax Legomena: {:.2}%",
        r.vocabulary.hapax_percentage
    )?;
    prompts(out, r.vocabulary.prompts)?;

    heading(out, "Word Frequency Distribution")?;
    if !r.frequency.top.is_empty() {
        writeln!(out, "Top {} Most Frequent Words:", r.frequency.top.len())?;
        bars(
            out,
            r.frequency
                .top
                .iter()
                .map(|e| (e.word.clone(), e.count as f64)),
        )?;
        prompts(out, r.frequency.prompts)?;
    }

    heading(out, "Sentiment Analysis")?;
    if !r.sentiment.scores.is_empty() {
        writeln!(
            out,
            "Average Sentiment Score: {:.2}",
            r.sentiment.document_score
        )?;
        writeln!(out, "Overall Sentiment: {}", r.sentiment.polarity.label())?;
        for (i, s) in r.sentiment.scores.iter().enumerate() {
            writeln!(out, "  #{i:<3} {s:+.3}")?;
        }
        prompts(out, r.sentiment.prompts)?;
    }
    Ok(())
}

fn heading(out: &mut String, title: &str) -> std::fmt::Result {
    writeln!(out, "\n== {title} ==")
}

fn prompts(out: &mut String, prompts: &[&str]) -> std::fmt::Result {
    writeln!(out, "Writer's Reflection:")?;
    for p in prompts {
        writeln!(out, "  - {p}")?;
    }
    Ok(())
}

/// Horizontal bars scaled to the largest value.
fn bars(out: &mut String, rows: impl Iterator<Item = (String, f64)>) -> std::fmt::Result {
    let rows: Vec<(String, f64)> = rows.collect();
    let max = rows.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_w = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);
    for (label, v) in &rows {
        let n = if max > 0.0 {
            ((v / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        writeln!(out, "  {label:<label_w$} {} {v}", "#".repeat(n))?;
    }
    Ok(())
}
