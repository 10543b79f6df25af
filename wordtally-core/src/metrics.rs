//! Text statistics and normalization
//!
//! Every function here is a pure mapping from its input to a value. The
//! heuristics are deliberately simple: whitespace splits words, runs of
//! `.`, `!` and `?` split sentences, and blank lines split paragraphs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Average reading speed used for the reading-time estimate
pub const WORDS_PER_MINUTE: usize = 200;

static SENTENCE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static PARAGRAPH_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NEWLINE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Statistics derived from a single text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    pub words: usize,
    pub characters: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    pub reading_time_minutes: usize,
}

impl Metrics {
    /// One-line description suitable for screen readers and status lines
    pub fn summary(&self) -> String {
        format!(
            "{} words, {} characters, {} sentences, and {} paragraphs. Estimated reading time: {} minutes.",
            self.words, self.characters, self.sentences, self.paragraphs, self.reading_time_minutes
        )
    }
}

/// Compute all statistics for `text`
pub fn compute_metrics(text: &str) -> Metrics {
    let words = count_words(text);
    let metrics = Metrics {
        words,
        characters: count_characters(text),
        sentences: count_sentences(text),
        paragraphs: count_paragraphs(text),
        reading_time_minutes: calculate_reading_time(words),
    };
    log::debug!("computed metrics: {:?}", metrics);
    metrics
}

/// Count whitespace-separated words, ignoring extra spacing
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length of the input in chars, whitespace included
pub fn count_characters(text: &str) -> usize {
    text.chars().count()
}

/// Count segments separated by runs of `.`, `!` or `?`
///
/// Text without any terminator is a single sentence. Empty segments, such as
/// the one after a trailing `?`, are not counted.
pub fn count_sentences(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    SENTENCE_BOUNDARY
        .split(text)
        .filter(|sentence| !sentence.trim().is_empty())
        .count()
}

/// Count blocks of text separated by at least one blank line
pub fn count_paragraphs(text: &str) -> usize {
    if text.trim().is_empty() {
        return 0;
    }

    PARAGRAPH_BOUNDARY
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .count()
}

/// Estimated reading time in whole minutes
///
/// Any text with words takes at least one minute. Half minutes round away
/// from zero, so 300 words reads in 2 minutes.
pub fn calculate_reading_time(word_count: usize) -> usize {
    if word_count == 0 {
        return 0;
    }

    let minutes = (word_count as f64 / WORDS_PER_MINUTE as f64).round() as usize;
    minutes.max(1)
}

/// Collapse every whitespace run to a single space and trim the result
///
/// The newline collapse runs after the whitespace collapse and so never
/// matches; it is kept so the transform stays in its established order.
pub fn clean_text(text: &str) -> String {
    let cleaned = WHITESPACE_RUN.replace_all(text, " ");
    let cleaned = NEWLINE_RUN.replace_all(&cleaned, "\n\n");
    cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_words("a  b\tc\nd"), 4);
        assert_eq!(count_words("\n\n  single  \t"), 1);
    }

    #[test]
    fn test_count_characters_is_untrimmed() {
        assert_eq!(count_characters("abc"), 3);
        assert_eq!(count_characters(""), 0);
        assert_eq!(count_characters("  a "), 4);
        assert_eq!(count_characters("café"), 4);
    }

    #[test]
    fn test_count_sentences() {
        assert_eq!(count_sentences("Hello. World!"), 2);
        assert_eq!(count_sentences("No terminator here"), 1);
        assert_eq!(count_sentences(""), 0);
        assert_eq!(count_sentences("   \n"), 0);
        assert_eq!(count_sentences("Wait... really?"), 2);
        assert_eq!(count_sentences("?!."), 0);
    }

    #[test]
    fn test_count_paragraphs() {
        assert_eq!(count_paragraphs("Para one.\n\nPara two."), 2);
        assert_eq!(count_paragraphs("Single block."), 1);
        assert_eq!(count_paragraphs(""), 0);
        assert_eq!(count_paragraphs("Line one\nline two"), 1);
        // Whitespace-only lines still separate paragraphs
        assert_eq!(count_paragraphs("One\n  \t\n\n Two\n\nThree"), 3);
        assert_eq!(count_paragraphs("\n\nLeading blank lines"), 1);
    }

    #[test]
    fn test_reading_time() {
        assert_eq!(calculate_reading_time(0), 0);
        assert_eq!(calculate_reading_time(1), 1);
        assert_eq!(calculate_reading_time(200), 1);
        assert_eq!(calculate_reading_time(400), 2);
        assert_eq!(calculate_reading_time(299), 1);
    }

    #[test]
    fn test_reading_time_rounds_half_away_from_zero() {
        assert_eq!(calculate_reading_time(100), 1);
        assert_eq!(calculate_reading_time(300), 2);
        assert_eq!(calculate_reading_time(500), 3);
        assert_eq!(calculate_reading_time(499), 2);
    }

    #[test]
    fn test_clean_text() {
        assert_eq!(clean_text("a   b"), "a b");
        assert_eq!(clean_text("  a  "), "a");
        assert_eq!(clean_text("one\n\n\n\ntwo\tthree"), "one two three");
        assert_eq!(clean_text(" \n\t "), "");
    }

    #[test]
    fn test_summary() {
        let metrics = compute_metrics("Hi there.");
        assert_eq!(
            metrics.summary(),
            "2 words, 9 characters, 1 sentences, and 1 paragraphs. Estimated reading time: 1 minutes."
        );
    }

    #[test]
    fn test_metrics_json_is_camel_case() {
        let json = serde_json::to_string(&compute_metrics("Hello world.")).unwrap();
        assert!(json.contains("\"readingTimeMinutes\":1"));
        assert!(json.contains("\"words\":2"));
    }
}
