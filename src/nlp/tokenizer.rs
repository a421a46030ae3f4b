//! Sentence and word tokenization
//!
//! Sentence boundaries come from Unicode text segmentation (UAX #29), which
//! already keeps decimal numbers ("3.14") and closing quotation marks attached
//! to the right sentence. UAX #29 does break after abbreviations followed by
//! a capitalized word ("Dr. Smith"), so segments ending in a title-like
//! abbreviation are merged with their successor, and segments ending in an
//! initial are merged only when a name follows.

use super::stopwords::StopwordFilter;
use crate::errors::Result;
use crate::types::{Sentence, SummarizerConfig};
use unicode_segmentation::UnicodeSegmentation;

/// Abbreviations that do not end a sentence when followed by a capital letter
///
/// Only words that practically never close a sentence belong here; "U.S.",
/// "Inc." or "Oct." regularly do and are left to UAX #29.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "mt", "gen", "col", "lt", "sgt", "capt", "gov",
    "sen", "rep", "rev", "hon", "pres", "vs", "e.g", "i.e", "cf", "approx", "dept", "fig", "vol",
];

/// Capitalized words that usually open a new sentence rather than continue a name
const SENTENCE_STARTERS: &[&str] = &[
    "a", "after", "also", "an", "and", "as", "at", "because", "before", "but", "by", "during",
    "each", "every", "for", "from", "he", "her", "his", "how", "however", "i", "if", "in", "it",
    "its", "many", "meanwhile", "most", "my", "no", "now", "on", "once", "one", "our", "she",
    "since", "so", "some", "still", "that", "the", "their", "then", "there", "these", "they",
    "this", "those", "to", "we", "what", "when", "where", "while", "why", "with", "yet", "you",
];

/// Leading/trailing characters ignored when looking for an abbreviation
const WRAPPING_PUNCT: &[char] = &['"', '\'', '(', '[', '\u{201c}', '\u{2018}'];

/// Splits text into sentences and sentences into normalized word tokens
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer that does not filter stopwords
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with the given stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// Create a tokenizer as described by the configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::with_stopwords(StopwordFilter::from_config(config))
    }

    /// Access the stopword filter
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Tokenize text into an ordered sequence of sentences
    ///
    /// Empty or whitespace-only text yields no sentences.
    pub fn tokenize(&self, text: &str) -> Vec<Sentence> {
        split_sentence_spans(text)
            .into_iter()
            .enumerate()
            .map(|(index, (start, end))| {
                let raw = &text[start..end];
                Sentence::new(raw, start, end, index, self.words(raw))
            })
            .collect()
    }

    /// Tokenize raw bytes, rejecting input that is not valid UTF-8
    pub fn tokenize_bytes(&self, bytes: &[u8]) -> Result<Vec<Sentence>> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.tokenize(text))
    }

    /// Normalize a sentence into word tokens
    ///
    /// Tokens are lowercased; anything that is not purely alphanumeric
    /// ("don't", "3.5", "--") is discarded, as are stopwords.
    pub fn words(&self, sentence: &str) -> Vec<String> {
        sentence
            .unicode_words()
            .filter(|w| w.chars().all(char::is_alphanumeric))
            .map(str::to_lowercase)
            .filter(|w| !self.stopwords.is_stopword(w))
            .collect()
    }
}

/// Compute trimmed byte spans of the sentences in `text`
fn split_sentence_spans(text: &str) -> Vec<(usize, usize)> {
    let segments: Vec<(usize, usize)> = text
        .split_sentence_bound_indices()
        .filter_map(|(offset, segment)| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return None;
            }
            let start = offset + (segment.len() - segment.trim_start().len());
            Some((start, start + trimmed.len()))
        })
        .collect();

    let mut spans = Vec::with_capacity(segments.len());
    let mut pending: Option<usize> = None;

    for (i, &(start, end)) in segments.iter().enumerate() {
        let span_start = pending.take().unwrap_or(start);
        let next = segments.get(i + 1).map(|&(s, e)| &text[s..e]);

        if continues_into(&text[span_start..end], next) {
            pending = Some(span_start);
        } else {
            spans.push((span_start, end));
        }
    }

    spans
}

/// Whether a UAX #29 break after `segment` falls inside an abbreviation
///
/// Known abbreviations always continue. A single capital initial continues
/// only into another initial or a name ("J. R. Tolkien"), not into a
/// sentence opener ("Plan B. Then ...").
fn continues_into(segment: &str, next: Option<&str>) -> bool {
    let Some(next) = next else {
        return false;
    };
    let Some(stem) = final_stem(segment) else {
        return false;
    };

    if is_initial(stem) {
        return starts_with_name(next);
    }

    let lower = stem.to_lowercase();
    ABBREVIATIONS.contains(&lower.as_str())
}

/// The last word of `segment` without its closing period, if it has one
fn final_stem(segment: &str) -> Option<&str> {
    let last = segment.split_whitespace().last()?;
    let stem = last.strip_suffix('.')?;
    Some(stem.trim_start_matches(WRAPPING_PUNCT))
}

fn is_initial(word: &str) -> bool {
    let mut chars = word.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_uppercase())
}

/// Whether `segment` opens with an initial or a capitalized non-opener word
fn starts_with_name(segment: &str) -> bool {
    let Some(first) = segment.split_whitespace().next() else {
        return false;
    };
    let first = first.trim_start_matches(WRAPPING_PUNCT);

    if first.strip_suffix('.').is_some_and(is_initial) {
        return true;
    }

    if !first.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }

    let word = first
        .trim_end_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase();
    !SENTENCE_STARTERS.contains(&word.as_str())
}
