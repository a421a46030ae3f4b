//! Summarization output
//!
//! A [`Summary`] is the final string plus what happened on the way to it:
//! which short-circuit applied, which sentences were chosen and how the
//! ranking went.

pub mod selector;

use serde::{Deserialize, Serialize};

/// Returned for empty or whitespace-only input
pub const NO_CONTENT: &str = "No summary available.";

/// Returned when selection produced nothing printable
pub const SUMMARY_UNAVAILABLE: &str = "Summary unavailable.";

/// Marker appended to degraded output by [`crate::summarize_lossy`]
pub const UNAVAILABLE_MARKER: &str = "[summary unavailable]";

/// How a summary was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryKind {
    /// Input was empty; text is [`NO_CONTENT`]
    Empty,
    /// Input was too short to summarize and is echoed back
    Verbatim,
    /// Input held exactly one sentence, returned unmodified
    SingleSentence,
    /// Sentences were ranked and selected under the word budget
    Ranked,
    /// Ranking ran but produced blank output; text is [`SUMMARY_UNAVAILABLE`]
    Unavailable,
}

/// The outcome of one summarization call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The summary text
    pub text: String,
    /// How the text was produced
    pub kind: SummaryKind,
    /// Indices of the selected sentences, in document order
    pub sentences: Vec<usize>,
    /// Number of sentences found in the (truncated) input
    pub sentence_count: usize,
    /// Whitespace-delimited words in `text`
    pub word_count: usize,
    /// True when the top sentence alone exceeded the word budget
    pub overflowed: bool,
    /// PageRank iterations (0 when ranking did not run)
    pub iterations: usize,
    /// Whether PageRank converged (true when ranking did not run)
    pub converged: bool,
}

impl Summary {
    /// A summary that did not go through ranking
    pub(crate) fn shortcut(text: impl Into<String>, kind: SummaryKind) -> Self {
        let text = text.into();
        let word_count = crate::types::count_words(&text);
        Self {
            text,
            kind,
            sentences: Vec::new(),
            sentence_count: 0,
            word_count,
            overflowed: false,
            iterations: 0,
            converged: true,
        }
    }

    /// Whether sentences were ranked to produce this summary
    pub fn is_ranked(&self) -> bool {
        self.kind == SummaryKind::Ranked
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Summary> for String {
    fn from(summary: Summary) -> Self {
        summary.text
    }
}
