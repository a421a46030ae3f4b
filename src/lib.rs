//! # rapid_summarizer
//!
//! Extractive text summarization with TextRank.
//!
//! Sentences become nodes of a weighted graph whose edges are bag-of-words
//! cosine similarities; PageRank scores the nodes and the best-scored
//! sentences are kept, whole and in document order, under a word budget.
//!
//! ## Features
//!
//! - **Deterministic**: ties are broken by sentence index, no randomness
//! - **Unicode-aware**: UAX #29 sentence and word segmentation
//! - **Shareable**: a [`Summarizer`] is `Send + Sync` and batches over rayon
//!
//! ```no_run
//! use rapid_summarizer::{Summarizer, SummarizerConfig};
//!
//! let summarizer = Summarizer::new(SummarizerConfig::new().with_word_budget(60))?;
//! let summary = summarizer.summarize("Some long article text ...")?;
//! println!("{}", summary.text);
//! # Ok::<(), rapid_summarizer::SummarizeError>(())
//! ```

pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod similarity;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{Sentence, SummarizerConfig};

// Re-export main functionality
pub use graph::{builder::GraphBuilder, csr::CsrGraph};
pub use nlp::{stopwords::StopwordFilter, tokenizer::Tokenizer};
pub use pagerank::{standard::StandardPageRank, PageRankResult};
pub use pipeline::observer::{NoopObserver, PipelineObserver, StageReport, StageTimingObserver};
pub use pipeline::runner::Summarizer;
pub use similarity::SimilarityMatrix;
pub use summarizer::selector::BudgetSelector;
pub use summarizer::{Summary, SummaryKind, NO_CONTENT, SUMMARY_UNAVAILABLE, UNAVAILABLE_MARKER};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` with the default configuration
pub fn summarize(text: &str) -> Result<String> {
    Ok(Summarizer::new(SummarizerConfig::default())?
        .summarize(text)?
        .text)
}

/// Summarize `text` with a custom configuration
pub fn summarize_with_config(text: &str, config: &SummarizerConfig) -> Result<Summary> {
    Summarizer::new(config.clone())?.summarize(text)
}

/// Summarize raw bytes; invalid UTF-8 is a [`SummarizeError::Tokenization`]
pub fn summarize_bytes(bytes: &[u8], config: &SummarizerConfig) -> Result<Summary> {
    Summarizer::new(config.clone())?.summarize_bytes(bytes)
}

/// Summarize `text`, never failing
///
/// Any error is logged and replaced by the first `word_budget` words of the
/// input followed by [`UNAVAILABLE_MARKER`].
pub fn summarize_lossy(text: &str, config: &SummarizerConfig) -> String {
    match summarize_with_config(text, config) {
        Ok(summary) => summary.text,
        Err(err) => {
            #[cfg(feature = "tracing")]
            tracing::error!(code = err.code(), error = %err, "summarization failed; degrading");
            #[cfg(not(feature = "tracing"))]
            let _ = err;
            degraded(text, config)
        }
    }
}

fn degraded(text: &str, config: &SummarizerConfig) -> String {
    let limit = if config.word_budget == 0 {
        SummarizerConfig::default().word_budget
    } else {
        config.word_budget
    };
    let prefix = text.split_whitespace().take(limit).collect::<Vec<_>>().join(" ");
    if prefix.is_empty() {
        UNAVAILABLE_MARKER.to_string()
    } else {
        format!("{prefix} {UNAVAILABLE_MARKER}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ARTICLE: &str = "Inflation pushed mortgage lenders into panic last quarter. \
        Mortgage lenders blamed inflation for the sudden panic in housing markets. \
        The football goalkeeper saved a penalty in the final minute. \
        Lenders expect inflation to ease by winter as housing demand cools. \
        Central bankers signalled that inflation remains the main threat to housing.";

    #[test]
    fn test_summarize_default() {
        assert_eq!(summarize("").unwrap(), NO_CONTENT);
        let text = summarize(ARTICLE).unwrap();
        assert!(!text.is_empty());
        assert!(ARTICLE.contains(text.split(". ").next().unwrap()));
    }

    #[test]
    fn test_summarize_with_config_rejects_invalid() {
        let config = SummarizerConfig::new().with_damping(3.0);
        let err = summarize_with_config(ARTICLE, &config).unwrap_err();
        assert_eq!(err.code(), "invalid_config");
    }

    #[test]
    fn test_summarize_bytes_rejects_invalid_utf8() {
        let err = summarize_bytes(b"caf\xe9 au lait", &SummarizerConfig::default()).unwrap_err();
        assert!(matches!(err, SummarizeError::Tokenization(_)));
    }

    #[test]
    fn test_lossy_matches_strict_on_success() {
        let config = SummarizerConfig::new().with_word_budget(20);
        let strict = summarize_with_config(ARTICLE, &config).unwrap();
        assert_eq!(summarize_lossy(ARTICLE, &config), strict.text);
    }

    #[test]
    fn test_lossy_degrades_on_error() {
        let config = SummarizerConfig::new().with_max_iterations(0);
        let text = summarize_lossy(ARTICLE, &config);
        assert!(text.starts_with("Inflation pushed mortgage lenders"));
        assert!(text.ends_with(UNAVAILABLE_MARKER));
    }

    #[test]
    fn test_lossy_prefix_is_bounded() {
        let config = SummarizerConfig::new().with_word_budget(3).with_damping(-1.0);
        assert_eq!(
            summarize_lossy(ARTICLE, &config),
            format!("Inflation pushed mortgage {UNAVAILABLE_MARKER}")
        );
        assert_eq!(summarize_lossy("   ", &config), UNAVAILABLE_MARKER);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
