//! Core types for rapid_summarizer
//!
//! This module defines the sentence representation shared by every pipeline
//! stage and the summarizer configuration.

use crate::errors::{Result, SummarizeError};
use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text
///
/// Produced once by the tokenizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text, exactly as it appears in the (normalized) input
    pub text: String,
    /// Start byte offset in the normalized input
    pub start: usize,
    /// End byte offset in the normalized input
    pub end: usize,
    /// Sentence index within the document (defines canonical order)
    pub index: usize,
    /// Normalized word tokens (lowercased, alphanumeric, optionally stopword-filtered)
    pub tokens: Vec<String>,
    /// Number of whitespace-delimited words in `text`
    pub word_count: usize,
}

impl Sentence {
    /// Create a new sentence
    pub fn new(
        text: impl Into<String>,
        start: usize,
        end: usize,
        index: usize,
        tokens: Vec<String>,
    ) -> Self {
        let text = text.into();
        let word_count = count_words(&text);
        Self {
            text,
            start,
            end,
            index,
            tokens,
            word_count,
        }
    }

    /// Whether tokenization left no content tokens in this sentence
    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }
}

/// Count whitespace-delimited words
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for the summarizer
///
/// All fields have defaults, so a partial JSON object such as
/// `{"word_budget": 60}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Maximum words in the output summary (the top sentence may overflow it)
    pub word_budget: usize,
    /// Input is truncated to this many words before any processing
    pub truncate_input_words: usize,
    /// Inputs with fewer words than this are echoed back verbatim
    pub min_words_for_summarization: usize,
    /// Damping factor for PageRank (typically 0.85)
    pub damping: f64,
    /// Convergence threshold on the L1 change between iterations
    pub convergence_threshold: f64,
    /// Maximum iterations for PageRank convergence
    pub max_iterations: usize,
    /// Exclude stopwords from the similarity vectors
    pub filter_stopwords: bool,
    /// Language code for stopwords (e.g., "en", "de", "fr")
    pub language: String,
    /// Additional stopwords (extends the built-in list)
    pub stopwords: Vec<String>,
    /// Sentence count at which similarity rows are computed in parallel
    pub parallel_threshold: usize,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            word_budget: 100,
            truncate_input_words: 500,
            min_words_for_summarization: 30,
            damping: 0.85,
            convergence_threshold: 1e-6,
            max_iterations: 100,
            filter_stopwords: true,
            language: "en".to_string(),
            stopwords: Vec::new(),
            parallel_threshold: 64,
        }
    }
}

impl SummarizerConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a (possibly partial) JSON configuration and validate it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.word_budget == 0 {
            return Err(SummarizeError::invalid_config("word_budget must be > 0"));
        }

        if self.truncate_input_words == 0 {
            return Err(SummarizeError::invalid_config(
                "truncate_input_words must be > 0",
            ));
        }

        if !(0.0..=1.0).contains(&self.damping) {
            return Err(SummarizeError::invalid_config(format!(
                "damping must be between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(SummarizeError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0) || !self.convergence_threshold.is_finite() {
            return Err(SummarizeError::invalid_config(
                "convergence_threshold must be a positive finite number",
            ));
        }

        Ok(())
    }

    /// Builder method: set the summary word budget
    pub fn with_word_budget(mut self, word_budget: usize) -> Self {
        self.word_budget = word_budget;
        self
    }

    /// Builder method: set the input truncation limit (in words)
    pub fn with_truncate_input_words(mut self, words: usize) -> Self {
        self.truncate_input_words = words;
        self
    }

    /// Builder method: set the verbatim-echo threshold (in words)
    pub fn with_min_words_for_summarization(mut self, words: usize) -> Self {
        self.min_words_for_summarization = words;
        self
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: toggle stopword filtering
    pub fn with_filter_stopwords(mut self, filter: bool) -> Self {
        self.filter_stopwords = filter;
        self
    }

    /// Builder method: set stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Builder method: add custom stopwords
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: set the parallel similarity threshold
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_word_count() {
        let s = Sentence::new("The quick  brown fox.", 0, 21, 0, vec!["quick".into()]);
        assert_eq!(s.word_count, 4);
        assert!(s.has_tokens());
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = SummarizerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.word_budget, 100);
        assert_eq!(config.truncate_input_words, 500);
        assert_eq!(config.min_words_for_summarization, 30);
        assert!(config.filter_stopwords);
    }

    #[test]
    fn test_zero_budget_rejected() {
        let config = SummarizerConfig::new().with_word_budget(0);
        assert!(matches!(
            config.validate(),
            Err(SummarizeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_damping_out_of_range_rejected() {
        assert!(SummarizerConfig::new().with_damping(1.5).validate().is_err());
        assert!(SummarizerConfig::new().with_damping(-0.1).validate().is_err());
        assert!(SummarizerConfig::new().with_damping(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_non_positive_threshold_rejected() {
        assert!(SummarizerConfig::new()
            .with_convergence_threshold(0.0)
            .validate()
            .is_err());
        assert!(SummarizerConfig::new()
            .with_convergence_threshold(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_zero_iterations_rejected() {
        assert!(SummarizerConfig::new()
            .with_max_iterations(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_partial_json_config() {
        let config = SummarizerConfig::from_json_str(r#"{ "word_budget": 60 }"#).unwrap();
        assert_eq!(config.word_budget, 60);
        assert_eq!(config.max_iterations, 100);
    }

    #[test]
    fn test_negative_budget_in_json_rejected() {
        let err = SummarizerConfig::from_json_str(r#"{ "word_budget": -5 }"#).unwrap_err();
        assert!(matches!(err, SummarizeError::InvalidConfig(_)));
    }

    #[test]
    fn test_json_config_validated() {
        let err = SummarizerConfig::from_json_str(r#"{ "damping": 2.0 }"#).unwrap_err();
        assert!(err.to_string().contains("damping"));
    }

    #[test]
    fn test_custom_stopwords_builder() {
        let config = SummarizerConfig::new().with_stopwords(["foo", "bar"]);
        assert_eq!(config.stopwords, vec!["foo".to_string(), "bar".to_string()]);
    }
}
