//! Stopword filtering
//!
//! Closed per-language stopword lists from the `stop-words` crate, optionally
//! extended with caller-provided words. A filter is built once and only read
//! afterwards, so a single instance can be shared across threads.

use crate::types::SummarizerConfig;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for removing stopwords from token streams
#[derive(Debug, Clone, Default)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl StopwordFilter {
    /// Create a stopword filter for the given language
    ///
    /// Unknown language codes fall back to English.
    pub fn new(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Build the filter described by a summarizer configuration
    ///
    /// When stopword filtering is disabled the filter is empty and custom
    /// stopwords are ignored.
    pub fn from_config(config: &SummarizerConfig) -> Self {
        if !config.filter_stopwords {
            return Self::empty();
        }

        let mut filter = Self::new(&config.language);
        filter
            .stopwords
            .extend(config.stopwords.iter().map(|w| w.to_lowercase()));
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords(&mut self, words: &[&str]) {
        self.stopwords.extend(words.iter().map(|w| w.to_lowercase()));
    }

    /// Check if a lowercase token is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => LANGUAGE::English,
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}
