//! Word-budget sentence selection
//!
//! Sentences are visited by rank score (descending, ties by original index)
//! and taken whole while the running word count stays within the budget.
//! The walk stops at the first sentence that would overflow. The chosen
//! sentences are finally restored to document order.

use crate::types::{Sentence, SummarizerConfig};

/// Result of sentence selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    /// Indices of the selected sentences, in document order
    pub indices: Vec<usize>,
    /// Total words of the selected sentences
    pub word_count: usize,
    /// True when the top sentence alone exceeded the budget and was taken anyway
    pub overflowed: bool,
}

impl Selection {
    /// Check if nothing was selected
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Join the selected sentence texts with single spaces
    pub fn join(&self, sentences: &[Sentence]) -> String {
        self.indices
            .iter()
            .filter_map(|&i| sentences.get(i))
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Greedy word-budget sentence selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetSelector {
    /// Maximum total words of the selected sentences
    word_budget: usize,
}

impl Default for BudgetSelector {
    fn default() -> Self {
        Self { word_budget: 100 }
    }
}

impl BudgetSelector {
    /// Create a new selector with the default budget of 100 words
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selector using the budget of a summarizer configuration
    pub fn from_config(config: &SummarizerConfig) -> Self {
        Self::new().with_word_budget(config.word_budget)
    }

    /// Set the word budget
    pub fn with_word_budget(mut self, word_budget: usize) -> Self {
        self.word_budget = word_budget;
        self
    }

    /// The word budget in effect
    pub fn word_budget(&self) -> usize {
        self.word_budget
    }

    /// Select sentences under the word budget
    ///
    /// `scores[i]` is the rank score of `sentences[i]`. If the highest-scored
    /// sentence alone exceeds the budget it is returned on its own (with
    /// `overflowed` set) so that a non-empty input never selects nothing.
    pub fn select(&self, sentences: &[Sentence], scores: &[f64]) -> Selection {
        if sentences.is_empty() {
            return Selection::default();
        }

        let score_of = |i: usize| scores.get(i).copied().unwrap_or(0.0);
        let mut order: Vec<usize> = (0..sentences.len()).collect();
        order.sort_by(|&a, &b| {
            score_of(b)
                .total_cmp(&score_of(a))
                .then(sentences[a].index.cmp(&sentences[b].index))
        });

        let mut chosen: Vec<usize> = Vec::new();
        let mut total = 0;
        for &i in &order {
            let words = sentences[i].word_count;
            if total + words > self.word_budget {
                break;
            }
            chosen.push(i);
            total += words;
        }

        let mut overflowed = false;
        if chosen.is_empty() {
            let top = order[0];
            chosen.push(top);
            total = sentences[top].word_count;
            overflowed = true;
        }

        chosen.sort_by_key(|&i| sentences[i].index);

        Selection {
            indices: chosen,
            word_count: total,
            overflowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_sentences(texts: &[&str]) -> Vec<Sentence> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| Sentence::new(*t, 0, t.len(), i, Vec::new()))
            .collect()
    }

    #[test]
    fn test_selects_by_score_within_budget() {
        let sentences = make_sentences(&[
            "one two three",
            "four five six seven",
            "eight nine",
            "ten eleven twelve thirteen fourteen",
        ]);
        let scores = [0.1, 0.4, 0.3, 0.2];

        let selection = BudgetSelector::new()
            .with_word_budget(6)
            .select(&sentences, &scores);

        // 1 (4 words) + 2 (2 words) = 6; sentence 3 would overflow.
        assert_eq!(selection.indices, vec![1, 2]);
        assert_eq!(selection.word_count, 6);
        assert!(!selection.overflowed);
    }

    #[test]
    fn test_stops_at_first_overflow() {
        let sentences = make_sentences(&["a b c d e", "f g h i j k l", "m"]);
        let scores = [0.5, 0.3, 0.2];

        let selection = BudgetSelector::new()
            .with_word_budget(8)
            .select(&sentences, &scores);

        // The short third sentence would fit but the walk already stopped.
        assert_eq!(selection.indices, vec![0]);
        assert_eq!(selection.word_count, 5);
    }

    #[test]
    fn test_document_order_restored() {
        let sentences = make_sentences(&["first sentence", "second sentence", "third sentence"]);
        let scores = [0.2, 0.3, 0.5];

        let selection = BudgetSelector::new().select(&sentences, &scores);

        assert_eq!(selection.indices, vec![0, 1, 2]);
        assert_eq!(
            selection.join(&sentences),
            "first sentence second sentence third sentence"
        );
    }

    #[test]
    fn test_ties_broken_by_index() {
        let sentences = make_sentences(&["a b", "c d", "e f", "g h", "i j"]);
        let scores = [0.2; 5];

        let selection = BudgetSelector::new()
            .with_word_budget(5)
            .select(&sentences, &scores);

        assert_eq!(selection.indices, vec![0, 1]);
    }

    #[test]
    fn test_oversized_top_sentence_fallback() {
        let sentences = make_sentences(&[
            "this top ranked sentence has far more than five words in it",
            "tiny one",
        ]);
        let scores = [0.9, 0.1];

        let selection = BudgetSelector::new()
            .with_word_budget(5)
            .select(&sentences, &scores);

        assert_eq!(selection.indices, vec![0]);
        assert_eq!(selection.word_count, 12);
        assert!(selection.overflowed);
    }

    #[test]
    fn test_empty_input() {
        let selection = BudgetSelector::new().select(&[], &[]);
        assert!(selection.is_empty());
        assert_eq!(selection.join(&[]), "");
    }

    #[test]
    fn test_from_config_uses_budget() {
        let config = SummarizerConfig::new().with_word_budget(3);
        let sentences = make_sentences(&["a b", "c d"]);
        let selector = BudgetSelector::from_config(&config);
        assert_eq!(selector.word_budget(), 3);
        let selection = selector.select(&sentences, &[0.6, 0.4]);
        assert_eq!(selection.indices, vec![0]);
        assert_eq!(BudgetSelector::new().word_budget(), 100);
    }
}
