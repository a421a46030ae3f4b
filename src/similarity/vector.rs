//! Frequency vectors over a shared vocabulary
//!
//! For a sentence pair the vocabulary is the sorted, deduplicated union of
//! both token lists. Each sentence becomes a term-count vector over that
//! vocabulary and the pair's similarity is the cosine of the two vectors.

use crate::types::Sentence;

/// Sorted, deduplicated union of the tokens of two sentences
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary<'a> {
    words: Vec<&'a str>,
}

impl<'a> Vocabulary<'a> {
    /// Build the shared vocabulary of a token-list pair
    pub fn from_pair(a: &'a [String], b: &'a [String]) -> Self {
        let mut words: Vec<&str> = a.iter().chain(b.iter()).map(String::as_str).collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Position of a word in the vocabulary
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.words.binary_search(&word).ok()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the vocabulary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the words in sorted order
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().copied()
    }
}

/// Term counts of one sentence over a [`Vocabulary`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyVector {
    /// Count per vocabulary position
    pub counts: Vec<f64>,
}

impl FrequencyVector {
    /// Count how often each vocabulary word occurs in `tokens`
    pub fn over_vocabulary(tokens: &[String], vocabulary: &Vocabulary<'_>) -> Self {
        let mut counts = vec![0.0; vocabulary.len()];
        for token in tokens {
            if let Some(i) = vocabulary.index_of(token) {
                counts[i] += 1.0;
            }
        }
        Self { counts }
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.counts.iter().map(|c| c * c).sum::<f64>().sqrt()
    }

    /// Whether every entry is zero
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&c| c == 0.0)
    }

    /// Cosine similarity with another vector over the same vocabulary
    ///
    /// Cosine is undefined at the zero vector; that case is defined as 0.
    pub fn cosine_similarity(&self, other: &FrequencyVector) -> f64 {
        if self.is_zero() || other.is_zero() {
            return 0.0;
        }

        let dot: f64 = self
            .counts
            .iter()
            .zip(other.counts.iter())
            .map(|(a, b)| a * b)
            .sum();

        (dot / (self.norm() * other.norm())).clamp(0.0, 1.0)
    }
}

/// Similarity of two sentences in `[0, 1]`
///
/// Returns 0 when either sentence has no tokens.
pub fn similarity(a: &Sentence, b: &Sentence) -> f64 {
    if !a.has_tokens() || !b.has_tokens() {
        return 0.0;
    }

    let vocabulary = Vocabulary::from_pair(&a.tokens, &b.tokens);
    let va = FrequencyVector::over_vocabulary(&a.tokens, &vocabulary);
    let vb = FrequencyVector::over_vocabulary(&b.tokens, &vocabulary);
    va.cosine_similarity(&vb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(index: usize, tokens: &[&str]) -> Sentence {
        let text = tokens.join(" ");
        let len = text.len();
        Sentence::new(
            text,
            0,
            len,
            index,
            tokens.iter().map(|t| t.to_string()).collect(),
        )
    }

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_vocabulary_is_sorted_union() {
        let a = strings(&["fox", "dog", "fox"]);
        let b = strings(&["cat", "dog"]);
        let vocab = Vocabulary::from_pair(&a, &b);
        assert_eq!(vocab.words().collect::<Vec<_>>(), vec!["cat", "dog", "fox"]);
        assert_eq!(vocab.index_of("dog"), Some(1));
        assert_eq!(vocab.index_of("emu"), None);
    }

    #[test]
    fn test_frequency_counts() {
        let a = strings(&["fox", "dog", "fox"]);
        let b = strings(&["cat"]);
        let vocab = Vocabulary::from_pair(&a, &b);
        let v = FrequencyVector::over_vocabulary(&a, &vocab);
        assert_eq!(v.counts, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_identical_sentences() {
        let a = sentence(0, &["market", "rally", "stocks"]);
        let b = sentence(1, &["stocks", "rally", "market"]);
        assert!((similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sentences() {
        let a = sentence(0, &["market", "rally"]);
        let b = sentence(1, &["weather", "storm"]);
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // a = [1, 1, 0], b = [0, 1, 1] over (a, b, c) -> cos = 1 / 2
        let a = sentence(0, &["alpha", "beta"]);
        let b = sentence(1, &["beta", "gamma"]);
        assert!((similarity(&a, &b) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_repeated_terms_weighted() {
        // a = [2, 1], b = [1, 0] over (x, y) -> cos = 2 / sqrt(5)
        let a = sentence(0, &["x", "x", "y"]);
        let b = sentence(1, &["x"]);
        let expected = 2.0 / 5.0_f64.sqrt();
        assert!((similarity(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_empty_token_list_is_zero_not_nan() {
        let a = sentence(0, &[]);
        let b = sentence(1, &["word"]);
        let sim = similarity(&a, &b);
        assert_eq!(sim, 0.0);
        assert_eq!(similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_zero_vector_cosine() {
        let zero = FrequencyVector {
            counts: vec![0.0, 0.0],
        };
        let other = FrequencyVector {
            counts: vec![1.0, 0.0],
        };
        assert!(zero.is_zero());
        assert_eq!(zero.cosine_similarity(&other), 0.0);
        assert_eq!(other.cosine_similarity(&zero), 0.0);
    }

    #[test]
    fn test_similarity_is_symmetric() {
        let a = sentence(0, &["rates", "rise", "rates", "bank"]);
        let b = sentence(1, &["bank", "cuts", "rates"]);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }
}
