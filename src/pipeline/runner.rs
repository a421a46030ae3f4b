//! Summarization pipeline runner.
//!
//! [`Summarizer`] wires the stages together: short-circuit checks on the raw
//! input, then tokenize → similarity → rank → select. Each stage is wrapped
//! in a tracing span (when the `tracing` feature is on) and reported to a
//! [`PipelineObserver`].

use rayon::prelude::*;

use super::observer::{
    NoopObserver, PipelineObserver, StageClock, StageReportBuilder, STAGE_RANK,
    STAGE_SELECT, STAGE_SIMILARITY, STAGE_TOKENIZE,
};
use crate::errors::Result;
use crate::nlp::tokenizer::Tokenizer;
use crate::pagerank::rank;
use crate::similarity::SimilarityMatrix;
use crate::summarizer::selector::BudgetSelector;
use crate::summarizer::{Summary, SummaryKind, NO_CONTENT, SUMMARY_UNAVAILABLE};
use crate::types::SummarizerConfig;

/// Enter a tracing span for a pipeline stage (no-op without `tracing`).
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("pipeline_stage", stage = $name).entered();
    };
}

/// Extractive TextRank summarizer
///
/// Holds only immutable state (the validated config, the tokenizer and its
/// stopword set), so one instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    tokenizer: Tokenizer,
    selector: BudgetSelector,
}

impl Summarizer {
    /// Build a summarizer, rejecting an invalid configuration
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        let tokenizer = Tokenizer::from_config(&config);
        let selector = BudgetSelector::from_config(&config);
        Ok(Self {
            config,
            tokenizer,
            selector,
        })
    }

    /// The validated configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// The tokenizer built from the configuration
    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    /// Summarize a text
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        self.summarize_with_observer(text, &mut NoopObserver)
    }

    /// Summarize raw bytes, which must be valid UTF-8
    pub fn summarize_bytes(&self, bytes: &[u8]) -> Result<Summary> {
        let text = std::str::from_utf8(bytes)?;
        self.summarize(text)
    }

    /// Summarize many texts on the rayon pool
    ///
    /// Results are returned in input order; one failing text does not
    /// affect the others.
    pub fn summarize_batch(&self, texts: &[&str]) -> Vec<Result<Summary>> {
        texts.par_iter().map(|text| self.summarize(text)).collect()
    }

    /// Summarize a text, reporting each stage to `observer`
    ///
    /// Observers see nothing when a short-circuit applies (empty input,
    /// input below `min_words_for_summarization`, a single sentence).
    pub fn summarize_with_observer<O: PipelineObserver>(
        &self,
        text: &str,
        observer: &mut O,
    ) -> Result<Summary> {
        let cfg = &self.config;

        let words: Vec<&str> = text.split_whitespace().collect();
        if words.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("empty input");
            return Ok(Summary::shortcut(NO_CONTENT, SummaryKind::Empty));
        }

        let input_words = words.len();
        let normalized = words[..input_words.min(cfg.truncate_input_words)].join(" ");

        if input_words < cfg.min_words_for_summarization {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                words = input_words,
                min_words = cfg.min_words_for_summarization,
                "input below summarization threshold; returning verbatim"
            );
            return Ok(Summary::shortcut(normalized, SummaryKind::Verbatim));
        }

        // Stage 1: Tokenize
        trace_stage!(STAGE_TOKENIZE);
        observer.on_stage_start(STAGE_TOKENIZE);
        let clock = StageClock::start();
        let sentences = self.tokenizer.tokenize(&normalized);
        let report = StageReportBuilder::new(clock.elapsed())
            .sentences(sentences.len())
            .build();
        observer.on_stage_end(STAGE_TOKENIZE, &report);
        observer.on_sentences(&sentences);

        if let [only] = sentences.as_slice() {
            #[cfg(feature = "tracing")]
            tracing::debug!("single sentence; returning verbatim");
            let mut summary = Summary::shortcut(only.text.clone(), SummaryKind::SingleSentence);
            summary.sentences = vec![only.index];
            summary.sentence_count = 1;
            return Ok(summary);
        }

        // Stage 2: Similarity matrix
        trace_stage!(STAGE_SIMILARITY);
        observer.on_stage_start(STAGE_SIMILARITY);
        let clock = StageClock::start();
        let matrix = SimilarityMatrix::from_sentences(&sentences, cfg.parallel_threshold);
        let report = StageReportBuilder::new(clock.elapsed())
            .nodes(matrix.size())
            .edges(matrix.edge_count())
            .build();
        observer.on_stage_end(STAGE_SIMILARITY, &report);
        observer.on_matrix(&matrix);

        // Stage 3: Rank
        trace_stage!(STAGE_RANK);
        observer.on_stage_start(STAGE_RANK);
        let clock = StageClock::start();
        let ranking = rank(&matrix, cfg)?;
        let report = StageReportBuilder::new(clock.elapsed())
            .iterations(ranking.iterations)
            .converged(ranking.converged)
            .residual(ranking.delta)
            .build();
        observer.on_stage_end(STAGE_RANK, &report);
        observer.on_rank(&ranking);

        // Stage 4: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let selection = self.selector.select(&sentences, &ranking.scores);
        let report = StageReportBuilder::new(clock.elapsed())
            .selected(selection.indices.len())
            .build();
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selection);

        let joined = selection.join(&sentences);
        if joined.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::debug!("selection produced blank text");
            let mut summary = Summary::shortcut(SUMMARY_UNAVAILABLE, SummaryKind::Unavailable);
            summary.sentence_count = sentences.len();
            summary.iterations = ranking.iterations;
            summary.converged = ranking.converged;
            return Ok(summary);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sentences = sentences.len(),
            selected = selection.indices.len(),
            words = selection.word_count,
            overflowed = selection.overflowed,
            "summary selected"
        );

        Ok(Summary {
            word_count: crate::types::count_words(&joined),
            text: joined,
            kind: SummaryKind::Ranked,
            sentences: selection.indices,
            sentence_count: sentences.len(),
            overflowed: selection.overflowed,
            iterations: ranking.iterations,
            converged: ranking.converged,
        })
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        let config = SummarizerConfig::default();
        Self {
            tokenizer: Tokenizer::from_config(&config),
            selector: BudgetSelector::from_config(&config),
            config,
        }
    }
}
