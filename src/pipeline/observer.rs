//! Pipeline observer: hooks for logging, profiling and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Use cases include timing stages, capturing intermediate
//! artifacts for debugging, and emitting structured telemetry.

use crate::pagerank::PageRankResult;
use crate::similarity::SimilarityMatrix;
use crate::summarizer::selector::Selection;
use crate::types::Sentence;
use std::time::{Duration, Instant};

/// Sentence splitting and word tokenization
pub const STAGE_TOKENIZE: &str = "tokenize";
/// Pairwise similarity matrix construction
pub const STAGE_SIMILARITY: &str = "similarity";
/// PageRank over the sentence graph
pub const STAGE_RANK: &str = "rank";
/// Word-budget sentence selection
pub const STAGE_SELECT: &str = "select";

/// Receives callbacks as the summarization pipeline runs
///
/// Every method has an empty default, so implementors override only what
/// they need.
pub trait PipelineObserver {
    /// Called before a stage runs
    fn on_stage_start(&mut self, _stage: &'static str) {}

    /// Called after a stage with its timing and metrics
    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    /// Sentences produced by tokenization
    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    /// The pairwise similarity matrix
    fn on_matrix(&mut self, _matrix: &SimilarityMatrix) {}

    /// PageRank scores and convergence info
    fn on_rank(&mut self, _rank: &PageRankResult) {}

    /// The sentences chosen for the summary
    fn on_selection(&mut self, _selection: &Selection) {}
}

/// Observer that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock {
    started: Instant,
}

impl StageClock {
    /// Start timing now
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Time since [`StageClock::start`]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Timing and metrics for a finished stage
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    duration: Duration,
    sentences: Option<usize>,
    nodes: Option<usize>,
    edges: Option<usize>,
    iterations: Option<usize>,
    converged: Option<bool>,
    residual: Option<f64>,
    selected: Option<usize>,
}

impl StageReport {
    /// A report with only a duration
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }

    /// Wall-clock time of the stage
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Sentences produced, for the tokenize stage
    pub fn sentences(&self) -> Option<usize> {
        self.sentences
    }

    /// Graph nodes, for the similarity stage
    pub fn nodes(&self) -> Option<usize> {
        self.nodes
    }

    /// Non-zero sentence pairs, for the similarity stage
    pub fn edges(&self) -> Option<usize> {
        self.edges
    }

    /// PageRank iterations, for the rank stage
    pub fn iterations(&self) -> Option<usize> {
        self.iterations
    }

    /// Whether PageRank converged, for the rank stage
    pub fn converged(&self) -> Option<bool> {
        self.converged
    }

    /// Final L1 delta, for the rank stage
    pub fn residual(&self) -> Option<f64> {
        self.residual
    }

    /// Sentences selected, for the select stage
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}

/// Fluent construction of a [`StageReport`] with metrics
#[derive(Debug, Clone)]
pub struct StageReportBuilder {
    report: StageReport,
}

impl StageReportBuilder {
    /// Start a report for a stage that took `duration`
    pub fn new(duration: Duration) -> Self {
        Self {
            report: StageReport::new(duration),
        }
    }

    /// Set the `sentences` metric
    pub fn sentences(mut self, count: usize) -> Self {
        self.report.sentences = Some(count);
        self
    }

    /// Set the `nodes` metric
    pub fn nodes(mut self, count: usize) -> Self {
        self.report.nodes = Some(count);
        self
    }

    /// Set the `edges` metric
    pub fn edges(mut self, count: usize) -> Self {
        self.report.edges = Some(count);
        self
    }

    /// Set the `iterations` metric
    pub fn iterations(mut self, count: usize) -> Self {
        self.report.iterations = Some(count);
        self
    }

    /// Set the `converged` metric
    pub fn converged(mut self, converged: bool) -> Self {
        self.report.converged = Some(converged);
        self
    }

    /// Set the `residual` metric
    pub fn residual(mut self, residual: f64) -> Self {
        self.report.residual = Some(residual);
        self
    }

    /// Set the `selected` metric
    pub fn selected(mut self, count: usize) -> Self {
        self.report.selected = Some(count);
        self
    }

    /// Finish the report
    pub fn build(self) -> StageReport {
        self.report
    }
}

/// Collects the report of every stage, in execution order
#[derive(Debug, Clone, Default)]
pub struct StageTimingObserver {
    reports: Vec<(&'static str, StageReport)>,
}

impl StageTimingObserver {
    /// Create an observer with no reports
    pub fn new() -> Self {
        Self::default()
    }

    /// All reports, in execution order
    pub fn reports(&self) -> &[(&'static str, StageReport)] {
        &self.reports
    }

    /// Report for a stage, if it ran
    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.reports
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }

    /// Sum of all stage durations
    pub fn total(&self) -> Duration {
        self.reports.iter().map(|(_, r)| r.duration()).sum()
    }
}

impl PipelineObserver for StageTimingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.reports.push((stage, report.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_builder() {
        let report = StageReportBuilder::new(Duration::from_millis(3))
            .nodes(4)
            .edges(2)
            .iterations(17)
            .converged(true)
            .residual(1e-7)
            .build();

        assert_eq!(report.duration(), Duration::from_millis(3));
        assert_eq!(report.nodes(), Some(4));
        assert_eq!(report.edges(), Some(2));
        assert_eq!(report.iterations(), Some(17));
        assert_eq!(report.converged(), Some(true));
        assert_eq!(report.sentences(), None);
        assert_eq!(report.selected(), None);
    }

    #[test]
    fn test_timing_observer_collects_in_order() {
        let mut obs = StageTimingObserver::new();
        obs.on_stage_end(STAGE_TOKENIZE, &StageReport::new(Duration::from_millis(1)));
        obs.on_stage_end(STAGE_RANK, &StageReport::new(Duration::from_millis(2)));

        let names: Vec<&str> = obs.reports().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![STAGE_TOKENIZE, STAGE_RANK]);
        assert_eq!(obs.total(), Duration::from_millis(3));
        assert!(obs.report(STAGE_SELECT).is_none());
    }

    #[test]
    fn test_clock_measures_elapsed() {
        let clock = StageClock::start();
        assert!(clock.elapsed() >= Duration::ZERO);
    }
}
