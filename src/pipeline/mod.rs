//! Summarization pipeline
//!
//! The [`runner::Summarizer`] drives the stages; [`observer`] exposes hooks
//! for timing and inspecting them.

pub mod observer;
pub mod runner;
