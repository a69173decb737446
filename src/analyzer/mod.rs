//! Analyzer module - scoring, ranking and narrative rules

pub mod engine;
pub mod ranking;
pub mod rules;
pub mod scoring;

pub use engine::AnalysisEngine;
pub use ranking::{rank_keywords, rank_traffic_sources};
pub use scoring::ScoreCalculator;
