//! Classification engine turning pull request titles into merge decisions

pub mod merge_analyzer;

pub use merge_analyzer::{Decision, MergeAnalyzer};
