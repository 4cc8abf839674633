pub mod analyzer;
pub mod config;
pub mod domain;
pub mod error;
pub mod event;
pub mod github;
pub mod handler;
pub mod outcome;
pub mod ui;

pub use error::{AutoMergeError, Result};
