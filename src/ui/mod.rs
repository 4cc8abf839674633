//! Terminal output for the command-line entry point.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_decision, display_error, display_event_outcome, display_skip, display_status,
    display_success, format_api_call, format_decision,
};
