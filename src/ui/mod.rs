//! Terminal output module - status lines and run summaries.

pub mod formatter;

pub use formatter::{display_error, display_status, display_success, display_summary};
