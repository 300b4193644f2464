//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod analyze;
pub mod models;

// Re-export main command functions
pub use analyze::{analyze_with_source, execute_analyze, validate_args};
pub use models::{AnalysisOutcome, AnalyzeArgs};
