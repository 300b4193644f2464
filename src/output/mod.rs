//! Report output.
//!
//! This module handles:
//! - Text rendering of resource durations
//! - JSON reports (write and read back)

pub mod json;
pub mod schema;
pub mod text;

// Re-export main functions
pub use json::{read_report, validate_path, write_report};
pub use schema::DeploymentReport;
pub use text::{format_timestamp, write_text_report};
