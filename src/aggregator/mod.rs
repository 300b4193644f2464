//! Aggregation of the update window into resource durations.
//!
//! This module transforms the chronological event window into:
//! - Per-resource deployment times (longest first)
//! - Duration distribution statistics

pub mod durations;
pub mod metrics;

// Re-export main types and functions
pub use durations::{
    calculate_deployment_times, calculate_deployment_times_with, ResourceDeploymentTime,
    StartTimePolicy,
};
pub use metrics::{summarize_durations, DurationSummary};
