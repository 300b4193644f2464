//! JSON report schema.
//!
//! This module defines the structure of the report file written by `--json`.
//! Schema is versioned to allow future evolution.

use crate::aggregator::{DurationSummary, ResourceDeploymentTime};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Stack that was analyzed
    pub stack_name: String,

    pub region: String,

    /// Timestamp of the "User Initiated" marker that opened the window
    pub window_start: DateTime<Utc>,

    /// Newest event in the window
    pub window_end: DateTime<Utc>,

    /// Number of events in the window
    pub event_count: usize,

    /// Resource durations, longest first
    pub resources: Vec<ResourceDeploymentTime>,

    pub summary: DurationSummary,

    /// Timestamp when the report was generated
    pub generated_at: String,
}
