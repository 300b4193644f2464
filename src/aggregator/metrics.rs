//! Summary statistics over calculated resource durations.
//!
//! Gives operators a one-line picture of the deployment before the
//! per-resource listing.

use super::durations::ResourceDeploymentTime;
use serde::{Deserialize, Serialize};

/// Duration distribution statistics
///
/// **Public** - returned from summarize_durations
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DurationSummary {
    /// Number of timed resources
    pub resource_count: usize,

    /// Sum of all durations (resources provision in parallel, so this
    /// exceeds the wall-clock time of the deployment)
    pub total_seconds: f64,

    pub mean_seconds: f64,

    pub median_seconds: f64,

    /// Slowest resource, if any
    pub longest: Option<String>,

    pub longest_seconds: f64,
}

/// Calculate duration statistics
///
/// **Public** - provides summary statistics
///
/// # Arguments
/// * `times` - Records sorted longest first, as produced by the aggregator
pub fn summarize_durations(times: &[ResourceDeploymentTime]) -> DurationSummary {
    if times.is_empty() {
        return DurationSummary::default();
    }

    let count = times.len();
    let total: f64 = times.iter().map(|t| t.duration_seconds).sum();

    let mut durations: Vec<f64> = times.iter().map(|t| t.duration_seconds).collect();
    durations.sort_by(f64::total_cmp);
    let median = if count % 2 == 0 {
        (durations[count / 2 - 1] + durations[count / 2]) / 2.0
    } else {
        durations[count / 2]
    };

    // Input is sorted longest first; the first record is the one printed first
    let longest = times.first();

    DurationSummary {
        resource_count: count,
        total_seconds: total,
        mean_seconds: total / count as f64,
        median_seconds: median,
        longest: longest.map(|t| t.resource_id.clone()),
        longest_seconds: longest.map(|t| t.duration_seconds).unwrap_or(0.0),
    }
}

impl DurationSummary {
    /// Get human-readable summary
    ///
    /// **Public** - for logging
    pub fn summary(&self) -> String {
        format!(
            "Resources: {} | Total: {:.2}s | Mean: {:.2}s | Median: {:.2}s | Longest: {} ({:.2}s)",
            self.resource_count,
            self.total_seconds,
            self.mean_seconds,
            self.median_seconds,
            self.longest.as_deref().unwrap_or("-"),
            self.longest_seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, secs: f64) -> ResourceDeploymentTime {
        let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        ResourceDeploymentTime {
            resource_id: id.to_string(),
            resource_type: "AWS::S3::Bucket".to_string(),
            start_time: start,
            end_time: start + chrono::Duration::milliseconds((secs * 1000.0) as i64),
            duration_seconds: secs,
        }
    }

    #[test]
    fn test_summarize_durations() {
        let times = vec![
            record("Db", 300.0),
            record("Queue", 60.0),
            record("Bucket", 30.0),
            record("Topic", 10.0),
        ];

        let summary = summarize_durations(&times);

        assert_eq!(summary.resource_count, 4);
        assert_eq!(summary.total_seconds, 400.0);
        assert_eq!(summary.mean_seconds, 100.0);
        assert_eq!(summary.median_seconds, 45.0);
        assert_eq!(summary.longest.as_deref(), Some("Db"));
        assert_eq!(summary.longest_seconds, 300.0);
    }

    #[test]
    fn test_longest_tie_names_first_record() {
        let times = vec![record("A", 10.0), record("B", 10.0)];
        assert_eq!(summarize_durations(&times).longest.as_deref(), Some("A"));
    }

    #[test]
    fn test_summarize_odd_count() {
        let times = vec![record("A", 9.0), record("B", 3.0), record("C", 1.0)];
        assert_eq!(summarize_durations(&times).median_seconds, 3.0);
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize_durations(&[]);
        assert_eq!(summary.resource_count, 0);
        assert!(summary.longest.is_none());
        assert!(summary.summary().contains("Longest: -"));
    }
}
