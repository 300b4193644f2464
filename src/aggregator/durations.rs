//! Pair start and completion events into per-resource durations.
//!
//! Events must be fed in chronological order (see `filter`). A resource's
//! start is its first IN_PROGRESS event in the window; each later COMPLETE
//! event for the same `(logical id, type)` key produces a record.

use crate::events::StackEvent;
use crate::utils::config::{UNKNOWN_RESOURCE, UNKNOWN_TYPE};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Provisioning time of one resource within the analyzed window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceDeploymentTime {
    /// Logical resource id ("UnknownResource" if the event had none)
    pub resource_id: String,

    /// Resource type ("UnknownType" if the event had none)
    pub resource_type: String,

    /// Timestamp of the IN_PROGRESS event
    pub start_time: DateTime<Utc>,

    /// Timestamp of the COMPLETE event
    pub end_time: DateTime<Utc>,

    /// `end_time - start_time` in seconds, always > 0
    pub duration_seconds: f64,
}

/// What happens to a resource's recorded start once it completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartTimePolicy {
    /// Keep the first start for the whole window. A resource that cycles
    /// IN_PROGRESS -> COMPLETE twice gets a second record measured from the
    /// first cycle's start.
    #[default]
    KeepFirst,

    /// Forget the start after each completion so every cycle is timed on
    /// its own.
    ClearOnComplete,
}

type ResourceKey<'a> = (Option<&'a str>, Option<&'a str>);

/// Calculate deployment durations with the default [`StartTimePolicy`]
///
/// **Public** - main entry point of the aggregation stage
///
/// # Arguments
/// * `events` - Chronological event window
///
/// # Returns
/// Records sorted by duration, longest first. Equal durations keep
/// completion order.
pub fn calculate_deployment_times(events: &[StackEvent]) -> Vec<ResourceDeploymentTime> {
    calculate_deployment_times_with(events, StartTimePolicy::default())
}

/// Calculate deployment durations with an explicit start-time policy
pub fn calculate_deployment_times_with(
    events: &[StackEvent],
    policy: StartTimePolicy,
) -> Vec<ResourceDeploymentTime> {
    let mut start_times: HashMap<ResourceKey<'_>, DateTime<Utc>> = HashMap::new();
    let mut deployment_times = Vec::new();

    for event in events {
        let key = resource_key(event);

        if event.resource_status.is_in_progress() {
            // First IN_PROGRESS wins
            start_times.entry(key).or_insert(event.timestamp);
        } else if event.resource_status.is_complete() {
            let Some(&start_time) = start_times.get(&key) else {
                debug!(
                    "Completion without start for {}, skipping",
                    event.logical_resource_id.as_deref().unwrap_or(UNKNOWN_RESOURCE)
                );
                continue;
            };

            if let Some(record) = create_record(event, start_time) {
                deployment_times.push(record);
            }

            if policy == StartTimePolicy::ClearOnComplete {
                start_times.remove(&key);
            }
        }
    }

    // Stable: ties keep completion order
    deployment_times.sort_by(|a, b| b.duration_seconds.total_cmp(&a.duration_seconds));

    debug!("Calculated {} resource durations", deployment_times.len());

    deployment_times
}

/// Key identifying a resource across events
///
/// **Private** - internal helper
fn resource_key(event: &StackEvent) -> ResourceKey<'_> {
    (
        event.logical_resource_id.as_deref(),
        event.resource_type.as_deref(),
    )
}

/// Build a record for a completion event, or `None` if the elapsed time
/// is not strictly positive
///
/// **Private** - internal conversion
fn create_record(event: &StackEvent, start_time: DateTime<Utc>) -> Option<ResourceDeploymentTime> {
    let elapsed = event.timestamp - start_time;
    // Nanoseconds overflow past ~292 years; fall back to milliseconds there
    let duration_seconds = match elapsed.num_nanoseconds() {
        Some(nanos) => nanos as f64 / 1e9,
        None => elapsed.num_milliseconds() as f64 / 1000.0,
    };

    if duration_seconds <= 0.0 {
        return None;
    }

    Some(ResourceDeploymentTime {
        resource_id: event
            .logical_resource_id
            .clone()
            .unwrap_or_else(|| UNKNOWN_RESOURCE.to_string()),
        resource_type: event
            .resource_type
            .clone()
            .unwrap_or_else(|| UNKNOWN_TYPE.to_string()),
        start_time,
        end_time: event.timestamp,
        duration_seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    fn event(secs: i64, status: &str, id: &str) -> StackEvent {
        StackEvent::new("web", status, at(secs)).with_resource(id, "AWS::S3::Bucket")
    }

    #[test]
    fn test_single_pair() {
        let events = vec![
            event(0, "UPDATE_IN_PROGRESS", "R1"),
            event(5, "UPDATE_COMPLETE", "R1"),
        ];

        let times = calculate_deployment_times(&events);

        assert_eq!(times.len(), 1);
        assert_eq!(times[0].resource_id, "R1");
        assert_eq!(times[0].duration_seconds, 5.0);
        assert_eq!(times[0].start_time, at(0));
        assert_eq!(times[0].end_time, at(5));
    }

    #[test]
    fn test_first_in_progress_wins() {
        let events = vec![
            event(0, "CREATE_IN_PROGRESS", "R1"),
            event(3, "CREATE_IN_PROGRESS", "R1"),
            event(10, "CREATE_COMPLETE", "R1"),
        ];

        let times = calculate_deployment_times(&events);

        assert_eq!(times.len(), 1);
        assert_eq!(times[0].duration_seconds, 10.0);
        assert_eq!(times[0].start_time, at(0));
    }

    #[test]
    fn test_complete_without_start() {
        let events = vec![event(5, "UPDATE_COMPLETE", "R1")];
        assert!(calculate_deployment_times(&events).is_empty());
    }

    #[test]
    fn test_zero_duration_dropped() {
        let events = vec![
            event(5, "CREATE_IN_PROGRESS", "R1"),
            event(5, "CREATE_COMPLETE", "R1"),
        ];
        assert!(calculate_deployment_times(&events).is_empty());
    }

    #[test]
    fn test_other_statuses_ignored() {
        let events = vec![
            event(0, "UPDATE_FAILED", "R1"),
            event(1, "DELETE_IN_PROGRESS", "R1"),
            event(2, "DELETE_COMPLETE", "R1"),
        ];
        assert!(calculate_deployment_times(&events).is_empty());
    }

    #[test]
    fn test_key_includes_type() {
        let events = vec![
            event(0, "CREATE_IN_PROGRESS", "R1"),
            StackEvent::new("web", "CREATE_COMPLETE", at(4)).with_resource("R1", "AWS::SQS::Queue"),
        ];
        assert!(calculate_deployment_times(&events).is_empty());
    }

    #[test]
    fn test_missing_id_and_type_defaults() {
        let events = vec![
            StackEvent::new("web", "CREATE_IN_PROGRESS", at(0)),
            StackEvent::new("web", "CREATE_COMPLETE", at(2)),
        ];

        let times = calculate_deployment_times(&events);

        assert_eq!(times.len(), 1);
        assert_eq!(times[0].resource_id, UNKNOWN_RESOURCE);
        assert_eq!(times[0].resource_type, UNKNOWN_TYPE);
    }

    #[test]
    fn test_repeated_cycle_keeps_first_start() {
        let events = vec![
            event(0, "UPDATE_IN_PROGRESS", "R1"),
            event(4, "UPDATE_COMPLETE", "R1"),
            event(10, "UPDATE_IN_PROGRESS", "R1"),
            event(12, "UPDATE_COMPLETE", "R1"),
        ];

        let times = calculate_deployment_times(&events);

        assert_eq!(times.len(), 2);
        assert_eq!(times[0].duration_seconds, 12.0);
        assert_eq!(times[0].start_time, at(0));
        assert_eq!(times[1].duration_seconds, 4.0);
    }

    #[test]
    fn test_repeated_cycle_clear_on_complete() {
        let events = vec![
            event(0, "UPDATE_IN_PROGRESS", "R1"),
            event(4, "UPDATE_COMPLETE", "R1"),
            event(10, "UPDATE_IN_PROGRESS", "R1"),
            event(12, "UPDATE_COMPLETE", "R1"),
        ];

        let times = calculate_deployment_times_with(&events, StartTimePolicy::ClearOnComplete);

        assert_eq!(times.len(), 2);
        assert_eq!(times[0].duration_seconds, 4.0);
        assert_eq!(times[1].duration_seconds, 2.0);
        assert_eq!(times[1].start_time, at(10));
    }

    #[test]
    fn test_sub_millisecond_duration_kept() {
        let start = Utc.timestamp_opt(1_700_000_000, 900_000).unwrap();
        let end = Utc.timestamp_opt(1_700_000_000, 1_100_000).unwrap();
        let events = vec![
            StackEvent::new("web", "CREATE_IN_PROGRESS", start)
                .with_resource("R1", "AWS::S3::Bucket"),
            StackEvent::new("web", "CREATE_COMPLETE", end).with_resource("R1", "AWS::S3::Bucket"),
        ];

        let times = calculate_deployment_times(&events);

        assert_eq!(times.len(), 1);
        assert!((times[0].duration_seconds - 0.0002).abs() < 1e-12);
    }

    #[test]
    fn test_sub_second_precision() {
        let events = vec![
            event(0, "CREATE_IN_PROGRESS", "R1"),
            StackEvent::new("web", "CREATE_COMPLETE", at(1) + chrono::Duration::milliseconds(250))
                .with_resource("R1", "AWS::S3::Bucket"),
        ];

        let times = calculate_deployment_times(&events);
        assert_eq!(times[0].duration_seconds, 1.25);
    }
}
