use chrono::{DateTime, TimeZone, Utc};
use pretty_assertions::assert_eq;
use stack_deploy_profiler::aggregator::{
    calculate_deployment_times, calculate_deployment_times_with, summarize_durations,
    StartTimePolicy,
};
use stack_deploy_profiler::events::StackEvent;

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_714_640_400 + secs, 0).unwrap()
}

fn event(secs: i64, status: &str, id: &str, resource_type: &str) -> StackEvent {
    StackEvent::new("web", status, at(secs)).with_resource(id, resource_type)
}

fn sample_window() -> Vec<StackEvent> {
    vec![
        event(0, "UPDATE_IN_PROGRESS", "Database", "AWS::RDS::DBInstance"),
        event(1, "CREATE_IN_PROGRESS", "Queue", "AWS::SQS::Queue"),
        event(2, "CREATE_IN_PROGRESS", "Topic", "AWS::SNS::Topic"),
        event(11, "CREATE_COMPLETE", "Queue", "AWS::SQS::Queue"),
        event(12, "CREATE_COMPLETE", "Topic", "AWS::SNS::Topic"),
        event(20, "UPDATE_FAILED", "Bucket", "AWS::S3::Bucket"),
        event(90, "UPDATE_COMPLETE", "Database", "AWS::RDS::DBInstance"),
    ]
}

#[test]
fn test_sorted_longest_first_with_stable_ties() {
    let times = calculate_deployment_times(&sample_window());

    let ids: Vec<&str> = times.iter().map(|t| t.resource_id.as_str()).collect();
    let durations: Vec<f64> = times.iter().map(|t| t.duration_seconds).collect();

    // Queue and Topic both took 10s; Queue completed first
    assert_eq!(ids, vec!["Database", "Queue", "Topic"]);
    assert_eq!(durations, vec![90.0, 10.0, 10.0]);
}

#[test]
fn test_never_emits_non_positive_durations() {
    let window = vec![
        event(5, "CREATE_IN_PROGRESS", "A", "AWS::S3::Bucket"),
        event(5, "CREATE_COMPLETE", "A", "AWS::S3::Bucket"),
        event(6, "UPDATE_IN_PROGRESS", "B", "AWS::S3::Bucket"),
        event(7, "UPDATE_COMPLETE", "B", "AWS::S3::Bucket"),
    ];

    let times = calculate_deployment_times(&window);

    assert_eq!(times.len(), 1);
    assert!(times.iter().all(|t| t.duration_seconds > 0.0));
}

#[test]
fn test_idempotent() {
    let window = sample_window();
    assert_eq!(
        calculate_deployment_times(&window),
        calculate_deployment_times(&window)
    );
}

#[test]
fn test_default_policy_keeps_first_start() {
    let window = vec![
        event(0, "UPDATE_IN_PROGRESS", "Fn", "AWS::Lambda::Function"),
        event(3, "UPDATE_COMPLETE", "Fn", "AWS::Lambda::Function"),
        event(30, "UPDATE_COMPLETE", "Fn", "AWS::Lambda::Function"),
    ];

    let keep = calculate_deployment_times(&window);
    assert_eq!(keep.len(), 2);
    assert_eq!(keep[0].duration_seconds, 30.0);
    assert_eq!(keep[1].duration_seconds, 3.0);

    // Second completion has no fresh start once the first one clears it
    let clear = calculate_deployment_times_with(&window, StartTimePolicy::ClearOnComplete);
    assert_eq!(clear.len(), 1);
    assert_eq!(clear[0].duration_seconds, 3.0);
}

#[test]
fn test_summary_of_sample_window() {
    let summary = summarize_durations(&calculate_deployment_times(&sample_window()));

    assert_eq!(summary.resource_count, 3);
    assert_eq!(summary.total_seconds, 110.0);
    assert_eq!(summary.median_seconds, 10.0);
    assert_eq!(summary.longest.as_deref(), Some("Database"));
}
