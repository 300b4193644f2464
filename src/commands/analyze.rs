//! Analyze command implementation.
//!
//! The analyze command:
//! 1. Fetches stack events (CloudFormation or a captured file)
//! 2. Isolates the latest user-initiated update
//! 3. Pairs start/complete events into resource durations
//! 4. Prints the report (and optionally writes JSON)

use super::models::{AnalysisOutcome, AnalyzeArgs};
use crate::aggregator::{calculate_deployment_times_with, summarize_durations};
use crate::events::{
    fetch_stack_events, CloudFormationSource, EventSource, EventsFileSource, StackEvent,
};
use crate::filter::filter_events_for_latest_update;
use crate::output::{validate_path, write_report, write_text_report, DeploymentReport};
use crate::utils::config::{MAX_TOP_RESOURCES, REPORT_SCHEMA_VERSION};
use anyhow::{Context, Result};
use log::{debug, error, info};
use std::io::Write;
use std::time::Instant;

/// Execute the analyze command against the configured event source
///
/// **Public** - main entry point called from main.rs
///
/// Report text goes to stdout. Fetch failures never surface as `Err`;
/// they end up as [`AnalysisOutcome::NoEvents`].
///
/// # Errors
/// * Failure to write the report to stdout
/// * JSON report write errors
pub fn execute_analyze(args: &AnalyzeArgs) -> Result<AnalysisOutcome> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    write_header(args, &mut out)?;

    let events = match &args.events_file {
        Some(path) => fetch_stack_events(&EventsFileSource::new(path), &args.stack_name),
        None => fetch_from_cloudformation(args),
    };

    run_pipeline(args, events, &mut out)
}

/// Run the analysis with an arbitrary event source
///
/// **Public** - lets callers (and tests) supply their own source and sink
pub fn analyze_with_source(
    args: &AnalyzeArgs,
    source: &dyn EventSource,
    out: &mut impl Write,
) -> Result<AnalysisOutcome> {
    write_header(args, out)?;

    let events = fetch_stack_events(source, &args.stack_name);
    run_pipeline(args, events, out)
}

/// Announce the stack before the (possibly slow) fetch
///
/// **Private** - internal helper
fn write_header(args: &AnalyzeArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Analyzing stack: {}", args.stack_name)?;
    out.flush()?;
    Ok(())
}

/// Build a CloudFormation source and fetch, degrading failures to empty
///
/// **Private** - internal helper for execute_analyze
fn fetch_from_cloudformation(args: &AnalyzeArgs) -> Vec<StackEvent> {
    match CloudFormationSource::new(&args.profile, &args.region) {
        Ok(source) => fetch_stack_events(&source, &args.stack_name),
        Err(e) => {
            error!("Error fetching stack events: {}", e);
            Vec::new()
        }
    }
}

/// Filter, aggregate and report on already-fetched events
///
/// **Private** - shared by execute_analyze and analyze_with_source
fn run_pipeline(
    args: &AnalyzeArgs,
    events: Vec<StackEvent>,
    out: &mut impl Write,
) -> Result<AnalysisOutcome> {
    let start_time = Instant::now();

    info!(
        "Step 1/3: Fetched {} events for {} ({})",
        events.len(),
        args.stack_name,
        args.region
    );

    // Step 2: Isolate the latest update
    info!("Step 2/3: Locating latest user-initiated update...");
    let window = filter_events_for_latest_update(&events, &args.stack_name);

    let (Some(first), Some(last)) = (window.first(), window.last()) else {
        return Ok(AnalysisOutcome::NoEvents);
    };
    let (window_start, window_end) = (first.timestamp, last.timestamp);

    debug!(
        "Window: {} events from {} to {}",
        window.len(),
        window_start,
        window_end
    );

    // Step 3: Pair events into durations
    info!("Step 3/3: Calculating resource deployment times...");
    let deployment_times = calculate_deployment_times_with(&window, args.start_policy);

    if deployment_times.is_empty() {
        return Ok(AnalysisOutcome::NoCompletedResources);
    }

    let summary = summarize_durations(&deployment_times);
    info!("Durations: {}", summary.summary());

    write_text_report(out, &deployment_times, args.top).context("Failed to print report")?;

    if let Some(path) = &args.output_json {
        let report = DeploymentReport {
            version: REPORT_SCHEMA_VERSION.to_string(),
            stack_name: args.stack_name.clone(),
            region: args.region.clone(),
            window_start,
            window_end,
            event_count: window.len(),
            resources: deployment_times.clone(),
            summary,
            generated_at: chrono::Utc::now().to_rfc3339(),
        };

        write_report(&report, path).context("Failed to write JSON report")?;
        info!("✓ Report written to: {}", path.display());
    }

    debug!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(AnalysisOutcome::Reported(deployment_times))
}

/// Validate analyze arguments
///
/// **Public** - called before execute_analyze, ahead of any network access
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &AnalyzeArgs) -> Result<()> {
    if args.stack_name.trim().is_empty() {
        anyhow::bail!("Stack name cannot be empty");
    }

    if args.profile.trim().is_empty() {
        anyhow::bail!("Credential profile cannot be empty");
    }

    if args.region.trim().is_empty() {
        anyhow::bail!("Region cannot be empty");
    }

    if let Some(top) = args.top {
        if top == 0 {
            anyhow::bail!("top must be greater than 0");
        }

        if top > MAX_TOP_RESOURCES {
            anyhow::bail!("top is too large (max {})", MAX_TOP_RESOURCES);
        }
    }

    if let Some(path) = &args.output_json {
        validate_path(path).context("Invalid JSON output path")?;
    }

    Ok(())
}
