//! Human-readable report rendering.

use crate::aggregator::ResourceDeploymentTime;
use chrono::{DateTime, SecondsFormat, Utc};
use std::io::{self, Write};

/// ISO-8601 with millisecond precision and a `Z` suffix
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Write the per-resource listing
///
/// **Public** - used by the analyze command with stdout, and by tests
/// with an in-memory buffer
///
/// # Arguments
/// * `out` - Destination
/// * `times` - Records, already sorted longest first
/// * `limit` - Print at most this many records (`None` = all)
pub fn write_text_report(
    out: &mut impl Write,
    times: &[ResourceDeploymentTime],
    limit: Option<usize>,
) -> io::Result<()> {
    writeln!(out, "\nResource deployment times (sorted by duration):\n")?;

    for resource in times.iter().take(limit.unwrap_or(times.len())) {
        writeln!(out, "Resource: {} ({})", resource.resource_id, resource.resource_type)?;
        writeln!(out, "Start Time: {}", format_timestamp(&resource.start_time))?;
        writeln!(out, "End Time: {}", format_timestamp(&resource.end_time))?;
        writeln!(out, "Duration: {:.2} seconds\n", resource.duration_seconds)?;
    }

    Ok(())
}
