//! Locate the most recent user-initiated create/update of a stack and
//! return every event from that point on.
//!
//! The window ends at the newest event in the bag, not at a verified
//! stack-level completion: events that arrive after the operation finished
//! are included as well.

use crate::events::StackEvent;
use crate::utils::config::{STACK_RESOURCE_TYPE, USER_INITIATED_REASON};
use log::{debug, error};

/// Filter the raw event bag down to the latest update window
///
/// **Public** - main entry point of the filter stage
///
/// # Arguments
/// * `events` - Unordered events as returned by the fetcher
/// * `stack_name` - Stack being analyzed
///
/// # Returns
/// Events from the "update started" marker up to the newest event,
/// oldest first. Empty if the bag is empty or no marker exists.
///
/// Events with identical timestamps keep their input order relative to
/// each other; since the service does not guarantee an order, the result
/// on exact ties is not deterministic across fetches.
pub fn filter_events_for_latest_update(events: &[StackEvent], stack_name: &str) -> Vec<StackEvent> {
    if events.is_empty() {
        debug!("No events to filter");
        return Vec::new();
    }

    // Newest first; sort_by is stable
    let mut sorted: Vec<&StackEvent> = events.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let Some(marker_index) = sorted
        .iter()
        .position(|event| is_update_start_marker(event, stack_name))
    else {
        error!("No recent 'User Initiated' update found for the stack.");
        return Vec::new();
    };

    debug!(
        "Latest update started at {} ({} events in window)",
        sorted[marker_index].timestamp,
        marker_index + 1
    );

    sorted[..=marker_index]
        .iter()
        .rev()
        .map(|event| (*event).clone())
        .collect()
}

/// Whether an event marks the stack itself starting an operator-triggered
/// create or update
///
/// **Public** - exposed for reuse and testing
pub fn is_update_start_marker(event: &StackEvent, stack_name: &str) -> bool {
    event.resource_status.is_in_progress()
        && event.resource_status_reason.as_deref() == Some(USER_INITIATED_REASON)
        && event.resource_type.as_deref() == Some(STACK_RESOURCE_TYPE)
        && event.stack_name == stack_name
}
