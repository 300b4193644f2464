//! Stack event retrieval.
//!
//! This module handles:
//! - The internal `StackEvent` model and its boundary mappings
//! - Fetching events from CloudFormation
//! - Loading events from a captured JSON document

pub mod client;
pub mod file;
pub mod types;

// Re-export main types
pub use client::CloudFormationSource;
pub use file::EventsFileSource;
pub use types::{ResourceStatus, StackEvent};

use crate::utils::error::FetchError;
use log::error;

/// Anything that can produce the raw event bag for a stack
pub trait EventSource {
    /// Fetch every event the source holds for `stack_name`, in no particular order
    fn fetch_events(&self, stack_name: &str) -> Result<Vec<StackEvent>, FetchError>;
}

/// Fetch stack events, degrading any failure to an empty result
///
/// **Public** - the pipeline's fetch stage
///
/// Transport and authorization failures are logged and never propagated;
/// the caller sees an empty bag instead.
pub fn fetch_stack_events(source: &dyn EventSource, stack_name: &str) -> Vec<StackEvent> {
    match source.fetch_events(stack_name) {
        Ok(events) => events,
        Err(e) => {
            error!("Error fetching stack events: {}", e);
            Vec::new()
        }
    }
}
