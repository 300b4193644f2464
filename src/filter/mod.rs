//! Isolation of the events belonging to the latest stack operation.

pub mod latest_update;

pub use latest_update::{filter_events_for_latest_update, is_update_start_marker};
