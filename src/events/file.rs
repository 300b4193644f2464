//! Offline event source reading a captured `describe-stack-events` document.

use super::types::{DescribeStackEventsOutput, StackEvent};
use super::EventSource;
use crate::utils::error::FetchError;
use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Event source reading the JSON printed by
/// `aws cloudformation describe-stack-events --stack-name <name>`
#[derive(Debug, Clone)]
pub struct EventsFileSource {
    path: PathBuf,
}

impl EventsFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for EventsFileSource {
    fn fetch_events(&self, stack_name: &str) -> Result<Vec<StackEvent>, FetchError> {
        info!(
            "Reading stack events for {} from: {}",
            stack_name,
            self.path.display()
        );

        let file = File::open(&self.path)?;
        let document: DescribeStackEventsOutput = serde_json::from_reader(BufReader::new(file))?;

        let events: Vec<StackEvent> = document
            .stack_events
            .into_iter()
            .filter_map(|raw| raw.into_stack_event())
            .collect();

        debug!("Loaded {} stack events", events.len());

        Ok(events)
    }
}
