//! Internal stack event model.
//!
//! Events coming from CloudFormation (or from a captured `describe-stack-events`
//! document) are mapped into [`StackEvent`] at the boundary, so the filter and
//! aggregator never see SDK types.

use chrono::{DateTime, Utc};
use log::warn;
use serde::Deserialize;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a resource or of the stack itself
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceStatus {
    CreateInProgress,
    UpdateInProgress,
    CreateComplete,
    UpdateComplete,
    /// Any status the profiler does not act on (failures, rollbacks, deletes...)
    Other(String),
}

impl ResourceStatus {
    /// CREATE_IN_PROGRESS or UPDATE_IN_PROGRESS
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::CreateInProgress | Self::UpdateInProgress)
    }

    /// CREATE_COMPLETE or UPDATE_COMPLETE
    pub fn is_complete(&self) -> bool {
        matches!(self, Self::CreateComplete | Self::UpdateComplete)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::CreateInProgress => "CREATE_IN_PROGRESS",
            Self::UpdateInProgress => "UPDATE_IN_PROGRESS",
            Self::CreateComplete => "CREATE_COMPLETE",
            Self::UpdateComplete => "UPDATE_COMPLETE",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for ResourceStatus {
    fn from(s: &str) -> Self {
        match s {
            "CREATE_IN_PROGRESS" => Self::CreateInProgress,
            "UPDATE_IN_PROGRESS" => Self::UpdateInProgress,
            "CREATE_COMPLETE" => Self::CreateComplete,
            "UPDATE_COMPLETE" => Self::UpdateComplete,
            other => Self::Other(other.to_string()),
        }
    }
}

impl FromStr for ResourceStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single stack event, immutable once constructed
#[derive(Debug, Clone, PartialEq)]
pub struct StackEvent {
    /// Template-level name of the resource (the stack name for stack events)
    pub logical_resource_id: Option<String>,

    /// Resource type tag, e.g. `AWS::S3::Bucket`
    pub resource_type: Option<String>,

    pub resource_status: ResourceStatus,

    pub resource_status_reason: Option<String>,

    /// Name of the enclosing stack
    pub stack_name: String,

    pub timestamp: DateTime<Utc>,
}

impl StackEvent {
    /// Create an event with no resource id, type or reason set
    pub fn new(
        stack_name: impl Into<String>,
        resource_status: impl Into<ResourceStatus>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            logical_resource_id: None,
            resource_type: None,
            resource_status: resource_status.into(),
            resource_status_reason: None,
            stack_name: stack_name.into(),
            timestamp,
        }
    }

    pub fn with_resource(
        mut self,
        logical_id: impl Into<String>,
        resource_type: impl Into<String>,
    ) -> Self {
        self.logical_resource_id = Some(logical_id.into());
        self.resource_type = Some(resource_type.into());
        self
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.resource_status_reason = Some(reason.into());
        self
    }
}

/// Top-level document produced by `aws cloudformation describe-stack-events`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeStackEventsOutput {
    #[serde(default)]
    pub stack_events: Vec<RawStackEvent>,
}

/// Stack event as it appears in the CLI/API JSON, every field optional
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawStackEvent {
    pub logical_resource_id: Option<String>,
    pub resource_type: Option<String>,
    pub resource_status: Option<String>,
    pub resource_status_reason: Option<String>,
    pub stack_name: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl RawStackEvent {
    /// Map into the internal model.
    ///
    /// Returns `None` for events without a timestamp, which cannot be ordered.
    pub fn into_stack_event(self) -> Option<StackEvent> {
        let Some(timestamp) = self.timestamp else {
            warn!(
                "Dropping event without timestamp for resource {}",
                self.logical_resource_id.as_deref().unwrap_or("?")
            );
            return None;
        };

        Some(StackEvent {
            logical_resource_id: self.logical_resource_id,
            resource_type: self.resource_type,
            resource_status: self.resource_status.as_deref().unwrap_or_default().into(),
            resource_status_reason: self.resource_status_reason,
            stack_name: self.stack_name.unwrap_or_default(),
            timestamp,
        })
    }
}
