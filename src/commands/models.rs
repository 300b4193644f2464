use crate::aggregator::{ResourceDeploymentTime, StartTimePolicy};
use crate::utils::config::{DEFAULT_REGION, NO_COMPLETED_RESOURCES_MESSAGE, NO_EVENTS_MESSAGE};
use std::path::PathBuf;

/// Arguments for the analyze command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    /// Stack to analyze
    pub stack_name: String,

    /// Shared-config profile used to resolve credentials
    pub profile: String,

    /// AWS region of the stack
    pub region: String,

    /// Read events from a captured JSON document instead of calling CloudFormation
    pub events_file: Option<PathBuf>,

    /// Output path for the JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Print only the N slowest resources (None = all)
    pub top: Option<usize>,

    /// Start-time handling for resources that complete more than once
    pub start_policy: StartTimePolicy,
}

impl Default for AnalyzeArgs {
    fn default() -> Self {
        Self {
            stack_name: String::new(),
            profile: String::new(),
            region: DEFAULT_REGION.to_string(),
            events_file: None,
            output_json: None,
            top: None,
            start_policy: StartTimePolicy::default(),
        }
    }
}

/// Result of an analysis run, mapped to an exit code by the CLI
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    /// Durations were found and printed
    Reported(Vec<ResourceDeploymentTime>),

    /// The fetch returned nothing, or no update window could be located
    NoEvents,

    /// A window was found but no resource completed within it
    NoCompletedResources,
}

impl AnalysisOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::NoEvents => 1,
            Self::Reported(_) | Self::NoCompletedResources => 0,
        }
    }

    /// Whether the outcome is reported as an error (stderr, non-zero exit)
    pub fn is_failure(&self) -> bool {
        self.exit_code() != 0
    }

    /// Message for outcomes that produced no report
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Reported(_) => None,
            Self::NoEvents => Some(NO_EVENTS_MESSAGE),
            Self::NoCompletedResources => Some(NO_COMPLETED_RESOURCES_MESSAGE),
        }
    }
}
