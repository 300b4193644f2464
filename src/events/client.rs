//! CloudFormation client for fetching stack events.

use super::types::StackEvent;
use super::EventSource;
use crate::utils::error::FetchError;
use aws_config::BehaviorVersion;
use aws_sdk_cloudformation as cfn;
use aws_sdk_cloudformation::config::Region;
use aws_sdk_cloudformation::error::DisplayErrorContext;
use log::{debug, info, warn};
use tokio::runtime::{Builder, Runtime};

/// Event source backed by the CloudFormation `DescribeStackEvents` API
///
/// The SDK is async; the source owns a current-thread runtime and blocks on
/// the single request, which keeps the rest of the pipeline synchronous.
pub struct CloudFormationSource {
    runtime: Runtime,
    client: cfn::Client,
}

impl CloudFormationSource {
    /// Create a client for the given shared-config profile and region
    ///
    /// Credentials are resolved lazily by the SDK, so a bad profile surfaces
    /// as a request failure rather than here.
    pub fn new(profile: &str, region: &str) -> Result<Self, FetchError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(FetchError::Runtime)?;

        debug!("Loading AWS config (profile: {}, region: {})", profile, region);

        let config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .profile_name(profile)
                .region(Region::new(region.to_string()))
                .load(),
        );

        Ok(Self {
            runtime,
            client: cfn::Client::new(&config),
        })
    }
}

impl EventSource for CloudFormationSource {
    fn fetch_events(&self, stack_name: &str) -> Result<Vec<StackEvent>, FetchError> {
        info!("Fetching stack events for: {}", stack_name);

        // Single call: no pagination, no retries beyond the SDK defaults
        let response = self
            .runtime
            .block_on(
                self.client
                    .describe_stack_events()
                    .stack_name(stack_name)
                    .send(),
            )
            .map_err(|e| FetchError::RequestFailed(DisplayErrorContext(&e).to_string()))?;

        let events: Vec<StackEvent> = response
            .stack_events()
            .iter()
            .filter_map(from_sdk_event)
            .collect();

        debug!("Received {} stack events", events.len());

        Ok(events)
    }
}

/// Map an SDK event into the internal model
///
/// **Private** - boundary conversion
fn from_sdk_event(event: &cfn::types::StackEvent) -> Option<StackEvent> {
    let timestamp = event
        .timestamp()
        .and_then(|t| chrono::DateTime::from_timestamp(t.secs(), t.subsec_nanos()));

    let Some(timestamp) = timestamp else {
        warn!(
            "Dropping event without a usable timestamp for resource {}",
            event.logical_resource_id().unwrap_or("?")
        );
        return None;
    };

    Some(StackEvent {
        logical_resource_id: event.logical_resource_id().map(str::to_string),
        resource_type: event.resource_type().map(str::to_string),
        resource_status: event
            .resource_status()
            .map(|s| s.as_str())
            .unwrap_or_default()
            .into(),
        resource_status_reason: event.resource_status_reason().map(str::to_string),
        stack_name: event.stack_name().unwrap_or_default().to_string(),
        timestamp,
    })
}
