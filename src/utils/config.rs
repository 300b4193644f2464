//! Configuration and constants for the CLI.

/// Region used when none is given on the command line
pub const DEFAULT_REGION: &str = "us-east-1";

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Resource type of the stack itself (as opposed to its child resources)
pub const STACK_RESOURCE_TYPE: &str = "AWS::CloudFormation::Stack";

/// Status reason CloudFormation attaches to operator-triggered stack operations
pub const USER_INITIATED_REASON: &str = "User Initiated";

// Substituted when an event carries no logical id / type
pub const UNKNOWN_RESOURCE: &str = "UnknownResource";
pub const UNKNOWN_TYPE: &str = "UnknownType";

/// Upper bound for `--top`
pub const MAX_TOP_RESOURCES: usize = 1000;

// Messages for runs that end without a report
pub const NO_EVENTS_MESSAGE: &str = "No events found for analysis";
pub const NO_COMPLETED_RESOURCES_MESSAGE: &str =
    "No completed resource updates found in the latest deployment";

/// Exit code for command-line usage errors
pub const USAGE_EXIT_CODE: u8 = 1;
