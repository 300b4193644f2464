//! Stack Deploy Profiler CLI
//!
//! Reports how long each resource took during the latest
//! create/update of a CloudFormation stack.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;
use std::process::ExitCode;

use stack_deploy_profiler::aggregator::StartTimePolicy;
use stack_deploy_profiler::commands::{execute_analyze, validate_args, AnalyzeArgs};
use stack_deploy_profiler::utils::config::{DEFAULT_REGION, USAGE_EXIT_CODE};

/// Stack Deploy Profiler - which resources were slow in the last deployment
#[derive(Parser, Debug)]
#[command(name = "cfn-profiler")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Name of the stack to analyze
    stack_name: String,

    /// AWS credential profile (from the shared config/credentials files)
    profile: String,

    /// AWS region of the stack
    #[arg(default_value = DEFAULT_REGION)]
    region: String,

    /// Read events from a saved `describe-stack-events` JSON document
    #[arg(long)]
    events_file: Option<PathBuf>,

    /// Also write the report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Print only the N slowest resources
    #[arg(long)]
    top: Option<usize>,

    /// Time each IN_PROGRESS -> COMPLETE cycle separately instead of
    /// measuring repeated completions from the first start
    #[arg(long)]
    clear_start_on_complete: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    // Usage errors exit with 1; --help/--version with 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(ExitCode::from(if e.use_stderr() { USAGE_EXIT_CODE } else { 0 }));
        }
    };

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = AnalyzeArgs {
        stack_name: cli.stack_name,
        profile: cli.profile,
        region: cli.region,
        events_file: cli.events_file,
        output_json: cli.json,
        top: cli.top,
        start_policy: if cli.clear_start_on_complete {
            StartTimePolicy::ClearOnComplete
        } else {
            StartTimePolicy::KeepFirst
        },
    };

    // Validate args first, before any network access
    validate_args(&args)?;

    let outcome = execute_analyze(&args)?;

    if let Some(message) = outcome.message() {
        if outcome.is_failure() {
            eprintln!("{}", message);
        } else {
            println!("{}", message);
        }
    }

    Ok(ExitCode::from(outcome.exit_code()))
}
