//! Stack Deploy Profiler
//!
//! Per-resource provisioning durations for the latest deployment
//! of an AWS CloudFormation stack.
//!
//! This crate provides the core implementation for the
//! `cfn-profiler` CLI tool. The pipeline is linear:
//!
//! 1. [`events`] fetches the raw event bag for a stack
//! 2. [`filter`] keeps the events of the latest user-initiated update
//! 3. [`aggregator`] pairs start/complete events into durations
//! 4. [`output`] renders the result as text or JSON
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install stack-deploy-profiler
//! cfn-profiler my-stack my-profile eu-west-1
//! ```

pub mod aggregator;
pub mod commands;
pub mod events;
pub mod filter;
pub mod output;
pub mod utils;
