//! Congestion-toll assessment service.
//!
//! The `toll` module holds the rule-evaluation core (tariff schedule,
//! exemption policy, and the daily windowed aggregation) together with the
//! HTTP and service facades that expose it. Everything else is plumbing:
//! environment configuration, telemetry, and the binary error boundary.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod toll;
