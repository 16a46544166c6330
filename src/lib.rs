//! domain_audit library: DNS domain-health auditing.
//!
//! Given a domain and a recursive resolver, this library gathers
//! authoritative DNS facts (registry status, nameserver delegation, SOA
//! serial agreement, nameserver software fingerprints, DNSSEC posture) and
//! grades them into a structured report of pass/fail/neutral findings.
//!
//! # Example
//!
//! ```no_run
//! use domain_audit::run_audit;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let report = run_audit("example.com", "8.8.8.8").await;
//! for finding in &report.findings {
//!     println!("{}: {:?}", finding.id, finding.score);
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or call it from within an async context.

#![warn(missing_docs)]

pub mod audit;
pub mod config;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod report;
pub mod resolver;

// Re-export public API
pub use audit::{run, run_audit};
pub use config::{Config, LogFormat, LogLevel};
pub use report::Report;
