//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (default resolver, timeouts, EDNS sizing)
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
