//! Error types and categorization.
//!
//! The audit distinguishes two failure classes (see the module docs on
//! [`AuditError`]): fatal stage errors that truncate the pipeline, and
//! degraded per-nameserver failures that are substituted with an absent
//! value and never propagated.

mod types;

pub use types::{AuditError, InitializationError, LookupError, NormalizeError};
