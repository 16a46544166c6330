//! Error type definitions.

use std::time::Duration;

use hickory_proto::error::ProtoError;
use hickory_proto::rr::RecordType;
use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors from domain-name normalization.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The input is not a valid internationalized domain name.
    #[error("'{0}' is not a valid internationalized domain name")]
    Idna(String),

    /// The input has no registrable domain below a known public suffix.
    #[error("'{0}' has no registrable domain below a known public suffix")]
    NoRegistrableDomain(String),
}

/// Errors from a single DNS exchange.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The query name could not be parsed into a DNS name.
    #[error("invalid DNS name '{name}': {source}")]
    InvalidName {
        /// The rejected name.
        name: String,
        /// The underlying wire-protocol error.
        source: ProtoError,
    },

    /// The nameserver address could not be resolved to a socket address.
    #[error("cannot resolve nameserver address '{0}'")]
    InvalidServer(String),

    /// Wire-format encoding or decoding failed.
    #[error("DNS wire protocol error: {0}")]
    Proto(#[from] ProtoError),

    /// A socket operation failed.
    #[error("I/O error talking to {server}: {source}")]
    Io {
        /// The nameserver the exchange targeted.
        server: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// No response arrived within the per-query timeout.
    #[error("query to {server} timed out after {timeout:?}")]
    Timeout {
        /// The nameserver the exchange targeted.
        server: String,
        /// The timeout that elapsed.
        timeout: Duration,
    },

    /// The response id did not match the query id.
    #[error("response from {server} carries a mismatched message id")]
    IdMismatch {
        /// The nameserver the exchange targeted.
        server: String,
    },

    /// The response was well-formed but held no record of the expected type.
    #[error("no {qtype} records in answer from {server}")]
    NoRecords {
        /// The record type that was requested.
        qtype: RecordType,
        /// The nameserver that answered.
        server: String,
    },
}

/// Fatal audit errors, one per pipeline stage that can abort the run.
///
/// Each variant truncates the pipeline: the error message is recorded on the
/// report and no later stage executes. Per-nameserver failures inside the
/// SOA and fingerprint fan-outs are *not* represented here; they degrade to
/// absent values on the report instead.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The input could not be reduced to a registrable domain.
    #[error("domain normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    /// The TLD's own nameservers could not be resolved.
    #[error("registry lookup for TLD '{tld}' failed: {source}")]
    RegistryLookup {
        /// The TLD whose nameservers were requested.
        tld: String,
        /// The underlying lookup error.
        source: LookupError,
    },

    /// The zone NS set could not be resolved at the recursive resolver.
    #[error("zone NS lookup for {domain} failed: {source}")]
    ZoneNsLookup {
        /// The audited domain.
        domain: String,
        /// The underlying lookup error.
        source: LookupError,
    },

    /// The delegation could not be fetched from a TLD nameserver.
    #[error("delegated NS lookup for {domain} at {server} failed: {source}")]
    DelegatedNsLookup {
        /// The audited domain.
        domain: String,
        /// The TLD nameserver that was queried.
        server: String,
        /// The underlying lookup error.
        source: LookupError,
    },

    /// The primary SOA record could not be fetched.
    #[error("SOA lookup for {domain} at {server} failed: {source}")]
    SoaLookup {
        /// The audited domain.
        domain: String,
        /// The resolver that was queried.
        server: String,
        /// The underlying lookup error.
        source: LookupError,
    },

    /// DNSSEC posture detection failed.
    #[error("DNSSEC check for {domain} failed: {source}")]
    DnssecCheck {
        /// The audited domain.
        domain: String,
        /// The underlying lookup error.
        source: LookupError,
    },
}
