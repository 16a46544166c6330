//! DNS exchange facade.
//!
//! This module wraps raw DNS over UDP/TCP behind the [`DnsExchange`] trait:
//! - [`UdpExchange`] builds wire-format queries with `hickory-proto`, sends
//!   them to a specific nameserver and falls back to TCP on truncation
//! - typed helpers extract NS, SOA and CHAOS-class TXT data from responses
//!
//! The trait seam exists so the audit pipeline can be driven by a scripted
//! exchange in tests without touching the network.

mod exchange;
mod lookups;
#[cfg(test)]
pub(crate) mod test_support;

pub use exchange::UdpExchange;
pub use lookups::{chaos_txt, resolve_delegated_ns, resolve_soa, resolve_zone_ns};

use async_trait::async_trait;
use hickory_proto::rr::{DNSClass, Record, RecordType};

use crate::error_handling::LookupError;

/// Answer and authority sections of a DNS response.
///
/// The response code is not interpreted here: a NOERROR answer with an empty
/// answer section and an NXDOMAIN referral both surface as-is, and callers
/// decide what absence means for their stage.
#[derive(Debug, Clone, Default)]
pub struct DnsResponse {
    /// Records from the answer section.
    pub answers: Vec<Record>,
    /// Records from the authority section.
    pub authorities: Vec<Record>,
}

/// A single blocking DNS request/response exchange.
///
/// Implementations own the transport and the per-query timeout; callers get
/// exactly one attempt per call, with no retry or caching.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    /// Sends one query to `server` and returns the parsed response sections.
    ///
    /// # Arguments
    ///
    /// * `qname` - The name to query
    /// * `qtype` - The record type to request
    /// * `class` - The query class (`IN` for regular data, `CH` for
    ///   nameserver identity strings)
    /// * `recursion_desired` - Whether to set the RD flag
    /// * `server` - Nameserver address (`host` or `host:port`; bare hosts
    ///   use the standard DNS port)
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] on transport failure, timeout, or a
    /// malformed response.
    async fn query(
        &self,
        qname: &str,
        qtype: RecordType,
        class: DNSClass,
        recursion_desired: bool,
        server: &str,
    ) -> Result<DnsResponse, LookupError>;
}

#[cfg(test)]
mod tests;
