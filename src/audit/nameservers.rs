//! Nameserver surveying: the zone NS set two independent ways.
//!
//! The same NS set is resolved once through a recursive resolver (what any
//! client sees) and once directly at a TLD nameserver (what the registry
//! delegates). Comparing the two detects delegation drift, where the zone
//! operator changed NS records but forgot the registry, or vice versa.

use crate::error_handling::AuditError;
use crate::resolver::{resolve_delegated_ns, resolve_zone_ns, DnsExchange};

/// Resolves the zone NS set as seen by a standard recursive resolver.
///
/// # Errors
///
/// Returns [`AuditError::ZoneNsLookup`] on exchange failure. An empty NS
/// set is *not* an error here; the orchestrator turns it into the
/// early-exit finding.
pub async fn survey_zone_ns<E>(
    domain: &str,
    resolver: &str,
    exchange: &E,
) -> Result<Vec<String>, AuditError>
where
    E: DnsExchange + ?Sized,
{
    resolve_zone_ns(domain, resolver, exchange)
        .await
        .map_err(|source| AuditError::ZoneNsLookup {
            domain: domain.to_string(),
            source,
        })
}

/// Fetches the NS set the TLD delegates for the domain, directly from a
/// TLD nameserver.
///
/// # Errors
///
/// Returns [`AuditError::DelegatedNsLookup`] on exchange failure.
pub async fn survey_delegated_ns<E>(
    domain: &str,
    tld_nameserver: &str,
    exchange: &E,
) -> Result<Vec<String>, AuditError>
where
    E: DnsExchange + ?Sized,
{
    resolve_delegated_ns(domain, tld_nameserver, exchange)
        .await
        .map_err(|source| AuditError::DelegatedNsLookup {
            domain: domain.to_string(),
            server: tld_nameserver.to_string(),
            source,
        })
}
