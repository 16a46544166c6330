//! SOA and serial auditing.
//!
//! Fetches the primary SOA from the configured resolver, then probes every
//! zone nameserver for its own view of the serial. The probes run
//! concurrently but the results stay in zone-NS order; the findings engine,
//! not this stage, renders the consistency verdict.

use futures::future;

use crate::error_handling::AuditError;
use crate::report::{Serial, Soa};
use crate::resolver::{resolve_soa, DnsExchange};

/// Fetches the primary SOA and one observed serial per zone nameserver.
///
/// A nameserver that does not answer (timeout, refusal, no SOA record)
/// degrades to `serial: None` for that entry; it never aborts the stage.
///
/// # Arguments
///
/// * `domain` - The audited domain
/// * `resolver` - The recursive resolver to fetch the primary SOA from
/// * `zone_ns` - The zone NS set; output order matches this slice
/// * `exchange` - The DNS exchange to query through
///
/// # Errors
///
/// Returns [`AuditError::SoaLookup`] only when the *primary* SOA fetch
/// fails.
pub async fn audit_soa<E>(
    domain: &str,
    resolver: &str,
    zone_ns: &[String],
    exchange: &E,
) -> Result<(Soa, Vec<Serial>), AuditError>
where
    E: DnsExchange + ?Sized,
{
    let soa = resolve_soa(domain, resolver, exchange)
        .await
        .map_err(|source| AuditError::SoaLookup {
            domain: domain.to_string(),
            server: resolver.to_string(),
            source,
        })?;

    let probes = zone_ns.iter().map(|nameserver| async move {
        match resolve_soa(domain, nameserver, exchange).await {
            Ok(answer) => Serial {
                nameserver: nameserver.clone(),
                serial: Some(answer.serial),
            },
            Err(e) => {
                log::warn!("SOA probe of {domain} at {nameserver} failed: {e}");
                Serial {
                    nameserver: nameserver.clone(),
                    serial: None,
                }
            }
        }
    });
    // join_all keeps input order, so serials stay 1:1 with zone_ns.
    let serials = future::join_all(probes).await;

    Ok((soa, serials))
}
