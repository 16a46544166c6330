//! CHAOS-class fingerprint probing.
//!
//! Best-effort queries for each nameserver's self-reported `version.bind`
//! and `hostname.bind`. No finding is generated from this data; it is
//! diagnostic report content only, and every failure degrades to an absent
//! field.

use futures::future;

use crate::report::Fingerprint;
use crate::resolver::{chaos_txt, DnsExchange};

/// Probes every zone nameserver for its CHAOS identity strings.
///
/// Output order matches `zone_ns`. This stage cannot fail: refused or
/// timed-out sub-queries leave the respective field empty.
pub async fn probe_fingerprints<E>(zone_ns: &[String], exchange: &E) -> Vec<Fingerprint>
where
    E: DnsExchange + ?Sized,
{
    let probes = zone_ns.iter().map(|nameserver| async move {
        let bind_version = probe_txt("version.bind", nameserver, exchange).await;
        let bind_hostname = probe_txt("hostname.bind", nameserver, exchange).await;
        Fingerprint {
            nameserver: nameserver.clone(),
            bind_version,
            bind_hostname,
        }
    });
    future::join_all(probes).await
}

async fn probe_txt<E>(qname: &str, nameserver: &str, exchange: &E) -> Option<String>
where
    E: DnsExchange + ?Sized,
{
    match chaos_txt(qname, nameserver, exchange).await {
        Ok(value) => value,
        Err(e) => {
            log::debug!("CHAOS {qname} probe of {nameserver} failed: {e}");
            None
        }
    }
}
