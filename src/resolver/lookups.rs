//! Typed lookups on top of the raw exchange.
//!
//! These helpers issue one query each and extract the records the audit
//! cares about. Nameserver names are lower-cased, fully qualified and
//! deduplicated in response order.

use hickory_proto::rr::{DNSClass, RData, Record, RecordType};

use super::DnsExchange;
use crate::error_handling::LookupError;
use crate::report::Soa;

/// Resolves the zone NS set of a domain through a recursive resolver.
///
/// # Arguments
///
/// * `domain` - The domain whose nameservers to resolve
/// * `server` - A recursive resolver address
/// * `exchange` - The DNS exchange to query through
///
/// # Errors
///
/// Returns a [`LookupError`] if the exchange itself fails. A successful
/// response without NS records yields an empty vector.
pub async fn resolve_zone_ns<E>(
    domain: &str,
    server: &str,
    exchange: &E,
) -> Result<Vec<String>, LookupError>
where
    E: DnsExchange + ?Sized,
{
    let response = exchange
        .query(domain, RecordType::NS, DNSClass::IN, true, server)
        .await?;
    Ok(extract_ns(&response.answers))
}

/// Fetches the delegation NS set for a domain directly from a parent-zone
/// nameserver (non-recursive).
///
/// Delegations arrive in the authority section of a referral; a few TLD
/// servers answer authoritatively instead, so the answer section is used as
/// a fallback when the authority section holds no NS records.
///
/// # Errors
///
/// Returns a [`LookupError`] if the exchange itself fails.
pub async fn resolve_delegated_ns<E>(
    domain: &str,
    server: &str,
    exchange: &E,
) -> Result<Vec<String>, LookupError>
where
    E: DnsExchange + ?Sized,
{
    let response = exchange
        .query(domain, RecordType::NS, DNSClass::IN, false, server)
        .await?;
    let mut names = extract_ns(&response.authorities);
    if names.is_empty() {
        names = extract_ns(&response.answers);
    }
    Ok(names)
}

/// Fetches the SOA record of a domain from the given nameserver.
///
/// # Errors
///
/// Returns [`LookupError::NoRecords`] when the response holds no SOA record,
/// so that "the server answered but has no authority data" is
/// distinguishable from a legitimately-zero serial.
pub async fn resolve_soa<E>(domain: &str, server: &str, exchange: &E) -> Result<Soa, LookupError>
where
    E: DnsExchange + ?Sized,
{
    let response = exchange
        .query(domain, RecordType::SOA, DNSClass::IN, true, server)
        .await?;
    response
        .answers
        .iter()
        .find_map(|record| match record.data() {
            Some(RData::SOA(soa)) => Some(Soa {
                ns: soa.mname().to_utf8().to_lowercase(),
                mbox: soa.rname().to_utf8().to_lowercase(),
                serial: soa.serial(),
                refresh: soa.refresh() as u32,
                retry: soa.retry() as u32,
                expire: soa.expire() as u32,
                minttl: soa.minimum(),
            }),
            _ => None,
        })
        .ok_or_else(|| LookupError::NoRecords {
            qtype: RecordType::SOA,
            server: server.to_string(),
        })
}

/// Queries a CHAOS-class TXT name (`version.bind` or `hostname.bind`) on a
/// nameserver.
///
/// # Returns
///
/// The joined TXT payload of the first answer, or `None` when the server
/// answered without TXT data (most servers refuse or ignore CHAOS queries).
///
/// # Errors
///
/// Returns a [`LookupError`] if the exchange itself fails; callers treat
/// that the same as `None`.
pub async fn chaos_txt<E>(
    qname: &str,
    server: &str,
    exchange: &E,
) -> Result<Option<String>, LookupError>
where
    E: DnsExchange + ?Sized,
{
    let response = exchange
        .query(qname, RecordType::TXT, DNSClass::CH, true, server)
        .await?;
    Ok(response.answers.iter().find_map(|record| match record.data() {
        Some(RData::TXT(txt)) => Some(
            txt.iter()
                .map(|segment| String::from_utf8_lossy(segment).to_string())
                .collect::<Vec<_>>()
                .join(""),
        ),
        _ => None,
    }))
}

/// Extracts NS target names from a record section, lower-cased and
/// deduplicated in response order.
fn extract_ns(records: &[Record]) -> Vec<String> {
    let mut names = Vec::new();
    for record in records {
        if let Some(RData::NS(ns)) = record.data() {
            let name = ns.0.to_utf8().to_lowercase();
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}
