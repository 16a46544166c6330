//! DNSSEC posture detection.
//!
//! The zone counts as DNSSEC-enabled when it publishes a DNSKEY at its own
//! apex *and* the TLD publishes a DS record for the delegation; a signed
//! zone without a DS is an island of trust and reports as not enabled.
//! The NSEC variant comes from an NSEC3PARAM apex query, falling back to a
//! nonexistent-name probe whose authority section is scanned for NSEC or
//! NSEC3 records.

use hickory_proto::rr::{DNSClass, RecordType};

use crate::config::NONEXISTENT_PROBE_LABEL;
use crate::error_handling::AuditError;
use crate::report::{DnssecPosture, NsecVariant};
use crate::resolver::DnsExchange;

/// Detects the DNSSEC posture of a zone.
///
/// # Arguments
///
/// * `domain` - The audited domain
/// * `zone_ns` - One authoritative zone nameserver
/// * `tld_ns` - One TLD nameserver holding the delegation
/// * `exchange` - The DNS exchange to query through
///
/// # Errors
///
/// Posture is mandatory report content, so any exchange failure is returned
/// as [`AuditError::DnssecCheck`] and aborts the audit.
pub async fn check_dnssec<E>(
    domain: &str,
    zone_ns: &str,
    tld_ns: &str,
    exchange: &E,
) -> Result<DnssecPosture, AuditError>
where
    E: DnsExchange + ?Sized,
{
    let wrap = |source| AuditError::DnssecCheck {
        domain: domain.to_string(),
        source,
    };

    let dnskey = exchange
        .query(domain, RecordType::DNSKEY, DNSClass::IN, false, zone_ns)
        .await
        .map_err(wrap)?;
    let has_dnskey = dnskey
        .answers
        .iter()
        .any(|r| r.record_type() == RecordType::DNSKEY);

    let ds = exchange
        .query(domain, RecordType::DS, DNSClass::IN, false, tld_ns)
        .await
        .map_err(wrap)?;
    let has_ds = ds
        .answers
        .iter()
        .chain(ds.authorities.iter())
        .any(|r| r.record_type() == RecordType::DS);

    let enabled = has_dnskey && has_ds;
    if !enabled {
        log::debug!("{domain}: DNSKEY present: {has_dnskey}, DS at TLD: {has_ds}");
        return Ok(DnssecPosture {
            enabled,
            nsec: NsecVariant::None,
        });
    }

    let nsec = detect_nsec_variant(domain, zone_ns, exchange)
        .await
        .map_err(|source| AuditError::DnssecCheck {
            domain: domain.to_string(),
            source,
        })?;

    Ok(DnssecPosture { enabled, nsec })
}

async fn detect_nsec_variant<E>(
    domain: &str,
    zone_ns: &str,
    exchange: &E,
) -> Result<NsecVariant, crate::error_handling::LookupError>
where
    E: DnsExchange + ?Sized,
{
    let params = exchange
        .query(domain, RecordType::NSEC3PARAM, DNSClass::IN, false, zone_ns)
        .await?;
    if params
        .answers
        .iter()
        .any(|r| r.record_type() == RecordType::NSEC3PARAM)
    {
        return Ok(NsecVariant::Nsec3);
    }

    // Denial-of-existence probe: an authoritative answer for a name that
    // cannot exist carries the zone's NSEC or NSEC3 chain in the authority
    // section.
    let probe = format!("{NONEXISTENT_PROBE_LABEL}.{domain}");
    let response = exchange
        .query(&probe, RecordType::A, DNSClass::IN, false, zone_ns)
        .await?;
    if response
        .authorities
        .iter()
        .any(|r| r.record_type() == RecordType::NSEC3)
    {
        return Ok(NsecVariant::Nsec3);
    }
    if response
        .authorities
        .iter()
        .any(|r| r.record_type() == RecordType::NSEC)
    {
        return Ok(NsecVariant::Nsec);
    }
    Ok(NsecVariant::None)
}
