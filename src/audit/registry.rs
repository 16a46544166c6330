//! Registry inspection: TLD facts and the TLD's own nameservers.

use hickory_proto::rr::RecordType;

use crate::domain;
use crate::error_handling::{AuditError, LookupError};
use crate::report::Registry;
use crate::resolver::{resolve_zone_ns, DnsExchange};

/// Determines the domain's TLD, its ICANN membership, and the TLD's
/// authoritative nameservers.
///
/// The public-suffix lookup is a pure local computation; only the NS
/// resolution of the TLD itself touches the network. Every later pipeline
/// stage reaches authoritative data through the first TLD nameserver, so
/// failure here (including an empty TLD NS set) is fatal for the audit.
///
/// # Errors
///
/// Returns [`AuditError::RegistryLookup`] when the TLD NS resolution fails
/// or yields no nameservers.
pub async fn inspect_registry<E>(
    domain: &str,
    resolver: &str,
    exchange: &E,
) -> Result<Registry, AuditError>
where
    E: DnsExchange + ?Sized,
{
    let (tld, member_icann) = domain::public_suffix(domain);

    let nameservers = resolve_zone_ns(&tld, resolver, exchange)
        .await
        .map_err(|source| AuditError::RegistryLookup {
            tld: tld.clone(),
            source,
        })?;
    if nameservers.is_empty() {
        return Err(AuditError::RegistryLookup {
            tld,
            source: LookupError::NoRecords {
                qtype: RecordType::NS,
                server: resolver.to_string(),
            },
        });
    }

    Ok(Registry {
        tld,
        member_icann,
        nameservers,
    })
}
