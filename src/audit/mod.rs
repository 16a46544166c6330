//! The assessment pipeline.
//!
//! Sequences the resolution stages (registry, nameservers, SOA/serials,
//! fingerprints, DNSSEC), short-circuits on fatal errors, and grades the
//! collected facts into findings:
//!
//! ```text
//! normalize -> registry -> zone NS -> (early exit | delegated NS -> SOA
//!   -> fingerprints -> DNSSEC) -> findings
//! ```
//!
//! A fatal stage error stops the pipeline but preserves everything gathered
//! so far on the report; callers must treat a report with the error flag set
//! as incomplete, not absent.

mod dnssec;
mod findings;
mod fingerprint;
mod nameservers;
mod registry;
mod soa;

pub use findings::{
    evaluate, no_nameservers, serials_consistent, sets_equal, FindingsInput,
    RULE_DELEGATION_MATCH, RULE_DNSSEC_ENABLED, RULE_ICANN_MEMBERSHIP, RULE_NAMESERVER_REDUNDANCY,
    RULE_NO_NAMESERVERS, RULE_NSEC_WALKABILITY, RULE_SERIAL_CONSISTENCY,
};

use crate::domain::normalize_domain;
use crate::error_handling::AuditError;
use crate::report::Report;
use crate::resolver::{DnsExchange, UdpExchange};

/// Runs the full audit for a domain through the given exchange.
///
/// The report always comes back: on a fatal stage error the fields gathered
/// so far are preserved and [`Report::error`]/[`Report::error_message`] are
/// set. A domain whose zone has no nameservers is not an error; it yields a
/// truncated report with the single `no-nameservers` finding.
///
/// # Arguments
///
/// * `input_domain` - Domain to audit (ASCII or IDN, any depth; reduced to
///   its registrable form first)
/// * `resolver` - Recursive resolver address (`host` or `host:port`)
/// * `exchange` - The DNS exchange all queries go through
pub async fn run<E>(input_domain: &str, resolver: &str, exchange: &E) -> Report
where
    E: DnsExchange + ?Sized,
{
    let mut report = Report::new(input_domain);

    let domain = match normalize_domain(input_domain) {
        Ok(domain) => domain,
        Err(e) => return fail(report, AuditError::from(e)),
    };
    report.domain = domain.clone();
    log::info!("Auditing {domain} via resolver {resolver}");

    let registry = match registry::inspect_registry(&domain, resolver, exchange).await {
        Ok(registry) => registry,
        Err(e) => return fail(report, e),
    };
    // inspect_registry guarantees a non-empty TLD NS set.
    let tld_server = registry.nameservers[0].clone();
    let registry_facts = registry.clone();
    report.registry = Some(registry);

    let zone_ns = match nameservers::survey_zone_ns(&domain, resolver, exchange).await {
        Ok(zone_ns) => zone_ns,
        Err(e) => return fail(report, e),
    };
    report.nameservers = zone_ns.clone();

    if zone_ns.is_empty() {
        log::warn!("{domain} has no nameservers in the zone, skipping remaining stages");
        report.findings = vec![findings::no_nameservers(&domain)];
        return report;
    }

    let tld_ns = match nameservers::survey_delegated_ns(&domain, &tld_server, exchange).await {
        Ok(tld_ns) => tld_ns,
        Err(e) => return fail(report, e),
    };
    report.nameservers_tld = tld_ns.clone();

    let (soa, serials) = match soa::audit_soa(&domain, resolver, &zone_ns, exchange).await {
        Ok(result) => result,
        Err(e) => return fail(report, e),
    };
    report.soa = Some(soa.clone());
    report.serials = serials.clone();

    report.fingerprints = fingerprint::probe_fingerprints(&zone_ns, exchange).await;

    let posture = match dnssec::check_dnssec(&domain, &zone_ns[0], &tld_server, exchange).await {
        Ok(posture) => posture,
        Err(e) => return fail(report, e),
    };
    report.dnssec = Some(posture.clone());

    report.findings = findings::evaluate(&FindingsInput {
        domain: &domain,
        registry: &registry_facts,
        zone_ns: &zone_ns,
        tld_ns: &tld_ns,
        soa: &soa,
        serials: &serials,
        dnssec: &posture,
    });

    report
}

/// Runs the audit over the default UDP exchange.
///
/// Convenience wrapper around [`run`] for callers that do not need to
/// customize the transport or timeout.
pub async fn run_audit(domain: &str, resolver: &str) -> Report {
    run(domain, resolver, &UdpExchange::default()).await
}

/// Records a fatal stage error on the report and returns it.
fn fail(mut report: Report, error: AuditError) -> Report {
    log::error!("{error}");
    report.record_error(error.to_string());
    report
}
