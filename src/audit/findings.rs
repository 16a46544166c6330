//! Findings engine.
//!
//! A pure function from collected DNS facts to graded findings. Rules run in
//! a fixed order so the findings list is deterministic and stable across
//! runs, which downstream consumers rely on to diff reports over time.

use crate::report::{DnssecPosture, Finding, NsecVariant, Registry, Score, Serial, Soa};

/// Rule id: the zone NS set is empty (early-exit rule).
pub const RULE_NO_NAMESERVERS: &str = "no-nameservers";
/// Rule id: zone NS set matches the TLD delegation.
pub const RULE_DELEGATION_MATCH: &str = "delegation-match";
/// Rule id: the TLD is in the ICANN section of the public suffix list.
pub const RULE_ICANN_MEMBERSHIP: &str = "icann-membership";
/// Rule id: NSEC variant and zone-walk exposure.
pub const RULE_NSEC_WALKABILITY: &str = "nsec-walkability";
/// Rule id: DNSSEC enabled.
pub const RULE_DNSSEC_ENABLED: &str = "dnssec-enabled";
/// Rule id: SOA serial agreement across nameservers.
pub const RULE_SERIAL_CONSISTENCY: &str = "serial-consistency";
/// Rule id: at least two nameservers serve the zone.
pub const RULE_NAMESERVER_REDUNDANCY: &str = "nameserver-redundancy";

/// Facts the rule table grades, borrowed from the completed pipeline stages.
#[derive(Debug)]
pub struct FindingsInput<'a> {
    /// The audited registrable domain.
    pub domain: &'a str,
    /// Registry facts from the registry inspector.
    pub registry: &'a Registry,
    /// Zone NS set as seen by the recursive resolver.
    pub zone_ns: &'a [String],
    /// NS set as delegated by the TLD.
    pub tld_ns: &'a [String],
    /// SOA record from the configured resolver.
    pub soa: &'a Soa,
    /// Per-nameserver observed serials, in zone NS order.
    pub serials: &'a [Serial],
    /// DNSSEC posture of the zone.
    pub dnssec: &'a DnssecPosture,
}

/// Evaluates the rule table against the collected facts.
///
/// Every rule contributes exactly one finding; the output order is always
/// the rule-table order, independent of the input.
pub fn evaluate(input: &FindingsInput<'_>) -> Vec<Finding> {
    let domain = input.domain;
    let tld = &input.registry.tld;
    let mut findings = Vec::with_capacity(6);

    findings.push(if sets_equal(input.zone_ns, input.tld_ns) {
        Finding::new(
            RULE_DELEGATION_MATCH,
            format!("The domain {domain} has the same nameservers in the zone and at the TLD."),
            Score::Ok,
        )
    } else {
        Finding::new(
            RULE_DELEGATION_MATCH,
            format!("The domain {domain} has different nameservers in the zone and at the TLD."),
            Score::Fail,
        )
    });

    findings.push(if input.registry.member_icann {
        Finding::new(
            RULE_ICANN_MEMBERSHIP,
            format!("The TLD {tld} is an ICANN member."),
            Score::Ok,
        )
    } else {
        Finding::new(
            RULE_ICANN_MEMBERSHIP,
            format!("The TLD {tld} is NOT an ICANN member."),
            Score::Fail,
        )
    });

    findings.push(match input.dnssec.nsec {
        NsecVariant::Nsec3 => Finding::new(
            RULE_NSEC_WALKABILITY,
            format!("The zone {domain} uses NSEC3, which resists zone walking."),
            Score::Ok,
        ),
        NsecVariant::Nsec => Finding::new(
            RULE_NSEC_WALKABILITY,
            format!("The zone {domain} uses NSEC, which allows the zone to be walked."),
            Score::Fail,
        ),
        NsecVariant::None => Finding::new(
            RULE_NSEC_WALKABILITY,
            format!("The zone {domain} publishes no NSEC or NSEC3 records."),
            Score::Neutral,
        ),
    });

    findings.push(if input.dnssec.enabled {
        Finding::new(
            RULE_DNSSEC_ENABLED,
            format!("The domain {domain} uses DNSSEC."),
            Score::Ok,
        )
    } else {
        Finding::new(
            RULE_DNSSEC_ENABLED,
            format!("The domain {domain} does NOT use DNSSEC."),
            Score::Fail,
        )
    });

    findings.push(if serials_consistent(input.soa.serial, input.serials) {
        Finding::new(
            RULE_SERIAL_CONSISTENCY,
            format!("The SOA serial of {domain} is the same on all nameservers."),
            Score::Ok,
        )
    } else {
        Finding::new(
            RULE_SERIAL_CONSISTENCY,
            format!("The SOA serial of {domain} is NOT the same on all nameservers."),
            Score::Fail,
        )
    });

    findings.push(if input.zone_ns.len() >= 2 {
        Finding::new(
            RULE_NAMESERVER_REDUNDANCY,
            format!("The domain {domain} has 2 or more nameservers."),
            Score::Ok,
        )
    } else {
        Finding::new(
            RULE_NAMESERVER_REDUNDANCY,
            format!("The domain {domain} has less than 2 nameservers."),
            Score::Fail,
        )
    });

    findings
}

/// Builds the single finding emitted when the zone has no nameservers.
///
/// This is the one rule that gates pipeline continuation: with an empty zone
/// NS set, no later stage can run and the rule table is skipped entirely.
pub fn no_nameservers(domain: &str) -> Finding {
    Finding::new(
        RULE_NO_NAMESERVERS,
        format!("The domain {domain} has no nameservers in the zone."),
        Score::Fail,
    )
}

/// Order-independent set equality: same cardinality, identical sorted
/// elements.
pub fn sets_equal(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a_sorted = a.to_vec();
    let mut b_sorted = b.to_vec();
    a_sorted.sort();
    b_sorted.sort();
    a_sorted == b_sorted
}

/// True when every nameserver answered and all serials match the primary
/// SOA serial.
///
/// An unreachable nameserver (`serial: None`) is never counted as agreeing
/// with anything, including another unreachable one.
pub fn serials_consistent(primary: u32, serials: &[Serial]) -> bool {
    serials.iter().all(|s| s.serial == Some(primary))
}
