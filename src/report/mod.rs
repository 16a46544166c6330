//! Report data model.
//!
//! Every entity the audit gathers ends up in a [`Report`], which serializes
//! to a compact JSON object: fields that were never populated are omitted so
//! that downstream consumers can diff reports over time without noise.

use serde::{Deserialize, Serialize};

/// Graded outcome of a single audit rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Score {
    /// The rule passed.
    Ok,
    /// The rule failed.
    Fail,
    /// The rule does not apply or carries no judgement.
    Neutral,
}

/// One graded audit rule outcome.
///
/// `id` is a stable rule identifier, unique within a report and identical
/// across runs for the same rule, so consumers can track a rule over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable rule identifier (e.g. `delegation-match`).
    pub id: String,
    /// Human-readable description of the outcome.
    pub text: String,
    /// Graded result of the rule.
    pub score: Score,
}

impl Finding {
    /// Creates a finding from a rule id, text and score.
    pub fn new(id: &str, text: String, score: Score) -> Self {
        Self {
            id: id.to_string(),
            text,
            score,
        }
    }
}

/// Registry-level facts about the domain's TLD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registry {
    /// The public suffix of the domain (e.g. `com`, `co.uk`).
    pub tld: String,
    /// Whether the suffix is on the ICANN section of the public suffix list.
    pub member_icann: bool,
    /// The TLD's own authoritative nameservers, in response order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub nameservers: Vec<String>,
}

/// Start-of-authority record fetched from the configured resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Soa {
    /// Primary nameserver name (MNAME).
    pub ns: String,
    /// Administrative mailbox (RNAME).
    pub mbox: String,
    /// Zone serial number.
    pub serial: u32,
    /// Refresh interval in seconds.
    pub refresh: u32,
    /// Retry interval in seconds.
    pub retry: u32,
    /// Expire interval in seconds.
    pub expire: u32,
    /// Negative-caching TTL in seconds.
    pub minttl: u32,
}

/// SOA serial as observed on one zone nameserver.
///
/// `serial` is `None` when the nameserver was unreachable or returned no SOA;
/// the field is omitted from serialized output in that case. `None` is never
/// treated as agreeing with any other serial.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serial {
    /// The nameserver the serial was observed on.
    pub nameserver: String,
    /// The observed serial, or `None` when the nameserver did not answer.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub serial: Option<u32>,
}

/// CHAOS-class identity strings of one zone nameserver.
///
/// Both fields are best-effort: nameservers commonly refuse CHAOS queries,
/// in which case the field is `None` and omitted from output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fingerprint {
    /// The nameserver that was probed.
    pub nameserver: String,
    /// Self-reported `version.bind` TXT value, if any.
    #[serde(rename = "version", skip_serializing_if = "Option::is_none", default)]
    pub bind_version: Option<String>,
    /// Self-reported `hostname.bind` TXT value, if any.
    #[serde(rename = "hostname", skip_serializing_if = "Option::is_none", default)]
    pub bind_hostname: Option<String>,
}

/// Authenticated denial-of-existence mechanism published by the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NsecVariant {
    /// No NSEC or NSEC3 records observed.
    None,
    /// Plain NSEC: the zone can be enumerated by walking the chain.
    Nsec,
    /// NSEC3: hashed owner names mitigate zone walking.
    Nsec3,
}

impl std::fmt::Display for NsecVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            NsecVariant::None => "none",
            NsecVariant::Nsec => "nsec",
            NsecVariant::Nsec3 => "nsec3",
        })
    }
}

/// DNSSEC security posture of the zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnssecPosture {
    /// Whether the zone is signed and delegated with a DS record.
    pub enabled: bool,
    /// Which denial-of-existence variant the zone publishes.
    pub nsec: NsecVariant,
}

/// Full audit result for one domain.
///
/// Created at audit start and populated stage by stage. When a fatal stage
/// error occurs, the fields gathered so far are preserved and
/// [`error`](Report::error)/[`error_message`](Report::error_message) are set;
/// a report with the error flag set is incomplete, not absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The audited domain, reduced to its registrable form.
    pub domain: String,
    /// Graded findings, in rule evaluation order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub findings: Vec<Finding>,
    /// TLD facts.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub registry: Option<Registry>,
    /// Zone nameservers as seen by the recursive resolver.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub nameservers: Vec<String>,
    /// Nameservers as delegated by the TLD.
    #[serde(
        rename = "nameservers_tld",
        skip_serializing_if = "Vec::is_empty",
        default
    )]
    pub nameservers_tld: Vec<String>,
    /// SOA record from the configured resolver.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub soa: Option<Soa>,
    /// One observed serial per zone nameserver, in nameserver order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub serials: Vec<Serial>,
    /// One CHAOS fingerprint per zone nameserver, in nameserver order.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub fingerprints: Vec<Fingerprint>,
    /// DNSSEC posture of the zone.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub dnssec: Option<DnssecPosture>,
    /// Set when a fatal stage error truncated the audit.
    #[serde(skip_serializing_if = "std::ops::Not::not", default)]
    pub error: bool,
    /// Description of the fatal error, when `error` is set.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error_message: Option<String>,
}

impl Report {
    /// Creates an empty report for the given domain.
    pub fn new(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            ..Self::default()
        }
    }

    /// Records a fatal stage error, preserving everything gathered so far.
    pub fn record_error(&mut self, message: String) {
        self.error = true;
        self.error_message = Some(message);
    }
}
