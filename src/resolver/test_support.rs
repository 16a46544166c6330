//! Scripted DNS exchange and record builders for tests.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use hickory_proto::rr::rdata::{NS, SOA, TXT};
use hickory_proto::rr::{DNSClass, Name, RData, Record, RecordType};

use super::{DnsExchange, DnsResponse};
use crate::error_handling::LookupError;

/// Builds a fully-qualified name, panicking on invalid input (test-only).
pub fn name(s: &str) -> Name {
    let mut name = Name::from_utf8(s).unwrap();
    name.set_fqdn(true);
    name
}

/// Builds an NS record pointing `owner` at `target`.
pub fn ns_record(owner: &str, target: &str) -> Record {
    Record::from_rdata(name(owner), 300, RData::NS(NS(name(target))))
}

/// Builds an SOA record with the given serial and fixed timers.
pub fn soa_record(owner: &str, mname: &str, rname: &str, serial: u32) -> Record {
    let soa = SOA::new(name(mname), name(rname), serial, 7200, 3600, 1209600, 3600);
    Record::from_rdata(name(owner), 300, RData::SOA(soa))
}

/// Builds a single-segment TXT record.
pub fn txt_record(owner: &str, value: &str) -> Record {
    Record::from_rdata(name(owner), 0, RData::TXT(TXT::new(vec![value.to_string()])))
}

/// Builds a record that carries only a type, for presence checks
/// (DNSKEY/DS/NSEC/NSEC3PARAM probes look at the type, not the data).
pub fn type_only_record(owner: &str, rtype: RecordType) -> Record {
    Record::with(name(owner), rtype, 300)
}

/// Builds a response whose answer section lists NS records for `owner`.
pub fn ns_answer(owner: &str, targets: &[&str]) -> DnsResponse {
    DnsResponse {
        answers: targets.iter().map(|t| ns_record(owner, t)).collect(),
        authorities: Vec::new(),
    }
}

/// Builds a referral whose authority section lists NS records for `owner`.
pub fn ns_referral(owner: &str, targets: &[&str]) -> DnsResponse {
    DnsResponse {
        answers: Vec::new(),
        authorities: targets.iter().map(|t| ns_record(owner, t)).collect(),
    }
}

/// Builds a response whose answer section is exactly `records`.
pub fn answer(records: Vec<Record>) -> DnsResponse {
    DnsResponse {
        answers: records,
        authorities: Vec::new(),
    }
}

#[derive(Clone)]
enum Scripted {
    Respond(DnsResponse),
    Fail,
}

/// A [`DnsExchange`] that serves pre-scripted responses from memory.
///
/// Keyed by `(qname, qtype, server)`. Unscripted queries return an empty
/// NOERROR response; [`ScriptedExchange::fail`] scripts a timeout.
#[derive(Default)]
pub struct ScriptedExchange {
    responses: HashMap<(String, RecordType, String), Scripted>,
}

impl ScriptedExchange {
    /// Creates an exchange with no scripted responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts a response for a query.
    pub fn respond(
        mut self,
        qname: &str,
        qtype: RecordType,
        server: &str,
        response: DnsResponse,
    ) -> Self {
        self.responses.insert(
            (qname.to_string(), qtype, server.to_string()),
            Scripted::Respond(response),
        );
        self
    }

    /// Scripts a timeout for a query.
    pub fn fail(mut self, qname: &str, qtype: RecordType, server: &str) -> Self {
        self.responses
            .insert((qname.to_string(), qtype, server.to_string()), Scripted::Fail);
        self
    }
}

#[async_trait]
impl DnsExchange for ScriptedExchange {
    async fn query(
        &self,
        qname: &str,
        qtype: RecordType,
        _class: DNSClass,
        _recursion_desired: bool,
        server: &str,
    ) -> Result<DnsResponse, LookupError> {
        let key = (qname.to_string(), qtype, server.to_string());
        match self.responses.get(&key) {
            Some(Scripted::Respond(response)) => Ok(response.clone()),
            Some(Scripted::Fail) => Err(LookupError::Timeout {
                server: server.to_string(),
                timeout: Duration::from_millis(0),
            }),
            None => Ok(DnsResponse::default()),
        }
    }
}
