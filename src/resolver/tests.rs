//! Resolver lookup tests against a scripted exchange.

use super::test_support::*;
use super::*;
use crate::error_handling::LookupError;

const RESOLVER: &str = "198.51.100.1";
const TLD_NS: &str = "a.nic.test.";

#[tokio::test]
async fn zone_ns_lookup_lowercases_and_dedups() {
    let exchange = ScriptedExchange::new().respond(
        "example.test",
        RecordType::NS,
        RESOLVER,
        ns_answer(
            "example.test",
            &["NS1.Example.TEST.", "ns2.example.test.", "ns1.example.test."],
        ),
    );
    let ns = resolve_zone_ns("example.test", RESOLVER, &exchange)
        .await
        .unwrap();
    assert_eq!(ns, vec!["ns1.example.test.", "ns2.example.test."]);
}

#[tokio::test]
async fn zone_ns_lookup_returns_empty_set_for_empty_answer() {
    let exchange = ScriptedExchange::new();
    let ns = resolve_zone_ns("example.test", RESOLVER, &exchange)
        .await
        .unwrap();
    assert!(ns.is_empty());
}

#[tokio::test]
async fn delegated_ns_reads_the_authority_section() {
    let exchange = ScriptedExchange::new().respond(
        "example.test",
        RecordType::NS,
        TLD_NS,
        ns_referral("example.test", &["ns1.example.test.", "ns3.example.test."]),
    );
    let ns = resolve_delegated_ns("example.test", TLD_NS, &exchange)
        .await
        .unwrap();
    assert_eq!(ns, vec!["ns1.example.test.", "ns3.example.test."]);
}

#[tokio::test]
async fn delegated_ns_falls_back_to_the_answer_section() {
    let exchange = ScriptedExchange::new().respond(
        "example.test",
        RecordType::NS,
        TLD_NS,
        ns_answer("example.test", &["ns1.example.test."]),
    );
    let ns = resolve_delegated_ns("example.test", TLD_NS, &exchange)
        .await
        .unwrap();
    assert_eq!(ns, vec!["ns1.example.test."]);
}

#[tokio::test]
async fn soa_lookup_extracts_all_fields() {
    let exchange = ScriptedExchange::new().respond(
        "example.test",
        RecordType::SOA,
        RESOLVER,
        answer(vec![soa_record(
            "example.test",
            "ns1.example.test.",
            "hostmaster.example.test.",
            2024010100,
        )]),
    );
    let soa = resolve_soa("example.test", RESOLVER, &exchange)
        .await
        .unwrap();
    assert_eq!(soa.ns, "ns1.example.test.");
    assert_eq!(soa.mbox, "hostmaster.example.test.");
    assert_eq!(soa.serial, 2024010100);
    assert_eq!(soa.refresh, 7200);
    assert_eq!(soa.minttl, 3600);
}

#[tokio::test]
async fn soa_lookup_without_soa_answer_is_an_error() {
    let exchange = ScriptedExchange::new();
    let result = resolve_soa("example.test", RESOLVER, &exchange).await;
    assert!(matches!(
        result,
        Err(LookupError::NoRecords {
            qtype: RecordType::SOA,
            ..
        })
    ));
}

#[tokio::test]
async fn chaos_txt_returns_the_first_answer_payload() {
    let exchange = ScriptedExchange::new().respond(
        "version.bind",
        RecordType::TXT,
        "ns1.example.test.",
        answer(vec![txt_record("version.bind.", "9.18.24")]),
    );
    let version = chaos_txt("version.bind", "ns1.example.test.", &exchange)
        .await
        .unwrap();
    assert_eq!(version.as_deref(), Some("9.18.24"));
}

#[tokio::test]
async fn chaos_txt_without_txt_answer_is_none() {
    let exchange = ScriptedExchange::new();
    let version = chaos_txt("version.bind", "ns1.example.test.", &exchange)
        .await
        .unwrap();
    assert!(version.is_none());
}
