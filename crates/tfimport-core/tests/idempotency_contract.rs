//! Architectural Contract Test: Idempotency
//!
//! This test verifies that an import is a pure function of account state.
//!
//! Constraints verified:
//! - Two runs against unchanged state produce byte-identical output
//! - Identifiers do not leak between runs of the same driver
//! - Contacts sharing naming candidates still get distinct identifiers
//! - The provider alias binds resource blocks only
//!
//! If this test fails, someone has added:
//! - A process-wide identifier registry
//! - Output that depends on timing or hash order
//! - Provider meta-arguments on import blocks

mod common;

use common::*;
use std::sync::Arc;
use tfimport_core::model::DomainState;
use tfimport_core::{Driver, ImportConfig, ResourceSelection};

fn account() -> FakeDnsimple {
    FakeDnsimple::new()
        .with_contact(contact(1, "Office", "Jane", "Doe", "US"))
        .with_contact(contact(2, "Office", "Jane", "Doe", "IT"))
        .with_contact(contact(3, "Office", "Jane", "Doe", "IT"))
        .with_domain(domain(1, "example.com", DomainState::Registered), true, true, &["ns2.dnsimple.com", "ns1.dnsimple.com"])
        .with_zone(
            zone(1, "example.com", false),
            vec![record(1234, "example.com", "www", "A", "192.0.2.1")],
        )
}

#[tokio::test]
async fn two_runs_produce_identical_output() {
    let (first, first_output) = run_import(Arc::new(account()), ImportConfig::new("1010")).await;
    let (second, second_output) = run_import(Arc::new(account()), ImportConfig::new("1010")).await;

    assert_eq!(first.expect("first run succeeds"), second.expect("second run succeeds"));
    assert!(!first_output.is_empty());
    assert_eq!(first_output, second_output);
}

#[tokio::test]
async fn same_driver_starts_each_run_with_a_fresh_registry() {
    let driver = Driver::new(Arc::new(account()), ImportConfig::new("1010"));

    let mut first = Vec::new();
    let mut second = Vec::new();
    let first_summary = driver.run(&mut first).await.expect("first run succeeds");
    let second_summary = driver.run(&mut second).await.expect("second run succeeds");

    assert_eq!(first, second);
    assert_eq!(first_summary.identifiers_registered, 3);
    assert_eq!(second_summary.identifiers_registered, 3);
}

#[tokio::test]
async fn contacts_sharing_names_get_distinct_identifiers() {
    let config = ImportConfig::new("1010")
        .with_resources(ResourceSelection::parse("contacts").unwrap());
    let (result, output) = run_import(Arc::new(account()), config).await;
    result.expect("import succeeds");

    // Each collision appends the next naming candidate
    assert!(output.contains("resource \"dnsimple_contact\" \"office\" {"));
    assert!(output.contains("resource \"dnsimple_contact\" \"office_jane\" {"));
    assert!(output.contains("resource \"dnsimple_contact\" \"office_jane_doe\" {"));

    assert!(output.contains("  to = dnsimple_contact.office\n  id = 1\n"));
    assert!(output.contains("  to = dnsimple_contact.office_jane\n  id = 2\n"));
    assert!(output.contains("  to = dnsimple_contact.office_jane_doe\n  id = 3\n"));
}

#[tokio::test]
async fn contacts_identical_on_every_candidate_get_numeric_suffix() {
    let api = Arc::new(
        FakeDnsimple::new()
            .with_contact(contact(1, "", "Jane", "Doe", "US"))
            .with_contact(contact(2, "", "Jane", "Doe", "US"))
            .with_contact(contact(3, "", "Jane", "Doe", "US"))
            .with_contact(contact(4, "", "Jane", "Doe", "US")),
    );
    let (result, output) = run_import(api, ImportConfig::new("1010")).await;
    let summary = result.expect("import succeeds");

    assert_eq!(summary.identifiers_registered, 4);
    for id in ["jane", "jane_doe", "jane_doe_us", "jane_doe_us_2"] {
        assert!(
            output.contains(&format!("resource \"dnsimple_contact\" \"{id}\" {{")),
            "missing contact {id}"
        );
    }
}

#[tokio::test]
async fn contacts_without_names_still_get_valid_identifiers() {
    let api = Arc::new(
        FakeDnsimple::new()
            .with_contact(contact(1, "", "", "", ""))
            .with_contact(contact(2, "", "", "", "")),
    );
    let (result, output) = run_import(api, ImportConfig::new("1010")).await;
    result.expect("import succeeds");

    assert!(output.contains("resource \"dnsimple_contact\" \"dnsimple_contact\" {"));
    assert!(output.contains("resource \"dnsimple_contact\" \"dnsimple_contact_2\" {"));
    assert!(output.contains("  to = dnsimple_contact.dnsimple_contact_2\n  id = 2\n"));

    // Terraform names must not start with a digit
    for block in blocks(&output) {
        if let Some(name) = block.lines().next().and_then(|l| l.split('"').nth(3)) {
            assert!(!name.starts_with(|c: char| c.is_ascii_digit()), "invalid name: {name}");
        }
    }
}

#[tokio::test]
async fn provider_alias_binds_resource_blocks_only() {
    let config = ImportConfig::new("1010").with_provider_alias(Some("playground".to_string()));
    let (result, output) = run_import(Arc::new(account()), config).await;
    result.expect("import succeeds");

    for block in blocks(&output) {
        if block.starts_with("resource ") {
            assert!(block.contains("\n  provider"), "resource without provider: {block}");
            assert!(block.contains("= dnsimple.playground\n"));
        } else {
            assert!(!block.contains("provider"), "import with provider: {block}");
        }
    }
}

#[tokio::test]
async fn no_provider_alias_means_no_provider_line() {
    let (result, output) = run_import(Arc::new(account()), ImportConfig::new("1010")).await;
    result.expect("import succeeds");
    assert!(!output.contains("provider"));
}
