//! Test doubles and common utilities for pipeline contract tests
//!
//! `FakeDnsimple` serves a fixed account snapshot from memory, records every
//! call in order, and can be told to fail specific calls.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tfimport_core::model::{
    Contact, Dnssec, Domain, DomainState, ExtendedAttribute, TransferLock, Zone, ZoneRecord,
};
use tfimport_core::{DnsimpleApi, Driver, Error, ImportConfig, Result, RunSummary};

/// In-memory provider API
#[derive(Default)]
pub struct FakeDnsimple {
    contacts: Vec<Contact>,
    domains: Vec<Domain>,
    transfer_locks: HashMap<String, bool>,
    dnssec: HashMap<String, bool>,
    delegations: HashMap<String, Vec<String>>,
    zones: Vec<Zone>,
    records: HashMap<String, Vec<ZoneRecord>>,
    tld_attributes: HashMap<String, Vec<ExtendedAttribute>>,
    failing: HashSet<String>,
    calls: Mutex<Vec<String>>,
}

impl FakeDnsimple {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.push(contact);
        self
    }

    /// Add a domain with its registrar data
    pub fn with_domain(
        mut self,
        domain: Domain,
        transfer_lock: bool,
        dnssec: bool,
        name_servers: &[&str],
    ) -> Self {
        self.transfer_locks.insert(domain.name.clone(), transfer_lock);
        self.dnssec.insert(domain.name.clone(), dnssec);
        self.delegations.insert(
            domain.name.clone(),
            name_servers.iter().map(|s| s.to_string()).collect(),
        );
        self.domains.push(domain);
        self
    }

    pub fn with_zone(mut self, zone: Zone, records: Vec<ZoneRecord>) -> Self {
        self.records.insert(zone.name.clone(), records);
        self.zones.push(zone);
        self
    }

    pub fn with_tld(mut self, tld: &str, attributes: Vec<ExtendedAttribute>) -> Self {
        self.tld_attributes.insert(tld.to_string(), attributes);
        self
    }

    /// Make a call fail, e.g. `"dnssec:b.com"` or `"list_zones"`
    pub fn failing_on(mut self, call: &str) -> Self {
        self.failing.insert(call.to_string());
        self
    }

    /// Every call made so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call.clone());
        if self.failing.contains(&call) {
            return Err(Error::provider("fake", format!("injected failure: {call}")));
        }
        Ok(())
    }
}

#[async_trait]
impl DnsimpleApi for FakeDnsimple {
    async fn list_contacts(&self, _account_id: &str) -> Result<Vec<Contact>> {
        self.record_call("list_contacts".to_string())?;
        Ok(self.contacts.clone())
    }

    async fn list_domains(&self, _account_id: &str) -> Result<Vec<Domain>> {
        self.record_call("list_domains".to_string())?;
        Ok(self.domains.clone())
    }

    async fn get_domain_transfer_lock(
        &self,
        _account_id: &str,
        domain_name: &str,
    ) -> Result<TransferLock> {
        self.record_call(format!("transfer_lock:{domain_name}"))?;
        let enabled = self.transfer_locks.get(domain_name).copied().unwrap_or_default();
        Ok(TransferLock { enabled })
    }

    async fn get_domain_dnssec(&self, _account_id: &str, domain_name: &str) -> Result<Dnssec> {
        self.record_call(format!("dnssec:{domain_name}"))?;
        let enabled = self.dnssec.get(domain_name).copied().unwrap_or_default();
        Ok(Dnssec { enabled })
    }

    async fn get_domain_delegation(
        &self,
        _account_id: &str,
        domain_name: &str,
    ) -> Result<Vec<String>> {
        self.record_call(format!("delegation:{domain_name}"))?;
        Ok(self.delegations.get(domain_name).cloned().unwrap_or_default())
    }

    async fn list_zones(&self, _account_id: &str) -> Result<Vec<Zone>> {
        self.record_call("list_zones".to_string())?;
        Ok(self.zones.clone())
    }

    async fn list_zone_records(&self, _account_id: &str, zone_name: &str) -> Result<Vec<ZoneRecord>> {
        self.record_call(format!("zone_records:{zone_name}"))?;
        Ok(self.records.get(zone_name).cloned().unwrap_or_default())
    }

    async fn get_tld_extended_attributes(&self, tld: &str) -> Result<Vec<ExtendedAttribute>> {
        self.record_call(format!("tld:{tld}"))?;
        self.tld_attributes
            .get(tld)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("TLD not supported: {tld}")))
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }
}

pub fn contact(id: u64, label: &str, first_name: &str, last_name: &str, country: &str) -> Contact {
    let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
    Contact {
        id,
        label: opt(label),
        first_name: opt(first_name),
        last_name: opt(last_name),
        country: opt(country),
        address1: Some("1 Main St".to_string()),
        city: Some("Springfield".to_string()),
        state_province: Some("IL".to_string()),
        postal_code: Some("62701".to_string()),
        phone: Some("+1.2175550100".to_string()),
        email: Some(format!("contact{id}@example.com")),
        ..Default::default()
    }
}

pub fn domain(id: u64, name: &str, state: DomainState) -> Domain {
    Domain {
        id,
        name: name.to_string(),
        state,
        registrant_id: Some(100 + id),
        auto_renew: true,
        private_whois: false,
    }
}

pub fn zone(id: u64, name: &str, secondary: bool) -> Zone {
    Zone {
        id,
        name: name.to_string(),
        secondary,
        reverse: false,
    }
}

pub fn record(id: u64, zone: &str, name: &str, record_type: &str, content: &str) -> ZoneRecord {
    ZoneRecord {
        id,
        zone_id: zone.to_string(),
        name: name.to_string(),
        content: content.to_string(),
        ttl: 3600,
        priority: None,
        record_type: record_type.to_string(),
        regions: vec!["global".to_string()],
        system_record: false,
    }
}

pub fn system_record(id: u64, zone: &str, record_type: &str, content: &str) -> ZoneRecord {
    ZoneRecord {
        system_record: true,
        ..record(id, zone, "", record_type, content)
    }
}

/// Run a full import and capture the output, whatever the outcome
pub async fn run_import(api: Arc<FakeDnsimple>, config: ImportConfig) -> (Result<RunSummary>, String) {
    let driver = Driver::new(api, config);
    let mut out = Vec::new();
    let result = driver.run(&mut out).await;
    (result, String::from_utf8(out).expect("output is UTF-8"))
}

/// Split output into blocks
pub fn blocks(output: &str) -> Vec<&str> {
    output
        .split("\n\n")
        .filter(|block| !block.trim().is_empty())
        .collect()
}
