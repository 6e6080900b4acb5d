//! Records returned by the provider API
//!
//! These are read-only snapshots of account resources. They are fetched once
//! per import run and never mutated.

use serde::Deserialize;

/// An account contact (registrant, admin, tech)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Contact {
    pub id: u64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state_province: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub fax: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// Lifecycle state of a domain in the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainState {
    Registered,
    Hosted,
    New,
    Transferring,
    Expired,
    Failed,
    /// Any state this crate does not know about
    #[serde(other)]
    Other,
}

/// A domain in the account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Domain {
    pub id: u64,
    pub name: String,
    pub state: DomainState,
    #[serde(default)]
    pub registrant_id: Option<u64>,
    #[serde(default)]
    pub auto_renew: bool,
    #[serde(default)]
    pub private_whois: bool,
}

impl Domain {
    /// Whether the domain is registered through the account's registrar
    pub fn is_registered(&self) -> bool {
        self.state == DomainState::Registered
    }
}

/// Registrar transfer lock status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TransferLock {
    pub enabled: bool,
}

/// DNSSEC status of a domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Dnssec {
    pub enabled: bool,
}

/// A DNS zone hosted by the account
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Zone {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub secondary: bool,
    #[serde(default)]
    pub reverse: bool,
}

/// A record inside a zone
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneRecord {
    pub id: u64,
    #[serde(default)]
    pub zone_id: String,
    /// Record name relative to the zone; empty for the apex
    #[serde(default)]
    pub name: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(default)]
    pub regions: Vec<String>,
    /// Records managed by the provider itself (SOA, default NS)
    #[serde(default)]
    pub system_record: bool,
}

impl ZoneRecord {
    /// Whether the record is served from every region
    pub fn is_global(&self) -> bool {
        self.regions.is_empty() || self.regions.iter().all(|r| r == "global")
    }
}

/// One selectable value of an extended attribute
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtendedAttributeOption {
    pub title: String,
    pub value: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A registry-specific attribute a TLD may require at registration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtendedAttribute {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<ExtendedAttributeOption>,
}
