//! Resource fetchers
//!
//! One function per resource kind. Each wraps a single provider call and
//! applies the filtering and ordering the importers rely on.

use tracing::debug;

use crate::error::Result;
use crate::model::{Contact, Domain, Zone, ZoneRecord};
use crate::traits::DnsimpleApi;

/// All contacts, in API order
pub async fn contacts(api: &dyn DnsimpleApi, account_id: &str) -> Result<Vec<Contact>> {
    let contacts = api.list_contacts(account_id).await?;
    debug!("Fetched {} contact(s)", contacts.len());
    Ok(contacts)
}

/// Registered domains only, sorted by name
pub async fn registered_domains(api: &dyn DnsimpleApi, account_id: &str) -> Result<Vec<Domain>> {
    let domains = api.list_domains(account_id).await?;
    let total = domains.len();
    let registered = select_registered(domains);
    debug!("Fetched {} domain(s), {} registered", total, registered.len());
    Ok(registered)
}

/// Whether the registrar transfer lock is on
pub async fn transfer_lock_enabled(
    api: &dyn DnsimpleApi,
    account_id: &str,
    domain_name: &str,
) -> Result<bool> {
    Ok(api.get_domain_transfer_lock(account_id, domain_name).await?.enabled)
}

/// Whether DNSSEC is on
pub async fn dnssec_enabled(
    api: &dyn DnsimpleApi,
    account_id: &str,
    domain_name: &str,
) -> Result<bool> {
    Ok(api.get_domain_dnssec(account_id, domain_name).await?.enabled)
}

/// Delegated name servers, sorted
pub async fn delegation(
    api: &dyn DnsimpleApi,
    account_id: &str,
    domain_name: &str,
) -> Result<Vec<String>> {
    let mut name_servers = api.get_domain_delegation(account_id, domain_name).await?;
    name_servers.sort();
    Ok(name_servers)
}

/// All zones, sorted by name
pub async fn zones(api: &dyn DnsimpleApi, account_id: &str) -> Result<Vec<Zone>> {
    let mut zones = api.list_zones(account_id).await?;
    zones.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Fetched {} zone(s)", zones.len());
    Ok(zones)
}

/// Records of a zone that are managed by the account, in API order
///
/// Secondary zones are transferred from another primary, so their records
/// are never fetched.
pub async fn zone_records(
    api: &dyn DnsimpleApi,
    account_id: &str,
    zone: &Zone,
) -> Result<Vec<ZoneRecord>> {
    if zone.secondary {
        debug!("Skipping records of secondary zone {}", zone.name);
        return Ok(Vec::new());
    }

    let records = api.list_zone_records(account_id, &zone.name).await?;
    let total = records.len();
    let records = without_system_records(records);
    debug!(
        "Fetched {} record(s) for zone {}, {} after dropping system records",
        total,
        zone.name,
        records.len()
    );
    Ok(records)
}

fn select_registered(domains: Vec<Domain>) -> Vec<Domain> {
    let mut registered: Vec<Domain> = domains.into_iter().filter(Domain::is_registered).collect();
    registered.sort_by(|a, b| a.name.cmp(&b.name));
    registered
}

fn without_system_records(records: Vec<ZoneRecord>) -> Vec<ZoneRecord> {
    records.into_iter().filter(|r| !r.system_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DomainState;

    fn domain(name: &str, state: DomainState) -> Domain {
        Domain {
            id: 1,
            name: name.to_string(),
            state,
            registrant_id: None,
            auto_renew: false,
            private_whois: false,
        }
    }

    fn record(id: u64, system_record: bool) -> ZoneRecord {
        ZoneRecord {
            id,
            zone_id: "example.com".to_string(),
            name: String::new(),
            content: "x".to_string(),
            ttl: 3600,
            priority: None,
            record_type: "TXT".to_string(),
            regions: Vec::new(),
            system_record,
        }
    }

    #[test]
    fn test_select_registered_filters_and_sorts() {
        let domains = vec![
            domain("b.com", DomainState::Registered),
            domain("c.com", DomainState::Transferring),
            domain("a.com", DomainState::Registered),
            domain("d.com", DomainState::Expired),
            domain("e.com", DomainState::Hosted),
        ];

        let names: Vec<String> = select_registered(domains).into_iter().map(|d| d.name).collect();
        assert_eq!(names, vec!["a.com", "b.com"]);
    }

    #[test]
    fn test_system_records_dropped_order_kept() {
        let records = vec![record(3, false), record(1, true), record(2, false)];
        let ids: Vec<u64> = without_system_records(records).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2]);
    }
}
