// # Provider API Trait
//
// Defines the read-only interface the importers use to discover account
// resources.
//
// ## Implementations
//
// - DNSimple API v2: `tfimport-dnsimple` crate
// - Tests: in-memory fakes under `tests/common`
//
// ## Usage
//
// ```rust,ignore
// use tfimport_core::DnsimpleApi;
//
// async fn count_zones(api: &dyn DnsimpleApi) -> tfimport_core::Result<usize> {
//     Ok(api.list_zones("1010").await?.len())
// }
// ```

use async_trait::async_trait;

use crate::model::{Contact, Dnssec, Domain, ExtendedAttribute, TransferLock, Zone, ZoneRecord};

/// Trait for provider API clients
///
/// Every method is a single logical request scoped to one account. List
/// methods return every record, in the order the API returns them, across
/// all result pages.
///
/// Implementations must not retry, back off, or cache. Any failure is
/// returned to the caller, which aborts the import run.
#[async_trait]
pub trait DnsimpleApi: Send + Sync {
    /// List all contacts in the account
    async fn list_contacts(&self, account_id: &str) -> Result<Vec<Contact>, crate::Error>;

    /// List all domains in the account, in every state
    async fn list_domains(&self, account_id: &str) -> Result<Vec<Domain>, crate::Error>;

    /// Get the registrar transfer lock status of a domain
    async fn get_domain_transfer_lock(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<TransferLock, crate::Error>;

    /// Get the DNSSEC status of a domain
    async fn get_domain_dnssec(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Dnssec, crate::Error>;

    /// Get the name servers a domain is delegated to at the registry
    async fn get_domain_delegation(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Vec<String>, crate::Error>;

    /// List all zones in the account
    async fn list_zones(&self, account_id: &str) -> Result<Vec<Zone>, crate::Error>;

    /// List all records of a zone, system records included
    async fn list_zone_records(
        &self,
        account_id: &str,
        zone_name: &str,
    ) -> Result<Vec<ZoneRecord>, crate::Error>;

    /// Get the extended attributes a TLD defines for registrations
    async fn get_tld_extended_attributes(
        &self,
        tld: &str,
    ) -> Result<Vec<ExtendedAttribute>, crate::Error>;

    /// Get the provider name (for logging/debugging)
    fn provider_name(&self) -> &'static str;
}
