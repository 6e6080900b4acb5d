use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

use super::{ImportSession, Importer, name_resource_id};
use crate::config::ResourceKind;
use crate::error::Result;
use crate::fetch;
use crate::render::{DefaultAttributes, DomainBlock, DomainDelegationBlock, RegisteredDomainBlock};
use crate::traits::DnsimpleApi;

/// Imports registered domains with their registration and delegation
///
/// For every domain, in name order:
///
/// 1. `dnsimple_domain` and its import block
/// 2. transfer lock and DNSSEC lookups
/// 3. `dnsimple_registered_domain` and its import block
/// 4. delegation lookup, then `dnsimple_domain_delegation` and its import block
///
/// A domain is fully emitted before the next one is looked at.
pub struct DomainsImporter {
    api: Arc<dyn DnsimpleApi>,
    account_id: String,
    defaults: DefaultAttributes,
}

impl DomainsImporter {
    pub fn new(
        api: Arc<dyn DnsimpleApi>,
        account_id: impl Into<String>,
        provider_alias: Option<String>,
    ) -> Self {
        Self {
            api,
            account_id: account_id.into(),
            defaults: DefaultAttributes::new(provider_alias),
        }
    }
}

#[async_trait]
impl Importer for DomainsImporter {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Domains
    }

    async fn import<W: Write + Send>(&self, session: &mut ImportSession<'_, W>) -> Result<()> {
        let api = self.api.as_ref();
        let domains = fetch::registered_domains(api, &self.account_id).await?;

        for domain in &domains {
            let resource_id = name_resource_id(&domain.name);
            let import_id = domain.name.as_str();

            session.emit_block(
                &DomainBlock {
                    resource_id: &resource_id,
                    domain,
                },
                &self.defaults,
            )?;
            session.emit_import(format!("dnsimple_domain.{resource_id}"), import_id)?;

            let transfer_lock_enabled =
                fetch::transfer_lock_enabled(api, &self.account_id, &domain.name).await?;
            let dnssec_enabled = fetch::dnssec_enabled(api, &self.account_id, &domain.name).await?;
            debug!(
                "Domain {}: transfer lock {}, DNSSEC {}",
                domain.name, transfer_lock_enabled, dnssec_enabled
            );

            session.emit_block(
                &RegisteredDomainBlock {
                    resource_id: &resource_id,
                    domain,
                    contact_id: domain.registrant_id,
                    auto_renew_enabled: domain.auto_renew,
                    transfer_lock_enabled,
                    whois_privacy_enabled: domain.private_whois,
                    dnssec_enabled,
                },
                &self.defaults,
            )?;
            session.emit_import(format!("dnsimple_registered_domain.{resource_id}"), import_id)?;

            let name_servers = fetch::delegation(api, &self.account_id, &domain.name).await?;
            session.emit_block(
                &DomainDelegationBlock {
                    resource_id: &resource_id,
                    domain,
                    name_servers: &name_servers,
                },
                &self.defaults,
            )?;
            session.emit_import(format!("dnsimple_domain_delegation.{resource_id}"), import_id)?;
        }

        Ok(())
    }
}
