use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

use super::{ImportSession, Importer};
use crate::config::ResourceKind;
use crate::error::Result;
use crate::fetch;
use crate::render::{ContactBlock, DefaultAttributes};
use crate::traits::DnsimpleApi;

/// Identifier kind for contacts
pub const CONTACT_KIND: &str = "dnsimple_contact";

/// Imports account contacts
pub struct ContactsImporter {
    api: Arc<dyn DnsimpleApi>,
    account_id: String,
    defaults: DefaultAttributes,
}

impl ContactsImporter {
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
impl Importer for ContactsImporter {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Contacts
    }

    async fn import<W: Write + Send>(&self, session: &mut ImportSession<'_, W>) -> Result<()> {
        let contacts = fetch::contacts(self.api.as_ref(), &self.account_id).await?;

        for contact in &contacts {
            // Contacts have no unique natural name, so one is derived
            let resource_id = session.registry.deduplicate(
                CONTACT_KIND,
                &[
                    contact.label.as_deref(),
                    contact.first_name.as_deref(),
                    contact.last_name.as_deref(),
                    contact.country.as_deref(),
                    contact.organization_name.as_deref(),
                ],
            );
            debug!("Contact {} -> {}.{}", contact.id, CONTACT_KIND, resource_id);

            session.emit_block(
                &ContactBlock {
                    resource_id: &resource_id,
                    contact,
                },
                &self.defaults,
            )?;
            session.emit_import(format!("{CONTACT_KIND}.{resource_id}"), contact.id)?;
        }

        Ok(())
    }
}
