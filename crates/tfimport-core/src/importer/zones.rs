use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tracing::debug;

use super::{ImportSession, Importer, name_resource_id};
use crate::config::ResourceKind;
use crate::error::Result;
use crate::fetch;
use crate::render::{DefaultAttributes, ZoneBlock, ZoneRecordBlock};
use crate::traits::DnsimpleApi;

/// Imports zones and the records of every primary zone
pub struct ZonesImporter {
    api: Arc<dyn DnsimpleApi>,
    account_id: String,
    defaults: DefaultAttributes,
}

impl ZonesImporter {
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
impl Importer for ZonesImporter {
    fn kind(&self) -> ResourceKind {
        ResourceKind::Zones
    }

    async fn import<W: Write + Send>(&self, session: &mut ImportSession<'_, W>) -> Result<()> {
        let zones = fetch::zones(self.api.as_ref(), &self.account_id).await?;

        for zone in &zones {
            let zone_resource_id = name_resource_id(&zone.name);
            session.emit_block(
                &ZoneBlock {
                    resource_id: &zone_resource_id,
                    zone,
                },
                &self.defaults,
            )?;
            session.emit_import(format!("dnsimple_zone.{zone_resource_id}"), zone.name.as_str())?;

            let records = fetch::zone_records(self.api.as_ref(), &self.account_id, zone).await?;
            for record in &records {
                let record_resource_id = format!("record_{}", record.id);
                session.emit_block(
                    &ZoneRecordBlock {
                        resource_id: &record_resource_id,
                        zone_resource_id: &zone_resource_id,
                        record,
                    },
                    &self.defaults,
                )?;
                // The provider addresses zone records as "<zone>_<record id>"
                session.emit_import(
                    format!("dnsimple_zone_record.{record_resource_id}"),
                    format!("{}_{}", zone.name, record.id),
                )?;
            }
            debug!("Zone {}: {} record(s) imported", zone.name, records.len());
        }

        Ok(())
    }
}
