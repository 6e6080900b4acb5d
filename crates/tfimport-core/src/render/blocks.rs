//! Typed attribute records, one per template

use super::templates;
use super::{AttributeValue, Attributes};
use crate::model::{Contact, Domain, Zone, ZoneRecord};

/// A record that knows which template renders it and with what attributes
pub trait Block {
    /// Name of the template in the store
    fn template(&self) -> &'static str;

    /// Attribute mapping for the template's placeholders
    fn attributes(&self) -> Attributes;
}

/// `dnsimple_contact` resource
#[derive(Debug, Clone, Copy)]
pub struct ContactBlock<'a> {
    pub resource_id: &'a str,
    pub contact: &'a Contact,
}

impl Block for ContactBlock<'_> {
    fn template(&self) -> &'static str {
        templates::CONTACT
    }

    fn attributes(&self) -> Attributes {
        let c = self.contact;
        let opt = |v: &Option<String>| AttributeValue::optional_str(v.as_deref());

        Attributes::new()
            .with("resource_id", AttributeValue::raw(self.resource_id))
            .with("label", opt(&c.label))
            .with("first_name", opt(&c.first_name))
            .with("last_name", opt(&c.last_name))
            .with("organization_name", opt(&c.organization_name))
            .with("job_title", opt(&c.job_title))
            .with("address1", opt(&c.address1))
            .with("address2", opt(&c.address2))
            .with("city", opt(&c.city))
            .with("state_province", opt(&c.state_province))
            .with("postal_code", opt(&c.postal_code))
            .with("country", opt(&c.country))
            .with("phone", opt(&c.phone))
            .with("fax", opt(&c.fax))
            .with("email", opt(&c.email))
    }
}

/// `dnsimple_domain` resource
#[derive(Debug, Clone, Copy)]
pub struct DomainBlock<'a> {
    pub resource_id: &'a str,
    pub domain: &'a Domain,
}

impl Block for DomainBlock<'_> {
    fn template(&self) -> &'static str {
        templates::DOMAIN
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("resource_id", AttributeValue::raw(self.resource_id))
            .with("name", self.domain.name.as_str())
    }
}

/// `dnsimple_registered_domain` resource
#[derive(Debug, Clone, Copy)]
pub struct RegisteredDomainBlock<'a> {
    pub resource_id: &'a str,
    pub domain: &'a Domain,
    pub contact_id: Option<u64>,
    pub auto_renew_enabled: bool,
    pub transfer_lock_enabled: bool,
    pub whois_privacy_enabled: bool,
    pub dnssec_enabled: bool,
}

impl Block for RegisteredDomainBlock<'_> {
    fn template(&self) -> &'static str {
        templates::REGISTERED_DOMAIN
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("resource_id", AttributeValue::raw(self.resource_id))
            .with("name", self.domain.name.as_str())
            .with("contact_id", self.contact_id)
            .with("auto_renew_enabled", self.auto_renew_enabled)
            .with("transfer_lock_enabled", self.transfer_lock_enabled)
            .with("whois_privacy_enabled", self.whois_privacy_enabled)
            .with("dnssec_enabled", self.dnssec_enabled)
    }
}

/// `dnsimple_domain_delegation` resource
#[derive(Debug, Clone, Copy)]
pub struct DomainDelegationBlock<'a> {
    pub resource_id: &'a str,
    pub domain: &'a Domain,
    /// Already sorted by the caller
    pub name_servers: &'a [String],
}

impl Block for DomainDelegationBlock<'_> {
    fn template(&self) -> &'static str {
        templates::DOMAIN_DELEGATION
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("resource_id", AttributeValue::raw(self.resource_id))
            .with("domain", self.domain.name.as_str())
            .with("name_servers", AttributeValue::str_list(self.name_servers))
    }
}

/// `dnsimple_zone` resource
#[derive(Debug, Clone, Copy)]
pub struct ZoneBlock<'a> {
    pub resource_id: &'a str,
    pub zone: &'a Zone,
}

impl Block for ZoneBlock<'_> {
    fn template(&self) -> &'static str {
        templates::ZONE
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("resource_id", AttributeValue::raw(self.resource_id))
            .with("name", self.zone.name.as_str())
    }
}

/// `dnsimple_zone_record` resource
#[derive(Debug, Clone, Copy)]
pub struct ZoneRecordBlock<'a> {
    pub resource_id: &'a str,
    /// Resource id of the parent `dnsimple_zone`
    pub zone_resource_id: &'a str,
    pub record: &'a ZoneRecord,
}

impl Block for ZoneRecordBlock<'_> {
    fn template(&self) -> &'static str {
        templates::ZONE_RECORD
    }

    fn attributes(&self) -> Attributes {
        let record = self.record;
        let regions = if record.is_global() {
            AttributeValue::Absent
        } else {
            AttributeValue::str_list(&record.regions)
        };

        Attributes::new()
            .with("resource_id", AttributeValue::raw(self.resource_id))
            .with(
                "zone_name",
                AttributeValue::raw(format!("dnsimple_zone.{}.name", self.zone_resource_id)),
            )
            .with("name", record.name.as_str())
            .with("type", record.record_type.as_str())
            .with("value", record.content.as_str())
            .with("ttl", record.ttl)
            .with("priority", record.priority)
            .with("regions", regions)
    }
}

/// Terraform `import` block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBlock {
    /// Resource address, e.g. `dnsimple_zone.example_com`
    pub to: String,
    /// Provider-side id
    pub id: AttributeValue,
}

impl ImportBlock {
    pub fn new(to: impl Into<String>, id: impl Into<AttributeValue>) -> Self {
        Self {
            to: to.into(),
            id: id.into(),
        }
    }
}

impl Block for ImportBlock {
    fn template(&self) -> &'static str {
        templates::IMPORT
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
            .with("to", AttributeValue::raw(self.to.as_str()))
            .with("id", self.id.clone())
    }
}
