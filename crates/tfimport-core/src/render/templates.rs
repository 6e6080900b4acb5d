//! Named template bodies
//!
//! The default store is embedded into the binary at build time, one
//! template per resource kind plus the generic import block.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

pub const CONTACT: &str = "dnsimple_contact";
pub const DOMAIN: &str = "dnsimple_domain";
pub const REGISTERED_DOMAIN: &str = "dnsimple_registered_domain";
pub const DOMAIN_DELEGATION: &str = "dnsimple_domain_delegation";
pub const ZONE: &str = "dnsimple_zone";
pub const ZONE_RECORD: &str = "dnsimple_zone_record";
pub const IMPORT: &str = "block_import";

/// Template name to template body
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    templates: BTreeMap<String, String>,
}

impl TemplateStore {
    /// Create a store with no templates
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the store of built-in templates
    pub fn embedded() -> Self {
        Self::new()
            .with_template(CONTACT, include_str!("../../templates/dnsimple_contact.tf.tmpl"))
            .with_template(DOMAIN, include_str!("../../templates/dnsimple_domain.tf.tmpl"))
            .with_template(
                REGISTERED_DOMAIN,
                include_str!("../../templates/dnsimple_registered_domain.tf.tmpl"),
            )
            .with_template(
                DOMAIN_DELEGATION,
                include_str!("../../templates/dnsimple_domain_delegation.tf.tmpl"),
            )
            .with_template(ZONE, include_str!("../../templates/dnsimple_zone.tf.tmpl"))
            .with_template(ZONE_RECORD, include_str!("../../templates/dnsimple_zone_record.tf.tmpl"))
            .with_template(IMPORT, include_str!("../../templates/block_import.tf.tmpl"))
    }

    /// Add or replace a template
    pub fn with_template(mut self, name: impl Into<String>, body: impl Into<String>) -> Self {
        self.templates.insert(name.into(), body.into());
        self
    }

    /// Look up a template body by name
    pub fn get(&self, name: &str) -> Result<&str> {
        self.templates
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| Error::TemplateNotFound(name.to_string()))
    }

    /// List all template names
    pub fn names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }
}
