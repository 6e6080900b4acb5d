//! TLD extended attribute lookup
//!
//! Some registries require extra registrant data (for example `.us` nexus
//! information). This helper asks the provider which attributes a domain's
//! TLD requires. Unlike the importers it never fails: a lookup error is
//! logged and treated as "no required attributes".

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::ExtendedAttribute;
use crate::traits::DnsimpleApi;

/// Per-run cache of extended attributes keyed by TLD
#[derive(Debug, Default, Clone)]
pub struct TldAttributeCache {
    by_tld: HashMap<String, Vec<ExtendedAttribute>>,
}

impl TldAttributeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Required extended attributes for the TLD of `domain_name`
    ///
    /// The TLD is fetched at most once per cache. A failed fetch is cached
    /// as an empty list, so it is not retried for other domains of the
    /// same TLD.
    pub async fn required_for(
        &mut self,
        api: &dyn DnsimpleApi,
        domain_name: &str,
    ) -> Vec<ExtendedAttribute> {
        let Some(tld) = tld_of(domain_name) else {
            warn!(
                "Error fetching TLD attributes for domain: {} (TLD: unknown): not a registrable domain name",
                domain_name
            );
            return Vec::new();
        };

        if !self.by_tld.contains_key(&tld) {
            let attributes = match api.get_tld_extended_attributes(&tld).await {
                Ok(attributes) => {
                    debug!("Fetched {} extended attribute(s) for .{}", attributes.len(), tld);
                    attributes
                }
                Err(e) => {
                    warn!(
                        "Error fetching TLD attributes for domain: {} (TLD: {}): {}. Continuing with the next domain",
                        domain_name, tld, e
                    );
                    Vec::new()
                }
            };
            self.by_tld.insert(tld.clone(), attributes);
        }

        self.by_tld
            .get(&tld)
            .map(|attributes| attributes.iter().filter(|a| a.required).cloned().collect())
            .unwrap_or_default()
    }

    /// Check if a TLD has been looked up already
    pub fn is_cached(&self, tld: &str) -> bool {
        self.by_tld.contains_key(tld)
    }
}

/// Last label of a domain name with at least two labels
fn tld_of(domain_name: &str) -> Option<String> {
    let name = domain_name.trim().trim_end_matches('.');
    let (rest, tld) = name.rsplit_once('.')?;
    if rest.is_empty() || tld.is_empty() {
        return None;
    }
    Some(tld.to_ascii_lowercase())
}
