//! Configuration types for an import run
//!
//! This module defines what an import run needs to know before it makes any
//! network call: the account, which resource kinds to import, and the
//! provider alias to bind generated resources to.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Environment variable holding the API access token
pub const API_TOKEN_ENV: &str = "DNSIMPLE_API_TOKEN";

/// Literal selecting every resource kind
pub const ALL_RESOURCES: &str = "all";

/// A resource family an importer handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Contacts,
    Domains,
    Zones,
}

impl ResourceKind {
    /// Every kind, in the order the driver runs them
    pub const RUN_ORDER: [ResourceKind; 3] =
        [ResourceKind::Domains, ResourceKind::Zones, ResourceKind::Contacts];

    /// Every kind, in the order they are listed to users
    pub const AVAILABLE: [ResourceKind; 3] =
        [ResourceKind::Contacts, ResourceKind::Domains, ResourceKind::Zones];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Contacts => "contacts",
            ResourceKind::Domains => "domains",
            ResourceKind::Zones => "zones",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::AVAILABLE
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| {
                Error::config(format!(
                    "Invalid resource: {}. Available resources are: {}",
                    s,
                    available_list()
                ))
            })
    }
}

fn available_list() -> String {
    ResourceKind::AVAILABLE
        .iter()
        .map(ResourceKind::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The set of resource kinds requested for a run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResourceSelection {
    kinds: BTreeSet<ResourceKind>,
}

impl ResourceSelection {
    /// Select every kind
    pub fn all() -> Self {
        Self {
            kinds: ResourceKind::AVAILABLE.into_iter().collect(),
        }
    }

    /// Parse a comma-separated list such as `"contacts,zones"` or `"all"`
    ///
    /// Tokens are trimmed and empty tokens ignored. `all` anywhere in the
    /// list selects every kind. Any other unknown token is a configuration
    /// error listing the valid kinds.
    pub fn parse(list: &str) -> Result<Self, Error> {
        let tokens: Vec<&str> = list
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(Error::config(format!(
                "No resources requested. Available resources are: {}",
                available_list()
            )));
        }

        if tokens.contains(&ALL_RESOURCES) {
            return Ok(Self::all());
        }

        let kinds = tokens
            .into_iter()
            .map(ResourceKind::from_str)
            .collect::<Result<BTreeSet<_>, _>>()?;

        Ok(Self { kinds })
    }

    /// Check if a kind is selected
    pub fn contains(&self, kind: ResourceKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Selected kinds in run order
    pub fn in_run_order(&self) -> impl Iterator<Item = ResourceKind> + '_ {
        ResourceKind::RUN_ORDER
            .into_iter()
            .filter(|kind| self.kinds.contains(kind))
    }
}

impl Default for ResourceSelection {
    fn default() -> Self {
        Self::all()
    }
}

/// Everything an import run needs besides the API client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ImportConfig {
    /// Account to import from
    pub account_id: String,

    /// Resource kinds to import
    #[serde(default)]
    pub resources: ResourceSelection,

    /// Terraform provider alias bound to every generated resource
    #[serde(default)]
    pub provider_alias: Option<String>,
}

impl ImportConfig {
    /// Create a configuration importing every kind without a provider alias
    pub fn new(account_id: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            resources: ResourceSelection::all(),
            provider_alias: None,
        }
    }

    /// Set the resource kinds to import
    pub fn with_resources(mut self, resources: ResourceSelection) -> Self {
        self.resources = resources;
        self
    }

    /// Set the provider alias; an empty alias means none
    pub fn with_provider_alias(mut self, alias: Option<String>) -> Self {
        self.provider_alias = alias.filter(|a| !a.trim().is_empty());
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Error> {
        if self.account_id.trim().is_empty() {
            return Err(Error::config(
                "Please provide an account ID as the first argument.",
            ));
        }

        if let Some(alias) = &self.provider_alias
            && !alias
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(Error::config(format!(
                "Invalid provider alias: {alias}. Use letters, digits, underscores and hyphens only."
            )));
        }

        Ok(())
    }
}
