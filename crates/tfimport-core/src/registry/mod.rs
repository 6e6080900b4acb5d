//! Resource identifier registry
//!
//! Every Terraform resource emitted in one import run needs a name that is
//! unique across the whole run. The registry remembers every identifier it
//! has handed out and derives new ones from the most descriptive attributes
//! of a resource.
//!
//! ## Usage
//!
//! ```rust
//! use tfimport_core::registry::IdentifierRegistry;
//!
//! let mut registry = IdentifierRegistry::new();
//!
//! let first = registry.deduplicate("dnsimple_contact", &[Some("Jane Doe"), None, Some("US")]);
//! assert_eq!(first, "jane_doe");
//!
//! // Same leading candidate: the next candidate is appended
//! let second = registry.deduplicate("dnsimple_contact", &[Some("Jane Doe"), None, Some("US")]);
//! assert_eq!(second, "jane_doe_us");
//! ```
//!
//! ## Lifetime
//!
//! A registry lives for exactly one import run. It is created empty by the
//! driver, only ever grows, and is dropped when the run ends, so separate
//! runs (or tests) never see each other's identifiers.

mod naming;

pub use naming::to_snake_case;

use std::collections::BTreeSet;
use tracing::debug;

/// Registry of identifiers minted during one import run
#[derive(Debug, Default, Clone)]
pub struct IdentifierRegistry {
    /// Full identifiers, kind prefix included
    ids: BTreeSet<String>,
}

impl IdentifierRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a unique identifier for a resource of `kind`
    ///
    /// Starting from `kind`, each present and non-empty candidate is
    /// normalized with [`to_snake_case`] and appended with an underscore
    /// separator. The first accumulated identifier that is not yet
    /// registered is registered and returned. Once every candidate is used
    /// and the identifier is still taken, a numeric suffix (`_2`, `_3`, ...)
    /// is appended until it is free.
    ///
    /// The returned identifier has the leading `"{kind}_"` stripped. When no
    /// candidate contributes anything, the kind itself (with any numeric
    /// suffix) is returned unstripped, e.g. `dnsimple_contact_2`.
    pub fn deduplicate<S: AsRef<str>>(&mut self, kind: &str, candidates: &[Option<S>]) -> String {
        let mut resource_id = kind.to_string();
        let mut named = false;
        let mut registered = false;

        for candidate in candidates.iter().flatten() {
            let candidate = candidate.as_ref();
            if candidate.is_empty() {
                continue;
            }

            let part = to_snake_case(&format!("_{candidate}"));
            if part.is_empty() {
                continue;
            }
            resource_id.push_str(&part);
            named = true;

            if self.ids.insert(resource_id.clone()) {
                registered = true;
                break;
            }
        }

        if !registered && !self.ids.insert(resource_id.clone()) {
            let base = resource_id;
            let mut n = 2u64;
            resource_id = loop {
                let id = format!("{base}_{n}");
                if self.ids.insert(id.clone()) {
                    break id;
                }
                n += 1;
            };
            debug!("Identifier {} collided on every candidate, using {}", base, resource_id);
        }

        // Without a candidate the kind is the whole name
        if !named {
            return resource_id;
        }

        let prefix = format!("{kind}_");
        match resource_id.strip_prefix(&prefix) {
            Some(stripped) => stripped.to_string(),
            None => resource_id,
        }
    }

    /// Check if a full identifier (kind prefix included) is registered
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of identifiers registered so far
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if nothing has been registered yet
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// List all registered identifiers in sorted order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
