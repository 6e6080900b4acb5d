//! Resource importers
//!
//! Each importer owns one resource family: it fetches the resources,
//! assigns identifiers, renders a resource-definition block and an import
//! block per resource, and emits them in order.
//!
//! - [`ContactsImporter`]: `dnsimple_contact`
//! - [`DomainsImporter`]: `dnsimple_domain`, `dnsimple_registered_domain`,
//!   `dnsimple_domain_delegation`
//! - [`ZonesImporter`]: `dnsimple_zone`, `dnsimple_zone_record`

pub mod contacts;
pub mod domains;
pub mod zones;

pub use contacts::ContactsImporter;
pub use domains::DomainsImporter;
pub use zones::ZonesImporter;

use async_trait::async_trait;
use std::io::Write;

use crate::config::ResourceKind;
use crate::emit::Emitter;
use crate::error::Result;
use crate::registry::IdentifierRegistry;
use crate::render::{AttributeValue, Block, DefaultAttributes, Renderer};

/// Shared state of one import run, handed to each importer in turn
pub struct ImportSession<'a, W: Write> {
    /// Identifiers minted so far in this run
    pub(crate) registry: &'a mut IdentifierRegistry,
    renderer: &'a Renderer,
    emitter: &'a mut Emitter<W>,
}

impl<'a, W: Write> ImportSession<'a, W> {
    pub fn new(
        registry: &'a mut IdentifierRegistry,
        renderer: &'a Renderer,
        emitter: &'a mut Emitter<W>,
    ) -> Self {
        Self {
            registry,
            renderer,
            emitter,
        }
    }

    /// Render and emit a resource-definition block
    pub fn emit_block<B: Block>(&mut self, block: &B, defaults: &DefaultAttributes) -> Result<()> {
        let text = self.renderer.render_block(block, defaults)?;
        self.emitter.emit(&text)
    }

    /// Render and emit an import block binding `reference` to `id`
    pub fn emit_import(
        &mut self,
        reference: impl Into<String>,
        id: impl Into<AttributeValue>,
    ) -> Result<()> {
        let text = self.renderer.render_import_binding(reference, id)?;
        self.emitter.emit(&text)
    }

    /// Number of blocks emitted so far in this run
    pub fn blocks_emitted(&self) -> usize {
        self.emitter.blocks_emitted()
    }
}

/// Trait for resource importers
///
/// Importers run strictly sequentially. Every provider call is awaited
/// before the next one is made, and blocks are emitted in the order the
/// resources are processed.
#[async_trait]
pub trait Importer: Send + Sync {
    /// The resource family this importer handles
    fn kind(&self) -> ResourceKind;

    /// Import every resource of this family into the session's output
    ///
    /// Any provider or rendering failure aborts the import; blocks emitted
    /// before the failure stay in the output.
    async fn import<W: Write + Send>(&self, session: &mut ImportSession<'_, W>) -> Result<()>;
}

/// Terraform resource id for a domain or zone name
pub(crate) fn name_resource_id(name: &str) -> String {
    name.replace('.', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_resource_id() {
        assert_eq!(name_resource_id("example.com"), "example_com");
        assert_eq!(name_resource_id("my-site.co.uk"), "my-site_co_uk");
    }
}
