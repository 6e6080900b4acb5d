//! Import driver
//!
//! The driver owns one import run:
//!
//! ```text
//! Driver ──► Importer::import() ──► fetch (provider API)
//!                                      │
//!                                      ▼
//!                           IdentifierRegistry (names)
//!                                      │
//!                                      ▼
//!                              Renderer (text) ──► Emitter (output)
//! ```
//!
//! Importers run in a fixed order (domains, zones, contacts), one after the
//! other. The identifier registry is created fresh for every run and shared
//! by all importers of that run.

use std::io::Write;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::config::{ImportConfig, ResourceKind};
use crate::emit::Emitter;
use crate::error::Result;
use crate::importer::{ContactsImporter, DomainsImporter, ImportSession, Importer, ZonesImporter};
use crate::registry::IdentifierRegistry;
use crate::render::Renderer;
use crate::traits::DnsimpleApi;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Kinds that were imported, in run order
    pub kinds: Vec<ResourceKind>,
    /// Blocks written to the output
    pub blocks_emitted: usize,
    /// Identifiers minted by the registry
    pub identifiers_registered: usize,
}

/// Runs the selected importers against one account
pub struct Driver {
    api: Arc<dyn DnsimpleApi>,
    config: ImportConfig,
    renderer: Renderer,
}

impl Driver {
    /// Create a driver using the embedded templates
    pub fn new(api: Arc<dyn DnsimpleApi>, config: ImportConfig) -> Self {
        Self {
            api,
            config,
            renderer: Renderer::new(),
        }
    }

    /// Use a different renderer
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Run the import, writing blocks to `out`
    ///
    /// The configuration is validated before any provider call. The first
    /// failing provider call, render, or write aborts the run; whatever was
    /// written before it stays in `out`.
    pub async fn run<W: Write + Send>(&self, out: W) -> Result<RunSummary> {
        self.config.validate()?;

        let started = Instant::now();
        let mut registry = IdentifierRegistry::new();
        let mut emitter = Emitter::new(out);
        let mut session = ImportSession::new(&mut registry, &self.renderer, &mut emitter);

        let account_id = self.config.account_id.as_str();
        let alias = self.config.provider_alias.clone();
        let kinds: Vec<ResourceKind> = self.config.resources.in_run_order().collect();

        info!(
            "Importing {} from account {} via {}",
            kinds.iter().map(ResourceKind::as_str).collect::<Vec<_>>().join(", "),
            account_id,
            self.api.provider_name()
        );

        for kind in &kinds {
            match kind {
                ResourceKind::Domains => {
                    let importer = DomainsImporter::new(self.api.clone(), account_id, alias.clone());
                    run_importer(&importer, &mut session).await?;
                }
                ResourceKind::Zones => {
                    let importer = ZonesImporter::new(self.api.clone(), account_id, alias.clone());
                    run_importer(&importer, &mut session).await?;
                }
                ResourceKind::Contacts => {
                    let importer =
                        ContactsImporter::new(self.api.clone(), account_id, alias.clone());
                    run_importer(&importer, &mut session).await?;
                }
            }
        }
        drop(session);

        let summary = RunSummary {
            kinds,
            blocks_emitted: emitter.blocks_emitted(),
            identifiers_registered: registry.len(),
        };
        info!(
            "Import finished in {:?}: {} block(s) emitted",
            started.elapsed(),
            summary.blocks_emitted
        );
        Ok(summary)
    }
}

async fn run_importer<I: Importer, W: Write + Send>(
    importer: &I,
    session: &mut ImportSession<'_, W>,
) -> Result<()> {
    let before = session.blocks_emitted();
    info!("Importing {}", importer.kind());

    importer.import(session).await?;

    info!(
        "Imported {}: {} block(s)",
        importer.kind(),
        session.blocks_emitted() - before
    );
    Ok(())
}
