// # tfimport-core
//
// Core library for turning the live configuration of a DNSimple account into
// Terraform resource definitions and import blocks.
//
// ## Architecture Overview
//
// - **DnsimpleApi**: Trait for reading account resources from the provider
// - **IdentifierRegistry**: Unique, stable Terraform resource names per run
// - **Renderer**: Typed blocks rendered through named templates
// - **Emitter**: Block-by-block output, flushed as produced
// - **Importers**: Contacts, domains and zones, one family each
// - **Driver**: Runs the selected importers in a fixed order
//
// ## Design Principles
//
// 1. **Sequential**: One provider call at a time, output in program order
// 2. **Deterministic**: Same account state produces byte-identical output
// 3. **Library-First**: The binary is a thin layer over this crate
// 4. **No hidden state**: The identifier registry is scoped to one run

pub mod config;
pub mod driver;
pub mod emit;
pub mod error;
pub mod fetch;
pub mod importer;
pub mod model;
pub mod registry;
pub mod render;
pub mod tld;
pub mod traits;

// Re-export core types for convenience
pub use config::{ImportConfig, ResourceKind, ResourceSelection};
pub use driver::{Driver, RunSummary};
pub use emit::Emitter;
pub use error::{Error, Result};
pub use importer::{ContactsImporter, DomainsImporter, ImportSession, Importer, ZonesImporter};
pub use registry::IdentifierRegistry;
pub use render::{Renderer, TemplateStore};
pub use tld::TldAttributeCache;
pub use traits::DnsimpleApi;
