//! Core traits for the import pipeline
//!
//! - [`DnsimpleApi`]: Read account resources from the provider API

pub mod dnsimple_api;

pub use dnsimple_api::DnsimpleApi;
