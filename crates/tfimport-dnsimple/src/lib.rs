// # DNSimple API Client
//
// This crate implements `DnsimpleApi` on top of the DNSimple API v2.
//
// ## Behavior
//
// - Read-only: every request is a `GET`
// - One request per call, except list endpoints which walk every page
// - HTTP timeout configured (30 seconds)
// - Status codes mapped to specific errors (401/403, 404, 429, 5xx)
// - No retry, no backoff, no caching: failures go straight to the caller
//
// ## Security Requirements
//
// - API token NEVER appears in logs or Debug output
// - API token is provided by the caller (environment in the CLI)
// - Construction fails fast if the token is empty
//
// ## API Reference
//
// - DNSimple API v2: https://developer.dnsimple.com/v2/
// - Pagination: `?page=N&per_page=100`, `pagination.total_pages` in the body
// - Every response wraps its payload in `data`

use async_trait::async_trait;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tfimport_core::model::{
    Contact, Dnssec, Domain, ExtendedAttribute, TransferLock, Zone, ZoneRecord,
};
use tfimport_core::{DnsimpleApi, Error, Result};

/// Production API base URL
pub const PRODUCTION_BASE_URL: &str = "https://api.dnsimple.com/v2";

/// Sandbox API base URL
pub const SANDBOX_BASE_URL: &str = "https://api.sandbox.dnsimple.com/v2";

/// Default HTTP timeout for API requests (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Page size for list endpoints (the API maximum)
const PER_PAGE: u32 = 100;

const USER_AGENT: &str = concat!("tfimport/", env!("CARGO_PKG_VERSION"));

const PROVIDER: &str = "dnsimple";

/// Single-object or list response
#[derive(Debug, Deserialize)]
struct DataResponse<T> {
    data: T,
}

/// One page of a list response
#[derive(Debug, Deserialize)]
struct PageResponse<T> {
    data: Vec<T>,
    #[serde(default)]
    pagination: Option<Pagination>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total_pages: u32,
}

/// DNSimple API v2 client
///
/// # Security
///
/// The Debug implementation does NOT expose the API token.
pub struct DnsimpleClient {
    /// ⚠️ NEVER log this value
    api_token: String,

    /// API root, without trailing slash
    base_url: String,

    client: reqwest::Client,
}

impl std::fmt::Debug for DnsimpleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DnsimpleClient")
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl DnsimpleClient {
    /// Create a client for the production API
    pub fn new(api_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_token, PRODUCTION_BASE_URL)
    }

    /// Create a client for the sandbox API
    pub fn sandbox(api_token: impl Into<String>) -> Result<Self> {
        Self::with_base_url(api_token, SANDBOX_BASE_URL)
    }

    /// Create a client against a custom API root
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the token is empty, and an HTTP
    /// error if the underlying client cannot be built.
    pub fn with_base_url(api_token: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
        let api_token = api_token.into();
        if api_token.trim().is_empty() {
            return Err(Error::config("DNSimple API token cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            api_token,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The API root requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` and decode the JSON body
    async fn get<T: DeserializeOwned>(&self, path: &str, query: &[(&str, u32)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("DNSimple API request: GET {}", path);

        let response = self
            .client
            .get(&url)
            .query(query)
            .bearer_auth(&self.api_token)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::http(format!("Request to {} failed: {}", path, e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(status_error(status, path, &error_text));
        }

        response
            .json()
            .await
            .map_err(|e| Error::provider(PROVIDER, format!("Failed to parse response from {}: {}", path, e)))
    }

    /// GET a single `data` payload
    async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let body: DataResponse<T> = self.get(path, &[]).await?;
        Ok(body.data)
    }

    /// GET every page of a list endpoint, in API order
    async fn get_all<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut page = 1;

        loop {
            let body: PageResponse<T> = self
                .get(path, &[("page", page), ("per_page", PER_PAGE)])
                .await?;
            items.extend(body.data);

            let total_pages = body.pagination.map_or(1, |p| p.total_pages);
            if page >= total_pages {
                break;
            }
            page += 1;
        }

        tracing::debug!("Fetched {} item(s) from {} in {} page(s)", items.len(), path, page);
        Ok(items)
    }
}

/// Map a non-success status to an error
fn status_error(status: reqwest::StatusCode, path: &str, error_text: &str) -> Error {
    match status.as_u16() {
        401 | 403 => Error::auth(format!(
            "Invalid API token or insufficient permissions. Status: {}",
            status
        )),
        404 => Error::not_found(format!("{} ({})", path, error_text)),
        429 => Error::rate_limited(format!("Rate limit exceeded. Please retry later. Status: {}", status)),
        500..=599 => Error::provider(
            PROVIDER,
            format!("DNSimple server error (transient): {} - {}", status, error_text),
        ),
        _ => Error::provider(
            PROVIDER,
            format!("Request to {} failed: {} - {}", path, status, error_text),
        ),
    }
}

#[async_trait]
impl DnsimpleApi for DnsimpleClient {
    async fn list_contacts(&self, account_id: &str) -> Result<Vec<Contact>> {
        self.get_all(&format!("/{}/contacts", account_id)).await
    }

    async fn list_domains(&self, account_id: &str) -> Result<Vec<Domain>> {
        self.get_all(&format!("/{}/domains", account_id)).await
    }

    async fn get_domain_transfer_lock(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<TransferLock> {
        self.get_data(&format!(
            "/{}/registrar/domains/{}/transfer_lock",
            account_id, domain_name
        ))
        .await
    }

    async fn get_domain_dnssec(&self, account_id: &str, domain_name: &str) -> Result<Dnssec> {
        self.get_data(&format!("/{}/domains/{}/dnssec", account_id, domain_name))
            .await
    }

    async fn get_domain_delegation(
        &self,
        account_id: &str,
        domain_name: &str,
    ) -> Result<Vec<String>> {
        self.get_data(&format!(
            "/{}/registrar/domains/{}/delegation",
            account_id, domain_name
        ))
        .await
    }

    async fn list_zones(&self, account_id: &str) -> Result<Vec<Zone>> {
        self.get_all(&format!("/{}/zones", account_id)).await
    }

    async fn list_zone_records(&self, account_id: &str, zone_name: &str) -> Result<Vec<ZoneRecord>> {
        self.get_all(&format!("/{}/zones/{}/records", account_id, zone_name))
            .await
    }

    async fn get_tld_extended_attributes(&self, tld: &str) -> Result<Vec<ExtendedAttribute>> {
        self.get_data(&format!("/tlds/{}/extended_attributes", tld))
            .await
    }

    fn provider_name(&self) -> &'static str {
        PROVIDER
    }
}
