//! Error types for the import pipeline
//!
//! This module defines all error types used throughout the crate.

use thiserror::Error;

/// Result type alias for import operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the import pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors (account id, credential, resource list)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication errors
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found on the provider side
    #[error("Not found: {0}")]
    NotFound(String),

    /// Rate limiting errors
    #[error("Rate limited: {0}")]
    RateLimited(String),

    /// Provider-specific error
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name
        provider: String,
        /// Error message
        message: String,
    },

    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// No template is registered under the requested name
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// A template could not be rendered with the given attributes
    #[error("Template render error ({template}): {message}")]
    TemplateRender {
        /// Template name
        template: String,
        /// What went wrong
        message: String,
    },

    /// Output stream errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an authentication error
    pub fn auth(msg: impl Into<String>) -> Self {
        Self::Authentication(msg.into())
    }

    /// Create a "not found" error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create a rate limit error
    pub fn rate_limited(msg: impl Into<String>) -> Self {
        Self::RateLimited(msg.into())
    }

    /// Create a provider-specific error
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Create an HTTP error
    pub fn http(msg: impl Into<String>) -> Self {
        Self::Http(msg.into())
    }

    /// Create a template render error
    pub fn template_render(template: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TemplateRender {
            template: template.into(),
            message: message.into(),
        }
    }

    /// Whether this error is a configuration problem detected before any network call
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether this error indicates a packaging defect in the template store
    pub fn is_template(&self) -> bool {
        matches!(self, Self::TemplateNotFound(_) | Self::TemplateRender { .. })
    }
}
