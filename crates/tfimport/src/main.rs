// # tfimport - Terraform configuration from a DNSimple account
//
// This binary is a THIN integration layer:
// 1. Parse the command line and read the credential from the environment
// 2. Initialize logging and the runtime
// 3. Construct the DNSimple client
// 4. Run the import driver, writing Terraform to stdout
//
// All import logic lives in tfimport-core.
//
// ## Usage
//
// ```bash
// export DNSIMPLE_API_TOKEN=your_token
// tfimport 12345 contacts,zones playground > dnsimple.tf
// ```
//
// ## Configuration
//
// - `ACCOUNT_ID`: DNSimple account to import from (required)
// - `RESOURCES`: Comma-separated list of contacts, domains, zones, or `all`
// - `PROVIDER_ALIAS`: Provider alias bound to every generated resource
// - `DNSIMPLE_API_TOKEN`: API token (environment only)
// - `DNSIMPLE_SANDBOX` / `--sandbox`: Use the sandbox API
// - `DNSIMPLE_BASE_URL` / `--base-url`: Explicit API root
// - `TFIMPORT_LOG_LEVEL` / `--log-level`: Log verbosity, logs go to stderr

use anyhow::Result;
use clap::Parser;
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use tfimport_core::config::{API_TOKEN_ENV, ImportConfig, ResourceSelection};
use tfimport_core::Driver;
use tfimport_dnsimple::{DnsimpleClient, PRODUCTION_BASE_URL, SANDBOX_BASE_URL};
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

/// Exit codes for different termination scenarios
///
/// - 0: Import completed
/// - 1: Configuration error (nothing was fetched)
/// - 2: Runtime error (provider, template, or output failure)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TfimportExitCode {
    Success = 0,
    ConfigError = 1,
    RuntimeError = 2,
}

impl From<TfimportExitCode> for ExitCode {
    fn from(code: TfimportExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

#[derive(Debug, Parser)]
#[command(name = "tfimport")]
#[command(version)]
#[command(about = "Generate Terraform resources and import blocks for an existing DNSimple account")]
#[command(after_help = "The API token must be set in the DNSIMPLE_API_TOKEN environment variable.")]
struct Cli {
    /// DNSimple account ID to import from
    account_id: Option<String>,

    /// Comma-separated resources to import: contacts, domains, zones, or all
    #[arg(default_value = "all")]
    resources: String,

    /// Provider alias to use in the generated configuration
    provider_alias: Option<String>,

    /// Use the DNSimple sandbox API
    #[arg(long, env = "DNSIMPLE_SANDBOX")]
    sandbox: bool,

    /// Explicit API base URL (overrides --sandbox)
    #[arg(long, env = "DNSIMPLE_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Log verbosity: trace, debug, info, warn, error
    #[arg(long, env = "TFIMPORT_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

/// Application configuration
struct Config {
    import: ImportConfig,
    api_token: String,
    base_url: String,
    log_level: String,
}

// Custom Debug implementation that hides the API token
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("import", &self.import)
            .field("api_token", &"<REDACTED>")
            .field("base_url", &self.base_url)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Config {
    /// Build the configuration from the command line and the token variable
    fn from_cli(cli: Cli, api_token: Option<String>) -> Result<Self> {
        let Some(account_id) = cli.account_id.filter(|id| !id.trim().is_empty()) else {
            anyhow::bail!("Please provide an account ID as the first argument.");
        };

        let resources = ResourceSelection::parse(&cli.resources)?;

        let Some(api_token) = api_token.filter(|token| !token.trim().is_empty()) else {
            anyhow::bail!(
                "Please set the {} environment variable. \
                Set it via: export {}=your_token",
                API_TOKEN_ENV,
                API_TOKEN_ENV
            );
        };

        let base_url = match cli.base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => url,
            None if cli.sandbox => SANDBOX_BASE_URL.to_string(),
            None => PRODUCTION_BASE_URL.to_string(),
        };

        Ok(Self {
            import: ImportConfig::new(account_id)
                .with_resources(resources)
                .with_provider_alias(cli.provider_alias),
            api_token,
            base_url,
            log_level: cli.log_level,
        })
    }

    /// Validate the configuration
    fn validate(&self) -> Result<()> {
        self.import.validate()?;

        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            anyhow::bail!(
                "DNSIMPLE_BASE_URL must use HTTP or HTTPS scheme. Got: {}",
                self.base_url
            );
        }

        match self.log_level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!(
                "TFIMPORT_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }

        Ok(())
    }

    fn level(&self) -> Level {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "error" => Level::ERROR,
            _ => Level::WARN,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_cli(cli, env::var(API_TOKEN_ENV).ok()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            return TfimportExitCode::ConfigError.into();
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        return TfimportExitCode::ConfigError.into();
    }

    // Logs go to stderr, stdout carries only the generated configuration
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.level())
        .with_writer(std::io::stderr)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return TfimportExitCode::ConfigError.into();
    }

    let client = match DnsimpleClient::with_base_url(config.api_token.clone(), config.base_url.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create DNSimple client: {}", e);
            return TfimportExitCode::ConfigError.into();
        }
    };
    info!("Using DNSimple API at {}", client.base_url());

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return TfimportExitCode::RuntimeError.into();
        }
    };

    let driver = Driver::new(Arc::new(client), config.import);
    rt.block_on(async {
        match driver.run(std::io::stdout()).await {
            Ok(summary) => {
                info!(
                    "Emitted {} block(s) for {} resource kind(s)",
                    summary.blocks_emitted,
                    summary.kinds.len()
                );
                TfimportExitCode::Success
            }
            Err(e) if e.is_config() => {
                error!("{}", e);
                TfimportExitCode::ConfigError
            }
            Err(e) => {
                error!("Import failed: {}", e);
                TfimportExitCode::RuntimeError
            }
        }
    })
    .into()
}
