use crate::cli::Cli;
use crate::constants::{DEFAULT_OPENAI_BASE_URL, OPENAI_API_KEY_VAR, OPENAI_BASE_URL_VAR};
use crate::errors::ConfigError;
use std::fmt;
use tracing::info;
use url::Url;

/// Runtime configuration of the relay
#[derive(Clone)]
pub struct RelayConfig {
    /// Host name or IP address the HTTP server binds to
    pub host: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Name of the upstream provider implementation
    pub provider: String,
    /// Upstream provider credential
    pub api_key: String,
    /// Upstream provider base URL
    pub base_url: Url,
}

impl RelayConfig {
    /// Builds the configuration from parsed CLI arguments and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * `OPENAI_API_KEY` is unset or empty
    /// * `OPENAI_BASE_URL` is set but not a valid URL
    /// * the host is empty
    pub fn from_env(cli: &Cli) -> Result<Self, ConfigError> {
        let api_key = std::env::var(OPENAI_API_KEY_VAR).unwrap_or_default();
        let base_url = std::env::var(OPENAI_BASE_URL_VAR).ok();
        Self::from_parts(cli, &api_key, base_url.as_deref())
    }

    /// Builds the configuration from explicit values.
    pub fn from_parts(
        cli: &Cli,
        api_key: &str,
        base_url: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey(OPENAI_API_KEY_VAR));
        }

        let raw_url = base_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or(DEFAULT_OPENAI_BASE_URL);
        let base_url = Url::parse(raw_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: raw_url.to_string(),
            source,
        })?;

        let host = cli.host.trim();
        if host.is_empty() {
            return Err(ConfigError::InvalidAddress(cli.host.clone()));
        }

        info!(
            "Loaded relay configuration: provider={}, base_url={}",
            cli.provider, base_url
        );

        Ok(RelayConfig {
            host: host.to_string(),
            port: cli.port,
            provider: cli.provider.clone(),
            api_key: api_key.to_string(),
            base_url,
        })
    }
}

impl fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelayConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("provider", &self.provider)
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}
