use reqwest::StatusCode;

/// Failures reported while talking to the upstream completion provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The provider answered with a non-success status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },
    /// The request never produced a response (connect, TLS, timeout, body read).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The provider answered successfully but the body could not be used.
    #[error("Invalid provider response: {0}")]
    InvalidResponse(String),
}

/// Outcome classes of a failed relay call.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Anything the provider client reported. The text is returned to the caller.
    #[error("{0}")]
    Upstream(String),
    /// Any other failure. The text is only logged.
    #[error("{0}")]
    Internal(String),
}

impl From<ProviderError> for RelayError {
    fn from(err: ProviderError) -> Self {
        RelayError::Upstream(err.to_string())
    }
}

/// Startup configuration failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),
    #[error("Invalid provider base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unknown provider '{0}'")]
    UnknownProvider(String),
    #[error("Invalid listen address '{0}'")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_errors_become_upstream_with_provider_text() {
        let err = ProviderError::Api {
            status: StatusCode::UNAUTHORIZED,
            message: "invalid api key".to_string(),
        };
        match RelayError::from(err) {
            RelayError::Upstream(msg) => assert_eq!(msg, "invalid api key"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
