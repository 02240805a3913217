/// Model identifier sent with every upstream completion request
pub const UPSTREAM_MODEL: &str = "gpt-4.1-mini";

/// Sampling temperature sent with every upstream completion request
pub const UPSTREAM_TEMPERATURE: f64 = 0.7;

/// Default base URL of the OpenAI API, overridable with `OPENAI_BASE_URL`
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable holding the upstream provider credential
pub const OPENAI_API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the upstream provider base URL
pub const OPENAI_BASE_URL_VAR: &str = "OPENAI_BASE_URL";

/// Body returned by the liveness route
pub const HEALTH_MESSAGE: &str = "Chat relay is running";

/// Fixed message returned for every internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Directory and file prefix used when logging to a rolling file
pub const LOG_DIRECTORY: &str = "logs";
pub const LOG_FILE_PREFIX: &str = "chat-relay.log";
