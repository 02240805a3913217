use clap::Parser;

/// Command line interface for the application
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "HTTP relay in front of an LLM completion API", long_about = None)]
pub struct Cli {
    /// Address the HTTP server binds to
    #[arg(long, env = "RELAY_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the HTTP server listens on
    #[arg(long, env = "RELAY_PORT", default_value_t = 8000)]
    pub port: u16,

    /// Upstream provider implementation (currently "openai")
    #[arg(long, env = "RELAY_PROVIDER", default_value = "openai")]
    pub provider: String,

    /// Sets the logging verbosity level for the application
    /// Possible values: "error", "warn", "info", "debug", "trace"
    /// Default: "info"
    #[arg(long, env = "RELAY_LOG", default_value_t = String::from("info"))]
    pub logging_level: String,

    /// Also write logs to a daily rotating file under `logs/`
    #[arg(long)]
    pub log_to_file: bool,
}
