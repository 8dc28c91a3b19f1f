//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands (run, check), and the shared [`ProxySettings`] block.
//! Every setting has an environment variable equivalent for container
//! deployments, and `-D key=value` accepts the dotted setting keys.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub const DEFAULT_PORT: u16 = 8383;
pub const DEFAULT_JIRA_URL: &str = "http://localhost:8182";
pub const DEFAULT_ORIGIN: &str = "http://localhost:8484";
pub const DEFAULT_JIRA_USERNAME: &str = "admin";
pub const DEFAULT_JIRA_PASSWORD: &str = "0000abc!";

#[derive(Parser)]
#[command(
    name = "zephyr-connector",
    version,
    about = "CORS-enabling reverse proxy for the JIRA / Zephyr Scale REST API",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        zephyr-connector run                                  Proxy localhost:8182 on :8383\n  \
        zephyr-connector run --jira-url https://jira.local    Custom upstream\n  \
        zephyr-connector check -D jira.url=http://10.0.0.5    Validate settings only"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the proxy server
    Run(Box<RunArgs>),

    /// Validate settings and print the effective configuration
    Check(CheckArgs),
}

/// Settings shared by every subcommand that builds a proxy configuration.
#[derive(Args, Clone, Debug)]
pub struct ProxySettings {
    /// Listen port
    #[arg(short, long, env = "SERVER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Listen address
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Upstream JIRA base URL; request paths are appended verbatim
    #[arg(long, env = "JIRA_URL", default_value = DEFAULT_JIRA_URL)]
    pub jira_url: String,

    /// Origin echoed in Access-Control-Allow-Origin
    #[arg(long, env = "ALLOWED_ORIGIN", default_value = DEFAULT_ORIGIN)]
    pub allowed_origin: String,

    /// Basic-Auth username sent upstream
    #[arg(long, env = "JIRA_USERNAME", default_value = DEFAULT_JIRA_USERNAME)]
    pub jira_username: String,

    /// Basic-Auth password sent upstream
    #[arg(
        long,
        env = "JIRA_PASSWORD",
        default_value = DEFAULT_JIRA_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub jira_password: String,

    /// Override a setting by key (server.port, jira.url, allowed.origin,
    /// jira.username, jira.password)
    #[arg(short = 'D', long = "define", value_name = "KEY=VALUE")]
    pub defines: Vec<String>,
}

impl Default for ProxySettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: "0.0.0.0".into(),
            jira_url: DEFAULT_JIRA_URL.into(),
            allowed_origin: DEFAULT_ORIGIN.into(),
            jira_username: DEFAULT_JIRA_USERNAME.into(),
            jira_password: DEFAULT_JIRA_PASSWORD.into(),
            defines: Vec::new(),
        }
    }
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        zephyr-connector run                                   Defaults\n  \
        zephyr-connector run -p 9000 --pretty                  Local dev mode\n  \
        zephyr-connector run -D jira.username=svc-zephyr       Key-value override")]
pub struct RunArgs {
    #[command(flatten)]
    pub settings: ProxySettings,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, conflicts_with = "pretty")]
    pub json: bool,

    // -- Tuning --
    /// Upper bound on the wait for upstream response headers, in milliseconds
    #[arg(long, env = "UPSTREAM_TIMEOUT_MS", help_heading = "Tuning")]
    pub upstream_timeout_ms: Option<u64>,
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub settings: ProxySettings,

    /// Output format
    #[arg(long, default_value = "text")]
    pub format: CheckFormat,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum CheckFormat {
    Text,
    Json,
}
