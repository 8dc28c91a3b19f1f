//! Structured logging setup using the `tracing` ecosystem.
//!
//! Installs a `tracing-subscriber` registry with either JSON output (for
//! production) or pretty-printed output (for TTY / local dev). Format
//! is auto-detected from the terminal but can be forced via `--json`
//! or `--pretty`. The hyper client stack is capped at `WARN` so
//! connection-pool chatter does not drown the per-request events.

use tracing::Level;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::LogLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Pretty,
}

#[must_use]
pub fn resolve_format(pretty: bool, json: bool) -> LogFormat {
    if json {
        LogFormat::Json
    } else if pretty || std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        LogFormat::Pretty
    } else {
        LogFormat::Json
    }
}

#[must_use]
pub fn filter_for(level: &LogLevel) -> Targets {
    let level = level.to_tracing_level();
    let transport = if level > Level::WARN { Level::WARN } else { level };
    Targets::new()
        .with_default(level)
        .with_target("hyper", transport)
        .with_target("hyper_util", transport)
        .with_target("rustls", transport)
}

pub fn init(level: &LogLevel, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(filter_for(level));

    match format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_target(false))
            .init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).init(),
    }
}
