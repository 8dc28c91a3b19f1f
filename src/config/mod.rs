//! Immutable proxy configuration.
//!
//! [`ProxyConfig`] is built once at startup from [`ProxySettings`]
//! (flags and environment) with any `-D key=value` overrides applied,
//! validated in full, and then shared read-only with every request.

pub mod validation;

use std::net::SocketAddr;

use http::HeaderValue;

use crate::cli::ProxySettings;
use crate::error::{ConnectorError, ValidationError};
use crate::proxy::headers::basic_authorization;

/// Dotted setting keys accepted by `-D key=value`.
pub const SETTING_KEYS: &[&str] = &[
    "server.port",
    "jira.url",
    "allowed.origin",
    "jira.username",
    "jira.password",
];

#[derive(Clone)]
pub struct ProxyConfig {
    pub listen_addr: SocketAddr,
    pub upstream_base: String,
    pub allowed_origin: HeaderValue,
    pub username: String,
    password: String,
    pub authorization: HeaderValue,
}

impl std::fmt::Debug for ProxyConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyConfig")
            .field("listen_addr", &self.listen_addr)
            .field("upstream_base", &self.upstream_base)
            .field("allowed_origin", &self.allowed_origin)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl ProxyConfig {
    /// Apply overrides, validate every setting, and precompute header values.
    ///
    /// All problems are collected so the operator sees them in one pass.
    pub fn from_settings(settings: &ProxySettings) -> Result<Self, ConnectorError> {
        let mut settings = settings.clone();
        let mut errors = Vec::new();

        for define in std::mem::take(&mut settings.defines) {
            if let Err(e) = apply_define(&mut settings, &define) {
                errors.push(e);
            }
        }

        let listen_addr = match format!("{}:{}", settings.host, settings.port).parse::<SocketAddr>()
        {
            Ok(addr) => Some(addr),
            Err(e) => {
                errors.push(
                    ValidationError::new("host", format!("'{}': {e}", settings.host))
                        .with_suggestion("use an IP address such as 0.0.0.0 or 127.0.0.1"),
                );
                None
            }
        };

        if let Err(e) = validation::validate_jira_url(&settings.jira_url) {
            errors.push(e);
        }
        let allowed_origin = validation::validate_origin(&settings.allowed_origin)
            .map_err(|e| errors.push(e))
            .ok();
        if let Err(e) = validation::validate_username(&settings.jira_username) {
            errors.push(e);
        }
        let authorization = basic_authorization(&settings.jira_username, &settings.jira_password)
            .map_err(|e| {
                errors.push(ValidationError::new(
                    "jira.password",
                    format!("cannot build Authorization header: {e}"),
                ));
            })
            .ok();

        match (listen_addr, allowed_origin, authorization) {
            (Some(listen_addr), Some(allowed_origin), Some(authorization)) if errors.is_empty() => {
                Ok(Self {
                    listen_addr,
                    upstream_base: settings.jira_url,
                    allowed_origin,
                    username: settings.jira_username,
                    password: settings.jira_password,
                    authorization,
                })
            }
            _ => Err(ConnectorError::ConfigValidation { errors }),
        }
    }

    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }
}

/// Apply one `key=value` override to the settings.
pub fn apply_define(settings: &mut ProxySettings, define: &str) -> Result<(), ValidationError> {
    let Some((key, value)) = define.split_once('=') else {
        return Err(
            ValidationError::new(define, "override is missing '='")
                .with_suggestion(format!("write it as {define}=<value>")),
        );
    };
    let key = key.trim();

    match key {
        "server.port" => {
            settings.port = value.trim().parse().map_err(|_| {
                ValidationError::new(key, format!("'{value}' is not a valid port"))
                    .with_suggestion("expected an integer between 0 and 65535")
            })?;
        }
        "jira.url" => settings.jira_url = value.to_string(),
        "allowed.origin" => settings.allowed_origin = value.to_string(),
        "jira.username" => settings.jira_username = value.to_string(),
        "jira.password" => settings.jira_password = value.to_string(),
        other => {
            return Err(ValidationError::new(other, "unknown setting")
                .with_suggestion(format!("known settings: {}", SETTING_KEYS.join(", "))));
        }
    }
    Ok(())
}
