//! `zephyr-connector check` — validate settings without listening.
//!
//! Builds the same [`ProxyConfig`] that `run` would and prints the
//! effective settings (password redacted) and registered routes, as
//! human-readable text or machine-readable JSON.

use serde::Serialize;

use crate::cli::{CheckArgs, CheckFormat};
use crate::config::ProxyConfig;
use crate::error::ConnectorError;
use crate::proxy::routing::ROUTES;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub valid: bool,
    pub listen: String,
    pub upstream: String,
    pub allowed_origin: String,
    pub username: String,
    pub password: &'static str,
    pub routes: Vec<RouteReport>,
}

#[derive(Debug, Serialize)]
pub struct RouteReport {
    pub name: &'static str,
    pub prefix: &'static str,
}

impl CheckReport {
    #[must_use]
    pub fn from_config(config: &ProxyConfig) -> Self {
        Self {
            valid: true,
            listen: config.listen_addr.to_string(),
            upstream: config.upstream_base.clone(),
            allowed_origin: String::from_utf8_lossy(config.allowed_origin.as_bytes()).into_owned(),
            username: config.username.clone(),
            password: "********",
            routes: ROUTES
                .iter()
                .map(|r| RouteReport {
                    name: r.name,
                    prefix: r.prefix,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "\u{2713} settings are valid\n\n  \
             listen:          {}\n  \
             upstream:        {}\n  \
             allowed origin:  {}\n  \
             username:        {}\n  \
             password:        {}\n\n  \
             routes:",
            self.listen, self.upstream, self.allowed_origin, self.username, self.password
        );
        for route in &self.routes {
            out.push_str(&format!("\n    {:<16}{}", route.name, route.prefix));
        }
        out
    }
}

pub fn execute(args: &CheckArgs) -> Result<(), ConnectorError> {
    let config = match ProxyConfig::from_settings(&args.settings) {
        Ok(config) => config,
        Err(ConnectorError::ConfigValidation { errors }) => {
            match args.format {
                CheckFormat::Text => {
                    eprintln!("\u{2717} settings have {} errors\n", errors.len());
                    for error in &errors {
                        eprintln!("{error}");
                    }
                }
                CheckFormat::Json => {
                    let json_errors: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|e| {
                            serde_json::json!({
                                "setting": e.setting,
                                "message": e.message,
                                "suggestion": e.suggestion,
                            })
                        })
                        .collect();
                    println!(
                        "{}",
                        serde_json::json!({
                            "valid": false,
                            "errors": json_errors,
                        })
                    );
                }
            }
            return Err(ConnectorError::ConfigValidation { errors });
        }
        Err(e) => return Err(e),
    };

    let report = CheckReport::from_config(&config);
    match args.format {
        CheckFormat::Text => println!("{}", report.to_text()),
        CheckFormat::Json => println!("{}", serde_json::json!(report)),
    }

    Ok(())
}
