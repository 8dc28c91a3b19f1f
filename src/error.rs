//! Unified error types for the connector.
//!
//! Defines [`ConnectorError`] (the main crate error enum) and
//! [`ValidationError`] for settings that fail validation at startup.
//! Both use `thiserror` / `Display` so they print cleanly from `main`.
//! Validation messages carry a hint toward the fix where one is obvious.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub setting: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(setting: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            setting: setting.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  {}: {}", self.setting, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConnectorError {
    #[error("Invalid settings:\n{}", format_errors(.errors))]
    ConfigValidation { errors: Vec<ValidationError> },

    #[error("Invalid upstream URI '{target}': {source}")]
    UriParse {
        target: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Upstream request failed: {source}")]
    HttpRequest {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Upstream did not respond within {}ms", .0.as_millis())]
    UpstreamTimeout(Duration),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
