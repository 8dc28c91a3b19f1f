//! Per-setting validation with operator-facing hints.
//!
//! Each function checks one setting and returns a [`ValidationError`]
//! naming the dotted setting key. [`ProxyConfig::from_settings`](super::ProxyConfig::from_settings)
//! runs all of them and reports every failure at once.

use http::{HeaderValue, Uri};
use url::Url;

use crate::error::ValidationError;

/// The upstream base must be an absolute http(s) URL with a host.
///
/// Request paths are appended to it verbatim, so a query string or
/// fragment on the base would end up in the middle of the target URL.
pub fn validate_jira_url(raw: &str) -> Result<(), ValidationError> {
    let parsed = Url::parse(raw).map_err(|e| {
        let err = ValidationError::new("jira.url", format!("'{raw}' is not a valid URL ({e})"));
        if raw.contains("://") {
            err
        } else {
            err.with_suggestion(format!("did you mean 'http://{raw}'?"))
        }
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        let err = ValidationError::new(
            "jira.url",
            format!("unsupported scheme '{scheme}' (expected http or https)"),
        );
        return Err(if raw.contains("://") {
            err
        } else {
            err.with_suggestion(format!("did you mean 'http://{raw}'?"))
        });
    }
    if matches!(parsed.host_str(), None | Some("")) {
        return Err(ValidationError::new("jira.url", "URL has no host"));
    }
    if parsed.query().is_some() || parsed.fragment().is_some() {
        return Err(ValidationError::new(
            "jira.url",
            "base URL must not carry a query or fragment",
        ));
    }
    // `Url` percent-encodes and punycodes on the way in; the handler does
    // not, so the raw text must also be a valid request target.
    if let Err(e) = format!("{raw}/").parse::<Uri>() {
        return Err(ValidationError::new(
            "jira.url",
            format!("'{raw}' cannot be used as a request target ({e})"),
        )
        .with_suggestion("percent-encode spaces and use the punycode form of the host"));
    }
    Ok(())
}

pub fn validate_origin(raw: &str) -> Result<HeaderValue, ValidationError> {
    if raw.trim().is_empty() {
        return Err(
            ValidationError::new("allowed.origin", "origin cannot be empty")
                .with_suggestion("e.g. http://localhost:8484"),
        );
    }
    HeaderValue::from_str(raw).map_err(|_| {
        ValidationError::new(
            "allowed.origin",
            format!("'{raw}' is not a valid header value"),
        )
    })
}

/// Basic credentials are `user:pass`; a colon in the user part is ambiguous.
pub fn validate_username(raw: &str) -> Result<(), ValidationError> {
    if raw.contains(':') {
        return Err(ValidationError::new(
            "jira.username",
            "username cannot contain ':' in Basic authentication",
        ));
    }
    Ok(())
}
