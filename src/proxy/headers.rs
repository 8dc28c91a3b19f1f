//! Header construction for the upstream request and the relayed response.
//!
//! [`build_upstream_headers`] copies the client's headers (multi-valued
//! entries stay separate, in order), drops connection-level headers and
//! `Host`, and replaces any client `Authorization` with the configured
//! Basic credentials. [`build_downstream_headers`] does the inverse
//! filtering for the upstream response before CORS headers are applied.

use std::sync::LazyLock;

use base64::prelude::*;
use http::header::{AUTHORIZATION, CONNECTION, CONTENT_LENGTH, HOST};
use http::header::InvalidHeaderValue;
use http::{HeaderMap, HeaderName, HeaderValue, Method};

static HOP_BY_HOP: LazyLock<Vec<HeaderName>> = LazyLock::new(|| {
    [
        "connection",
        "keep-alive",
        "proxy-connection",
        "transfer-encoding",
        "te",
        "trailer",
        "upgrade",
    ]
    .iter()
    .filter_map(|name| name.parse::<HeaderName>().ok())
    .collect()
});

/// `Basic base64(username:password)`, marked sensitive so it never shows
/// up in debug output of the request.
pub fn basic_authorization(
    username: &str,
    password: &str,
) -> Result<HeaderValue, InvalidHeaderValue> {
    let encoded = BASE64_STANDARD.encode(format!("{username}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))?;
    value.set_sensitive(true);
    Ok(value)
}

/// Headers named in a `Connection` header are scoped to that hop too.
fn connection_listed(headers: &HeaderMap) -> Vec<HeaderName> {
    headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .filter_map(|name| name.trim().parse::<HeaderName>().ok())
        .collect()
}

fn is_excluded(name: &HeaderName, extra: &[HeaderName]) -> bool {
    HOP_BY_HOP.contains(name) || extra.contains(name)
}

pub fn build_upstream_headers(original: &HeaderMap, authorization: &HeaderValue) -> HeaderMap {
    let listed = connection_listed(original);
    let mut headers = HeaderMap::with_capacity(original.len() + 1);

    for (name, value) in original {
        if name == HOST || name == AUTHORIZATION || is_excluded(name, &listed) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }

    headers.insert(AUTHORIZATION, authorization.clone());
    headers
}

/// The relayed body is streamed, so the upstream's `Content-Length` is
/// dropped along with connection-level headers and hyper frames the
/// response itself. A `HEAD` response has no body to frame and its
/// `Content-Length` describes the resource, so it is kept there.
pub fn build_downstream_headers(upstream: &HeaderMap, request_method: &Method) -> HeaderMap {
    let listed = connection_listed(upstream);
    let keep_length = *request_method == Method::HEAD;
    let mut headers = HeaderMap::with_capacity(upstream.len() + 4);

    for (name, value) in upstream {
        if (name == CONTENT_LENGTH && !keep_length) || is_excluded(name, &listed) {
            continue;
        }
        headers.append(name.clone(), value.clone());
    }

    headers
}
