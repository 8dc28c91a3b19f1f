//! One upstream round trip with streamed bodies.
//!
//! The inbound body is handed to the hyper client as-is and the upstream
//! body is handed back to axum as-is, so neither side is buffered: frames
//! flow through as they arrive. Dropping the returned response (client
//! went away) drops the upstream body and releases that connection.

use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::Request;
use axum::response::Response;
use http::uri::PathAndQuery;
use http::Uri;
use http_body_util::BodyExt;

use crate::config::ProxyConfig;
use crate::error::ConnectorError;
use crate::server::HttpClient;

use super::cors::apply_cors_headers;
use super::headers::{build_downstream_headers, build_upstream_headers};

pub struct RelayRequest<'a> {
    pub client: &'a HttpClient,
    pub config: &'a ProxyConfig,
    pub timeout: Option<Duration>,
    pub request_id: &'a str,
}

/// `base` + `path_and_query`, concatenated without normalisation.
pub fn target_uri(base: &str, path_and_query: &str) -> Result<Uri, ConnectorError> {
    let target = format!("{base}{path_and_query}");
    target
        .parse::<Uri>()
        .map_err(|e| ConnectorError::UriParse {
            target,
            source: Box::new(e),
        })
}

#[allow(clippy::cast_possible_truncation)]
pub async fn relay(ctx: RelayRequest<'_>, request: Request) -> Result<Response, ConnectorError> {
    let (parts, body) = request.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or("/", PathAndQuery::as_str);
    let target = target_uri(&ctx.config.upstream_base, path_and_query)?;

    tracing::debug!(
        request_id = %ctx.request_id,
        target = %target,
        "forwarding upstream"
    );

    let method = parts.method.clone();
    let mut upstream_request = hyper::Request::new(body);
    *upstream_request.method_mut() = parts.method;
    *upstream_request.uri_mut() = target;
    *upstream_request.headers_mut() =
        build_upstream_headers(&parts.headers, &ctx.config.authorization);

    let start = Instant::now();
    let pending = ctx.client.request(upstream_request);
    let result = match ctx.timeout {
        Some(limit) => tokio::time::timeout(limit, pending)
            .await
            .map_err(|_| ConnectorError::UpstreamTimeout(limit))?,
        None => pending.await,
    };
    let upstream_response = result.map_err(|e| ConnectorError::HttpRequest {
        source: Box::new(e),
    })?;

    let (parts, incoming) = upstream_response.into_parts();
    let latency_ms = start.elapsed().as_millis() as u64;

    // hyper exposes a single body for every status class, so 4xx/5xx
    // diagnostics arrive on the same stream as success payloads.
    if parts.status.is_client_error() || parts.status.is_server_error() {
        tracing::info!(
            request_id = %ctx.request_id,
            status = parts.status.as_u16(),
            latency_ms,
            "upstream returned error status, relaying its body"
        );
    } else {
        tracing::info!(
            request_id = %ctx.request_id,
            status = parts.status.as_u16(),
            latency_ms,
            "upstream responded"
        );
    }

    let mut headers = build_downstream_headers(&parts.headers, &method);
    apply_cors_headers(&mut headers, &ctx.config.allowed_origin);

    let request_id = ctx.request_id.to_owned();
    let body = incoming.map_err(move |e| {
        tracing::warn!(
            request_id = %request_id,
            error = %e,
            "upstream body failed mid-stream"
        );
        e
    });

    let mut response = Response::new(Body::new(body));
    *response.status_mut() = parts.status;
    *response.headers_mut() = headers;
    Ok(response)
}
