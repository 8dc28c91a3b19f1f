//! Core HTTP request forwarding handler.
//!
//! The [`forward_handler`] function is the Axum fallback that receives
//! every request, matches it against the registered REST prefixes,
//! answers CORS preflights directly, and relays everything else to the
//! upstream. Submodules handle route matching ([`routing`]), header
//! construction ([`headers`]), CORS ([`cors`]), and the upstream round
//! trip ([`relay`]).

pub mod cors;
pub mod headers;
pub mod relay;
pub mod routing;

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::server::AppState;

pub async fn forward_handler(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let request_id = uuid::Uuid::new_v4().to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let Some(route) = routing::match_route(routing::ROUTES, &path) else {
        tracing::warn!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "no route matched"
        );
        return StatusCode::NOT_FOUND.into_response();
    };

    if method == Method::OPTIONS {
        tracing::debug!(
            request_id = %request_id,
            route = route.name,
            path = %path,
            "answering preflight"
        );
        return cors::preflight_response(&state.config.allowed_origin);
    }

    tracing::info!(
        request_id = %request_id,
        route = route.name,
        method = %method,
        path = %path,
        "request received"
    );

    let ctx = relay::RelayRequest {
        client: &state.http_client,
        config: &state.config,
        timeout: state.upstream_timeout,
        request_id: &request_id,
    };

    match relay::relay(ctx, request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                route = route.name,
                method = %method,
                path = %path,
                error = %e,
                "forwarding failed"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
