//! Axum server setup, shared application state, and graceful shutdown.
//!
//! Contains [`AppState`] (the `Arc`-shared, read-only state holding the
//! proxy config and HTTP client), [`build_router`] for constructing the
//! Axum router with middleware layers, [`build_http_client`] for the
//! connection-pooled hyper client, and [`shutdown_signal`] for
//! SIGTERM / Ctrl+C handling.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::Router;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::ProxyConfig;
use crate::proxy;

pub type HttpsConnector =
    hyper_rustls::HttpsConnector<hyper_util::client::legacy::connect::HttpConnector>;
pub type HttpClient = Client<HttpsConnector, Body>;

/// Nothing in here is mutated after startup; requests share it freely.
pub struct AppState {
    pub config: ProxyConfig,
    pub http_client: HttpClient,
    pub upstream_timeout: Option<Duration>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ProxyConfig, upstream_timeout: Option<Duration>) -> Self {
        Self {
            config,
            http_client: build_http_client(),
            upstream_timeout,
        }
    }
}

#[must_use]
pub fn build_http_client() -> HttpClient {
    // Only `ring` is compiled in, but rustls still wants it installed
    // explicitly before the first TLS config is built.
    let _ = rustls::crypto::ring::default_provider().install_default();

    let https = hyper_rustls::HttpsConnectorBuilder::new()
        .with_webpki_roots()
        .https_or_http()
        .enable_http1()
        .build();
    Client::builder(TokioExecutor::new())
        .pool_idle_timeout(Duration::from_secs(30))
        .build(https)
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(proxy::forward_handler)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl+C"),
        () = terminate => tracing::info!("received SIGTERM"),
    }
}
