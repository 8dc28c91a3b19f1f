//! `zephyr-connector run` — start the proxy server.
//!
//! Builds the immutable [`ProxyConfig`](crate::config::ProxyConfig),
//! binds the listener, and serves until SIGTERM / Ctrl+C. Any settings
//! error is returned before the listener is opened.

use std::sync::Arc;
use std::time::Duration;

use crate::cli::RunArgs;
use crate::config::ProxyConfig;
use crate::error::ConnectorError;
use crate::logging;
use crate::proxy::routing::ROUTES;
use crate::server::{self, AppState};

pub async fn execute(args: RunArgs) -> Result<(), ConnectorError> {
    let log_format = logging::resolve_format(args.pretty, args.json);
    logging::init(&args.log_level, log_format);

    let config = ProxyConfig::from_settings(&args.settings)?;
    let addr = config.listen_addr;
    let upstream = config.upstream_base.clone();
    let origin = config.allowed_origin.to_str().unwrap_or_default().to_owned();

    let state = Arc::new(AppState::new(
        config,
        args.upstream_timeout_ms.map(Duration::from_millis),
    ));
    let router = server::build_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        addr = %local_addr,
        upstream = %upstream,
        allowed_origin = %origin,
        routes = ROUTES.len(),
        "zephyr-connector started"
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    tracing::info!("zephyr-connector stopped");
    Ok(())
}
