//! Integration tests for server lifecycle and request isolation.

use std::net::SocketAddr;
use std::sync::Arc;

use zephyr_connector::cli::ProxySettings;
use zephyr_connector::config::ProxyConfig;
use zephyr_connector::server::{self, AppState};

async fn start_test_server(jira_url: &str) -> (SocketAddr, tokio::sync::oneshot::Sender<()>) {
    let settings = ProxySettings {
        jira_url: jira_url.into(),
        ..ProxySettings::default()
    };
    let config = ProxyConfig::from_settings(&settings).unwrap();
    let router = server::build_router(Arc::new(AppState::new(config, None)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

    tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    (addr, shutdown_tx)
}

#[tokio::test]
async fn graceful_shutdown_works() {
    let (addr, shutdown) = start_test_server("http://127.0.0.1:1").await;

    // Preflight never touches the upstream, so it works with a dead one
    let url = format!("http://{addr}/rest/atm/1.0/testrun");
    let client = reqwest::Client::new();
    let resp = client
        .request(reqwest::Method::OPTIONS, &url)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 204);
    drop(client);

    let _ = shutdown.send(());

    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    // Server should no longer accept connections
    let result = reqwest::Client::new()
        .request(reqwest::Method::OPTIONS, &url)
        .send()
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn failing_requests_do_not_affect_concurrent_ones() {
    let (addr, shutdown) = start_test_server("http://127.0.0.1:1").await;
    let client = reqwest::Client::new();

    let mut handles = Vec::new();
    for i in 0..16 {
        let client = client.clone();
        let preflight = i % 2 == 0;
        handles.push(tokio::spawn(async move {
            let url = format!("http://{addr}/rest/atm/1.0/testrun/PRJ-C{i}");
            let method = if preflight {
                reqwest::Method::OPTIONS
            } else {
                reqwest::Method::GET
            };
            let status = client.request(method, url).send().await.unwrap().status();
            (preflight, status)
        }));
    }

    for handle in handles {
        let (preflight, status) = handle.await.unwrap();
        if preflight {
            assert_eq!(status, 204);
        } else {
            assert_eq!(status, 500);
        }
    }

    let _ = shutdown.send(());
}
