//! HTTP server lifecycle — bind → spawn background task → return handle
//! with a shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::app_router;
use crate::templates::TemplateStore;

/// Handle to a running server.
pub struct AppServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl AppServer {
    /// Shut down the server gracefully. Safe to call more than once.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Server shutdown signal sent");
        }
    }
}

/// Start the server on the given address (port 0 binds an ephemeral port,
/// which the tests rely on). The axum server runs in a background tokio
/// task until the handle's shutdown channel fires.
pub async fn start_server(
    store: Arc<TemplateStore>,
    addr: SocketAddr,
) -> Result<AppServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind server on {addr}: {e}"))?;

    let addr = listener
        .local_addr()
        .map_err(|e| format!("Failed to get server address: {e}"))?;

    tracing::info!(%addr, templates_dir = %store.dir().display(), "Server binding");

    let app = app_router(store);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Server received shutdown signal");
        };

        tracing::info!(%addr, "Server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Server error: {e}");
        }

        tracing::info!("Server stopped");
    });

    Ok(AppServer {
        addr,
        shutdown_tx: Some(shutdown_tx),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    fn test_store() -> (Arc<TemplateStore>, tempfile::TempDir) {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("form.html"), "<p>UID No ____</p>").unwrap();
        (Arc::new(TemplateStore::new(tmp.path())), tmp)
    }

    fn loopback() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let (store, _tmp) = test_store();
        let mut server = start_server(store, loopback())
            .await
            .expect("server should start");

        assert!(server.addr.port() > 0);

        let url = format!("http://127.0.0.1:{}/api/health", server.addr.port());
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let json: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(json["status"], "ok");

        server.shutdown();
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    }

    #[tokio::test]
    async fn server_serves_template_listing() {
        let (store, _tmp) = test_store();
        let mut server = start_server(store, loopback())
            .await
            .expect("server should start");

        let url = format!("http://127.0.0.1:{}/api/templates", server.addr.port());
        let json: serde_json::Value = reqwest::get(&url).await.unwrap().json().await.unwrap();
        assert_eq!(json["templates"][0], "form.html");

        server.shutdown();
    }

    #[tokio::test]
    async fn server_fills_template_end_to_end() {
        let (store, _tmp) = test_store();
        let mut server = start_server(store, loopback())
            .await
            .expect("server should start");

        let url = format!(
            "http://127.0.0.1:{}/api/templates/form.html/fill",
            server.addr.port()
        );
        let client = reqwest::Client::new();
        let resp = client
            .post(&url)
            .json(&serde_json::json!({"uid": "42"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        let body = resp.text().await.unwrap();
        assert!(body.contains(">42</span>"));
        assert!(body.contains("@media print"));

        server.shutdown();
    }

    #[tokio::test]
    async fn shutdown_is_idempotent() {
        let (store, _tmp) = test_store();
        let mut server = start_server(store, loopback())
            .await
            .expect("server should start");

        server.shutdown();
        server.shutdown();
    }
}
