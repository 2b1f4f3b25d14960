use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use hospital_sync::api::server::start_server;
use hospital_sync::config;
use hospital_sync::templates::TemplateStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    if let Err(e) = run().await {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let addr = config::bind_addr()?;
    let templates_dir = config::templates_dir();
    if !templates_dir.is_dir() {
        tracing::warn!(
            dir = %templates_dir.display(),
            "Templates directory does not exist yet; listing will return 404 until it does"
        );
    }

    let store = Arc::new(TemplateStore::new(templates_dir));
    let mut server = start_server(store, addr).await?;

    tracing::info!("Open http://{} to pick a template", server.addr);

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("Failed to wait for Ctrl-C: {e}"))?;

    server.shutdown();
    Ok(())
}
