use anyhow::Context;
use stopwait_arq::api::create_api_server;
use stopwait_arq::config::ServerConfig;
use stopwait_arq::metrics::install_recorder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    if let Err(e) = install_recorder() {
        tracing::warn!("Metrics disabled: {}", e);
    }

    match &config.static_dir {
        Some(dir) => tracing::info!("Serving UI from {}", dir.display()),
        None => tracing::info!("No ARQ_STATIC_DIR set, serving the API only"),
    }

    let app = create_api_server(&config);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.listen_addr))?;

    tracing::info!("Stop-and-Wait simulator listening on http://{}", config.listen_addr);
    tracing::info!("   POST /api/simulate  - run a simulation");
    tracing::info!("   GET  /health        - liveness probe");
    tracing::info!("   GET  /metrics       - Prometheus metrics");

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
