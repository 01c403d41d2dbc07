use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use placard_export::pdf::ChromeExporter;
use placard_server::config::Config;
use placard_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        chrome = ?config.chrome.executable,
        no_sandbox = config.chrome.no_sandbox,
        timeout_secs = config.chrome.timeout.as_secs(),
        "loaded config"
    );

    let state = AppState::new(ChromeExporter::new(config.chrome));
    let app = placard_server::app(state);

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
