mod config;

use tokio::net::TcpListener;
use tracing::{info, warn};

use wfc_api::ConfigFormApi;
use wfc_observe::{init_local_offset, init_logger};

use crate::config::ServerConfig;

fn main() -> anyhow::Result<()> {
    // Local offset detection only works before worker threads exist.
    init_local_offset();

    let cfg = ServerConfig::from_env()?;
    init_logger(&cfg.logger)?;
    info!(level = %cfg.logger.level, format = %cfg.logger.format, "logger initialized");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(serve(cfg))
}

async fn serve(cfg: ServerConfig) -> anyhow::Result<()> {
    let router = ConfigFormApi::default().router();

    let listener = TcpListener::bind(cfg.bind).await?;
    info!(addr = %listener.local_addr()?, "configuration form listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!(error = %e, "cannot listen for ctrl-c; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
