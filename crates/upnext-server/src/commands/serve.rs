use crate::api::{self, AppState};
use crate::commands::http_client;
use color_eyre::eyre::Context;
use color_eyre::Result;
use tokio::net::TcpListener;
use tracing::{error, info};
use upnext_config::Config;
use upnext_core::{Aggregator, StatsCollector};

pub async fn run_serve(config: Config, bind_override: Option<String>) -> Result<()> {
    let client = http_client(&config)?;
    let state = AppState::new(
        Aggregator::from_config(&config, client.clone()),
        StatsCollector::from_config(&config, client),
    );

    let bind = bind_override.unwrap_or_else(|| config.server.bind.clone());
    let listener = TcpListener::bind(&bind)
        .await
        .wrap_err_with(|| format!("Failed to bind {}", bind))?;
    let address = listener.local_addr()?;

    info!(
        operation = "server_started",
        address = %address,
        sonarr_url = %config.sonarr.url,
        sonarr_days_ahead = config.sonarr.days_ahead,
        radarr_url = %config.radarr.url,
        radarr_days_ahead = config.radarr.days_ahead,
        request_timeout_secs = config.server.request_timeout_secs,
        "Serving agenda feed"
    );

    axum::serve(listener, api::router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .wrap_err("HTTP server failed")?;

    info!(operation = "server_stopped", "Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(operation = "signal_handler", error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(operation = "signal_handler", error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!(operation = "shutdown_requested", "Shutdown signal received");
}
