use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info};

use calendar_events::shell::config::AppConfig;
use calendar_events::shell::http::router;
use calendar_events::shell::server;
use calendar_events::shell::state::AppState;
use calendar_events::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;
    let _log_guard = telemetry::init(&config)?;

    let app = router(AppState::in_memory());

    let listener = TcpListener::bind(config.bind_address())
        .await
        .with_context(|| format!("cannot bind {}", config.bind_address()))?;
    info!(address = %listener.local_addr()?, "calendar server listening");

    server::serve(listener, app, shutdown_signal(), server::SHUTDOWN_GRACE).await?;

    info!("calendar server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("cannot listen for ctrl-c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("cannot listen for SIGTERM: {e}");
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
}
