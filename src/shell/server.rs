use std::future::{Future, IntoFuture};
use std::time::Duration;

use anyhow::Context;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tracing::{info, warn};

pub const SHUTDOWN_GRACE: Duration = Duration::from_secs(30);

/// Serves `app` until `shutdown` resolves, then drains open connections for
/// at most `grace` before giving up on them.
pub async fn serve(
    listener: TcpListener,
    app: Router,
    shutdown: impl Future<Output = ()> + Send + 'static,
    grace: Duration,
) -> anyhow::Result<()> {
    let (signalled, on_signal) = oneshot::channel::<()>();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("shutdown signal received, draining connections");
            let _ = signalled.send(());
        })
        .into_future();

    let deadline = async move {
        // A dropped sender means the server stopped on its own.
        if on_signal.await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => result.context("server error"),
        _ = deadline => {
            warn!(grace = ?grace, "connections still open after shutdown grace period, closing");
            Ok(())
        }
    }
}
