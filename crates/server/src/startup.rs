use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use configs::AppConfig;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::observability;
use crate::routes;
use crate::state::AppState;
use service::runtime;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the app for a given config: repository -> service -> router
pub fn build_app(cfg: &AppConfig) -> Router {
    routes::build_router(AppState::from_file(&cfg.storage.messages_file), build_cors())
}

fn parse_bind_addr(cfg: &AppConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.server.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("bind address {addr}: {e}")))
}

/// Seed the store if configured, register metrics and build the router.
pub async fn prepare(cfg: &AppConfig) -> Result<Router, StartupError> {
    if cfg.storage.seed_if_missing {
        runtime::ensure_store_file(&cfg.storage.messages_file).await?;
    }
    observability::init_metrics();
    Ok(build_app(cfg))
}

/// Serve `app` until `shutdown` resolves. Requests already in flight,
/// including a create halfway through rewriting the store, run to completion.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Application is running on: http://{}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    info!("server drained and stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => { sig.recv().await; }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for SIGTERM");
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
    info!(event = "shutdown_signal", "shutdown requested; draining in-flight requests");
}

/// Public entry: bind the configured address and serve until `shutdown` resolves
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = prepare(&cfg).await?;
    let addr = parse_bind_addr(&cfg)?;
    info!(%addr, messages_file = %cfg.storage.messages_file, "starting message store");
    let listener = TcpListener::bind(addr).await?;
    serve(listener, app, shutdown).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn prepare_fails_when_store_cannot_be_seeded() -> anyhow::Result<()> {
        // a regular file where the store's parent directory should be
        let blocker = std::env::temp_dir().join(format!("startup_blocker_{}", uuid::Uuid::new_v4()));
        tokio::fs::write(&blocker, b"").await?;
        let mut cfg = AppConfig::default();
        cfg.storage.messages_file = blocker.join("messages.json").to_string_lossy().into_owned();

        let err = prepare(&cfg).await.unwrap_err();
        assert!(matches!(err, StartupError::Any(_)), "got {err:?}");

        let _ = tokio::fs::remove_file(&blocker).await;
        Ok(())
    }

    #[tokio::test]
    async fn run_rejects_unparseable_bind_address() -> anyhow::Result<()> {
        let store = std::env::temp_dir().join(format!("startup_store_{}.json", uuid::Uuid::new_v4()));
        let mut cfg = AppConfig::default();
        cfg.server.host = "not a host".into();
        cfg.storage.messages_file = store.to_string_lossy().into_owned();

        let err = run(cfg, std::future::pending()).await.unwrap_err();
        assert!(matches!(err, StartupError::InvalidConfig(_)), "got {err:?}");

        let _ = tokio::fs::remove_file(&store).await;
        Ok(())
    }
}
