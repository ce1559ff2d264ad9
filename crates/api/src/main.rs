use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use luxcalc_api::config::ServerConfig;
use luxcalc_api::router::build_app_router;
use luxcalc_api::state::AppState;
use luxcalc_catalog::Catalog;
use luxcalc_core::norms::NormTable;
use luxcalc_core::pipeline::{FixtureCatalog, Pipeline};
use luxcalc_core::regressor::Regressor;
use luxcalc_model::linear::LinearRegressor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "luxcalc_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Norm table (fail fast: never serve unknown rooms with guessed norms) ---
    let norms = match &config.norms_path {
        Some(path) => Arc::new(
            NormTable::from_json_file(path)
                .with_context(|| format!("Failed to load norm table from {path}"))?,
        ),
        None => Arc::new(NormTable::builtin()),
    };
    tracing::info!(categories = norms.len(), "Norm table loaded");

    // --- Trained regressor (degrade to physics-only mode on failure) ---
    let regressor: Option<Arc<dyn Regressor>> =
        match LinearRegressor::from_file(&config.model_path) {
            Ok(model) => {
                tracing::info!(path = %config.model_path, "Trained regressor loaded");
                Some(Arc::new(model))
            }
            Err(err) => {
                tracing::warn!(
                    path = %config.model_path,
                    error = %err,
                    "Cannot load trained regressor; starting in physics-only mode"
                );
                None
            }
        };

    // --- Fixture catalog ---
    let catalog: Arc<dyn FixtureCatalog> = match Catalog::from_csv_file(&config.catalog_path) {
        Ok(catalog) => {
            tracing::info!(
                path = %config.catalog_path,
                models = catalog.dataset_len(),
                "Fixture catalog loaded"
            );
            Arc::new(catalog)
        }
        Err(err) => {
            tracing::warn!(
                path = %config.catalog_path,
                error = %err,
                "Cannot load catalog dataset; using built-in tables only"
            );
            Arc::new(Catalog::builtin())
        }
    };

    // --- Pipeline & app state ---
    let pipeline = Arc::new(Pipeline::new(norms, regressor, Some(catalog)));

    let state = AppState {
        config: Arc::new(config.clone()),
        pipeline,
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().context("Invalid HOST address")?,
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
