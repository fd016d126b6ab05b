/*
 * Responsibility
 * - Config -> dependencies (completion client, extraction service) -> Router
 * - Middleware (HTTP / CORS / bearer)
 * - axum::serve() with graceful shutdown
 */
use std::{panic, sync::Arc};

use anyhow::Result;
use axum::Router;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    api,
    config::Config,
    middleware,
    services::{
        completion::build_completion_provider,
        extraction::{Clock, ExtractionService, SystemClock},
    },
    state::AppState,
};

fn init_tracing() {
    // Prefer RUST_LOG if set. Ex:
    // RUST_LOG=info,txn_extract=debug,tower_http=debug cargo run
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn init_panic_hook() {
    let default_hook = panic::take_hook();

    // Must not abort: handler panics are answered with a 500 by the catch-panic layer.
    panic::set_hook(Box::new(move |info| {
        tracing::error!(?info, "panic");
        default_hook(info);
    }))
}

pub async fn run() -> Result<()> {
    init_tracing();
    let config = Config::from_env()?;
    init_panic_hook();

    tracing::info!(?config, "starting transaction extraction gateway");
    if config.api_secret_key.is_none() {
        tracing::warn!("API_SECRET_KEY is not set; /process is unauthenticated");
    }

    let state = build_state(&config, Arc::new(SystemClock));
    let app = build_router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(address = %config.addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shutdown complete");
    Ok(())
}

/// Build process-level services once and inject them into the shared state.
///
/// A provider that cannot be built (no API key) does not stop startup; `/process`
/// answers 500 until the configuration is fixed.
pub fn build_state(config: &Config, clock: Arc<dyn Clock>) -> AppState {
    let extraction = match build_completion_provider(config) {
        Ok(provider) => {
            tracing::info!(
                provider = provider.name(),
                model = %config.completion.model,
                "completion provider ready"
            );
            ExtractionService::new(provider, clock)
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to initialize completion provider");
            ExtractionService::unavailable(err.to_string(), clock)
        }
    };

    AppState::new(Arc::new(extraction), config.api_secret_key.clone())
}

pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        .merge(api::routes(state.clone()))
        .with_state(state);

    let router = middleware::cors::apply(router, config);
    middleware::http::apply(router, config)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received SIGINT, starting graceful shutdown");
        },
        _ = terminate => {
            tracing::info!("received SIGTERM, starting graceful shutdown");
        },
    }
}
