mod cli;
mod handlers;

pub use cli::App;

use crate::fact::FactClient;
use crate::keepalive::KeepAlive;
use crate::prelude::{eprintln, *};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use std::time::Duration;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};

/// Immutable per-process state handed to every request
#[derive(Debug, Clone)]
pub struct AppState {
    pub facts: FactClient,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    let facts = app.fact.client()?;
    let keep_alive = KeepAlive::from_options(
        app.keep_alive_url.clone(),
        Duration::from_secs(app.keep_alive_interval_secs),
    )?;

    if global.verbose {
        eprintln!("Trivia service: {}", facts.base_url());
        if let Some(keep_alive) = &keep_alive {
            eprintln!(
                "Keep-alive: {} every {}s",
                keep_alive.url(),
                app.keep_alive_interval_secs
            );
        }
    }

    let addr = format!("{}:{}", app.host, app.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Server running on http://{addr}");

    let keep_alive = keep_alive.map(KeepAlive::spawn);

    axum::serve(listener, router(AppState { facts }))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    if let Some(handle) = keep_alive {
        handle.abort();
    }

    Ok(())
}

/// Full application router: routes plus middleware, bound to `state`
pub fn router(state: AppState) -> Router {
    with_middleware(
        Router::new()
            .route("/api/classify-number", get(handlers::classify_number))
            .route("/health", get(handlers::health)),
    )
    .with_state(state)
}

fn with_middleware(router: Router<AppState>) -> Router<AppState> {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors_layer)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    log::error!("Request handler panicked: {details}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": true, "message": "Internal server error." })),
    )
        .into_response()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => log::info!("Received Ctrl+C, shutting down"),
        _ = terminate => log::info!("Received SIGTERM, shutting down"),
    }
}
