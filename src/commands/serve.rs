//! `serve` subcommand: run the HTTP gateway

use crate::api::{create_router, AppState};
use crate::config::Config;
use crate::dialog::DialogEngine;
use crate::llm::{LlmService, LoggingService, OllamaService};
use crate::runtime::DialogRuntime;
use crate::turn_log::TurnLog;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let backend: Arc<dyn LlmService> =
        Arc::new(OllamaService::new(&config.ollama_url, &config.model));
    let llm = Arc::new(LoggingService::new(backend));

    let engine = DialogEngine::new(llm);
    let turn_log = TurnLog::spawn(&config.log_path);
    let runtime = Arc::new(DialogRuntime::new(engine, turn_log));
    let state = AppState::new(runtime);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        model = %config.model,
        ollama_url = %config.ollama_url,
        log_path = %config.log_path.display(),
        "listening on http://{addr}"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
