// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use mailroom_core::MailroomError;
use mailroom_records::EmailService;
use mailroom_template::TemplateSet;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::handlers;

/// Shared state for request handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EmailService>,
    pub templates: Arc<TemplateSet>,
}

impl AppState {
    pub fn new(service: EmailService, templates: TemplateSet) -> Self {
        Self {
            service: Arc::new(service),
            templates: Arc::new(templates),
        }
    }
}

/// Address the gateway binds to.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Routes:
/// - GET/POST / (list, edit, save)
/// - GET /health
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::get_page).post(handlers::post_page))
        .route("/health", get(handlers::get_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until SIGINT or SIGTERM.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), MailroomError> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| MailroomError::Connection {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    info!("gateway listening on http://{addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| MailroomError::Internal(format!("gateway server error: {e}")))?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received SIGINT (Ctrl+C), shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
