// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mailroom serve` command implementation.
//!
//! Opens the database, introspects the email table, loads the templates and
//! serves the editor until a shutdown signal arrives.

use std::path::Path;
use std::sync::Arc;

use mailroom_config::MailroomConfig;
use mailroom_core::MailroomError;
use mailroom_gateway::{start_server, AppState, ServerConfig};
use mailroom_records::EmailService;
use mailroom_storage::SqliteStore;
use mailroom_template::TemplateSet;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Runs the `mailroom serve` command.
pub async fn run_serve(config: MailroomConfig) -> Result<(), MailroomError> {
    init_tracing(&config.log.level);

    info!(
        path = %config.database.path,
        table = %config.database.table,
        "starting mailroom"
    );

    let store = SqliteStore::open(&config.database.path).await?;
    let service = EmailService::connect(
        Arc::new(store),
        &config.database.table,
        config.database.content_column.clone(),
    )
    .await?;
    let templates = TemplateSet::load(config.templates.dir.as_deref().map(Path::new))?;

    let server = ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
    };
    start_server(&server, AppState::new(service, templates)).await
}

/// Install the fmt subscriber. `RUST_LOG` overrides the configured level.
///
/// Called once per process by whichever command runs. Logs go to stderr so
/// `check` output on stdout stays clean.
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}

/// `mailroom=<level>,warn`
fn default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::new(format!("mailroom={log_level},warn"))
}
