// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for Mailroom.

use thiserror::Error;

/// The error type shared by every Mailroom crate.
///
/// Every variant is terminal for the request that produced it. The gateway
/// maps each kind to an HTTP status; startup aborts on `Config` and
/// `Connection`.
#[derive(Debug, Error)]
pub enum MailroomError {
    /// Missing configuration keys, an empty schema after introspection, or
    /// unreadable template files.
    #[error("configuration error: {0}")]
    Config(String),

    /// The database could not be opened or reached.
    #[error("connection error: {message}")]
    Connection {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A missing or malformed request parameter (bad id, no id, ...).
    #[error("validation error: {0}")]
    Validation(String),

    /// No row exists for the requested id.
    #[error("email {id} not found")]
    NotFound { id: i64 },

    /// An UPDATE was executed but affected zero rows.
    #[error("update of email {id} affected no rows")]
    Persistence { id: i64 },

    /// Query failure reported by the storage backend.
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl MailroomError {
    /// Short machine-readable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Connection { .. } => "connection",
            Self::Validation(_) => "validation",
            Self::NotFound { .. } => "not_found",
            Self::Persistence { .. } => "persistence",
            Self::Storage { .. } => "storage",
            Self::Internal(_) => "internal",
        }
    }
}
