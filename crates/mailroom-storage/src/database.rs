// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Database connection lifecycle.
//!
//! All statements run on tokio-rusqlite's single background thread, so one
//! [`Database`] serializes every read and write of the process.

use std::path::Path;

use mailroom_core::MailroomError;
use rusqlite::OpenFlags;
use tracing::debug;

/// Handle to the SQLite database holding the email table.
pub struct Database {
    conn: tokio_rusqlite::Connection,
}

impl Database {
    /// Open an existing database file for reading and writing.
    ///
    /// The file is never created: a missing database is a connection error.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, MailroomError> {
        let path = path.as_ref().to_path_buf();
        let flags = OpenFlags::SQLITE_OPEN_READ_WRITE
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = tokio_rusqlite::Connection::open_with_flags(&path, flags)
            .await
            .map_err(|e| MailroomError::Connection {
                message: format!("failed connecting to database at {}", path.display()),
                source: Some(Box::new(e)),
            })?;

        let db = Self { conn };
        // Opening is lazy in SQLite; touch the schema so a non-database file fails here.
        db.conn
            .call(|conn| -> Result<(), rusqlite::Error> {
                conn.execute_batch("SELECT count(*) FROM sqlite_master;")?;
                Ok(())
            })
            .await
            .map_err(|e| MailroomError::Connection {
                message: format!("database at {} is not readable", path.display()),
                source: Some(Box::new(e)),
            })?;

        debug!(path = %path.display(), "database opened");
        Ok(db)
    }

    pub fn connection(&self) -> &tokio_rusqlite::Connection {
        &self.conn
    }

    /// Close the connection, waiting for queued statements to finish.
    pub async fn close(self) -> Result<(), MailroomError> {
        self.conn.close().await.map_err(map_tr_err)?;
        debug!("database closed");
        Ok(())
    }
}

/// Map a tokio-rusqlite error into the storage error kind.
pub(crate) fn map_tr_err<E>(e: tokio_rusqlite::Error<E>) -> MailroomError
where
    tokio_rusqlite::Error<E>: std::error::Error + Send + Sync + 'static,
{
    MailroomError::Storage {
        source: Box::new(e),
    }
}
