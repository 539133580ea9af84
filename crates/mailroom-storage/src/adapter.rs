// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the EmailStore trait.

use std::path::Path;

use async_trait::async_trait;
use mailroom_core::{ColumnInfo, EmailId, EmailStore, MailroomError, Row, UpdateStatement};
use tracing::debug;

use crate::database::Database;
use crate::queries;

/// SQLite-backed email store.
pub struct SqliteStore {
    db: Database,
}

impl SqliteStore {
    /// Open the database file at `path`. Fails with a connection error if it
    /// does not exist or is not a database.
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, MailroomError> {
        Ok(Self {
            db: Database::open(path).await?,
        })
    }

    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub async fn close(self) -> Result<(), MailroomError> {
        self.db.close().await
    }
}

#[async_trait]
impl EmailStore for SqliteStore {
    fn name(&self) -> &str {
        "sqlite"
    }

    async fn describe(&self, table: &str) -> Result<Vec<ColumnInfo>, MailroomError> {
        debug!(table, "describing table");
        queries::schema::describe(&self.db, table).await
    }

    async fn fetch_one(
        &self,
        table: &str,
        columns: &[String],
        id: EmailId,
    ) -> Result<Option<Row>, MailroomError> {
        debug!(table, %id, "fetching email");
        queries::emails::fetch_one(&self.db, table, columns, id).await
    }

    async fn fetch_all(&self, table: &str, columns: &[String]) -> Result<Vec<Row>, MailroomError> {
        debug!(table, "fetching all emails");
        queries::emails::fetch_all(&self.db, table, columns).await
    }

    async fn execute_update(&self, statement: &UpdateStatement) -> Result<usize, MailroomError> {
        debug!(
            table = %statement.table,
            id = %statement.id,
            columns = statement.assignments.len(),
            "executing update"
        );
        queries::emails::execute_update(&self.db, statement).await
    }
}
