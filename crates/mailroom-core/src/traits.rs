// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Storage trait for the email table backend.

use async_trait::async_trait;

use crate::error::MailroomError;
use crate::types::{ColumnInfo, EmailId, Row, UpdateStatement};

/// Backend holding the email table.
///
/// Implementations interpolate `table` directly into SQL. The table name is
/// trusted configuration and is validated as a plain identifier at load time;
/// it never comes from a request.
#[async_trait]
pub trait EmailStore: Send + Sync + 'static {
    /// Human-readable backend name, for logs.
    fn name(&self) -> &str;

    /// Column definitions of `table`, in declaration order.
    ///
    /// A table that does not exist may describe as an empty list.
    async fn describe(&self, table: &str) -> Result<Vec<ColumnInfo>, MailroomError>;

    /// Fetch one row by primary key, reading only `columns`.
    async fn fetch_one(
        &self,
        table: &str,
        columns: &[String],
        id: EmailId,
    ) -> Result<Option<Row>, MailroomError>;

    /// Fetch every row, in the order the database returns them.
    async fn fetch_all(&self, table: &str, columns: &[String]) -> Result<Vec<Row>, MailroomError>;

    /// Execute a single-row update. Returns the number of affected rows.
    async fn execute_update(&self, statement: &UpdateStatement) -> Result<usize, MailroomError>;
}
