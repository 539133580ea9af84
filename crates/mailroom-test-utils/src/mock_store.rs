// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory email store for deterministic tests.
//!
//! `MockStore` holds rows in memory, applies updates to them, counts every
//! query it serves, and captures every executed update statement.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;

use mailroom_core::{ColumnInfo, EmailId, EmailStore, MailroomError, Row, UpdateStatement};

pub struct MockStore {
    columns: Vec<ColumnInfo>,
    rows: Mutex<Vec<Row>>,
    executed: Mutex<Vec<UpdateStatement>>,
    queries: AtomicUsize,
    /// When set, `execute_update` reports this many affected rows and leaves
    /// the data untouched.
    forced_affected: Mutex<Option<usize>>,
}

impl MockStore {
    /// A store describing `columns` as `(name, type)` pairs, with no rows.
    pub fn new(columns: &[(&str, &str)]) -> Self {
        Self {
            columns: columns
                .iter()
                .map(|(name, ty)| ColumnInfo::new(*name, *ty))
                .collect(),
            rows: Mutex::new(Vec::new()),
            executed: Mutex::new(Vec::new()),
            queries: AtomicUsize::new(0),
            forced_affected: Mutex::new(None),
        }
    }

    /// The usual test table: `id int`, `subject varchar(255)`, `body text`,
    /// `content text`, `hits int`.
    pub fn emails() -> Self {
        Self::new(&[
            ("id", "int(11)"),
            ("subject", "varchar(255)"),
            ("body", "text"),
            ("content", "text"),
            ("hits", "int(11)"),
        ])
    }

    /// Add a row. Columns not listed are stored as NULL.
    pub fn with_row(mut self, id: i64, values: &[(&str, Option<&str>)]) -> Self {
        let mut row_values = IndexMap::new();
        for column in &self.columns {
            row_values.insert(column.name.clone(), None);
        }
        for (name, value) in values {
            row_values.insert(name.to_string(), value.map(str::to_string));
        }
        self.rows.get_mut().push(Row {
            id,
            values: row_values,
        });
        self
    }

    /// Make every subsequent update report `affected` rows without applying it.
    pub async fn force_affected(&self, affected: usize) {
        *self.forced_affected.lock().await = Some(affected);
    }

    /// Delete a row, simulating a concurrent removal.
    pub async fn remove_row(&self, id: i64) {
        self.rows.lock().await.retain(|r| r.id != id);
    }

    /// Number of describe/fetch/update calls served.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// Every update statement executed so far, in order.
    pub async fn executed(&self) -> Vec<UpdateStatement> {
        self.executed.lock().await.clone()
    }

    /// Current stored value of one column.
    pub async fn value(&self, id: i64, column: &str) -> Option<String> {
        self.rows
            .lock()
            .await
            .iter()
            .find(|r| r.id == id)
            .and_then(|r| r.values.get(column).cloned().flatten())
    }

    fn project(row: &Row, columns: &[String]) -> Row {
        Row {
            id: row.id,
            values: columns
                .iter()
                .map(|c| (c.clone(), row.values.get(c).cloned().flatten()))
                .collect(),
        }
    }
}

#[async_trait]
impl EmailStore for MockStore {
    fn name(&self) -> &str {
        "mock"
    }

    async fn describe(&self, _table: &str) -> Result<Vec<ColumnInfo>, MailroomError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self.columns.clone())
    }

    async fn fetch_one(
        &self,
        _table: &str,
        columns: &[String],
        id: EmailId,
    ) -> Result<Option<Row>, MailroomError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .find(|r| r.id == id.get())
            .map(|r| Self::project(r, columns)))
    }

    async fn fetch_all(&self, _table: &str, columns: &[String]) -> Result<Vec<Row>, MailroomError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .rows
            .lock()
            .await
            .iter()
            .map(|r| Self::project(r, columns))
            .collect())
    }

    async fn execute_update(&self, statement: &UpdateStatement) -> Result<usize, MailroomError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.executed.lock().await.push(statement.clone());

        if let Some(affected) = *self.forced_affected.lock().await {
            return Ok(affected);
        }

        let mut rows = self.rows.lock().await;
        let Some(row) = rows.iter_mut().find(|r| r.id == statement.id.get()) else {
            return Ok(0);
        };
        for assignment in &statement.assignments {
            row.values
                .insert(assignment.column.clone(), Some(assignment.value.clone()));
        }
        Ok(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailroom_core::Assignment;

    #[tokio::test]
    async fn fetch_projects_requested_columns() {
        let store = MockStore::emails().with_row(1, &[("subject", Some("Hi"))]);
        let row = store
            .fetch_one("emails", &["subject".to_string()], EmailId::new(1).unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.values.len(), 1);
        assert_eq!(row.values["subject"].as_deref(), Some("Hi"));
        assert_eq!(store.query_count(), 1);
    }

    #[tokio::test]
    async fn update_applies_and_is_recorded() {
        let store = MockStore::emails().with_row(1, &[("subject", Some("Hi"))]);
        let statement = UpdateStatement {
            table: "emails".to_string(),
            assignments: vec![Assignment {
                column: "subject".to_string(),
                value: "Yo".to_string(),
            }],
            id: EmailId::new(1).unwrap(),
        };
        assert_eq!(store.execute_update(&statement).await.unwrap(), 1);
        assert_eq!(store.value(1, "subject").await.as_deref(), Some("Yo"));
        assert_eq!(store.executed().await, vec![statement]);
    }
}
