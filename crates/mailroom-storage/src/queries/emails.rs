// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Email row reads and the single-row partial update.

use indexmap::IndexMap;
use mailroom_core::{EmailId, MailroomError, Row, UpdateStatement, ID_COLUMN};
use rusqlite::types::{Value, ValueRef};
use rusqlite::{params, OptionalExtension};

use crate::database::{map_tr_err, Database};

/// Fetch one row by primary key.
pub async fn fetch_one(
    db: &Database,
    table: &str,
    columns: &[String],
    id: EmailId,
) -> Result<Option<Row>, MailroomError> {
    let sql = format!("SELECT * FROM {table} WHERE {ID_COLUMN} = ?1");
    let columns = columns.to_vec();
    let id = id.get();
    db.connection()
        .call(move |conn| -> Result<Option<Row>, rusqlite::Error> {
            let mut stmt = conn.prepare(&sql)?;
            stmt.query_row(params![id], |row| read_row(row, &columns))
                .optional()
        })
        .await
        .map_err(map_tr_err)
}

/// Fetch every row in the order SQLite returns them.
pub async fn fetch_all(
    db: &Database,
    table: &str,
    columns: &[String],
) -> Result<Vec<Row>, MailroomError> {
    let sql = format!("SELECT * FROM {table}");
    let columns = columns.to_vec();
    db.connection()
        .call(move |conn| -> Result<Vec<Row>, rusqlite::Error> {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], |row| read_row(row, &columns))?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}

/// Render an update for SQLite.
///
/// SQLite rejects `LIMIT` on UPDATE unless built from canonical sources, so
/// the single-row bound moves into a rowid subquery. Parameter order is the
/// same as the canonical form: SET values, then the id.
pub fn update_sql(statement: &UpdateStatement) -> String {
    let table = &statement.table;
    format!(
        "UPDATE {table} SET {} WHERE rowid IN (SELECT rowid FROM {table} WHERE {ID_COLUMN} = ? LIMIT 1)",
        statement.set_clause()
    )
}

/// Execute a single-row update and return the number of affected rows.
pub async fn execute_update(
    db: &Database,
    statement: &UpdateStatement,
) -> Result<usize, MailroomError> {
    let sql = update_sql(statement);
    let mut bind: Vec<Value> = statement
        .values()
        .map(|v| Value::Text(v.to_string()))
        .collect();
    bind.push(Value::Integer(statement.id.get()));

    db.connection()
        .call(move |conn| -> Result<usize, rusqlite::Error> {
            conn.execute(&sql, rusqlite::params_from_iter(bind.iter()))
        })
        .await
        .map_err(map_tr_err)
}

fn read_row(row: &rusqlite::Row<'_>, columns: &[String]) -> Result<Row, rusqlite::Error> {
    let id: i64 = row.get(ID_COLUMN)?;
    let mut values = IndexMap::with_capacity(columns.len());
    for column in columns {
        values.insert(column.clone(), text_value(row.get_ref(column.as_str())?));
    }
    Ok(Row { id, values })
}

/// Normalize a stored value to text.
///
/// Bytes that are not valid UTF-8 (legacy single-byte encodings) are decoded
/// lossily here, at ingestion, so rendering only ever sees valid strings.
fn text_value(value: ValueRef<'_>) -> Option<String> {
    match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
            Some(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}
