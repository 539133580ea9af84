// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Table description via `PRAGMA table_info`.

use mailroom_core::{ColumnInfo, MailroomError};

use crate::database::{map_tr_err, Database};

/// Describe `table`, reporting declared types lowercased.
///
/// SQLite keeps the declared type exactly as written in the DDL; lowercasing
/// gives the same type strings MySQL's `DESCRIBE` would (`varchar(255)`,
/// `text`). A missing table describes as an empty list.
pub async fn describe(db: &Database, table: &str) -> Result<Vec<ColumnInfo>, MailroomError> {
    let sql = format!("PRAGMA table_info({table})");
    db.connection()
        .call(move |conn| -> Result<Vec<ColumnInfo>, rusqlite::Error> {
            let mut stmt = conn.prepare(&sql)?;
            let rows = stmt.query_map([], |row| {
                let name: String = row.get("name")?;
                let declared_type: String = row.get("type")?;
                Ok(ColumnInfo::new(name, declared_type.to_lowercase()))
            })?;
            rows.collect()
        })
        .await
        .map_err(map_tr_err)
}
