// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Schema introspection: which columns of the email table are text.

use mailroom_core::{Column, ColumnInfo, ColumnKind, EmailStore, MailroomError, Schema};
use tracing::info;

/// Classify one reported column.
///
/// Text columns are those whose type string contains `char` or `text`
/// (case-sensitive). Exactly `text` is long text, everything else short text.
pub fn classify(info: &ColumnInfo) -> Option<Column> {
    let ty = info.declared_type.as_str();
    if !ty.contains("char") && !ty.contains("text") {
        return None;
    }
    let kind = if ty == "text" {
        ColumnKind::LongText
    } else {
        ColumnKind::ShortText
    };
    Some(Column {
        name: info.name.clone(),
        kind,
    })
}

/// Describe `table` and keep its text columns, in declaration order.
///
/// Any failure to describe the table, and a table without text columns,
/// is a configuration error.
pub async fn introspect(store: &dyn EmailStore, table: &str) -> Result<Schema, MailroomError> {
    let reported = store.describe(table).await.map_err(|e| match e {
        MailroomError::Config(_) => e,
        other => MailroomError::Config(format!("unable to describe table '{table}': {other}")),
    })?;

    let schema = Schema::new(table, reported.iter().filter_map(classify).collect())?;
    info!(
        table,
        backend = store.name(),
        reported = reported.len(),
        text_columns = schema.len(),
        "schema introspected"
    );
    Ok(schema)
}
