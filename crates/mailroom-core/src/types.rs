// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain types shared across the storage, records, template, and gateway crates.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::warn;

use crate::error::MailroomError;

/// Name of the primary key column. Never part of an update, always substitutable.
pub const ID_COLUMN: &str = "id";

/// A validated email primary key (always >= 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EmailId(i64);

impl EmailId {
    /// Validate a raw id. Anything below 1 is rejected.
    pub fn new(id: i64) -> Result<Self, MailroomError> {
        if id < 1 {
            return Err(MailroomError::Validation(format!(
                "invalid id specified: {id}"
            )));
        }
        Ok(Self(id))
    }

    /// Parse an id from a request parameter.
    pub fn parse(raw: &str) -> Result<Self, MailroomError> {
        let trimmed = raw.trim();
        let id = trimmed.parse::<i64>().map_err(|_| {
            MailroomError::Validation(format!("invalid id specified: `{trimmed}`"))
        })?;
        Self::new(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmailId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Whether a text column is a short (`varchar`, `char`, ...) or long (`text`) column.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ColumnKind {
    ShortText,
    LongText,
}

/// A column definition as reported by the store, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub declared_type: String,
}

impl ColumnInfo {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}

/// A text-like column of the email table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

/// The ordered set of text-like columns of the email table.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    table: String,
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema, rejecting an empty column list.
    pub fn new(table: impl Into<String>, columns: Vec<Column>) -> Result<Self, MailroomError> {
        let table = table.into();
        if columns.is_empty() {
            return Err(MailroomError::Config(format!(
                "unable to describe table '{table}': no text columns"
            )));
        }
        Ok(Self { table, columns })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Dynamic per-record fields stored serialized (as a JSON object) in one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentFields(IndexMap<String, String>);

impl ContentFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stored column value.
    ///
    /// Blank input yields an empty mapping. Non-string values are skipped.
    /// Anything that is not a JSON object is logged and treated as empty.
    pub fn decode(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::default();
        }
        match serde_json::from_str::<IndexMap<String, serde_json::Value>>(raw) {
            Ok(map) => Self(
                map.into_iter()
                    .filter_map(|(key, value)| match value {
                        serde_json::Value::String(s) => Some((key, s)),
                        _ => None,
                    })
                    .collect(),
            ),
            Err(e) => {
                warn!(error = %e, "content column is not a JSON object, ignoring dynamic fields");
                Self::default()
            }
        }
    }

    /// Serialize for storage in the content column.
    pub fn encode(&self) -> String {
        // A map of strings to strings always serializes.
        serde_json::to_string(&self.0).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ContentFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One row as read from the store: the id plus the schema column values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i64,
    pub values: IndexMap<String, Option<String>>,
}

/// A stored email record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub id: i64,
    /// Schema column values, keyed exactly by the schema column names.
    pub fields: IndexMap<String, Option<String>>,
    /// Dynamic fields decoded from the content column, local to this record.
    pub content_fields: ContentFields,
    /// The column `content_fields` was decoded from, if any.
    pub content_column: Option<String>,
}

impl Email {
    /// Build a record from a stored row, decoding dynamic fields from
    /// `content_column` when that column holds a non-empty value.
    pub fn from_row(row: Row, content_column: &str) -> Self {
        let decoded = row
            .values
            .get(content_column)
            .and_then(|v| v.as_deref())
            .filter(|raw| !raw.trim().is_empty())
            .map(ContentFields::decode);

        let (content_fields, content_column) = match decoded {
            Some(fields) => (fields, Some(content_column.to_string())),
            None => (ContentFields::default(), None),
        };

        Self {
            id: row.id,
            fields: row.values,
            content_fields,
            content_column,
        }
    }

    /// Stored value of a schema column. `None` if the column is unknown or NULL.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).and_then(|v| v.as_deref())
    }

    /// Value substituted for `{{name}}`, unescaped.
    ///
    /// Lookup order is schema columns, then `id`, then dynamic fields. NULL
    /// columns substitute as the empty string. A column whose value was
    /// decoded into dynamic fields is not substituted itself.
    pub fn placeholder(&self, name: &str) -> Option<Cow<'_, str>> {
        if self.content_column.as_deref() != Some(name)
            && let Some(value) = self.fields.get(name)
        {
            return Some(Cow::Borrowed(value.as_deref().unwrap_or("")));
        }
        if name == ID_COLUMN {
            return Some(Cow::Owned(self.id.to_string()));
        }
        self.content_fields.get(name).map(Cow::Borrowed)
    }
}

/// Field values extracted from submitted form input, ready to diff against
/// the stored record. Only ever holds schema columns, never `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailDraft {
    pub fields: IndexMap<String, String>,
}

impl EmailDraft {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }
}

/// One staged `column = ?` assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub column: String,
    pub value: String,
}

/// A single-row partial UPDATE: staged assignments in schema order, id bound last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement {
    pub table: String,
    pub assignments: Vec<Assignment>,
    pub id: EmailId,
}

impl UpdateStatement {
    /// `a = ?, b = ?`
    pub fn set_clause(&self) -> String {
        self.assignments
            .iter()
            .map(|a| format!("{} = ?", a.column))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The statement in its canonical `... WHERE id = ? LIMIT 1` form.
    pub fn canonical_sql(&self) -> String {
        format!(
            "UPDATE {} SET {} WHERE {ID_COLUMN} = ? LIMIT 1",
            self.table,
            self.set_clause()
        )
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.column.as_str())
    }

    /// Bound values of the SET list, in order. The id follows them.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.assignments.iter().map(|a| a.value.as_str())
    }
}

/// Result of a diff-based update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Nothing differed; no statement was executed.
    Unchanged,
    /// A statement was executed and changed the row.
    Updated { columns: usize },
}
