// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Submitted form input and record construction from it.

use indexmap::IndexMap;
use mailroom_core::{ContentFields, EmailDraft, Schema, ID_COLUMN};

/// Reserved form key listing the names of the dynamic fields being submitted.
pub const CONTENT_FIELD_KEY: &str = "contentField";

/// Same key in the bracketed form HTML uses for repeated inputs.
pub const CONTENT_FIELD_LIST_KEY: &str = "contentField[]";

/// Decoded `application/x-www-form-urlencoded` pairs, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pairs: Vec<(String, String)>,
}

impl FormInput {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    /// Value of `key`. When a key repeats, the last value wins.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Names listed under the reserved dynamic-field key, either spelling.
    pub fn content_field_names(&self) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == CONTENT_FIELD_KEY || k == CONTENT_FIELD_LIST_KEY)
            .map(|(_, v)| v.as_str())
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Build a draft from submitted input.
///
/// Copies every schema column except `id` that the form carries, verbatim.
/// If the form lists dynamic field names, their values are collected and
/// stored serialized under `content_column` (when that column is part of the
/// schema), replacing any value submitted for it directly.
pub fn create_email_object(schema: &Schema, content_column: &str, form: &FormInput) -> EmailDraft {
    let mut fields: IndexMap<String, String> = schema
        .names()
        .filter(|name| *name != ID_COLUMN)
        .filter_map(|name| form.get(name).map(|v| (name.to_string(), v.to_string())))
        .collect();

    let names = form.content_field_names();
    if !names.is_empty() && content_column != ID_COLUMN && schema.contains(content_column) {
        let content: ContentFields = names
            .into_iter()
            .filter_map(|name| form.get(name).map(|value| (name, value)))
            .collect();
        fields.insert(content_column.to_string(), content.encode());
    }

    EmailDraft { fields }
}
