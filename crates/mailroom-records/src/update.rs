// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diffing a submitted draft against the stored record.

use mailroom_core::{Assignment, Email, EmailDraft, EmailId, Schema, UpdateStatement, ID_COLUMN};

/// Stage an assignment for every schema column present in both `stored` and
/// `draft` whose value differs, in schema order.
///
/// Comparison is exact: a stored NULL differs from a submitted empty string.
/// Returns `None` when nothing differs.
pub fn plan_update(
    schema: &Schema,
    stored: &Email,
    draft: &EmailDraft,
    id: EmailId,
) -> Option<UpdateStatement> {
    let assignments: Vec<Assignment> = schema
        .names()
        .filter(|name| *name != ID_COLUMN)
        .filter_map(|name| {
            let old = stored.fields.get(name)?;
            let new = draft.get(name)?;
            (old.as_deref() != Some(new)).then(|| Assignment {
                column: name.to_string(),
                value: new.to_string(),
            })
        })
        .collect();

    if assignments.is_empty() {
        return None;
    }
    Some(UpdateStatement {
        table: schema.table().to_string(),
        assignments,
        id,
    })
}
