// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `{{name}}` placeholder substitution.
//!
//! Substitution is a single left-to-right pass over the template. Inserted
//! values are never rescanned, so a stored value containing `{{...}}` is
//! emitted as text rather than expanded.

use std::borrow::Cow;

use mailroom_core::{ContentFields, Email};

use crate::escape::escape_html;

/// Slot in the index template that receives the page body.
pub const CONTENT_SLOT: &str = "content";

/// Slot in the edit template that receives the rendered dynamic fields.
pub const CONTENT_FIELDS_SLOT: &str = "contentFields";

/// Placeholder names used by the dynamic field row template.
pub const CONTENT_FIELD_NAME: &str = "contentFieldName";
pub const CONTENT_FIELD_VALUE: &str = "contentFieldValue";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// What a placeholder expands to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fill<'a> {
    /// A record value, HTML-escaped on insertion.
    Text(Cow<'a, str>),
    /// Already-rendered markup, inserted as is.
    Markup(Cow<'a, str>),
}

/// Replace every `{{name}}` for which `lookup` returns a fill.
///
/// Placeholders `lookup` does not know are left byte-for-byte untouched.
pub fn expand<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<Fill<'a>>,
{
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = tail[OPEN.len()..].find(CLOSE).and_then(|end| {
            let name = &tail[OPEN.len()..OPEN.len() + end];
            lookup(name).map(|fill| (fill, OPEN.len() + end + CLOSE.len()))
        });
        match hit {
            Some((Fill::Text(value), consumed)) => {
                out.push_str(&escape_html(&value));
                rest = &tail[consumed..];
            }
            Some((Fill::Markup(markup), consumed)) => {
                out.push_str(&markup);
                rest = &tail[consumed..];
            }
            None => {
                // Step over one brace so `{{{name}}}` still matches the inner token.
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// [`expand`] where every known name is a value to escape.
pub fn substitute<'a, F>(template: &str, lookup: F) -> String
where
    F: Fn(&str) -> Option<Cow<'a, str>>,
{
    expand(template, |name| lookup(name).map(Fill::Text))
}

/// Render one record into `template`.
///
/// Known names are the schema columns, `id` and the record's dynamic fields.
/// NULL columns substitute as the empty string.
pub fn render(email: &Email, template: &str) -> String {
    substitute(template, |name| email.placeholder(name))
}

/// Render one record, filling any `{{slot}}` the record does not answer
/// with the given markup.
///
/// Record names win over slot names.
pub fn render_with_slots<'a>(
    email: &'a Email,
    template: &str,
    slots: &[(&str, &'a str)],
) -> String {
    expand(template, |name| {
        email
            .placeholder(name)
            .map(Fill::Text)
            .or_else(|| slot(slots, name))
    })
}

/// Render each dynamic field through `row_template`, in stored order.
pub fn render_content_fields(fields: &ContentFields, row_template: &str) -> Vec<String> {
    fields
        .iter()
        .map(|(name, value)| {
            substitute(row_template, |placeholder| match placeholder {
                CONTENT_FIELD_NAME => Some(Cow::Borrowed(name)),
                CONTENT_FIELD_VALUE => Some(Cow::Borrowed(value)),
                _ => None,
            })
        })
        .collect()
}

/// Fill named slots of a template with markup, unescaped.
///
/// Only the template text is scanned; inserted markup is never searched
/// for further slots.
pub fn fill_slots(template: &str, slots: &[(&str, &str)]) -> String {
    expand(template, |name| slot(slots, name))
}

fn slot<'a>(slots: &[(&str, &'a str)], name: &str) -> Option<Fill<'a>> {
    slots
        .iter()
        .find(|(slot, _)| *slot == name)
        .map(|(_, markup)| Fill::Markup(Cow::Borrowed(*markup)))
}
