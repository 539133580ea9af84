// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTML templating for Mailroom.
//!
//! Templates are plain text with `{{name}}` placeholders. Record values are
//! escaped on the way in; pre-rendered markup goes into named slots as is.

pub mod escape;
pub mod render;
pub mod templates;

pub use escape::escape_html;
pub use render::{
    expand, fill_slots, render, render_content_fields, render_with_slots, substitute, Fill,
    CONTENT_FIELDS_SLOT, CONTENT_SLOT,
};
pub use templates::TemplateSet;
