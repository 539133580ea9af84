// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Email records for Mailroom.
//!
//! Discovers the text columns of the email table once at startup and
//! reads and updates records through an [`mailroom_core::EmailStore`],
//! writing only the columns a submitted form actually changed.

pub mod form;
pub mod introspect;
pub mod service;
pub mod update;

pub use form::{create_email_object, FormInput, CONTENT_FIELD_KEY};
pub use introspect::{classify, introspect};
pub use service::EmailService;
pub use update::plan_update;
