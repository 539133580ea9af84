// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for Mailroom.
//!
//! Holds the error type, the domain types (ids, schema, records, update
//! statements) and the [`EmailStore`] trait every storage backend implements.

pub mod error;
pub mod traits;
pub mod types;

pub use error::MailroomError;
pub use traits::EmailStore;
pub use types::{
    Assignment, Column, ColumnInfo, ColumnKind, ContentFields, Email, EmailDraft, EmailId, Row,
    Schema, UpdateOutcome, UpdateStatement, ID_COLUMN,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mailroom_error_kinds() {
        let cases = [
            (MailroomError::Config("x".into()), "config"),
            (
                MailroomError::Connection {
                    message: "x".into(),
                    source: None,
                },
                "connection",
            ),
            (MailroomError::Validation("x".into()), "validation"),
            (MailroomError::NotFound { id: 1 }, "not_found"),
            (MailroomError::Persistence { id: 1 }, "persistence"),
            (
                MailroomError::Storage {
                    source: Box::new(std::io::Error::other("x")),
                },
                "storage",
            ),
            (MailroomError::Internal("x".into()), "internal"),
        ];
        for (err, kind) in cases {
            assert_eq!(err.kind(), kind);
        }
    }

    #[test]
    fn error_messages_are_readable() {
        assert_eq!(
            MailroomError::NotFound { id: 4 }.to_string(),
            "email 4 not found"
        );
        assert_eq!(
            MailroomError::Persistence { id: 4 }.to_string(),
            "update of email 4 affected no rows"
        );
    }

    #[test]
    fn email_store_is_object_safe() {
        fn _assert(_: &dyn EmailStore) {}
    }
}
