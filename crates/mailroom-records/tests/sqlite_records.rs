// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Records service against a real SQLite file.

use std::sync::Arc;

use mailroom_core::{ColumnKind, EmailDraft, EmailId, MailroomError, UpdateOutcome};
use mailroom_records::{plan_update, EmailService, FormInput};
use mailroom_storage::SqliteStore;
use mailroom_test_utils::TestDatabase;

async fn service(db: &TestDatabase) -> EmailService {
    let store = SqliteStore::open(db.path()).await.unwrap();
    EmailService::connect(Arc::new(store), "emails", "content")
        .await
        .unwrap()
}

#[tokio::test]
async fn introspects_text_columns_from_sqlite() {
    let db = TestDatabase::create();
    let service = service(&db).await;
    let schema = service.schema();
    assert_eq!(
        schema.names().collect::<Vec<_>>(),
        vec!["name", "subject", "body", "content"]
    );
    assert_eq!(schema.columns()[2].kind, ColumnKind::LongText);
    // LONGTEXT contains "text" but is not exactly "text".
    assert_eq!(schema.columns()[3].kind, ColumnKind::ShortText);
}

#[tokio::test]
async fn partial_update_leaves_other_columns_alone() {
    let db = TestDatabase::create();
    let service = service(&db).await;

    let draft = EmailDraft {
        fields: [("subject".to_string(), "Welcome back".to_string())]
            .into_iter()
            .collect(),
    };
    let outcome = service.update_email(1, &draft).await.unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated { columns: 1 });

    assert_eq!(db.read(1, "subject").as_deref(), Some("Welcome back"));
    assert_eq!(db.read(1, "body").as_deref(), Some("<p>Hello there</p>"));
    assert_eq!(db.read(2, "subject").as_deref(), Some("Still there?"));
}

#[tokio::test]
async fn empty_string_replaces_null() {
    let db = TestDatabase::create();
    let service = service(&db).await;
    let form: FormInput = [("body", "")].into_iter().collect();
    let outcome = service
        .update_email(2, &service.create_email_object(&form))
        .await
        .unwrap();
    assert_eq!(outcome, UpdateOutcome::Updated { columns: 1 });
    assert_eq!(db.read(2, "body").as_deref(), Some(""));
}

#[tokio::test]
async fn unknown_id_is_not_found() {
    let db = TestDatabase::create();
    let service = service(&db).await;
    assert!(service.get_email(404).await.unwrap().is_none());
    assert!(matches!(
        service
            .update_email(404, &EmailDraft::default())
            .await
            .unwrap_err(),
        MailroomError::NotFound { id: 404 }
    ));
}

#[tokio::test]
async fn row_deleted_before_the_write_is_a_persistence_error() {
    let db = TestDatabase::create();
    let service = service(&db).await;

    let stored = service.get_email(1).await.unwrap().unwrap();
    let draft = EmailDraft {
        fields: [("subject".to_string(), "Gone".to_string())]
            .into_iter()
            .collect(),
    };
    let statement =
        plan_update(service.schema(), &stored, &draft, EmailId::new(1).unwrap()).unwrap();

    db.delete(1);
    let err = service.apply_update(&statement).await.unwrap_err();
    assert!(matches!(err, MailroomError::Persistence { id: 1 }), "{err}");
    assert!(service.get_email(1).await.unwrap().is_none());
}
