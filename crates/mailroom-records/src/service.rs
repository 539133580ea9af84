// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record access over an [`EmailStore`], scoped to the introspected schema.

use std::sync::Arc;

use mailroom_core::{
    Email, EmailDraft, EmailId, EmailStore, MailroomError, Schema, UpdateOutcome, UpdateStatement,
};
use tracing::{debug, info, warn};

use crate::form::{self, FormInput};
use crate::introspect::introspect;
use crate::update::plan_update;

/// Reads and writes email records.
///
/// Holds the schema discovered at startup; every read and write is limited
/// to its columns.
pub struct EmailService {
    store: Arc<dyn EmailStore>,
    schema: Arc<Schema>,
    content_column: String,
    columns: Vec<String>,
}

impl EmailService {
    /// Introspect `table` and build a service over it.
    pub async fn connect(
        store: Arc<dyn EmailStore>,
        table: &str,
        content_column: impl Into<String>,
    ) -> Result<Self, MailroomError> {
        let schema = introspect(store.as_ref(), table).await?;
        Ok(Self::new(store, schema, content_column))
    }

    pub fn new(store: Arc<dyn EmailStore>, schema: Schema, content_column: impl Into<String>) -> Self {
        let columns = schema.names().map(str::to_string).collect();
        Self {
            store,
            schema: Arc::new(schema),
            content_column: content_column.into(),
            columns,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Fetch one record. The id is validated before any query is issued.
    pub async fn get_email(&self, id: i64) -> Result<Option<Email>, MailroomError> {
        let id = EmailId::new(id)?;
        let row = self
            .store
            .fetch_one(self.schema.table(), &self.columns, id)
            .await?;
        Ok(row.map(|row| Email::from_row(row, &self.content_column)))
    }

    /// Fetch every record, in store order.
    pub async fn get_emails(&self) -> Result<Vec<Email>, MailroomError> {
        let rows = self
            .store
            .fetch_all(self.schema.table(), &self.columns)
            .await?;
        debug!(count = rows.len(), "fetched emails");
        Ok(rows
            .into_iter()
            .map(|row| Email::from_row(row, &self.content_column))
            .collect())
    }

    /// Persist the columns of `draft` that differ from the stored record.
    ///
    /// Only schema columns present in both the stored record and the draft
    /// are compared; `id` is never written. Nothing is executed when no
    /// column differs.
    pub async fn update_email(
        &self,
        id: i64,
        draft: &EmailDraft,
    ) -> Result<UpdateOutcome, MailroomError> {
        let email_id = EmailId::new(id)?;
        let stored = self
            .get_email(id)
            .await?
            .ok_or(MailroomError::NotFound { id })?;

        let Some(statement) = plan_update(&self.schema, &stored, draft, email_id) else {
            debug!(id, "no changes to save");
            return Ok(UpdateOutcome::Unchanged);
        };

        self.apply_update(&statement).await
    }

    /// Execute a planned update. Zero affected rows means the row was gone
    /// by the time the write ran, and is a persistence error.
    pub async fn apply_update(
        &self,
        statement: &UpdateStatement,
    ) -> Result<UpdateOutcome, MailroomError> {
        let id = statement.id.get();
        let columns = statement.assignments.len();
        let affected = self.store.execute_update(statement).await?;
        if affected == 0 {
            warn!(id, columns, "update affected no rows");
            return Err(MailroomError::Persistence { id });
        }
        info!(id, columns, "email updated");
        Ok(UpdateOutcome::Updated { columns })
    }

    /// Build a draft from submitted form input, limited to this schema.
    pub fn create_email_object(&self, form: &FormInput) -> EmailDraft {
        form::create_email_object(&self.schema, &self.content_column, form)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailroom_test_utils::MockStore;

    async fn service(store: Arc<MockStore>) -> EmailService {
        EmailService::connect(store, "emails", "content").await.unwrap()
    }

    fn draft(values: &[(&str, &str)]) -> EmailDraft {
        EmailDraft {
            fields: values
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    fn seeded() -> Arc<MockStore> {
        Arc::new(
            MockStore::emails()
                .with_row(5, &[("subject", Some("Hi")), ("body", Some("Old"))])
                .with_row(
                    6,
                    &[
                        ("subject", Some("Promo")),
                        ("content", Some(r#"{"headline":"Sale"}"#)),
                    ],
                ),
        )
    }

    #[tokio::test]
    async fn invalid_id_fails_before_any_query() {
        let store = seeded();
        let service = service(store.clone()).await;
        let before = store.query_count();

        for id in [0, -1] {
            assert!(matches!(
                service.get_email(id).await,
                Err(MailroomError::Validation(_))
            ));
            assert!(matches!(
                service.update_email(id, &draft(&[("subject", "x")])).await,
                Err(MailroomError::Validation(_))
            ));
        }
        assert_eq!(store.query_count(), before);
    }

    #[tokio::test]
    async fn get_email_returns_schema_columns_and_dynamic_fields() {
        let service = service(seeded()).await;
        let email = service.get_email(6).await.unwrap().unwrap();
        assert_eq!(email.id, 6);
        assert_eq!(
            email.fields.keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["subject", "body", "content"]
        );
        assert_eq!(email.content_fields.get("headline"), Some("Sale"));
        assert!(service.get_email(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_emails_decodes_each_record_independently() {
        let service = service(seeded()).await;
        let emails = service.get_emails().await.unwrap();
        assert_eq!(emails.len(), 2);
        assert!(emails[0].content_fields.is_empty());
        assert_eq!(emails[1].content_fields.get("headline"), Some("Sale"));
        // The schema is untouched by decoding.
        assert!(!service.schema().contains("headline"));
    }

    #[tokio::test]
    async fn update_writes_only_changed_columns() {
        let store = seeded();
        let service = service(store.clone()).await;

        let outcome = service
            .update_email(5, &draft(&[("subject", "Hi"), ("body", "New")]))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Updated { columns: 1 });

        let executed = store.executed().await;
        assert_eq!(executed.len(), 1);
        assert_eq!(
            executed[0].canonical_sql(),
            "UPDATE emails SET body = ? WHERE id = ? LIMIT 1"
        );
        assert_eq!(executed[0].values().collect::<Vec<_>>(), vec!["New"]);
        assert_eq!(executed[0].id.get(), 5);
        assert_eq!(store.value(5, "body").await.as_deref(), Some("New"));
    }

    #[tokio::test]
    async fn unchanged_draft_executes_nothing() {
        let store = seeded();
        let service = service(store.clone()).await;
        let outcome = service
            .update_email(5, &draft(&[("subject", "Hi"), ("body", "Old")]))
            .await
            .unwrap();
        assert_eq!(outcome, UpdateOutcome::Unchanged);
        assert!(store.executed().await.is_empty());
    }

    #[tokio::test]
    async fn missing_row_is_not_found() {
        let store = seeded();
        let service = service(store.clone()).await;
        let err = service
            .update_email(42, &draft(&[("subject", "x")]))
            .await
            .unwrap_err();
        assert!(matches!(err, MailroomError::NotFound { id: 42 }));
        assert!(store.executed().await.is_empty());
    }

    #[tokio::test]
    async fn row_deleted_after_listing_is_not_found() {
        let store = seeded();
        let service = service(store.clone()).await;
        assert_eq!(service.get_emails().await.unwrap().len(), 2);

        store.remove_row(5).await;
        let err = service
            .update_email(5, &draft(&[("body", "New")]))
            .await
            .unwrap_err();
        assert!(matches!(err, MailroomError::NotFound { id: 5 }));
        assert!(store.executed().await.is_empty());
    }

    #[tokio::test]
    async fn zero_affected_rows_is_a_persistence_error() {
        let store = seeded();
        let service = service(store.clone()).await;
        store.force_affected(0).await;
        let err = service
            .update_email(5, &draft(&[("body", "New")]))
            .await
            .unwrap_err();
        assert!(matches!(err, MailroomError::Persistence { id: 5 }));
    }

    #[tokio::test]
    async fn form_to_update_never_touches_id_or_unknown_columns() {
        let store = seeded();
        let service = service(store.clone()).await;
        let form: FormInput = [
            ("id", "9"),
            ("subject", "Hey"),
            ("hits", "1000"),
            ("bogus", "x"),
        ]
        .into_iter()
        .collect();
        let draft = service.create_email_object(&form);
        service.update_email(5, &draft).await.unwrap();

        let executed = store.executed().await;
        assert_eq!(executed[0].columns().collect::<Vec<_>>(), vec!["subject"]);
        assert_eq!(executed[0].id.get(), 5);
    }

    #[tokio::test]
    async fn dynamic_fields_round_trip_through_the_content_column() {
        let store = seeded();
        let service = service(store.clone()).await;
        let form: FormInput = [
            ("contentField[]", "headline"),
            ("headline", "Clearance"),
        ]
        .into_iter()
        .collect();
        service
            .update_email(6, &service.create_email_object(&form))
            .await
            .unwrap();

        let email = service.get_email(6).await.unwrap().unwrap();
        assert_eq!(email.content_fields.get("headline"), Some("Clearance"));
    }

    #[tokio::test]
    #[tracing_test::traced_test]
    async fn update_is_logged() {
        let service = service(seeded()).await;
        service
            .update_email(5, &draft(&[("body", "Logged")]))
            .await
            .unwrap();
        assert!(logs_contain("email updated"));
    }
}
