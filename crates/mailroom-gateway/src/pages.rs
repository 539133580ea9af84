// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Page assembly: records rendered into the index template.

use mailroom_core::{EmailId, MailroomError, UpdateOutcome};
use mailroom_records::FormInput;
use mailroom_template::{
    fill_slots, render_content_fields, render_with_slots, CONTENT_FIELDS_SLOT, CONTENT_SLOT,
};
use tracing::info;

use crate::server::AppState;

/// Markup shown after a successful save.
pub const SAVED_MESSAGE: &str = "Email saved. <a href=\"/\">Back</a>";

/// Every record through the `emails` template, one per line.
pub async fn list(state: &AppState) -> Result<String, MailroomError> {
    let emails = state.service.get_emails().await?;
    let rows = emails
        .iter()
        .map(|email| render_with_slots(email, &state.templates.emails, &[(CONTENT_SLOT, "")]))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(page(state, &rows, ""))
}

/// One record's edit form, with its dynamic fields.
pub async fn edit(state: &AppState, id: EmailId) -> Result<String, MailroomError> {
    let email = state
        .service
        .get_email(id.get())
        .await?
        .ok_or(MailroomError::NotFound { id: id.get() })?;

    let fields = render_content_fields(&email.content_fields, &state.templates.content_fields)
        .join("\n");
    let form = render_with_slots(
        &email,
        &state.templates.edit,
        &[(CONTENT_FIELDS_SLOT, fields.as_str()), (CONTENT_SLOT, "")],
    );
    Ok(page(state, &form, &fields))
}

/// Apply a submitted edit form.
pub async fn save(state: &AppState, form: &FormInput) -> Result<String, MailroomError> {
    let id = required_id(form.get("id"))?;
    let draft = state.service.create_email_object(form);
    match state.service.update_email(id.get(), &draft).await? {
        UpdateOutcome::Unchanged => info!(%id, "save submitted without changes"),
        UpdateOutcome::Updated { columns } => info!(%id, columns, "email saved"),
    }
    Ok(page(state, SAVED_MESSAGE, ""))
}

/// Parse a required `id` parameter. Absent and empty are the same.
pub fn required_id(raw: Option<&str>) -> Result<EmailId, MailroomError> {
    match raw.map(str::trim) {
        None | Some("") => Err(MailroomError::Validation("no email specified".to_string())),
        Some(raw) => EmailId::parse(raw),
    }
}

/// Put `body` (and `fields`, if the index has a slot for them) into the
/// index template. Only the template text is scanned, never what goes in.
fn page(state: &AppState, body: &str, fields: &str) -> String {
    fill_slots(
        &state.templates.index,
        &[(CONTENT_SLOT, body), (CONTENT_FIELDS_SLOT, fields)],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_id_rules() {
        assert!(matches!(
            required_id(None),
            Err(MailroomError::Validation(msg)) if msg == "no email specified"
        ));
        assert!(required_id(Some("  ")).is_err());
        assert!(required_id(Some("abc")).is_err());
        assert!(required_id(Some("0")).is_err());
        assert_eq!(required_id(Some("12")).unwrap().get(), 12);
    }
}
