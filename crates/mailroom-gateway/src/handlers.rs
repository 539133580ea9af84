// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers.
//!
//! `GET /` and `POST /` dispatch on the `action` query parameter:
//! `list` (also the default), `edit` and `save`.

use axum::extract::rejection::FormRejection;
use axum::extract::{Query, State};
use axum::response::Html;
use axum::Form;
use mailroom_core::MailroomError;
use mailroom_records::FormInput;
use serde::Deserialize;
use strum::EnumString;

use crate::error::PageError;
use crate::pages;
use crate::server::AppState;

/// Query string of `/`.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// What a request to `/` asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Action {
    List,
    Edit,
    Save,
}

impl Action {
    /// Unknown, empty and absent actions all mean `List`.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|a| a.parse().ok()).unwrap_or(Self::List)
    }
}

/// GET /
pub async fn get_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, PageError> {
    let page = match Action::from_query(query.action.as_deref()) {
        Action::List => pages::list(&state).await?,
        Action::Edit => pages::edit(&state, pages::required_id(query.id.as_deref())?).await?,
        // A save carries its fields in a POST body; a GET has none.
        Action::Save => pages::save(&state, &FormInput::default()).await?,
    };
    Ok(Html(page))
}

/// POST /
pub async fn post_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
    form: Result<Form<Vec<(String, String)>>, FormRejection>,
) -> Result<Html<String>, PageError> {
    let page = match Action::from_query(query.action.as_deref()) {
        Action::List => pages::list(&state).await?,
        Action::Edit => pages::edit(&state, pages::required_id(query.id.as_deref())?).await?,
        Action::Save => {
            let Form(pairs) = form.map_err(|e| {
                MailroomError::Validation(format!("unreadable form submission: {e}"))
            })?;
            pages::save(&state, &FormInput::new(pairs)).await?
        }
    };
    Ok(Html(page))
}

/// GET /health
pub async fn get_health() -> &'static str {
    "ok"
}
