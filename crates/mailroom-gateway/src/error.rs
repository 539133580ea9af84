// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mapping of domain errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use mailroom_core::MailroomError;
use mailroom_template::escape_html;
use tracing::{error, warn};

/// A request that failed with a [`MailroomError`].
#[derive(Debug)]
pub struct PageError(pub MailroomError);

impl From<MailroomError> for PageError {
    fn from(err: MailroomError) -> Self {
        Self(err)
    }
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            MailroomError::Validation(_) => StatusCode::BAD_REQUEST,
            MailroomError::NotFound { .. } => StatusCode::NOT_FOUND,
            MailroomError::Persistence { .. } => StatusCode::CONFLICT,
            MailroomError::Connection { .. } => StatusCode::SERVICE_UNAVAILABLE,
            MailroomError::Config(_) | MailroomError::Storage { .. } | MailroomError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(kind = self.0.kind(), error = %self.0, "request failed");
        } else {
            warn!(kind = self.0.kind(), error = %self.0, "request rejected");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{reason}</title></head>\n\
             <body>\n<h1>{} {reason}</h1>\n<p>{}</p>\n<p><a href=\"/\">Back to the list</a></p>\n</body>\n</html>\n",
            status.as_u16(),
            escape_html(&self.0.to_string()),
        );
        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_per_kind() {
        let cases = [
            (MailroomError::Validation("x".into()), 400),
            (MailroomError::NotFound { id: 1 }, 404),
            (MailroomError::Persistence { id: 1 }, 409),
            (MailroomError::Config("x".into()), 500),
            (
                MailroomError::Storage {
                    source: Box::new(std::io::Error::other("x")),
                },
                500,
            ),
            (MailroomError::Internal("x".into()), 500),
            (
                MailroomError::Connection {
                    message: "x".into(),
                    source: None,
                },
                503,
            ),
        ];
        for (err, expected) in cases {
            assert_eq!(PageError(err).status().as_u16(), expected);
        }
    }

    #[test]
    fn response_is_html() {
        let response = PageError(MailroomError::NotFound { id: 3 }).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response.headers()["content-type"].to_str().unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}
