// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The four page templates, loaded once at startup.

use std::path::Path;

use mailroom_core::MailroomError;
use tracing::info;

pub const INDEX_FILE: &str = "template.index.html";
pub const EDIT_FILE: &str = "template.edit.html";
pub const EMAILS_FILE: &str = "template.emails.html";
pub const CONTENT_FIELDS_FILE: &str = "template.contentFields.html";

/// Page templates, consumed as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Page shell with a `{{content}}` slot.
    pub index: String,
    /// One record's edit form, with a `{{contentFields}}` slot.
    pub edit: String,
    /// One record's row in the list.
    pub emails: String,
    /// One dynamic field in the edit form.
    pub content_fields: String,
}

impl TemplateSet {
    /// Templates compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            index: include_str!("../templates/template.index.html").to_string(),
            edit: include_str!("../templates/template.edit.html").to_string(),
            emails: include_str!("../templates/template.emails.html").to_string(),
            content_fields: include_str!("../templates/template.contentFields.html").to_string(),
        }
    }

    /// Load from `dir`, or fall back to the built-in set when `dir` is `None`.
    ///
    /// Every file must exist in a configured directory.
    pub fn load(dir: Option<&Path>) -> Result<Self, MailroomError> {
        let Some(dir) = dir else {
            info!("using built-in templates");
            return Ok(Self::builtin());
        };

        let set = Self {
            index: read(dir, INDEX_FILE)?,
            edit: read(dir, EDIT_FILE)?,
            emails: read(dir, EMAILS_FILE)?,
            content_fields: read(dir, CONTENT_FIELDS_FILE)?,
        };
        info!(dir = %dir.display(), "templates loaded");
        Ok(set)
    }
}

fn read(dir: &Path, file: &str) -> Result<String, MailroomError> {
    let path = dir.join(file);
    std::fs::read_to_string(&path).map_err(|e| {
        MailroomError::Config(format!(
            "unable to read template {}: {e}",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CONTENT_FIELDS_SLOT, CONTENT_FIELD_NAME, CONTENT_FIELD_VALUE, CONTENT_SLOT};

    fn token(name: &str) -> String {
        format!("{{{{{name}}}}}")
    }

    #[test]
    fn builtin_templates_carry_their_slots() {
        let set = TemplateSet::builtin();
        assert!(set.index.contains(&token(CONTENT_SLOT)));
        assert!(set.edit.contains(&token(CONTENT_FIELDS_SLOT)));
        assert!(set.edit.contains("action=save"));
        assert!(set.emails.contains(&token("id")));
        assert!(set.content_fields.contains(&token(CONTENT_FIELD_NAME)));
        assert!(set.content_fields.contains(&token(CONTENT_FIELD_VALUE)));
        assert!(set.content_fields.contains("contentField[]"));
    }

    #[test]
    fn no_dir_means_builtin() {
        assert_eq!(TemplateSet::load(None).unwrap(), TemplateSet::builtin());
    }

    #[test]
    fn loads_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        for (file, body) in [
            (INDEX_FILE, "I{{content}}"),
            (EDIT_FILE, "E"),
            (EMAILS_FILE, "L"),
            (CONTENT_FIELDS_FILE, "C"),
        ] {
            std::fs::write(dir.path().join(file), body).unwrap();
        }
        let set = TemplateSet::load(Some(dir.path())).unwrap();
        assert_eq!(set.index, "I{{content}}");
        assert_eq!(set.content_fields, "C");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(INDEX_FILE), "I").unwrap();
        let err = TemplateSet::load(Some(dir.path())).unwrap_err();
        assert!(
            matches!(&err, MailroomError::Config(msg) if msg.contains(EDIT_FILE)),
            "{err}"
        );
    }
}
