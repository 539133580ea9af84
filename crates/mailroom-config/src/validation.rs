// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::MailroomConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &MailroomConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.database.path.trim().is_empty() {
        errors.push(ConfigError::MissingKey {
            key: "database.path".to_string(),
        });
    }

    // The table name is interpolated into SQL, so only plain identifiers pass.
    // Both names are used verbatim; surrounding whitespace is not forgiven.
    let table = config.database.table.as_str();
    if table.trim().is_empty() {
        errors.push(ConfigError::MissingKey {
            key: "database.table".to_string(),
        });
    } else if !is_identifier(table) {
        errors.push(ConfigError::Validation {
            message: format!("database.table `{table}` is not a plain SQL identifier"),
        });
    }

    let content_column = config.database.content_column.as_str();
    if !is_identifier(content_column) {
        errors.push(ConfigError::Validation {
            message: format!(
                "database.content_column `{content_column}` is not a plain SQL identifier"
            ),
        });
    }

    let host = config.server.host.trim();
    if host.is_empty() {
        errors.push(ConfigError::Validation {
            message: "server.host must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = host.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = host
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!("server.host `{host}` is not a valid IP address or hostname"),
            });
        }
    }

    if !LOG_LEVELS.contains(&config.log.level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` must be one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if let Some(dir) = &config.templates.dir
        && dir.trim().is_empty()
    {
        errors.push(ConfigError::Validation {
            message: "templates.dir must not be empty when set".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
