// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup: `./mailroom.toml` > `~/.config/mailroom/mailroom.toml` >
//! `/etc/mailroom/mailroom.toml`, with `MAILROOM_*` environment overrides on top.

#![allow(clippy::result_large_err)] // figment::Error is external

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::MailroomConfig;

/// System-wide config file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/mailroom/mailroom.toml";

/// Config file in the working directory.
pub const LOCAL_CONFIG_PATH: &str = "mailroom.toml";

/// Per-user config file under the XDG config dir, if one can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("mailroom/mailroom.toml"))
}

/// Load configuration from the standard hierarchy.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mailroom/mailroom.toml`
/// 3. `~/.config/mailroom/mailroom.toml`
/// 4. `./mailroom.toml`
/// 5. `MAILROOM_*` environment variables
pub fn load_config() -> Result<MailroomConfig, figment::Error> {
    build_figment().extract()
}

/// Load one explicit file plus environment overrides, skipping the hierarchy.
pub fn load_config_from_path(path: &Path) -> Result<MailroomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MailroomConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Load from an inline TOML string with no environment overrides.
pub fn load_config_from_str(toml_content: &str) -> Result<MailroomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MailroomConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// The Figment behind [`load_config`], before extraction.
pub fn build_figment() -> Figment {
    let mut figment = Figment::new()
        .merge(Serialized::defaults(MailroomConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH));
    if let Some(user) = user_config_path() {
        figment = figment.merge(Toml::file(user));
    }
    figment.merge(Toml::file(LOCAL_CONFIG_PATH)).merge(env_provider())
}

/// Environment provider mapping `MAILROOM_<SECTION>_<KEY>` to `section.key`.
///
/// Uses an explicit section prefix map rather than `Env::split("_")`, since
/// keys such as `content_column` contain underscores themselves.
fn env_provider() -> Env {
    Env::prefixed("MAILROOM_").map(|key| {
        // Figment hands over the variable name as written, upper case included.
        let key = key.as_str().to_ascii_lowercase();
        for section in ["database", "server", "templates", "log"] {
            if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
                return format!("{section}.{rest}").into();
            }
        }
        key.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_map_to_sections() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("MAILROOM_DATABASE_PATH", "/srv/campaigns.db");
            jail.set_env("MAILROOM_DATABASE_CONTENT_COLUMN", "extra");
            jail.set_env("MAILROOM_SERVER_PORT", "9090");
            jail.set_env("MAILROOM_LOG_LEVEL", "debug");

            let config = load_config().expect("env config should load");
            assert_eq!(config.database.path, "/srv/campaigns.db");
            assert_eq!(config.database.content_column, "extra");
            assert_eq!(config.server.port, 9090);
            assert_eq!(config.log.level, "debug");
            Ok(())
        });
    }

    #[test]
    fn local_file_is_picked_up() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                LOCAL_CONFIG_PATH,
                r#"
[database]
path = "local.db"
table = "emails"
"#,
            )?;
            let config = load_config().expect("local config should load");
            assert_eq!(config.database.path, "local.db");
            assert_eq!(config.database.table, "emails");
            Ok(())
        });
    }

    #[test]
    fn explicit_path_wins_over_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("custom.toml", "[server]\nport = 7000\n")?;
            let config =
                load_config_from_path(Path::new("custom.toml")).expect("should load");
            assert_eq!(config.server.port, 7000);
            assert_eq!(config.server.host, "127.0.0.1");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_an_explicit_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "custom.toml",
                "[database]\npath = \"file.db\"\ntable = \"emails\"\n",
            )?;
            jail.set_env("MAILROOM_DATABASE_TABLE", "newsletters");
            jail.set_env("MAILROOM_TEMPLATES_DIR", "/srv/templates");
            let config =
                load_config_from_path(Path::new("custom.toml")).expect("should load");
            assert_eq!(config.database.path, "file.db");
            assert_eq!(config.database.table, "newsletters");
            assert_eq!(config.templates.dir.as_deref(), Some("/srv/templates"));
            Ok(())
        });
    }
}
