// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration for Mailroom.
//!
//! TOML files in a small lookup hierarchy plus `MAILROOM_*` environment
//! overrides, merged with Figment, strictly deserialized
//! (`deny_unknown_fields`), validated, and reported through miette.
//!
//! ```no_run
//! let config = mailroom_config::load_and_validate().expect("config errors");
//! println!("table: {}", config.database.table);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::MailroomConfig;

/// Load configuration from the lookup hierarchy and validate it.
pub fn load_and_validate() -> Result<MailroomConfig, Vec<ConfigError>> {
    finish(loader::load_config(), hierarchy_sources)
}

/// Load one explicit file (plus environment overrides) and validate it.
pub fn load_and_validate_path(path: &Path) -> Result<MailroomConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_path(path), || {
        read_sources(std::iter::once(path.to_path_buf()))
    })
}

/// Load an inline TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<MailroomConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content), || {
        vec![("<inline>".to_string(), toml_content.to_string())]
    })
}

fn finish(
    loaded: Result<MailroomConfig, figment::Error>,
    sources: impl FnOnce() -> Vec<(String, String)>,
) -> Result<MailroomConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err, &sources())),
    }
}

/// Contents of every hierarchy file that exists, for source spans.
fn hierarchy_sources() -> Vec<(String, String)> {
    let mut paths = vec![std::path::PathBuf::from(loader::SYSTEM_CONFIG_PATH)];
    paths.extend(loader::user_config_path());
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(loader::LOCAL_CONFIG_PATH));
    }
    read_sources(paths.into_iter())
}

fn read_sources(paths: impl Iterator<Item = std::path::PathBuf>) -> Vec<(String, String)> {
    paths
        .filter_map(|path| {
            std::fs::read_to_string(&path)
                .ok()
                .map(|content| (path.display().to_string(), content))
        })
        .collect()
}
