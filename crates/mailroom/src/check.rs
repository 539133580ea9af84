// SPDX-FileCopyrightText: 2026 Mailroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `mailroom check` command implementation.

use std::path::Path;

use mailroom_config::MailroomConfig;
use mailroom_core::{MailroomError, Schema};
use mailroom_records::introspect;
use mailroom_storage::SqliteStore;
use mailroom_template::TemplateSet;

use crate::serve::init_tracing;

/// Runs the `mailroom check` command: verify the database, table and
/// templates, then print the editable columns.
pub async fn run_check(config: MailroomConfig) -> Result<(), MailroomError> {
    init_tracing(&config.log.level);

    let store = SqliteStore::open(&config.database.path).await?;
    let schema = introspect(&store, &config.database.table).await?;
    TemplateSet::load(config.templates.dir.as_deref().map(Path::new))?;
    store.close().await?;

    print!("{}", format_schema(&schema));
    Ok(())
}

/// One `name<TAB>kind` line per column.
fn format_schema(schema: &Schema) -> String {
    schema
        .columns()
        .iter()
        .map(|column| format!("{}\t{}\n", column.name, column.kind))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mailroom_core::{Column, ColumnKind};

    #[test]
    fn schema_lines() {
        let schema = Schema::new(
            "emails",
            vec![
                Column {
                    name: "subject".into(),
                    kind: ColumnKind::ShortText,
                },
                Column {
                    name: "body".into(),
                    kind: ColumnKind::LongText,
                },
            ],
        )
        .unwrap();
        assert_eq!(format_schema(&schema), "subject\tshort-text\nbody\tlong-text\n");
    }
}
